//! # Selection Module
//!
//! Fair random selection of a spin winner.
//!
//! ## Contract
//!
//! - **Selector**: draws one participant, each with probability 1/N, as an
//!   independent draw per spin (sampling with replacement)
//! - **SlotSelector**: draws one symbol per reel, each reel independent and
//!   uniform over the alphabet, so K reels over M symbols span M^K outcomes
//!
//! Both are pure functions of their list and the supplied RNG. Drawing from
//! an empty list is an error, never a silent no-op.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rogvibe::core::ParticipantList;
//! use rogvibe::selector::Selector;
//!
//! let selector = Selector::new(ParticipantList::from_raw(["Alice", "Bob", "Carol"]));
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let winner = selector.draw(&mut rng).unwrap();
//! assert!(["Alice", "Bob", "Carol"].contains(&winner));
//! ```

mod selector_impl;

pub use selector_impl::*;
