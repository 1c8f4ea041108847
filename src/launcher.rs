//! Hand the terminal over to the winning command

use std::process::Command;

use tracing::{debug, info};

use crate::constants::participants::DIRECTORY_EDITORS;
use crate::error::RogvibeError;
use crate::participants::CommandProbe;

/// Split the winner into argv with shell quoting rules, opening editors on
/// the current directory
pub fn prepare_argv(winner: &str) -> Result<Vec<String>, RogvibeError> {
    let mut argv = shlex::split(winner).ok_or_else(|| RogvibeError::InvalidCommand {
        command: winner.to_string(),
    })?;
    if argv.len() == 1 && DIRECTORY_EDITORS.contains(&argv[0].as_str()) {
        argv.push(".".to_string());
    }
    Ok(argv)
}

/// Run `winner` in place of this process
///
/// Only returns on failure, or on platforms without `exec` once the child
/// has exited. An empty winner is a no-op.
pub fn launch<P: CommandProbe + ?Sized>(winner: &str, probe: &P) -> Result<(), RogvibeError> {
    let argv = prepare_argv(winner)?;
    let Some((program, args)) = argv.split_first() else {
        debug!("nothing to launch");
        return Ok(());
    };

    let Some(resolved) = probe.locate(program) else {
        return Err(RogvibeError::CommandNotFound {
            command: program.clone(),
        });
    };

    info!(program = %resolved.display(), ?args, "launching winner");
    let mut command = Command::new(resolved);
    command.args(args);
    run(command, program)
}

#[cfg(unix)]
fn run(mut command: Command, program: &str) -> Result<(), RogvibeError> {
    use std::os::unix::process::CommandExt;

    let err = command.exec();
    Err(launch_error(program, err))
}

#[cfg(not(unix))]
fn run(mut command: Command, program: &str) -> Result<(), RogvibeError> {
    let status = command.status().map_err(|err| launch_error(program, err))?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}

fn launch_error(program: &str, err: std::io::Error) -> RogvibeError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => RogvibeError::PermissionDenied {
            command: program.to_string(),
        },
        std::io::ErrorKind::NotFound => RogvibeError::CommandNotFound {
            command: program.to_string(),
        },
        _ => RogvibeError::LaunchFailed {
            command: program.to_string(),
            source: err,
        },
    }
}
