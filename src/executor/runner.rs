//! Utility execution through the external build/run toolchain
//!
//! This module handles:
//! - Finding the toolchain executable (dotnet, etc.)
//! - The quiet build step (output captured and discarded)
//! - The live run step (stdio inherited so output streams to the terminal)
//! - Sequencing the two steps and reporting exit codes

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::config::{ToolchainConfig, FILE_PLACEHOLDER};
use crate::error::UtilHubError;
use crate::logging;

/// Exit code used when the toolchain could not be started at all
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 1;

/// Exit code reported when the process ended without one (killed by a signal)
pub const NO_EXIT_CODE: i32 = -1;

/// The external collaborator that compiles and executes a utility file.
///
/// Both calls block until the child exits and return its exit code. An `Err`
/// means the process could not be started.
pub trait BuildRunHarness {
    /// Compile quietly; output is not shown to the user.
    fn build(&mut self, path: &Path) -> Result<i32, UtilHubError>;
    /// Execute the already-built utility with output streamed live.
    fn run(&mut self, path: &Path) -> Result<i32, UtilHubError>;
}

/// Which step of a run is about to start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    Building,
    Running,
}

/// Result of a run action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Build exited nonzero; the run step was skipped
    BuildFailed { code: i32 },
    /// A step could not be started
    StartFailed { phase: RunPhase },
    /// The run step finished with this exit code
    Finished { code: i32 },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::BuildFailed { code } | RunOutcome::Finished { code } => *code,
            RunOutcome::StartFailed { .. } => SPAWN_FAILURE_EXIT_CODE,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// Build then run `path`. `on_phase` is told before each step starts so the
/// caller can show progress. A failed build short-circuits the run.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn run_utility(
    harness: &mut dyn BuildRunHarness,
    path: &Path,
    mut on_phase: impl FnMut(RunPhase),
) -> RunOutcome {
    let script_id = path.display().to_string();
    let started = Instant::now();

    on_phase(RunPhase::Building);
    match harness.build(path) {
        Ok(0) => debug!("Build succeeded"),
        Ok(code) => {
            warn!(exit_code = code, "Build failed");
            logging::log_utility_event(&script_id, "build_failed", Some(elapsed_ms(started)), false);
            return RunOutcome::BuildFailed { code };
        }
        Err(e) => {
            warn!(error = %e, "Build could not start");
            logging::log_utility_event(&script_id, "build_not_started", None, false);
            return RunOutcome::StartFailed {
                phase: RunPhase::Building,
            };
        }
    }

    on_phase(RunPhase::Running);
    let outcome = match harness.run(path) {
        Ok(code) => RunOutcome::Finished { code },
        Err(e) => {
            warn!(error = %e, "Run could not start");
            RunOutcome::StartFailed {
                phase: RunPhase::Running,
            }
        }
    };

    logging::log_utility_event(
        &script_id,
        "run",
        Some(elapsed_ms(started)),
        outcome.is_success(),
    );
    outcome
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Harness that shells out to a configured toolchain (`dotnet` by default):
/// `dotnet build --file <path> -v:q`, then `dotnet run --no-build --file <path>`.
#[derive(Debug, Clone)]
pub struct DotnetHarness {
    toolchain: ToolchainConfig,
    executable: String,
}

impl DotnetHarness {
    pub fn new(toolchain: ToolchainConfig) -> Self {
        let executable = find_executable(&toolchain.program)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| toolchain.program.clone());
        DotnetHarness {
            toolchain,
            executable,
        }
    }

    fn command(&self, args: &[String], path: &Path) -> Command {
        let mut command = Command::new(&self.executable);
        command.args(expand_args(args, path));
        command
    }

    fn spawn_error(&self, source: std::io::Error) -> UtilHubError {
        UtilHubError::ProcessSpawn {
            program: self.executable.clone(),
            source,
        }
    }
}

impl BuildRunHarness for DotnetHarness {
    #[instrument(level = "debug", skip(self))]
    fn build(&mut self, path: &Path) -> Result<i32, UtilHubError> {
        let output = self
            .command(&self.toolchain.build_args, path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        debug!(
            status = %output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Build finished"
        );
        Ok(exit_code(output.status))
    }

    #[instrument(level = "debug", skip(self))]
    fn run(&mut self, path: &Path) -> Result<i32, UtilHubError> {
        info!(program = %self.executable, "Running utility");
        let status = self
            .command(&self.toolchain.run_args, path)
            .status()
            .map_err(|e| self.spawn_error(e))?;
        Ok(exit_code(status))
    }
}

/// Replace `{file}` in every argument with the utility path
pub fn expand_args(args: &[String], path: &Path) -> Vec<String> {
    let file = path.to_string_lossy();
    args.iter()
        .map(|arg| arg.replace(FILE_PLACEHOLDER, &file))
        .collect()
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(NO_EXIT_CODE)
}

/// Find an executable in the usual toolchain install locations that a
/// minimal PATH might miss. Returns None to fall back to PATH lookup.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let as_path = Path::new(name);
    if as_path.components().count() > 1 {
        return as_path.exists().then(|| as_path.to_path_buf());
    }

    let common_paths = [
        dirs::home_dir().map(|h| h.join(".dotnet")),
        dirs::home_dir().map(|h| h.join(".dotnet/tools")),
        dirs::home_dir().map(|h| h.join(".local/bin")),
        Some(PathBuf::from("/usr/local/share/dotnet")),
        Some(PathBuf::from("/usr/share/dotnet")),
        Some(PathBuf::from("/usr/local/bin")),
        Some(PathBuf::from("/usr/bin")),
    ];

    let found = common_paths
        .iter()
        .flatten()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => debug!(name, path = %path.display(), "Found toolchain executable"),
        None => debug!(name, "Toolchain not in common paths, will try PATH"),
    }
    found
}
