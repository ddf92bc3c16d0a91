//! Action execution
//!
//! Run suspends the TUI so the utility owns the terminal; everything else is
//! reported on the message panel. Failures are shown inline and never end
//! the session.

use std::path::Path;
use tracing::{info, instrument, warn};

use super::types::{Action, Flow};
use crate::error::{ResultExt, UtilHubError};
use crate::executor::{run_utility, BuildRunHarness, RunOutcome, RunPhase};
use crate::logging;
use crate::platform::FolderOpener;
use crate::strings;
use crate::tui::{EventSource, Screen, Tone};
use crate::utilities::UtilityRecord;

/// Collaborators an action may need
pub struct ActionContext<'a> {
    pub screen: &'a mut Screen,
    pub events: &'a mut dyn EventSource,
    pub harness: &'a mut dyn BuildRunHarness,
    pub opener: &'a dyn FolderOpener,
    /// Primary utilities folder (target of Open Folder)
    pub utilities_dir: &'a Path,
}

/// Perform `action` on `record` and tell the launcher what to do next.
///
/// Only terminal I/O failures are returned as errors.
#[instrument(level = "debug", skip_all, fields(action = action.id(), utility = record.id()))]
pub fn dispatch(
    action: Action,
    record: &UtilityRecord,
    ctx: &mut ActionContext,
) -> Result<Flow, UtilHubError> {
    logging::log_action(action.id(), Some(record.id()));
    match action {
        Action::Run => {
            run_selected(record, ctx)?;
            Ok(Flow::Continue)
        }
        Action::Reload => Ok(Flow::Continue),
        Action::OpenFolder => {
            open_utilities_folder(ctx)?;
            Ok(Flow::Continue)
        }
        Action::Exit => Ok(Flow::Exit),
    }
}

fn run_selected(record: &UtilityRecord, ctx: &mut ActionContext) -> Result<(), UtilHubError> {
    let ActionContext {
        screen,
        events,
        harness,
        ..
    } = ctx;

    screen.suspend()?;
    let file_name = record.file_name();
    let outcome = run_utility(&mut **harness, record.file_path(), |phase| {
        let line = match phase {
            RunPhase::Building => strings::STATUS_BUILDING.to_string(),
            RunPhase::Running => format!("{} {}", strings::STATUS_RUNNING, file_name),
        };
        screen.status(Tone::Info, line).warn_on_err();
    });

    let (tone, summary) = describe_outcome(outcome);
    info!(exit_code = outcome.exit_code(), "Run finished");
    screen.status(tone, summary)?;
    screen.status(Tone::Muted, strings::MESSAGE_PRESS_KEY_TO_RETURN)?;
    screen.wait_for_key(&mut **events)?;
    screen.resume()
}

/// Final status line for a run
fn describe_outcome(outcome: RunOutcome) -> (Tone, String) {
    match outcome {
        RunOutcome::Finished { code: 0 } => (Tone::Success, strings::MESSAGE_DONE.to_string()),
        RunOutcome::Finished { code } => (
            Tone::Warning,
            format!("{} {}", strings::MESSAGE_FINISHED_WITH_EXIT_CODE, code),
        ),
        RunOutcome::BuildFailed { code } => (
            Tone::Error,
            format!(
                "{} {}.",
                strings::MESSAGE_BUILD_FAILED,
                strings::format_exit_code(code)
            ),
        ),
        RunOutcome::StartFailed { .. } => (Tone::Error, strings::MESSAGE_FAILED_TO_START.to_string()),
    }
}

fn open_utilities_folder(ctx: &mut ActionContext) -> Result<(), UtilHubError> {
    ctx.screen.clear_messages();
    match ctx.opener.open_folder(ctx.utilities_dir) {
        Ok(()) => ctx.screen.status(
            Tone::Success,
            format!(
                "{} {}",
                strings::MESSAGE_OPENED_FOLDER,
                ctx.utilities_dir.display()
            ),
        )?,
        Err(e) => {
            warn!(error = %e, "Open folder failed");
            ctx.screen.status(e.severity().into(), e.user_message())?;
        }
    }
    ctx.screen.status(Tone::Muted, strings::MESSAGE_PRESS_KEY_TO_RETURN)?;
    ctx.screen.wait_for_key(&mut *ctx.events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SPAWN_FAILURE_EXIT_CODE;

    #[test]
    fn success_reports_done() {
        assert_eq!(
            describe_outcome(RunOutcome::Finished { code: 0 }),
            (Tone::Success, "Done.".to_string())
        );
    }

    #[test]
    fn nonzero_run_reports_code() {
        assert_eq!(
            describe_outcome(RunOutcome::Finished { code: 42 }).1,
            "Finished with exit code: 42"
        );
    }

    #[test]
    fn build_failure_reports_code() {
        assert_eq!(
            describe_outcome(RunOutcome::BuildFailed { code: 1 }),
            (Tone::Error, "Build failed (exit code 1).".to_string())
        );
    }

    #[test]
    fn start_failure_is_reported_as_error() {
        let outcome = RunOutcome::StartFailed {
            phase: RunPhase::Running,
        };
        assert_eq!(outcome.exit_code(), SPAWN_FAILURE_EXIT_CODE);
        assert_eq!(
            describe_outcome(outcome),
            (Tone::Error, "Failed to start process.".to_string())
        );
    }
}
