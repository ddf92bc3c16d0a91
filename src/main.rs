use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::style::Stylize;
use tracing::{error, info};

use utilhub::app::{Launcher, Session, EXIT_MISSING_DIR};
use utilhub::config::{load_config, ENV_NO_EMOJI};
use utilhub::executor::DotnetHarness;
use utilhub::icons::IconMode;
use utilhub::logging;
use utilhub::platform::SystemOpener;
use utilhub::tui::{CrosstermEvents, Screen};

/// Pick a .NET file-based utility from a list and run it
#[derive(Parser, Debug)]
#[command(name = "utilhub", version, about)]
struct Cli {
    /// Additional folder to scan for utilities (ignored if it does not exist)
    extra_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init();

    match run(cli) {
        Ok(code) => {
            info!(event_type = "app_lifecycle", action = "exited", exit_code = code, "Launcher exited");
            ExitCode::from(code)
        }
        Err(e) => {
            error!(error = ?e, "Launcher failed");
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = load_config();
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let icons = IconMode::resolve(
        std::env::var(ENV_NO_EMOJI).ok().as_deref(),
        config.get_no_icons(),
    );
    let extra_dir = cli
        .extra_dir
        .map(|dir| PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned()));

    let launcher = Launcher::new(config, &cwd, extra_dir, icons);

    // Reported on the normal terminal, before the TUI takes over
    if let Err(e) = launcher.check_utilities_dir() {
        error!(error = %e, "Utilities folder missing");
        eprintln!("{}", e.user_message().red());
        return Ok(EXIT_MISSING_DIR);
    }

    let mut harness = DotnetHarness::new(launcher.config().get_toolchain());
    let opener = SystemOpener;
    let mut events = CrosstermEvents;
    let mut screen = Screen::interactive().context("Failed to initialize the terminal")?;

    let code = launcher.run(&mut Session {
        screen: &mut screen,
        events: &mut events,
        harness: &mut harness,
        opener: &opener,
    })?;
    Ok(code)
}
