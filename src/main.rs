mod cli_messages;
mod config;
mod consts;
mod error;
mod events;
mod feed;
mod logging;
mod session;
mod snapshot;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::logging::get_rust_log_level;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::snapshot::DashboardSnapshot;
use crate::ui::UIConfig;
use crate::ui::dashboard::{DashboardState, render_to_text};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// JSON-lines snapshot feed. Use `-` for stdin.
        #[arg(long, value_name = "PATH", default_value = "-")]
        input: String,

        /// Run without the TUI, printing each snapshot to the console
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Delay between forwarded snapshots, in milliseconds
        #[arg(long, value_name = "MS")]
        replay_interval_ms: Option<u64>,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Render a single snapshot as text and exit
    Render {
        /// JSON snapshot file. Use `-` for stdin; omit for an empty snapshot.
        #[arg(long, value_name = "PATH")]
        snapshot: Option<String>,

        /// Frame width in columns
        #[arg(long, default_value_t = RENDER_WIDTH)]
        width: u16,

        /// Frame height in rows
        #[arg(long, default_value_t = RENDER_HEIGHT)]
        height: u16,
    },
    /// Write the default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(get_rust_log_level().into());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            input,
            headless,
            replay_interval_ms,
            with_background,
        } => {
            let mut config = load_config(&config_path);
            apply_start_overrides(&mut config, replay_interval_ms, with_background);
            start(config, &input, headless).await
        }
        Command::Render {
            snapshot,
            width,
            height,
        } => {
            let config = load_config(&config_path);
            let snapshot = match snapshot {
                Some(source) => read_snapshot(&source)?,
                None => DashboardSnapshot::default(),
            };
            let now = Instant::now();
            let mut state = DashboardState::new(UIConfig::from(&config), now);
            state.apply_snapshot(snapshot, now);
            println!("{}", render_to_text(&state, width, height)?);
            Ok(())
        }
        Command::InitConfig => {
            Config::default()
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Config written", "{}", config_path.display());
            Ok(())
        }
    }
}

/// Starts a feed session in TUI or headless mode.
///
/// # Arguments
/// * `config` - Resolved configuration, CLI overrides applied.
/// * `input` - Snapshot feed, `-` for stdin.
/// * `headless` - Print to the console instead of drawing the dashboard.
async fn start(config: Config, input: &str, headless: bool) -> Result<(), Box<dyn Error>> {
    if let Err(msg) = check_tui_input(input, headless, std::io::stdin().is_terminal()) {
        print_cmd_error!("Cannot start dashboard", &msg);
        return Err(msg.into());
    }

    let session = match setup_session(&config, input).await {
        Ok(session) => session,
        Err(e) => {
            print_cmd_error!("Failed to open snapshot feed", &e.to_string());
            return Err(e.into());
        }
    };

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, UIConfig::from(&config)).await
    }
}

/// Loads the config file, falling back to defaults with a warning when it cannot be read.
fn load_config(config_path: &Path) -> Config {
    Config::load_or_default(config_path).unwrap_or_else(|e| {
        print_cmd_warn!(
            "Config",
            "Could not read {}: {}. Using defaults.",
            config_path.display(),
            e
        );
        Config::default()
    })
}

/// Applies `start` flags on top of the loaded config.
fn apply_start_overrides(config: &mut Config, replay_interval_ms: Option<u64>, with_background: bool) {
    if let Some(ms) = replay_interval_ms {
        config.replay_interval_ms = ms;
    }
    if with_background {
        config.with_background_color = true;
    }
}

/// The TUI reads keys from the terminal, so it cannot also take the feed from it.
fn check_tui_input(input: &str, headless: bool, stdin_is_terminal: bool) -> Result<(), String> {
    if !headless && input == "-" && stdin_is_terminal {
        return Err(
            "stdin is a terminal; pipe snapshots in, pass --input <PATH>, or use --headless"
                .to_string(),
        );
    }
    Ok(())
}

/// Reads one snapshot from a file, or from stdin for `-`. Blank input is an empty snapshot.
fn read_snapshot(source: &str) -> Result<DashboardSnapshot, Box<dyn Error>> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };
    if text.trim().is_empty() {
        return Ok(DashboardSnapshot::default());
    }
    Ok(DashboardSnapshot::from_json(text.trim())?)
}
