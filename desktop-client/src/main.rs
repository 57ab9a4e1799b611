mod command_sender;
mod config;
mod local;
mod state;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::SessionCommand;
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::{Config, get_config_manager};
use local::{LocalFrameHost, local_game_task};
use state::SharedState;
use ui::SnakeApp;

const WINDOW_EXTRA_HEIGHT: f32 = 320.0;
const WINDOW_EXTRA_WIDTH: f32 = 80.0;

#[derive(Parser)]
#[command(name = "snake_run_client")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides the configured food placement seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Makes every share fail, as if the platform were unreachable.
    #[arg(long)]
    offline_host: bool,
}

fn load_config(path: Option<&std::path::Path>) -> Config {
    let manager = get_config_manager(path);
    match manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

/// Command line wins over the config file; without either a fresh seed is drawn.
fn resolve_seed(cli_seed: Option<u64>, config_seed: Option<u64>) -> u64 {
    cli_seed
        .or(config_seed)
        .unwrap_or_else(|| SessionRng::from_random().seed())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(args.config.as_deref());
    let settings = config.session_settings();
    let style = config.render_style()?;
    let seed = resolve_seed(args.seed, config.game.seed);
    log!("Starting session with seed {} and tick {:?}", seed, settings.tick_interval);

    let shared_state = SharedState::new();
    let host = LocalFrameHost::new(args.offline_host);
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(command_tx);

    let shared_state_clone = shared_state.clone();
    let host_clone = host.clone();
    let session_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start runtime: {}", e);
                shared_state_clone.mark_session_finished();
                return;
            }
        };
        rt.block_on(local_game_task(
            shared_state_clone,
            command_rx,
            settings,
            seed,
            host_clone,
        ));
    });

    let side = ui::board_side(&style);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + WINDOW_EXTRA_WIDTH, side + WINDOW_EXTRA_HEIGHT])
            .with_title(ui::APP_TITLE),
        ..Default::default()
    };

    let app_command_sender = command_sender.clone();
    let result = eframe::run_native(
        ui::APP_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                app_command_sender,
                style,
                host,
            )))
        }),
    );

    command_sender.send(SessionCommand::Shutdown);
    if session_thread.join().is_err() {
        log!("Session thread panicked");
    }

    result?;
    Ok(())
}
