use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{DesktopGuiApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "user-directory", version, about = "Desktop viewer for a remote user directory")]
struct Cli {
    /// Endpoint returning the JSON user collection
    #[arg(long, env = "USER_DIRECTORY_URL", default_value = client_core::DEFAULT_DIRECTORY_URL)]
    endpoint: url::Url,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let startup = StartupConfig {
        endpoint: cli.endpoint,
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(startup.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User Directory")
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User Directory",
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::new(startup, cmd_tx, ui_rx)))),
    )
}
