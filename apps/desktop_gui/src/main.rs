mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{load_settings, CallRequestClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{CallRequestApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides client.toml / CALL_REQUEST_URL.
    #[arg(long)]
    call_request_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings().with_call_request_url(args.call_request_url);
    let client = CallRequestClient::from_settings(&settings)?;
    tracing::info!(endpoint = %client.endpoint(), "starting call request form");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(16);
    let _worker = backend_bridge::runtime::launch(cmd_rx, ui_tx, client);

    let startup = StartupConfig {
        call_request_url: settings.call_request_url,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Opinions")
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Opinions",
        options,
        Box::new(move |_cc| Ok(Box::new(CallRequestApp::new(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow!("failed to run desktop gui: {err}"))
}
