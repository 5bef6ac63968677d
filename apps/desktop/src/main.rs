use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{load_settings, CallRequestClient, FormController};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    /// Number to call back, as typed (e.g. +14155552671).
    #[arg(long)]
    phone_number: String,
    #[arg(long)]
    call_request_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings().with_call_request_url(args.call_request_url);
    let client = CallRequestClient::from_settings(&settings)?;
    let mut controller = FormController::new(client);

    let mut states = controller.subscribe();
    tokio::spawn(async move {
        while states.changed().await.is_ok() {
            if states.borrow_and_update().is_loading() {
                eprintln!("Requesting Call...");
            }
        }
    });

    match controller.submit(&args.phone_number).await {
        Ok(accepted) => {
            println!("Thank You!");
            println!(
                "We'll call you shortly at {}.",
                controller.state().phone_number()
            );
            println!("Please keep your phone nearby.");
            if let Some(call_sid) = accepted.call_sid {
                println!("call_sid={call_sid}");
            }
            Ok(())
        }
        Err(err) => Err(anyhow!(err.message().to_string())),
    }
}
