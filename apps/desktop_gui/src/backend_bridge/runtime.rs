//! Runtime bridge between UI command queue and backend event intake.

use std::thread::{self, JoinHandle};

use client_core::CallRequestTransport;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker. It runs until the command queue closes or the
/// UI stops listening.
pub fn launch<T>(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    transport: T,
) -> JoinHandle<()>
where
    T: CallRequestTransport + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::RequestCall { phone_number } => {
                        let event = match transport.request_call(&phone_number).await {
                            Ok(accepted) => UiEvent::CallRequestAccepted(accepted),
                            Err(err) => UiEvent::CallRequestFailed(err.user_message()),
                        };
                        if ui_tx.send(event).is_err() {
                            tracing::debug!("ui event receiver dropped; stopping backend worker");
                            break;
                        }
                    }
                }
            }
            tracing::info!("backend worker stopped");
        });
    })
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
