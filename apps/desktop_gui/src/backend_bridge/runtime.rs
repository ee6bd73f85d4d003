//! Worker runtime: a dedicated thread draining UI commands and running
//! directory fetches on a tokio runtime.

use std::sync::Arc;
use std::thread;

use client_core::{DirectoryClient, FetchError, UserDirectory};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::StartupConfig;

pub fn launch(startup: StartupConfig, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(error = %err, "failed to build backend runtime");
                let _ = ui_tx.try_send(UiEvent::LoadFailed(FetchError::Unexpected {
                    message: format!("Failed to start backend worker: {err}"),
                }));
                return;
            }
        };

        runtime.block_on(async move {
            let directory: Arc<dyn UserDirectory> = Arc::new(DirectoryClient::new(
                reqwest::Client::new(),
                startup.endpoint.clone(),
            ));
            run_worker(directory, cmd_rx, ui_tx).await;
        });
    });
}

/// Commands are handled strictly in order. Nothing de-duplicates or cancels
/// an in-flight fetch when another reload is queued; the response applied
/// last wins. The loop ends when the UI side drops its sender.
pub(crate) async fn run_worker(
    directory: Arc<dyn UserDirectory>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadUsers => match directory.fetch_users().await {
                Ok(users) => {
                    info!(count = users.len(), "user directory loaded");
                    let _ = ui_tx.try_send(UiEvent::UsersLoaded(users));
                }
                Err(err) => {
                    error!(error = %err, "user directory fetch failed");
                    let _ = ui_tx.try_send(UiEvent::LoadFailed(err));
                }
            },
        }
    }
}
