//! Command orchestration helpers from UI actions to backend command queue.

use client_core::UiState;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a load and flips the state machine to `Loading` before any
/// response can land, so the indicator is observably shown. A queue failure
/// leaves the state untouched and surfaces a status-line message instead.
pub fn dispatch_load(cmd_tx: &Sender<BackendCommand>, state: &mut UiState, status: &mut String) {
    match cmd_tx.try_send(BackendCommand::LoadUsers) {
        Ok(()) => {
            state.begin_loading();
            status.clear();
            tracing::debug!("queued ui->backend load command");
        }
        Err(TrySendError::Full(_)) => {
            *status = "Backend queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend worker disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
        }
    }
}
