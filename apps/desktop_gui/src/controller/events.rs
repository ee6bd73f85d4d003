//! Backend-to-UI events for the desktop controller.

use client_core::FetchError;
use shared::protocol::UserRecord;

#[derive(Debug)]
pub enum UiEvent {
    UsersLoaded(Vec<UserRecord>),
    LoadFailed(FetchError),
}
