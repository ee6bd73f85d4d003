//! Folds backend events into the single UI state.

use client_core::UiState;

use crate::controller::events::UiEvent;

pub fn apply(state: &mut UiState, event: UiEvent) {
    match event {
        UiEvent::UsersLoaded(users) => state.finish(Ok(users)),
        UiEvent::LoadFailed(err) => state.finish(Err(err)),
    }
}
