use shared::protocol::UserRecord;

use crate::error::FetchError;
use crate::view::DirectoryView;

/// The single source of truth for what the shell currently displays.
/// Exactly one variant is active at a time; transitions are driven solely by
/// the fetch lifecycle: `Idle -> Loading -> {Content | Error}`, with
/// reload/retry re-entering `Loading` from either settled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Content(DirectoryView),
    Error(ErrorBanner),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
}

impl UiState {
    /// Entered on every dispatched load; drops any prior content or error.
    pub fn begin_loading(&mut self) {
        *self = Self::Loading;
    }

    pub fn finish(&mut self, outcome: Result<Vec<UserRecord>, FetchError>) {
        *self = match outcome {
            Ok(users) => Self::Content(DirectoryView::from_users(&users)),
            Err(err) => Self::Error(ErrorBanner {
                message: err.user_message(),
            }),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
