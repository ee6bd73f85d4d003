//! Backend commands queued from UI to the fetch worker.

/// Both the Reload and Retry controls queue the same command; the worker
/// does not distinguish how a fetch was triggered.
#[derive(Debug)]
pub enum BackendCommand {
    LoadUsers,
}
