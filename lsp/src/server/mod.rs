mod analysis;
mod config;
mod entry;
mod handlers;
mod state;
mod text;
mod utils;

pub use entry::run;

/// Debounce before diagnostics run after an edit.
pub(crate) const CHANGE_DEBOUNCE_MS: u64 = 250;
/// Shorter delay for freshly opened documents.
pub(crate) const OPEN_DEBOUNCE_MS: u64 = 100;
