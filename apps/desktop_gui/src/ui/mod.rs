//! UI layer for desktop GUI: the single call request page.

pub mod app;

pub use app::{CallRequestApp, StartupConfig};
