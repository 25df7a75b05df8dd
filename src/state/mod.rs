/// State management module
///
/// This module holds all client-side state, including:
/// - Shared data structures (data.rs)
/// - The single status line (status.rs)
/// - The mirror of the backend catalog (catalog.rs)
/// - Request epochs for overlapping operations (guard.rs)
/// - The container that owns all of the above (session.rs)

pub mod catalog;
pub mod data;
pub mod guard;
pub mod session;
pub mod status;

pub use session::Session;
