/// State management module
///
/// This module holds the pure application state, including:
/// - Shared data structures (data.rs)
/// - The ordered image registry with wraparound indexing (registry.rs)
/// - The lightbox open/closed state machine (session.rs)
/// - Swipe gesture sampling and classification (gesture.rs)
/// - Persisted viewer configuration (config.rs)

pub mod config;
pub mod data;
pub mod gesture;
pub mod registry;
pub mod session;
