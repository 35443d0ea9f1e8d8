// Library entry so integration tests and external tools can reference internal modules.
// The binary (`main.rs`) is built on the same modules.
pub mod api;
pub mod commands;
pub mod constants;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod storage;
pub mod ui;

// Convenient re-export for the most frequently used type.
pub use model::AppState;
