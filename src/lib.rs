// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod answer;
pub mod config;
pub mod games;
pub mod questions;
pub mod runtime;
pub mod shuffle;
pub mod ui;
pub mod vocabulary;
