// Library root: exposes internal modules for integration tests in `tests/`.
// Production entry point remains `src/main.rs`.

pub mod channels;
pub mod error;
pub mod retry;
pub mod services;
pub mod step;

// These modules are mostly needed by the binary.
pub mod cli;
pub mod config;
pub mod logging;
