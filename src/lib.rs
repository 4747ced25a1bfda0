// Library surface for headless/integration tests and reuse.
// The binary only wires the terminal, CLI and logging around `app::App`.
pub mod app;
pub mod app_dirs;
pub mod board;
pub mod config;
pub mod display;
pub mod game;
pub mod keymap;
pub mod logging;
pub mod question;
pub mod runtime;
pub mod timer;
pub mod ui;

/// Interval of clock ticks delivered to the game loop
pub const TICK_RATE_MS: u64 = 100;
