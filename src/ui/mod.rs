//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, the current input
//!   line and the last evaluation outcome
//! - **[`panes`]** — stateless render functions for the display, the keypad
//!   grid, and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it and call
//! [`App::run`] to start the event loop. The UI reaches the evaluation core
//! only through [`evaluate`].
//!
//! [`evaluate`]: crate::parser::evaluate
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
