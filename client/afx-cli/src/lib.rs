//! afx - AFX dashboard client shell
//!
//! Drives the session store, route guards and request executor the way the
//! dashboard views do, from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Sign in; the session is persisted under .afx/
//! afx login --email trader@example.com --password secret
//!
//! # Which view would /afxadmin/settings render?
//! afx route /afxadmin/settings
//!
//! # Authenticated call with the stored token
//! afx get /accounts --pretty
//! ```

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::{App, decision_json};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
