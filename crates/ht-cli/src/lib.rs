//! ht-cli library
//!
//! Composition root of the health tracker client: wires configuration, the
//! session and the HTTP services together and renders the pages as JSON.

pub(crate) mod app;
pub(crate) mod appointment_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod page;
pub(crate) mod prescription_commands;


pub use app::{App, Entry, HttpApp};
pub use appointment_commands::AppointmentCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use page::Page;
pub use prescription_commands::PrescriptionCommands;
