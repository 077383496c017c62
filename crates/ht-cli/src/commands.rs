use crate::{AppointmentCommands, PrescriptionCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a username and password
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and log in as it
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in identity, if any
    Whoami,

    /// Navigate to a path and render whatever the guards allow
    Open {
        /// Route path, e.g. /appointments
        path: String,
    },

    /// Health overview for the logged-in user
    Dashboard,

    /// Appointment operations
    Appointments {
        #[command(subcommand)]
        action: AppointmentCommands,
    },

    /// Prescription operations
    Prescriptions {
        #[command(subcommand)]
        action: PrescriptionCommands,
    },
}
