//! ht - health tracker patient client
//!
//! Every command prints one JSON document on stdout. Logs go to stderr or
//! the configured log file.
//!
//! # Examples
//!
//! ```bash
//! # Log in; the session survives until `ht logout`
//! ht login --username alice --password secret
//!
//! # Health overview
//! ht dashboard --pretty
//!
//! # Book an appointment
//! ht appointments book --doctor-name "Dr. Smith" --date 2026-11-02T09:30 --reason Checkup
//! ```

use ht_cli::{
    AppointmentCommands, Cli, CliResult, Commands, HttpApp, PrescriptionCommands,
    initialize_logger,
};
use ht_config::Config;
use ht_core::{Credentials, RegistrationProfile};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let (value, exit_code) = match run(cli).await {
        Ok(value) => (value, ExitCode::SUCCESS),
        Err(e) => {
            error!("{e}");
            (e.to_json(), ExitCode::FAILURE)
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            exit_code
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    initialize_logger(
        config.logging.level,
        log_file_path(&config),
        config.logging.colored,
    )?;

    info!("Starting ht v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = HttpApp::from_config(&config)?;

    match cli.command {
        Commands::Login { username, password } => {
            app.login(&Credentials::new(username, password)).await
        }
        Commands::Register {
            username,
            email,
            password,
            first_name,
            last_name,
            phone,
        } => {
            let profile = RegistrationProfile {
                username,
                email,
                password,
                first_name,
                last_name,
                phone,
            };
            app.register(&profile).await
        }
        Commands::Logout => Ok(app.logout()),
        Commands::Whoami => Ok(app.whoami()),
        Commands::Open { path } => app.open(&path).await,
        Commands::Dashboard => app.dashboard().await,

        // Appointment commands
        Commands::Appointments { action } => match action {
            AppointmentCommands::List => app.list_appointments().await,
            AppointmentCommands::Book {
                doctor_name,
                date,
                reason,
            } => app.book_appointment(&doctor_name, &date, &reason).await,
            AppointmentCommands::Cancel { id } => app.cancel_appointment(id).await,
        },

        // Prescription commands
        Commands::Prescriptions { action } => match action {
            PrescriptionCommands::List => app.list_prescriptions().await,
            PrescriptionCommands::Add {
                medicine_name,
                dosage,
                frequency,
                start_date,
                end_date,
            } => {
                app.add_prescription(&medicine_name, &dosage, &frequency, &start_date, &end_date)
                    .await
            }
        },
    }
}

/// Relative log file names live in the config directory.
fn log_file_path(config: &Config) -> Option<PathBuf> {
    config.logging.file.as_ref().map(|file| config.dir.join(file))
}
