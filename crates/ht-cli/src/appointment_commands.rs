use clap::Subcommand;

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// List appointments
    List,
    /// Book an appointment
    Book {
        #[arg(long)]
        doctor_name: String,
        /// Date and time, e.g. 2026-11-02T09:30
        #[arg(long)]
        date: String,
        #[arg(long)]
        reason: String,
    },
    /// Cancel an appointment by ID
    Cancel {
        /// Appointment ID
        id: i64,
    },
}
