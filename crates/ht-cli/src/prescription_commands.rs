use clap::Subcommand;

#[derive(Subcommand)]
pub enum PrescriptionCommands {
    /// List the logged-in user's prescriptions
    List,
    /// Record a prescription
    Add {
        #[arg(long)]
        medicine_name: String,
        #[arg(long)]
        dosage: String,
        #[arg(long)]
        frequency: String,
        /// First day, e.g. 2026-10-01
        #[arg(long)]
        start_date: String,
        /// Last day, e.g. 2026-10-14
        #[arg(long)]
        end_date: String,
    },
}
