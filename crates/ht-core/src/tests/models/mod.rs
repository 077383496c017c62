mod appointment_status;
mod client_date;
mod dashboard;
mod identity;
mod inputs;
