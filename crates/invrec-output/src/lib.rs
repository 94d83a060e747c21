//! CSV output for reconciliation reports.

pub mod csv_writer;
pub mod layout;

pub use csv_writer::{write_csv, write_report};
pub use layout::{OutputLayout, WrittenFile};
