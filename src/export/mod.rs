//! Export formats for built reports.

mod csv;

pub use csv::{
    CsvExport, DAILY_CSV_HEADER, MONTHLY_CSV_HEADER, WEEKLY_CSV_HEADER, escape_csv_field,
};
