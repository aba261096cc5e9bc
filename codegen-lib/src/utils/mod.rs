mod datetime;
mod filesystem;

pub use datetime::get_utc_iso_datetime;
pub use filesystem::{write_document, write_error_to_log};
