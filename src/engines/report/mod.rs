pub mod formatter;

pub use formatter::{format_arrangement, render, ReportFormat};
