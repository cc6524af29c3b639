pub mod search;
pub mod report;
