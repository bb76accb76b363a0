pub mod error;
pub mod report;
pub mod score;
pub mod status;
