pub mod assessment;
pub mod question;
pub mod report;
pub mod score;
pub mod status;
pub mod submission;
pub mod user;
