pub mod answer;
pub mod assessment;
pub mod question;
pub mod user;
