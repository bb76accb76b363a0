pub mod answer;
pub mod assessment;
pub mod question;
pub mod user;
pub mod util;

pub use sea_orm;
