pub(crate) mod assessment;
pub(crate) mod question;
pub(crate) mod status;
