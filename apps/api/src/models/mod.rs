pub mod question;
pub mod vacancy;
