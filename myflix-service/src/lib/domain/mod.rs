pub mod authentication;
pub mod catalog;
pub mod user;
