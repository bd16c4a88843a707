pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod profile;
pub mod source;
