// Library for tests to access modules

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod rotation;
pub mod runner;
pub mod source;
