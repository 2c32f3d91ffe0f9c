pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod plot;
pub mod triangle;
