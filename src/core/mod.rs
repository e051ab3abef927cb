///
/// core/mod.rs
///
/// Declares the public core modules of the console client
///

pub mod config;
pub mod endpoint;
pub mod http;
pub mod logging;
