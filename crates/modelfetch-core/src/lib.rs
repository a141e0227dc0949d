pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod runner;
pub mod sources;
pub mod storage;
pub mod transport;
pub mod url_model;
