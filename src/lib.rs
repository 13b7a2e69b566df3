#![forbid(unsafe_code)]

pub mod agent;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod utils;
pub mod version;
