pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod icon;
pub mod paths;
pub mod platform;
pub mod runtime;
