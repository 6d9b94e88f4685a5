pub mod config;
pub mod provider;
pub mod symbols;
