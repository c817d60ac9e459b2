pub mod api_connection;
pub mod assistant;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod preferences;
pub mod quantity;
pub mod recipe;
pub mod scaling;
