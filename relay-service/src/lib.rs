//! relay-service: forwards chat messages from the web front-end to Gemini.
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
