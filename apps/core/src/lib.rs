//! Prompt Improver Backend
//!
//! Turns a rough website idea into a structured project brief and keeps a
//! record of every transformation.

pub mod brain;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;

#[cfg(test)]
mod tests;
