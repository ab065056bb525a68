//! Route modules for the compliance server

pub mod health;
pub mod upload;
