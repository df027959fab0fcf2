//! Request handlers.

pub mod ai;
pub mod chat;
pub mod health;
