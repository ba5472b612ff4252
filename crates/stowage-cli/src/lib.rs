//! Stowage CLI library
//!
//! Fleet load accounting from an interactive console or one-shot commands.

pub mod cli;
pub mod commands;
pub mod output;
pub mod shell;
