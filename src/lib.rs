//! mansion: explore a binary tree of rooms from the entrance hall to a dead end.
//!
//! Layers, inner to outer:
//! - [`domain`]: room tree (arena), layouts, choices
//! - [`application`]: explorer cursor, interactive session, map loading
//! - [`cli`]: clap front end and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
