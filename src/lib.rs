//! RemindMe library
//!
//! A terminal-based reminder manager built around color-coded collections of
//! tasks. Collections and tasks live in a local SQLite database; every
//! mutation goes through an asynchronous backend boundary and the view is
//! refreshed wholesale after each success.

pub mod backend;
pub mod config;
pub mod constants;
pub mod entities;
pub mod palette;
pub mod repositories;
pub mod service;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod utils;
pub mod validation;
