// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod file;
pub mod filter;
pub mod gui;
pub mod i18n;
pub mod search;
pub mod store;
pub mod view;

pub use error::{Error, Result};
