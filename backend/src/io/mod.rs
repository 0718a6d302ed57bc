//! # IO Module
//!
//! Interface layer between the farmer's terminal and the domain logic.
//!
//! This module translates command line arguments and typed input into
//! domain operations and formats domain data as text in the active
//! language.
//!
//! ## Key Responsibilities
//!
//! - **Commands**: One-shot command line operations ([`cli`], [`commands`])
//! - **Screens**: Plain-text rendering of every page ([`screens`])
//! - **Browser**: Interactive page-by-page navigation ([`browse`])
//! - **Photos**: Image files to embedded data URLs and back ([`photos`])

pub mod browse;
pub mod cli;
pub mod commands;
pub mod photos;
pub mod screens;

pub use browse::Browser;
pub use cli::{Cli, Commands};
pub use commands::execute;
pub use photos::PhotoError;
