//! Comment Rules CLI Library
//!
//! This crate provides the command-line interface for comment-rules, an
//! installer for comment policy rules used by AI code editors. It handles
//! argument parsing, the interactive terminal selector and the install wizard
//! built on top of it.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and run mode selection
//! - [`selector`]: Interactive single and multi-select menus
//! - [`wizard`]: Scope, rule, editor and confirmation steps
//! - [`output`]: Messages printed around an install
//!
//! # Examples
//!
//! The CLI binary (`comment-rules`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the install wizard
//! comment-rules
//!
//! # Install for specific editors
//! comment-rules cursor claude
//!
//! # Install both rules globally for every editor
//! comment-rules --all --rule all --global
//!
//! # Show what would be written without writing
//! comment-rules --dry-run cursor
//! ```

pub mod cli_args;
pub mod output;
pub mod selector;
pub mod wizard;
