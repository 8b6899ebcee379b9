//! Comment Rules Core Library
//!
//! This crate provides the core functionality for comment-rules, an installer
//! that writes comment-policy rule documents into the configuration paths of
//! AI code editors.
//!
//! # Key Features
//!
//! - **Rule Templates**: The shipped policy documents and their `.mdc` frontmatter
//! - **Editor Registry**: Where each supported editor reads its rules from
//! - **Installer**: Path resolution and file writing for one or many editors
//! - **Configuration Management**: Optional YAML defaults and install directories
//! - **Error Handling**: Error types for all failure modes
//!
//! # Examples
//!
//! Installing the JSDoc rule for Cursor into a project:
//!
//! ```no_run
//! use comment_rules_core::editors::find_editor;
//! use comment_rules_core::installer::Installer;
//! use comment_rules_core::rules::RuleChoice;
//!
//! let cursor = find_editor("cursor").expect("cursor is a known editor");
//! let written = Installer::new(".").install(cursor, &RuleChoice::Jsdoc.rules())?;
//! for path in &written {
//!     println!("Wrote {}", path);
//! }
//! # Ok::<(), comment_rules_core::error::Error>(())
//! ```

pub mod config;
pub mod editors;
pub mod error;
pub mod file_handling;
pub mod installer;
pub mod rules;
