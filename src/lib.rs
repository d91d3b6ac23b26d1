//! # Snipz Architecture
//!
//! Snipz stores small named shell scripts ("snippets") as plain files in one
//! directory and lets you run, print, copy, edit, or delete them.
//!
//! The layering mirrors the rest of the codebase's conventions:
//!
//! ```text
//! CLI layer (main.rs / args.rs)
//!   - Parses arguments, prints output, owns exit codes
//!   - The ONLY place that knows about stdout/stderr/exit codes
//!            │
//!            ▼
//! Command layer (commands/*.rs)
//!   - One module per action, returns structured Result types
//!            │
//!            ▼
//! Store layer (store.rs)
//!   - Path resolution, directory creation, listing, read/remove
//! ```
//!
//! External collaborators sit at the edges and are each one module:
//!
//! - [`shell`]: hands a snippet body to `sh -c` with inherited stdio
//! - [`editor`]: launches the configured editor on a snippet path
//! - [`clipboard`]: OS clipboard via pbcopy/xclip/xsel/clip
//! - [`ui`]: blocking terminal prompts (pick a snippet, pick an action,
//!   confirm a delete)
//!
//! ## Trust boundary
//!
//! When a snippet runs, its content is passed verbatim to the host shell as
//! an inline script body. That is the point of the tool: snippets are
//! deliberately executable, and nothing here parses, validates, or sandboxes
//! what they do.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod shell;
pub mod store;
pub mod ui;
