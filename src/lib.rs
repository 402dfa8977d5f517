//! Vibe-to-Playlist Web Service Library
//!
//! This library implements an HTTP JSON service that turns a free-text mood
//! description (a "vibe") into a playable Spotify track list. A generative
//! text model proposes (artist, track) candidates, each candidate is resolved
//! against the Spotify catalog, and the resolved list can optionally be saved
//! as a playlist in the end user's account via the authorization-code flow.
//!
//! # Modules
//!
//! - `anthropic` - Anthropic Messages API client and candidate extraction
//! - `api` - HTTP API endpoints served to the browser client
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and HTTP error mapping
//! - `management` - Service-level credential caching
//! - `pipeline` - End-to-end playlist generation orchestration
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions

pub mod anthropic;
pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod pipeline;
pub mod server;
pub mod spotify;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup errors (missing configuration, port
/// already bound). Request-scoped failures go through [`error::Error`]
/// instead and never terminate the process.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a single candidate failing catalog
/// lookup while the rest of the batch continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
