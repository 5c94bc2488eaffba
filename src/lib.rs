//! Quake 2 Server Resolver
//!
//! Looks up servers in a local servers file and prints them through a
//! template.
//!
//! This library provides:
//! - Servers file schema and loading
//! - Regex matchers by name, group and address
//! - Union and intersection of matcher results
//! - Placeholder formatting of matched servers

pub mod combine;
pub mod config;
pub mod error;
pub mod format;
pub mod matching;
pub mod resolve;
pub mod servers;

// Re-exports for the public API
pub use combine::CombineMode;
pub use config::{Args, Config};
pub use error::{LookupError, ParseFailure};
pub use format::{format_output, format_record};
pub use matching::{match_by_address, match_by_group, match_by_identifier, Criterion, MatchSet};
pub use resolve::{resolve, run, Resolution};
pub use servers::{load_servers, ServerRecord};
