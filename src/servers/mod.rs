//! Server Records
//!
//! Schema and loading of the servers file.

pub mod loader;
pub mod proto;
pub mod schema;

pub use loader::{load_servers, parse_servers, DEFAULT_SERVERS_FILE};
pub use schema::ServerRecord;
