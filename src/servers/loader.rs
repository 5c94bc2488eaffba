//! Servers File Loader
//!
//! Reads the whole servers file and parses it in one go. There are no partial
//! results: either every record loads or the caller gets the error.
//!
//! The file is a protobuf text-format `ServerFile`:
//!
//! ```text
//! server {
//!   identifier: "dm1"
//!   address: "frag.gr:27910"
//!   groups: "dm"
//!   groups: "eu"
//!   ssh_host: "frag.gr"
//!   log_file: "/var/log/q2/dm1.log"
//! }
//! ```

use std::fs;
use std::path::Path;

use protobuf::text_format;

use super::proto::servers_file::ServerFile;
use super::schema::ServerRecord;
use crate::error::{LookupError, ParseFailure};

/// Default servers file name, relative to the home directory
pub const DEFAULT_SERVERS_FILE: &str = ".q2servers.config";

/// Read and parse the servers file at `path`
pub fn load_servers(path: &Path) -> Result<Vec<ServerRecord>, LookupError> {
    let raw = fs::read(path).map_err(|source| LookupError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let servers = std::str::from_utf8(&raw)
        .map_err(ParseFailure::from)
        .and_then(parse_servers)
        .map_err(|source| LookupError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("Loaded {} servers from {:?}", servers.len(), path);
    Ok(servers)
}

/// Parse text-format servers file content
pub fn parse_servers(content: &str) -> Result<Vec<ServerRecord>, ParseFailure> {
    let file = text_format::parse_from_str::<ServerFile>(content)?;
    Ok(file.server.into_iter().map(ServerRecord::from).collect())
}
