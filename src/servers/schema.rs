//! Server Record
//!
//! Plain in-memory form of one `server { ... }` entry of the servers file.
//! Fields missing from the file are empty, as protobuf string fields are.

use super::proto::servers_file::server_file::Server;

/// A single named server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerRecord {
    pub identifier: String,
    /// Usually `host:port`
    pub address: String,
    pub groups: Vec<String>,
    pub ssh_host: String,
    pub log_file: String,
}

impl From<Server> for ServerRecord {
    fn from(server: Server) -> Self {
        Self {
            identifier: server.identifier,
            address: server.address,
            groups: server.groups,
            ssh_host: server.ssh_host,
            log_file: server.log_file,
        }
    }
}

impl ServerRecord {
    /// Host part of the address, if the address has a port
    pub fn host(&self) -> Option<&str> {
        self.address.split_once(':').map(|(host, _)| host)
    }

    /// Port part of the address (everything after the first `:`)
    pub fn port(&self) -> Option<&str> {
        self.address.split_once(':').map(|(_, port)| port)
    }
}
