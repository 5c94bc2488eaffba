//! Lookup pipeline: load, match, combine, format.

use crate::config::Config;
use crate::error::LookupError;
use crate::format::format_output;
use crate::matching::MatchSet;
use crate::servers::{load_servers, ServerRecord};

/// Output lines of a lookup plus the non-fatal problems met on the way
#[derive(Debug, Default)]
pub struct Resolution {
    pub lines: Vec<String>,
    pub warnings: Vec<LookupError>,
}

/// Filter and format already loaded records
pub fn resolve(records: &[ServerRecord], config: &Config) -> Resolution {
    let mut set = MatchSet::new();
    for (criterion, pattern) in config.criteria() {
        set.add(records, criterion, pattern);
    }

    let servers = config.combine_mode().combine(&set.matches, set.required);
    log::debug!(
        "{:?} of {} criteria kept {} servers",
        config.combine_mode(),
        set.required,
        servers.len()
    );

    Resolution {
        lines: format_output(&servers, &config.format),
        warnings: set.warnings,
    }
}

/// Load the configured servers file and resolve against it
pub fn run(config: &Config) -> Result<Resolution, LookupError> {
    let path = config.servers_file()?;
    let records = load_servers(&path)?;
    Ok(resolve(&records, config))
}
