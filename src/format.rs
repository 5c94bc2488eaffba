//! Output templates.
//!
//! | Placeholder | Value |
//! |---|---|
//! | `%n` | identifier |
//! | `%a` | address |
//! | `%s` | ssh host |
//! | `%h` | host part of the address |
//! | `%p` | port part of the address |
//! | `%l` | log file |
//! | `%g` | groups, comma separated |
//!
//! Placeholders are replaced in the order above, each one everywhere it
//! occurs. `%h` and `%p` are left as is when the address has no `:`. Anything
//! else, including unknown placeholders, is copied through.

use crate::servers::ServerRecord;

/// Default template: just the identifier
pub const DEFAULT_FORMAT: &str = "%n";

/// Expand `template` for a single server
pub fn format_record(record: &ServerRecord, template: &str) -> String {
    let mut out = template.to_string();

    substitute(&mut out, "%n", Some(record.identifier.as_str()));
    substitute(&mut out, "%a", Some(record.address.as_str()));
    substitute(&mut out, "%s", Some(record.ssh_host.as_str()));
    substitute(&mut out, "%h", record.host());
    substitute(&mut out, "%p", record.port());
    substitute(&mut out, "%l", Some(record.log_file.as_str()));
    if out.contains("%g") {
        out = out.replace("%g", &record.groups.join(","));
    }

    out
}

/// Expand `template` once per server, keeping order
pub fn format_output(records: &[&ServerRecord], template: &str) -> Vec<String> {
    records.iter().map(|r| format_record(r, template)).collect()
}

fn substitute(out: &mut String, placeholder: &str, value: Option<&str>) {
    if let Some(value) = value {
        if out.contains(placeholder) {
            *out = out.replace(placeholder, value);
        }
    }
}
