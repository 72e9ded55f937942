//! Import identifier parsing.
//!
//! Existing device state is adopted through a composite identifier string:
//! `<address>` for the singleton identity kind, `<address>:<index>` for the
//! indexed kinds. Parsing never touches the network; all failures surface
//! as diagnostics so callers can report them uniformly.

use crate::diag::Diagnostics;
use crate::kind::ResourceKind;

/// A parsed import identifier: where the resource lives and, for indexed
/// kinds, which instance it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportId {
    pub address: String,
    pub index: Option<u32>,
}

/// Parse an import identifier for `kind`.
///
/// Returns `(None, diags)` with at least one error diagnostic when the
/// identifier is malformed; the original string is never partially applied.
pub fn parse_import_id(kind: ResourceKind, id: &str) -> (Option<ImportId>, Diagnostics) {
    let mut diags = Diagnostics::new();

    if kind.is_indexed() {
        // Exactly one separator; anything else is a malformed identifier,
        // not a bad index.
        let parts: Vec<&str> = id.split(':').collect();
        let [address, index] = parts[..] else {
            diags.error(
                "Invalid import ID format",
                format!(
                    "Expected format: <address>:<index> (e.g., 192.168.1.1:0), got: {id}"
                ),
            );
            return (None, diags);
        };
        if address.is_empty() {
            diags.error(
                "Invalid import ID format",
                format!(
                    "Expected format: <address>:<index> (e.g., 192.168.1.1:0), got: {id}"
                ),
            );
            return (None, diags);
        }
        match index.parse::<u32>() {
            Ok(index) => (
                Some(ImportId {
                    address: address.to_string(),
                    index: Some(index),
                }),
                diags,
            ),
            Err(e) => {
                diags.error(
                    format!("Invalid {kind} ID"),
                    format!("Could not parse {kind} ID '{index}' as a number: {e}"),
                );
                (None, diags)
            }
        }
    } else {
        // Singletons take a bare address; a separator means the caller mixed
        // up the kind, which deserves a format error rather than a silent
        // truncation.
        if id.is_empty() || id.contains(':') {
            diags.error(
                "Invalid import ID format",
                format!("Expected a bare device address (e.g., 192.168.1.1), got: {id}"),
            );
            return (None, diags);
        }
        (
            Some(ImportId {
                address: id.to_string(),
                index: None,
            }),
            diags,
        )
    }
}
