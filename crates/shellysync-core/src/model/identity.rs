use serde::Serialize;
use serde_json::Value;

use crate::diag::Diagnostic;
use crate::error::DecodeError;
use crate::field::Field;
use crate::import::ImportId;
use crate::kind::ResourceKind;
use crate::model::SysConfig;
use crate::reconcile::{Request, Resource};

/// Declared identity of one device: its user-visible name.
///
/// Identity is a singleton per device; it always exists on hardware and can
/// only be read and written, never created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityConfig {
    /// Network address the device is reached at.
    pub address: String,
    /// Device name. Must be set ([`Field::Value`]) for a write.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
}

impl IdentityConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Field::Unset,
        }
    }
}

#[derive(Serialize)]
struct SetParams<'a> {
    config: SetConfig<'a>,
}

#[derive(Serialize)]
struct SetConfig<'a> {
    device: SetDevice<'a>,
}

#[derive(Serialize)]
struct SetDevice<'a> {
    name: &'a str,
}

impl Resource for IdentityConfig {
    const KIND: ResourceKind = ResourceKind::Identity;

    fn address(&self) -> &str {
        &self.address
    }

    fn get_request(&self) -> Request {
        Request {
            method: "Sys.GetConfig",
            params: None,
        }
    }

    fn apply_config(&mut self, result: Value) -> Result<(), DecodeError> {
        let config: SysConfig = serde_json::from_value(result)
            .map_err(|e| DecodeError::new("Sys.GetConfig", e))?;
        self.name = Field::from_wire(config.device.and_then(|d| d.name));
        Ok(())
    }

    fn set_request(&self) -> Result<Request, Diagnostic> {
        let Field::Value(name) = &self.name else {
            return Err(Diagnostic::error(
                "Invalid Name",
                "The 'name' attribute must be set to a concrete value to \
                 write the device identity.",
            ));
        };
        let params = SetParams {
            config: SetConfig {
                device: SetDevice { name },
            },
        };
        Ok(Request {
            method: "Sys.SetConfig",
            params: Some(serde_json::to_value(params).map_err(|e| {
                Diagnostic::error("Failed to encode identity config", e.to_string())
            })?),
        })
    }

    fn from_import(import: ImportId) -> Self {
        Self::new(import.address)
    }
}
