use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diag::Diagnostic;
use crate::error::DecodeError;
use crate::field::Field;
use crate::import::ImportId;
use crate::kind::ResourceKind;
use crate::reconcile::{Request, Resource};

/// How the paired input terminal drives the switch.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InMode {
    Momentary,
    Follow,
    Flip,
    Detached,
    Cycle,
    Activate,
}

/// Output state the switch assumes after power-on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InitialState {
    Off,
    On,
    RestoreLast,
    MatchInput,
}

/// Declared configuration of one switch/relay channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchConfig {
    /// Network address the device is reached at.
    pub address: String,
    /// Instance index of the switch on the device.
    pub id: u32,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub in_mode: Field<InMode>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub initial_state: Field<InitialState>,
}

impl SwitchConfig {
    pub fn new(address: impl Into<String>, id: u32) -> Self {
        Self {
            address: address.into(),
            id,
            name: Field::Unset,
            in_mode: Field::Unset,
            initial_state: Field::Unset,
        }
    }
}

#[derive(Deserialize)]
struct WireConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    in_mode: Option<InMode>,
    #[serde(default)]
    initial_state: Option<InitialState>,
}

#[derive(Serialize)]
struct SetParams {
    config: SetConfig,
}

#[derive(Serialize)]
struct SetConfig {
    id: u32,
    #[serde(skip_serializing_if = "Field::is_unset")]
    name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    in_mode: Field<InMode>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    initial_state: Field<InitialState>,
}

impl Resource for SwitchConfig {
    const KIND: ResourceKind = ResourceKind::Switch;

    fn address(&self) -> &str {
        &self.address
    }

    fn get_request(&self) -> Request {
        Request {
            method: "Switch.GetConfig",
            params: Some(serde_json::json!({ "id": self.id })),
        }
    }

    fn apply_config(&mut self, result: Value) -> Result<(), DecodeError> {
        let config: WireConfig = serde_json::from_value(result)
            .map_err(|e| DecodeError::new("Switch.GetConfig", e))?;
        self.name = Field::from_wire(config.name);
        self.in_mode = Field::from_wire(config.in_mode);
        self.initial_state = Field::from_wire(config.initial_state);
        Ok(())
    }

    fn set_request(&self) -> Result<Request, Diagnostic> {
        let params = SetParams {
            config: SetConfig {
                id: self.id,
                name: self.name.clone(),
                in_mode: self.in_mode,
                initial_state: self.initial_state,
            },
        };
        Ok(Request {
            method: "Switch.SetConfig",
            params: Some(serde_json::to_value(params).map_err(|e| {
                Diagnostic::error("Failed to encode switch config", e.to_string())
            })?),
        })
    }

    fn from_import(import: ImportId) -> Self {
        // The parser guarantees an index for indexed kinds.
        Self::new(import.address, import.index.unwrap_or_default())
    }
}
