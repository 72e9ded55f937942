use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diag::Diagnostic;
use crate::error::DecodeError;
use crate::field::Field;
use crate::import::ImportId;
use crate::kind::ResourceKind;
use crate::reconcile::{Request, Resource};

/// Behavioral mode of an input terminal.
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
pub enum InputType {
    Switch,
    Button,
    Analog,
    Count,
}

/// Declared configuration of one input terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputConfig {
    /// Network address the device is reached at.
    pub address: String,
    /// Instance index of the input on the device.
    pub id: u32,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub input_type: Field<InputType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub invert: Field<bool>,
}

impl InputConfig {
    pub fn new(address: impl Into<String>, id: u32) -> Self {
        Self {
            address: address.into(),
            id,
            name: Field::Unset,
            input_type: Field::Unset,
            invert: Field::Unset,
        }
    }
}

#[derive(Deserialize)]
struct WireConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    input_type: Option<InputType>,
    #[serde(default)]
    invert: Option<bool>,
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
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    input_type: Field<InputType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    invert: Field<bool>,
    /// Inputs are re-enabled on every write so a declared configuration is
    /// never applied to a terminal the device will ignore.
    enable: bool,
}

impl Resource for InputConfig {
    const KIND: ResourceKind = ResourceKind::Input;

    fn address(&self) -> &str {
        &self.address
    }

    fn get_request(&self) -> Request {
        Request {
            method: "Input.GetConfig",
            params: Some(serde_json::json!({ "id": self.id })),
        }
    }

    fn apply_config(&mut self, result: Value) -> Result<(), DecodeError> {
        let config: WireConfig = serde_json::from_value(result)
            .map_err(|e| DecodeError::new("Input.GetConfig", e))?;
        self.name = Field::from_wire(config.name);
        self.input_type = Field::from_wire(config.input_type);
        self.invert = Field::from_wire(config.invert);
        Ok(())
    }

    fn set_request(&self) -> Result<Request, Diagnostic> {
        let params = SetParams {
            config: SetConfig {
                id: self.id,
                name: self.name.clone(),
                input_type: self.input_type,
                invert: self.invert,
                enable: true,
            },
        };
        Ok(Request {
            method: "Input.SetConfig",
            params: Some(serde_json::to_value(params).map_err(|e| {
                Diagnostic::error("Failed to encode input config", e.to_string())
            })?),
        })
    }

    fn from_import(import: ImportId) -> Self {
        // The parser guarantees an index for indexed kinds.
        Self::new(import.address, import.index.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn read_decodes_declared_fields() {
        let mut record = InputConfig::new("192.0.2.1", 1);
        record
            .apply_config(json!({
                "id": 1,
                "name": "door sensor",
                "type": "button",
                "invert": false,
                "factory_reset": true
            }))
            .unwrap();
        assert_eq!(record.name, Field::Value("door sensor".to_string()));
        assert_eq!(record.input_type, Field::Value(InputType::Button));
        assert_eq!(record.invert, Field::Value(false));
    }

    #[test]
    fn read_maps_absent_keys_to_unset() {
        let mut record = InputConfig::new("192.0.2.1", 0);
        record.apply_config(json!({ "id": 0 })).unwrap();
        assert!(record.name.is_unset());
        assert!(record.input_type.is_unset());
        assert!(record.invert.is_unset());
    }

    #[test]
    fn write_omits_unset_fields_and_always_enables() {
        let mut record = InputConfig::new("192.0.2.1", 0);
        record.input_type = Field::Value(InputType::Switch);
        record.invert = Field::Value(true);

        let request = record.set_request().unwrap();
        assert_eq!(request.method, "Input.SetConfig");
        assert_eq!(
            request.params.unwrap(),
            json!({
                "config": { "id": 0, "type": "switch", "invert": true, "enable": true }
            })
        );
    }

    #[test]
    fn write_sends_null_for_cleared_name() {
        let mut record = InputConfig::new("192.0.2.1", 2);
        record.name = Field::Null;
        let request = record.set_request().unwrap();
        assert_eq!(
            request.params.unwrap(),
            json!({ "config": { "id": 2, "name": null, "enable": true } })
        );
    }

    #[test]
    fn input_type_parses_from_snake_case() {
        assert_eq!(InputType::from_str("switch").unwrap(), InputType::Switch);
        assert_eq!(InputType::Analog.to_string(), "analog");
        assert!(InputType::from_str("dimmer").is_err());
    }
}
