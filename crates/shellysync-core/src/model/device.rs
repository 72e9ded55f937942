use serde::{Deserialize, Serialize};

/// Wire shape of the `Sys.GetConfig` result, reduced to the keys this crate
/// reads. Devices add keys across firmware releases; unknown keys are
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SysConfig {
    #[serde(default)]
    pub(crate) device: Option<SysDeviceConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SysDeviceConfig {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) fw_id: Option<String>,
    #[serde(default)]
    pub(crate) mac: Option<String>,
}

/// Read-only facts about a device, resolved from its system configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    /// The address the device was queried at.
    pub address: String,
    /// Factory MAC address.
    pub mac: String,
    /// Full firmware identifier, e.g. `20231219-133953/1.1.0-g34b5d4f`.
    pub firmware: String,
}
