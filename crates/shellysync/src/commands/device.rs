//! Device fact command handlers.

use tabled::Tabled;

use shellysync_core::{DeviceInfo, Reconciler};

use crate::cli::{DeviceArgs, DeviceCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::finish;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Firmware")]
    firmware: String,
}

impl From<&DeviceInfo> for DeviceRow {
    fn from(info: &DeviceInfo) -> Self {
        Self {
            address: info.address.clone(),
            mac: info.mac.clone(),
            firmware: info.firmware.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    recon: &Reconciler,
    args: DeviceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DeviceCommand::Info { address } => {
            let (info, diags) = recon.device_info(&address).await;
            finish(&diags, global)?;
            let Some(info) = info else {
                return Err(CliError::Failed);
            };
            let out = output::render_single(global.output, &info, |i| DeviceRow::from(i), |i| {
                i.mac.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
