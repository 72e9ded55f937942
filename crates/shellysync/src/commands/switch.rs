//! Switch command handlers.

use strum::VariantNames;
use tabled::Tabled;

use shellysync_core::{Field, InMode, InitialState, Reconciler, SwitchConfig};

use crate::cli::{GlobalOpts, SwitchArgs, SwitchCommand};
use crate::error::CliError;
use crate::output;

use super::{finish, parse_enum};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Input Mode")]
    in_mode: String,
    #[tabled(rename = "Initial State")]
    initial_state: String,
}

impl From<&SwitchConfig> for SwitchRow {
    fn from(record: &SwitchConfig) -> Self {
        Self {
            address: record.address.clone(),
            id: record.id,
            name: output::field_cell(&record.name),
            in_mode: output::field_cell(&record.in_mode),
            initial_state: output::field_cell(&record.initial_state),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    recon: &Reconciler,
    args: SwitchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SwitchCommand::Get { address, id } => {
            let (record, diags) = recon.read(&SwitchConfig::new(address, id)).await;
            finish(&diags, global)?;
            print_record(&record, global);
            Ok(())
        }

        SwitchCommand::Set {
            address,
            id,
            name,
            clear_name,
            in_mode,
            initial_state,
        } => {
            let mut record = SwitchConfig::new(address, id);
            record.name = match name {
                Some(name) => Field::Value(name),
                None if clear_name => Field::Null,
                None => Field::Unset,
            };
            if let Some(value) = in_mode.as_deref() {
                record.in_mode =
                    Field::Value(parse_enum::<InMode>("in-mode", value, InMode::VARIANTS)?);
            }
            if let Some(value) = initial_state.as_deref() {
                record.initial_state = Field::Value(parse_enum::<InitialState>(
                    "initial-state",
                    value,
                    InitialState::VARIANTS,
                )?);
            }

            let (written, diags) = recon.write(&record).await;
            finish(&diags, global)?;
            print_record(&written, global);
            Ok(())
        }

        SwitchCommand::Import { id } => {
            let (record, diags) = recon.import::<SwitchConfig>(&id);
            finish(&diags, global)?;
            let Some(record) = record else {
                return Err(CliError::Failed);
            };
            let (record, diags) = recon.read(&record).await;
            finish(&diags, global)?;
            print_record(&record, global);
            Ok(())
        }
    }
}

fn print_record(record: &SwitchConfig, global: &GlobalOpts) {
    let out = output::render_single(global.output, record, |r| SwitchRow::from(r), |r| {
        format!("{}:{}", r.address, r.id)
    });
    output::print_output(&out, global.quiet);
}
