//! Identity command handlers.

use tabled::Tabled;

use shellysync_core::{Field, IdentityConfig, Reconciler};

use crate::cli::{GlobalOpts, IdentityArgs, IdentityCommand};
use crate::error::CliError;
use crate::output;

use super::finish;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct IdentityRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&IdentityConfig> for IdentityRow {
    fn from(record: &IdentityConfig) -> Self {
        Self {
            address: record.address.clone(),
            name: output::field_cell(&record.name),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    recon: &Reconciler,
    args: IdentityArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        IdentityCommand::Get { address } => {
            let (record, diags) = recon.read(&IdentityConfig::new(address)).await;
            finish(&diags, global)?;
            print_record(&record, global);
            Ok(())
        }

        IdentityCommand::Set {
            address,
            name,
            clear_name,
        } => {
            let mut record = IdentityConfig::new(address);
            record.name = match name {
                Some(name) => Field::Value(name),
                None if clear_name => Field::Null,
                None => Field::Unset,
            };
            let (written, diags) = recon.write(&record).await;
            finish(&diags, global)?;
            print_record(&written, global);
            Ok(())
        }

        IdentityCommand::Import { id } => {
            let (record, diags) = recon.import::<IdentityConfig>(&id);
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

fn print_record(record: &IdentityConfig, global: &GlobalOpts) {
    let out = output::render_single(global.output, record, |r| IdentityRow::from(r), |r| {
        r.address.clone()
    });
    output::print_output(&out, global.quiet);
}
