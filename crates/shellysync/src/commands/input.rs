//! Input command handlers.

use strum::VariantNames;
use tabled::Tabled;

use shellysync_core::{Field, InputConfig, InputType, Reconciler};

use crate::cli::{GlobalOpts, InputArgs, InputCommand};
use crate::error::CliError;
use crate::output;

use super::{finish, parse_enum};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InputRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    input_type: String,
    #[tabled(rename = "Invert")]
    invert: String,
}

impl From<&InputConfig> for InputRow {
    fn from(record: &InputConfig) -> Self {
        Self {
            address: record.address.clone(),
            id: record.id,
            name: output::field_cell(&record.name),
            input_type: output::field_cell(&record.input_type),
            invert: output::field_cell(&record.invert),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    recon: &Reconciler,
    args: InputArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InputCommand::Get { address, id } => {
            let (record, diags) = recon.read(&InputConfig::new(address, id)).await;
            finish(&diags, global)?;
            print_record(&record, global);
            Ok(())
        }

        InputCommand::Set {
            address,
            id,
            name,
            clear_name,
            input_type,
            invert,
        } => {
            let mut record = InputConfig::new(address, id);
            record.name = match name {
                Some(name) => Field::Value(name),
                None if clear_name => Field::Null,
                None => Field::Unset,
            };
            if let Some(value) = input_type.as_deref() {
                record.input_type =
                    Field::Value(parse_enum::<InputType>("type", value, InputType::VARIANTS)?);
            }
            record.invert = Field::from_wire(invert);

            let (written, diags) = recon.write(&record).await;
            finish(&diags, global)?;
            print_record(&written, global);
            Ok(())
        }

        InputCommand::Import { id } => {
            let (record, diags) = recon.import::<InputConfig>(&id);
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

fn print_record(record: &InputConfig, global: &GlobalOpts) {
    let out = output::render_single(global.output, record, |r| InputRow::from(r), |r| {
        format!("{}:{}", r.address, r.id)
    });
    output::print_output(&out, global.quiet);
}
