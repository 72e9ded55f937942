//! Command handlers, one module per resource kind.

pub mod device;
pub mod identity;
pub mod input;
pub mod switch;

use std::str::FromStr;

use shellysync_core::{Diagnostics, Reconciler};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Command,
    recon: &Reconciler,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Identity(args) => identity::handle(recon, args, global).await,
        Command::Input(args) => input::handle(recon, args, global).await,
        Command::Switch(args) => switch::handle(recon, args, global).await,
        Command::Device(args) => device::handle(recon, args, global).await,
    }
}

/// Print diagnostics and convert error-severity entries into a failure.
pub(crate) fn finish(diags: &Diagnostics, global: &GlobalOpts) -> Result<(), CliError> {
    output::print_diagnostics(diags, output::should_color(global.color));
    if diags.has_errors() {
        Err(CliError::Failed)
    } else {
        Ok(())
    }
}

/// Parse an enum-valued flag, listing the accepted values on failure.
pub(crate) fn parse_enum<T: FromStr>(
    field: &str,
    value: &str,
    allowed: &[&str],
) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.to_string(),
        reason: format!("'{value}' is not one of: {}", allowed.join(", ")),
    })
}
