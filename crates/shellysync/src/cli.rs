//! Clap derive structures for the `shellysync` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// shellysync -- declared-state CLI for Shelly Gen2+ devices
#[derive(Debug, Parser)]
#[command(
    name = "shellysync",
    version,
    about = "Reconcile declared configuration onto Shelly Gen2+ devices",
    long_about = "Reads and writes Shelly Gen2+ device configuration over the \
        local JSON-RPC interface.\n\n\
        Each command opens one RPC channel to the device, performs its \
        operation, and tears the channel down.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// RPC timeout in seconds
    #[arg(
        long,
        short = 't',
        env = "SHELLYSYNC_TIMEOUT",
        default_value_t = 5,
        global = true
    )]
    pub timeout: u64,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SHELLYSYNC_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    JsonCompact,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

// ── Command Tree ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the device identity (its name)
    Identity(IdentityArgs),
    /// Manage input terminal configuration
    Input(InputArgs),
    /// Manage switch channel configuration
    Switch(SwitchArgs),
    /// Query read-only device facts
    Device(DeviceArgs),
}

// ── Identity ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct IdentityArgs {
    #[command(subcommand)]
    pub command: IdentityCommand,
}

#[derive(Debug, Subcommand)]
pub enum IdentityCommand {
    /// Read the device name
    Get {
        /// Device address (IP or hostname)
        address: String,
    },
    /// Write the device name
    Set {
        /// Device address (IP or hostname)
        address: String,

        /// Device name to set
        #[arg(long)]
        name: Option<String>,

        /// Declare the name as explicitly null
        #[arg(long, conflicts_with = "name")]
        clear_name: bool,
    },
    /// Adopt an existing device identity by address
    Import {
        /// Bare device address, e.g. 192.168.1.1
        id: String,
    },
}

// ── Input ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InputArgs {
    #[command(subcommand)]
    pub command: InputCommand,
}

#[derive(Debug, Subcommand)]
pub enum InputCommand {
    /// Read one input terminal's configuration
    Get {
        /// Device address (IP or hostname)
        address: String,

        /// Input instance index
        #[arg(long, default_value_t = 0)]
        id: u32,
    },
    /// Write one input terminal's configuration
    Set {
        /// Device address (IP or hostname)
        address: String,

        /// Input instance index
        #[arg(long, default_value_t = 0)]
        id: u32,

        /// Input name to set
        #[arg(long)]
        name: Option<String>,

        /// Declare the name as explicitly null
        #[arg(long, conflicts_with = "name")]
        clear_name: bool,

        /// Input type (switch, button, analog, count)
        #[arg(long = "type", value_name = "TYPE")]
        input_type: Option<String>,

        /// Invert the input signal
        #[arg(long, value_name = "BOOL")]
        invert: Option<bool>,
    },
    /// Adopt an existing input by composite identifier
    Import {
        /// Composite identifier, e.g. 192.168.1.1:0
        id: String,
    },
}

// ── Switch ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SwitchArgs {
    #[command(subcommand)]
    pub command: SwitchCommand,
}

#[derive(Debug, Subcommand)]
pub enum SwitchCommand {
    /// Read one switch channel's configuration
    Get {
        /// Device address (IP or hostname)
        address: String,

        /// Switch instance index
        #[arg(long, default_value_t = 0)]
        id: u32,
    },
    /// Write one switch channel's configuration
    Set {
        /// Device address (IP or hostname)
        address: String,

        /// Switch instance index
        #[arg(long, default_value_t = 0)]
        id: u32,

        /// Switch name to set
        #[arg(long)]
        name: Option<String>,

        /// Declare the name as explicitly null
        #[arg(long, conflicts_with = "name")]
        clear_name: bool,

        /// Input mode (momentary, follow, flip, detached, cycle, activate)
        #[arg(long, value_name = "MODE")]
        in_mode: Option<String>,

        /// Power-on state (off, on, restore_last, match_input)
        #[arg(long, value_name = "STATE")]
        initial_state: Option<String>,
    },
    /// Adopt an existing switch by composite identifier
    Import {
        /// Composite identifier, e.g. 192.168.1.1:0
        id: String,
    },
}

// ── Device ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DeviceArgs {
    #[command(subcommand)]
    pub command: DeviceCommand,
}

#[derive(Debug, Subcommand)]
pub enum DeviceCommand {
    /// Show the device MAC address and firmware identifier
    Info {
        /// Device address (IP or hostname)
        address: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_tree_is_well_formed() {
        Cli::command().debug_assert();
    }
}
