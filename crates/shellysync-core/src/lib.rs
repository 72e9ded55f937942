//! Declared-state reconciliation for Shelly Gen2+ devices.
//!
//! This crate owns the business logic between `shellysync-rpc` and callers
//! (the CLI, or a hosting framework managing declared configuration):
//!
//! - **[`Reconciler`]** — The central facade. One generic reconciler covers
//!   every sub-resource kind: [`read()`](Reconciler::read) pulls the live
//!   device configuration into a declared-state record,
//!   [`write()`](Reconciler::write) pushes the minimal set of declared
//!   fields back to the device, [`import()`](Reconciler::import) seeds a
//!   record from a composite identifier string. Each call owns exactly one
//!   RPC channel and holds no state afterwards.
//!
//! - **[`Field<T>`]** — Tri-state configuration value (unset / explicitly
//!   null / explicitly set) deciding per field whether anything is sent to
//!   the device at all.
//!
//! - **Records** ([`model`]) — [`IdentityConfig`], [`InputConfig`],
//!   [`SwitchConfig`]: the declared-state representation of one manageable
//!   sub-resource, keyed by device address (plus instance index for the
//!   indexed kinds).
//!
//! - **[`Diagnostics`]** — Ordered, severity-tagged messages returned from
//!   every operation. An error-severity entry is the sole failure signal;
//!   there is no separate status code.

pub mod diag;
pub mod error;
pub mod field;
pub mod import;
pub mod kind;
pub mod model;
pub mod reconcile;

/// The transport layer, re-exported for callers that substitute connectors.
pub use shellysync_rpc as rpc;

// ── Primary re-exports ──────────────────────────────────────────────
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::DecodeError;
pub use field::Field;
pub use import::{ImportId, parse_import_id};
pub use kind::ResourceKind;
pub use reconcile::{Reconciler, Request, Resource, with_channel};
pub use rpc::DEFAULT_RPC_TIMEOUT;

// Re-export record types at the crate root for ergonomics.
pub use model::{
    DeviceInfo, IdentityConfig, InMode, InitialState, InputConfig, InputType, SwitchConfig,
};
