//! The generic reconciler.
//!
//! One [`Reconciler`] covers every sub-resource kind through the
//! [`Resource`] descriptor trait: a record knows its read method, how to
//! fold a device response into itself, and how to render its declared
//! fields into a write request. The reconciler owns the channel lifecycle
//! around those three hooks, so per-kind code never touches the transport.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::diag::{Diagnostic, Diagnostics};
use crate::error::DecodeError;
use crate::import::{ImportId, parse_import_id};
use crate::kind::ResourceKind;
use crate::model::{DeviceInfo, SysConfig};
use crate::rpc::{DEFAULT_RPC_TIMEOUT, Error as RpcError, HttpConnector, RpcConnector, RpcSession};

/// One RPC request a record wants executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: &'static str,
    pub params: Option<Value>,
}

/// Per-kind descriptor: everything the reconciler needs to read and write
/// one sub-resource kind.
pub trait Resource: Clone + Send + Sync {
    const KIND: ResourceKind;

    /// Address of the device this record belongs to.
    fn address(&self) -> &str;

    /// The request that reads this record's live configuration.
    fn get_request(&self) -> Request;

    /// Fold a successful read response into the record.
    fn apply_config(&mut self, result: Value) -> Result<(), DecodeError>;

    /// Render the declared fields into a write request. A precondition
    /// failure (e.g. a required field left unset) is reported without any
    /// RPC traffic.
    fn set_request(&self) -> Result<Request, Diagnostic>;

    /// Seed a record from a parsed import identifier. Declared fields start
    /// unset; a follow-up read populates them.
    fn from_import(import: ImportId) -> Self;
}

/// Run `op` inside one channel open/close cycle.
///
/// Returns `None` when the channel could not be opened (an error diagnostic
/// is appended and the operation was never invoked). A close failure after
/// `op` ran is logged and otherwise ignored so it never masks the result.
pub async fn with_channel<C, T, F>(
    connector: &C,
    address: &str,
    timeout: Duration,
    diags: &mut Diagnostics,
    op: F,
) -> Option<Result<T, RpcError>>
where
    C: RpcConnector,
    F: AsyncFnOnce(&mut C::Session) -> Result<T, RpcError>,
{
    let mut session = match connector.connect(address, timeout).await {
        Ok(session) => session,
        Err(e) => {
            diags.error("Failed to establish RPC channel", e.to_string());
            return None;
        }
    };

    let result = op(&mut session).await;

    if let Err(e) = session.disconnect().await {
        warn!(address, error = %e, "failed to close RPC channel");
    }

    Some(result)
}

/// Reconciles declared sub-resource records against live device state.
///
/// Stateless apart from its connector and timeout; every operation opens
/// exactly one channel and tears it down before returning.
#[derive(Debug, Clone)]
pub struct Reconciler<C: RpcConnector = HttpConnector> {
    connector: C,
    timeout: Duration,
}

impl Reconciler<HttpConnector> {
    /// A reconciler over HTTP with the default per-operation timeout.
    pub fn new() -> Self {
        Self::with_connector(HttpConnector)
    }
}

impl Default for Reconciler<HttpConnector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: RpcConnector> Reconciler<C> {
    /// A reconciler over a caller-supplied connector (tests substitute a
    /// recording fake here).
    pub fn with_connector(connector: C) -> Self {
        Self {
            connector,
            timeout: DEFAULT_RPC_TIMEOUT,
        }
    }

    /// Replace the per-operation timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pull the live configuration of `record`'s resource into a fresh copy.
    ///
    /// On any failure the returned record equals the input, so callers never
    /// observe a half-updated record.
    pub async fn read<R: Resource>(&self, record: &R) -> (R, Diagnostics) {
        let mut diags = Diagnostics::new();
        let mut updated = record.clone();
        let request = record.get_request();

        let result = with_channel(
            &self.connector,
            record.address(),
            self.timeout,
            &mut diags,
            async |session| session.call(request.method, request.params).await,
        )
        .await;

        match result {
            None => (record.clone(), diags),
            Some(Err(e)) => {
                diags.error("Failed to query device status", e.to_string());
                (record.clone(), diags)
            }
            Some(Ok(value)) => match updated.apply_config(value) {
                Ok(()) => (updated, diags),
                Err(e) => {
                    diags.error("Failed to decode device response", e.to_string());
                    (record.clone(), diags)
                }
            },
        }
    }

    /// Push `record`'s declared fields to the device.
    ///
    /// Precondition failures (a required field left undeclared) are reported
    /// before any channel is opened. Success returns the record as declared;
    /// there is no implicit read-back.
    pub async fn write<R: Resource>(&self, record: &R) -> (R, Diagnostics) {
        let mut diags = Diagnostics::new();

        let request = match record.set_request() {
            Ok(request) => request,
            Err(diagnostic) => {
                diags.push(diagnostic);
                return (record.clone(), diags);
            }
        };

        let result = with_channel(
            &self.connector,
            record.address(),
            self.timeout,
            &mut diags,
            async |session| session.call(request.method, request.params).await,
        )
        .await;

        if let Some(Err(e)) = result {
            diags.error(
                format!("Failed to set {} config", R::KIND),
                e.to_string(),
            );
        }

        (record.clone(), diags)
    }

    /// Bring a newly declared record under management.
    ///
    /// Indexed instances already exist on the hardware, so creation is a
    /// write of the declared configuration. Identity has no lifecycle and
    /// reports an unsupported-operation error.
    pub async fn create<R: Resource>(&self, record: &R) -> (R, Diagnostics) {
        if !R::KIND.supports_create_delete() {
            let mut diags = Diagnostics::new();
            diags.error(
                "Unsupported operation",
                format!(
                    "{} resources cannot be created; they always exist on the device.",
                    R::KIND
                ),
            );
            return (record.clone(), diags);
        }
        self.write(record).await
    }

    /// Stop managing `record`'s resource.
    ///
    /// The hardware instance persists with its current configuration; only
    /// the caller's record is dropped. No RPC traffic is generated.
    pub async fn delete<R: Resource>(&self, record: &R) -> Diagnostics {
        let mut diags = Diagnostics::new();
        if !R::KIND.supports_create_delete() {
            diags.error(
                "Unsupported operation",
                format!(
                    "{} resources cannot be deleted; they always exist on the device.",
                    R::KIND
                ),
            );
            return diags;
        }
        debug!(
            kind = %R::KIND,
            address = record.address(),
            "dropping resource from management; device state untouched"
        );
        diags
    }

    /// Seed a record of kind `R` from a composite import identifier.
    ///
    /// Parsing is purely local; callers typically follow up with
    /// [`read()`](Self::read) to populate the declared fields.
    pub fn import<R: Resource>(&self, id: &str) -> (Option<R>, Diagnostics) {
        let (import, diags) = parse_import_id(R::KIND, id);
        (import.map(R::from_import), diags)
    }

    /// Resolve read-only device facts (MAC address, firmware identifier)
    /// from the system configuration.
    pub async fn device_info(&self, address: &str) -> (Option<DeviceInfo>, Diagnostics) {
        let mut diags = Diagnostics::new();

        let result = with_channel(
            &self.connector,
            address,
            self.timeout,
            &mut diags,
            async |session| session.call("Sys.GetConfig", None).await,
        )
        .await;

        let value = match result {
            None => return (None, diags),
            Some(Err(e)) => {
                diags.error("Failed to query device status", e.to_string());
                return (None, diags);
            }
            Some(Ok(value)) => value,
        };

        let config: SysConfig = match serde_json::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                diags.error(
                    "Failed to decode device response",
                    DecodeError::new("Sys.GetConfig", e).to_string(),
                );
                return (None, diags);
            }
        };

        let device = config.device.unwrap_or_default();
        let firmware = device.fw_id.unwrap_or_default();
        if firmware.is_empty() {
            diags.error(
                "Version not found",
                "Could not find a valid firmware version in the device response.",
            );
            return (None, diags);
        }
        let mac = device.mac.unwrap_or_default();
        if mac.is_empty() {
            diags.error(
                "MAC address not found",
                "Could not find a valid MAC address in the device response.",
            );
            return (None, diags);
        }

        (
            Some(DeviceInfo {
                address: address.to_string(),
                mac,
                firmware,
            }),
            diags,
        )
    }
}
