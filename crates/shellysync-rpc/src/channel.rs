// RPC channel lifecycle
//
// A connector opens a session against one device address; a session executes
// JSON-RPC calls and is torn down after exactly one logical operation. The
// traits exist so callers (and their tests) can substitute a recording fake
// for the HTTP implementation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Default bound on one channel open + call + close cycle.
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens RPC sessions against device addresses.
pub trait RpcConnector: Send + Sync {
    type Session: RpcSession;

    /// Open a session to `address`, bounded by `timeout`.
    ///
    /// A failure here is an open failure — the operation was never invoked
    /// and the device state is untouched.
    fn connect(
        &self,
        address: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<Self::Session, Error>> + Send;
}

/// One open RPC channel to a device.
pub trait RpcSession: Send {
    /// Execute a single RPC method and return the unwrapped `result` value.
    fn call(
        &mut self,
        method: &str,
        params: Option<Value>,
    ) -> impl Future<Output = Result<Value, Error>> + Send;

    /// Release the channel. Failures here must never mask the result of a
    /// preceding call; callers log them and move on.
    fn disconnect(self) -> impl Future<Output = Result<(), Error>> + Send;
}

// ── Wire envelope ────────────────────────────────────────────────────

/// Outgoing JSON-RPC frame, posted to `http://<address>/rpc`.
#[derive(Serialize)]
struct RpcFrame<'a> {
    id: u64,
    src: &'static str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Value>,
}

#[derive(Deserialize)]
struct RpcReply {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorFrame>,
}

#[derive(Deserialize)]
struct RpcErrorFrame {
    code: i32,
    #[serde(default)]
    message: Option<String>,
}

// ── HTTP implementation ──────────────────────────────────────────────

/// Production connector: JSON-RPC over HTTP POST.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl RpcConnector for HttpConnector {
    type Session = HttpSession;

    async fn connect(&self, address: &str, timeout: Duration) -> Result<HttpSession, Error> {
        if address.trim().is_empty() {
            return Err(Error::EmptyAddress);
        }
        let endpoint = Url::parse(&format!("http://{address}/rpc"))?;
        let http = TransportConfig { timeout }.build_client()?;
        debug!(%endpoint, "opening RPC channel");
        Ok(HttpSession {
            http,
            endpoint,
            timeout,
            next_id: 1,
        })
    }
}

/// An open HTTP RPC channel to one device.
#[derive(Debug)]
pub struct HttpSession {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
    next_id: u64,
}

impl HttpSession {
    /// The endpoint this session posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(e)
        }
    }
}

impl RpcSession for HttpSession {
    async fn call(&mut self, method: &str, params: Option<Value>) -> Result<Value, Error> {
        let frame = RpcFrame {
            id: self.next_id,
            src: "shellysync",
            method,
            params: params.as_ref(),
        };
        self.next_id += 1;

        trace!(method, id = frame.id, "sending RPC frame");
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&frame)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: body[..body.len().min(200)].to_string(),
            });
        }

        let reply: RpcReply =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if let Some(err) = reply.error {
            return Err(Error::Rpc {
                code: err.code,
                message: err.message.unwrap_or_default(),
            });
        }

        Ok(reply.result.unwrap_or(Value::Null))
    }

    async fn disconnect(self) -> Result<(), Error> {
        // HTTP keeps no device-side session; dropping the client releases
        // the connection. Kept as an explicit step so the channel contract
        // (always torn down, close failures logged only) has a seam.
        trace!(endpoint = %self.endpoint, "closing RPC channel");
        Ok(())
    }
}
