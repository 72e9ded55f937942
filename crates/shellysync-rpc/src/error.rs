use thiserror::Error;

/// Top-level error type for the `shellysync-rpc` crate.
///
/// Covers every failure mode of the device channel: opening it, the HTTP
/// exchange, and the RPC envelope itself. `shellysync-core` translates these
/// into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Channel open ────────────────────────────────────────────────
    /// The device address was empty or whitespace.
    #[error("Device address must not be empty")]
    EmptyAddress,

    /// The address did not form a valid RPC endpoint URL.
    #[error("Invalid RPC endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Call exceeded the channel timeout.
    #[error("RPC call timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Device answered with a non-success HTTP status.
    #[error("Device returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    // ── Protocol ────────────────────────────────────────────────────
    /// Structured error frame from the device (`{"error":{"code","message"}}`).
    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },

    /// Response body was not a decodable RPC envelope.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The channel itself never retries — a single failed attempt surfaces
    /// immediately — but callers may use this to decide whether to re-invoke.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Extract the device RPC error code, if available.
    pub fn rpc_error_code(&self) -> Option<i32> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}
