use thiserror::Error;

/// A device replied successfully but the `result` payload did not match the
/// shape expected for the method.
#[derive(Debug, Error)]
#[error("decoding {method} response: {source}")]
pub struct DecodeError {
    /// The RPC method whose response failed to decode.
    pub method: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn new(method: &'static str, source: serde_json::Error) -> Self {
        Self { method, source }
    }
}
