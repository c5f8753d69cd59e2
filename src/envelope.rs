//! Response envelope decoding
//!
//! Every ProcessOut response has the shape
//! `{ "success": bool, "message": string, "<payload_key>": ... }`.
//! HTTP status codes are not consulted; the `success` flag alone decides.

use crate::{ProcessOutError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Envelope {
    fn parse(body: &[u8]) -> Result<Self> {
        let envelope: Envelope = serde_json::from_slice(body)?;
        if !envelope.success {
            let message = envelope.message.unwrap_or_default();
            tracing::debug!(message = %message, "API reported failure");
            return Err(ProcessOutError::api(message));
        }
        Ok(envelope)
    }
}

/// Decode an envelope and extract the payload stored under `key`
pub fn decode_payload<T>(body: &[u8], key: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut envelope = Envelope::parse(body)?;
    match envelope.fields.remove(key) {
        Some(Value::Null) | None => Err(ProcessOutError::missing_payload(key)),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

/// Decode an envelope whose payload is a list. A missing or `null` list is empty.
pub fn decode_list<T>(body: &[u8], key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut envelope = Envelope::parse(body)?;
    match envelope.fields.remove(key) {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

/// Decode an envelope that carries no payload
pub fn decode_ack(body: &[u8]) -> Result<()> {
    Envelope::parse(body).map(|_| ())
}
