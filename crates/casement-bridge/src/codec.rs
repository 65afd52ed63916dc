//! JSON method codec.
//!
//! A call is `{"method": name, "args": value}`. Replies use the envelope
//! layout of Flutter's JSON method codec: `[result]` on success,
//! `[code, message, details]` on failure, and `null` when the method is
//! not implemented. Transport frames wrap both with a numeric `id` so a
//! reply can be matched to its call while other calls are outstanding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use casement_common::BridgeError;

/// A named method invocation with its argument payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Outcome of a single method call.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodReply {
    Success(Value),
    Error {
        code: String,
        message: String,
        details: Value,
    },
    NotImplemented,
}

impl MethodReply {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    pub fn from_error(err: &BridgeError) -> Self {
        Self::Error {
            code: err.code().to_string(),
            message: err.to_string(),
            details: Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Error code, if this is an error reply.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn to_envelope(&self) -> Value {
        match self {
            Self::Success(value) => Value::Array(vec![value.clone()]),
            Self::Error {
                code,
                message,
                details,
            } => Value::Array(vec![
                Value::String(code.clone()),
                Value::String(message.clone()),
                details.clone(),
            ]),
            Self::NotImplemented => Value::Null,
        }
    }

    pub fn from_envelope(envelope: Value) -> Result<Self, BridgeError> {
        match envelope {
            Value::Null => Ok(Self::NotImplemented),
            Value::Array(mut items) if items.len() == 1 => Ok(Self::Success(items.remove(0))),
            Value::Array(items) if items.len() == 3 => {
                let mut items = items.into_iter();
                let code = items.next().and_then(|v| v.as_str().map(str::to_string));
                let message = items.next().and_then(|v| v.as_str().map(str::to_string));
                let details = items.next().unwrap_or(Value::Null);
                match (code, message) {
                    (Some(code), Some(message)) => Ok(Self::Error {
                        code,
                        message,
                        details,
                    }),
                    _ => Err(BridgeError::MalformedCall(
                        "error envelope needs string code and message".into(),
                    )),
                }
            }
            other => Err(BridgeError::MalformedCall(format!(
                "unrecognised reply envelope: {other}"
            ))),
        }
    }
}

/// A method call as it travels over the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestFrame {
    pub id: u64,
    #[serde(flatten)]
    pub call: MethodCall,
}

/// The reply to a [`RequestFrame`] with the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyFrame {
    pub id: u64,
    pub reply: Value,
}

impl ReplyFrame {
    pub fn new(id: u64, reply: &MethodReply) -> Self {
        Self {
            id,
            reply: reply.to_envelope(),
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of a u64 and a Value always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"id\":{},\"reply\":null}}", self.id))
    }

    pub fn method_reply(self) -> Result<MethodReply, BridgeError> {
        MethodReply::from_envelope(self.reply)
    }
}

/// A request frame that could not be decoded.
///
/// `id` is set when the frame was an object carrying a numeric id, in
/// which case the sender is still owed an error reply.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameError {
    pub id: Option<u64>,
    pub error: BridgeError,
}

pub fn decode_request(raw: &str) -> Result<RequestFrame, FrameError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| FrameError {
        id: None,
        error: BridgeError::MalformedCall(e.to_string()),
    })?;
    let id = value.get("id").and_then(Value::as_u64);

    RequestFrame::deserialize(value).map_err(|e| FrameError {
        id,
        error: BridgeError::MalformedCall(e.to_string()),
    })
}

pub fn encode_request(id: u64, call: &MethodCall) -> String {
    let frame = RequestFrame {
        id,
        call: call.clone(),
    };
    serde_json::to_string(&frame).unwrap_or_default()
}
