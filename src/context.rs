//! Request context.
//!
//! The view layer hands the resolver a small JSON object describing the
//! chart request: `{"orderId": "42", "locale": "pl"}`. `orderId` may be
//! a string or a JSON integer; it is kept as text and parsed by the
//! resolver so that a malformed id surfaces there as a fatal error.

use serde::Deserialize;

use crate::error::{GanttError, GanttResult};

/// Parsed chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Order identifier, as sent by the caller.
    pub order_id: String,
    /// Caller locale. Carried for message formatting in outer layers.
    pub locale: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContext {
    order_id: Option<RawOrderId>,
    #[serde(default)]
    locale: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrderId {
    Text(String),
    Number(serde_json::Number),
}

impl RequestContext {
    /// Creates a context for an order id.
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            locale: None,
        }
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Parses a JSON request context.
    ///
    /// # Errors
    /// - [`GanttError::MalformedContext`] for invalid JSON or a non-object.
    /// - [`GanttError::MissingOrderId`] when `orderId` is absent or null.
    pub fn from_json(json: &str) -> GanttResult<Self> {
        let raw: RawContext = serde_json::from_str(json)?;
        let order_id = match raw.order_id.ok_or(GanttError::MissingOrderId)? {
            RawOrderId::Text(s) => s,
            RawOrderId::Number(n) => n.to_string(),
        };
        Ok(Self {
            order_id,
            locale: raw.locale,
        })
    }
}
