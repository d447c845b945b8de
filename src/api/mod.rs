//! # Request Handlers
//!
//! One async handler per route. A handler takes an [`ApiRequest`] (route params and JSON
//! body), talks to its resource client, and turns the outcome into an [`ApiResponse`]:
//! records are wrapped as `{ "data": ... }`, errors as `{ "error": message }` with the
//! status code the error carries.
//!
//! | route | handler |
//! |---|---|
//! | `GET /dishes` | [`dishes::list`] |
//! | `POST /dishes` | [`dishes::create`] |
//! | `GET /dishes/:dishId` | [`dishes::read`] |
//! | `PUT /dishes/:dishId` | [`dishes::update`] |
//! | `GET /orders` | [`orders::list`] |
//! | `POST /orders` | [`orders::create`] |
//! | `GET /orders/:orderId` | [`orders::read`] |
//! | `PUT /orders/:orderId` | [`orders::update`] |
//! | `DELETE /orders/:orderId` | [`orders::delete`] |

pub mod dishes;
pub mod orders;

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt::Display;
use tracing::error;

/// An incoming request: route parameters plus the JSON body.
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    pub params: HashMap<String, String>,
    pub body: Value,
}

impl ApiRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// A route parameter; missing parameters read as the empty string.
    pub fn param(&self, name: &str) -> &str {
        self.params.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// The outcome of a handler: an HTTP status and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    /// `{ "data": value }` under `status`.
    pub fn data<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(data) => Self {
                status,
                body: Some(json!({ "data": data })),
            },
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                Self::error(500, e)
            }
        }
    }

    pub fn ok<T: Serialize>(value: &T) -> Self {
        Self::data(200, value)
    }

    pub fn created<T: Serialize>(value: &T) -> Self {
        Self::data(201, value)
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// `{ "error": message }` under `status`.
    pub fn error(status: u16, message: impl Display) -> Self {
        Self {
            status,
            body: Some(json!({ "error": message.to_string() })),
        }
    }

    /// The `data` member of the body, if any.
    pub fn data_value(&self) -> Option<&Value> {
        self.body.as_ref()?.get("data")
    }

    /// The `error` message of the body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}
