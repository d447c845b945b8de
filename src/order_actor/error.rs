//! Error types for the Order actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order has the requested id.
    #[error("Order does not exist: {0}.")]
    NotFound(String),

    /// A required field is missing or empty.
    #[error("Order must include a {0}")]
    MissingField(&'static str),

    /// `dishes` is not a non-empty list.
    #[error("Order must include at least one dish.")]
    NoDishes,

    /// The dish at this index has no quantity.
    #[error("Dish {0} must have a quantity.")]
    MissingQuantity(usize),

    /// The dish at this index has a quantity that is not an integer above zero.
    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidQuantity(usize),

    /// The body names a different order than the route.
    #[error("Order id does not match route id. Order: {body}, Route: {route}")]
    IdMismatch { body: String, route: String },

    /// The stored order is delivered and can no longer change.
    #[error("A delivered order cannot be changed")]
    Delivered,

    /// The requested status is not one of the known values.
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    /// Only pending orders can be deleted.
    #[error("An order cannot be deleted unless it is pending.")]
    NotPending,

    /// The body passed validation but could not be read into an order.
    #[error("Order data is malformed: {0}")]
    Malformed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::NotFound(_) => 404,
            OrderError::ActorCommunicationError(_) => 500,
            _ => 400,
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<OrderError>() {
            Ok(order_error) => order_error,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
