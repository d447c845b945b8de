//! Error types for the Dish actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// No dish has the requested id.
    #[error("Dish does not exist: {0}.")]
    NotFound(String),

    /// A required text field is missing or empty.
    #[error("Dish must include a {0}")]
    MissingField(&'static str),

    /// The price is missing, not an integer, or not above zero.
    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    /// The body names a different dish than the route.
    #[error("Dish id does not match route id. Dish: {body}, Route: {route}")]
    IdMismatch { body: String, route: String },

    /// The body passed validation but could not be read into a dish.
    #[error("Dish data is malformed: {0}")]
    Malformed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DishError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            DishError::NotFound(_) => 404,
            DishError::ActorCommunicationError(_) => 500,
            _ => 400,
        }
    }
}

impl From<FrameworkError> for DishError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<DishError>() {
            Ok(dish_error) => dish_error,
            Err(FrameworkError::NotFound(id)) => DishError::NotFound(id),
            Err(other) => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
