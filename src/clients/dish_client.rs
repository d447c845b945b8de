//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
//! It wraps a `ResourceClient<Dish>` and exposes domain‑specific methods.
use crate::dish_actor::DishError;
use crate::model::{Dish, DishId};
use crate::payload::Payload;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, params: Payload) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but a missing dish is an error.
    #[instrument(skip(self))]
    pub async fn read_dish(&self, id: DishId) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.get(id.clone())
            .await?
            .ok_or_else(|| DishError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: DishId, update: Payload) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DishError::from(e)
    }
}
