//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use crate::payload::Payload;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Validation happens inside the actor, in the `Order` entity hooks; this client only moves
/// payloads across and maps the errors back.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: Payload) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but a missing order is an error.
    #[instrument(skip(self))]
    pub async fn read_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: Payload) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use resource_actor::mock::{create_mock_client, expect_delete, MockClient};

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::from(id),
            deliver_to: "308 Negra Arroyo Lane".into(),
            mobile_number: "(505) 143-3369".into(),
            status,
            dishes: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_delete_rejection_maps_to_not_pending() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move { client.delete_order(OrderId::from("o1")).await });

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, OrderId::from("o1"));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(OrderError::NotPending))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, OrderError::NotPending);
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_missing_order_maps_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId::from("o9"))
            .return_err(FrameworkError::NotFound("o9".into()));
        mock.expect_get(OrderId::from("o9")).return_ok(None);
        mock.expect_delete(OrderId::from("o9"))
            .return_err(FrameworkError::NotFound("o9".into()));

        let client = OrderClient::new(mock.client());
        let expected = Err(OrderError::NotFound("o9".into()));
        assert_eq!(
            client.update_order(OrderId::from("o9"), Payload::default()).await,
            expected
        );
        assert_eq!(client.read_order(OrderId::from("o9")).await, expected);
        assert_eq!(
            client.delete_order(OrderId::from("o9")).await,
            Err(OrderError::NotFound("o9".into()))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_ok(order("o1", OrderStatus::Pending));
        mock.expect_list()
            .return_ok(vec![order("o1", OrderStatus::Pending)]);

        let client = OrderClient::new(mock.client());
        let created = client.create_order(Payload::default()).await.unwrap();
        assert_eq!(created.status, OrderStatus::Pending);
        assert_eq!(client.list().await.unwrap(), vec![created]);

        mock.verify();
    }
}
