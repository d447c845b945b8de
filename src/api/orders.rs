//! Handlers for `/orders`.

use super::{ApiRequest, ApiResponse};
use crate::clients::OrderClient;
use crate::model::OrderId;
use crate::order_actor::OrderError;
use crate::payload::Payload;
use resource_actor::ActorClient;

impl From<OrderError> for ApiResponse {
    fn from(e: OrderError) -> Self {
        ApiResponse::error(e.status_code(), e)
    }
}

fn order_id(request: &ApiRequest) -> OrderId {
    OrderId::from(request.param("orderId"))
}

/// `GET /orders`
pub async fn list(client: &OrderClient, _request: ApiRequest) -> ApiResponse {
    match client.list().await {
        Ok(orders) => ApiResponse::ok(&orders),
        Err(e) => e.into(),
    }
}

/// `POST /orders`
pub async fn create(client: &OrderClient, request: ApiRequest) -> ApiResponse {
    match client.create_order(Payload::from_body(request.body)).await {
        Ok(order) => ApiResponse::created(&order),
        Err(e) => e.into(),
    }
}

/// `GET /orders/:orderId`
pub async fn read(client: &OrderClient, request: ApiRequest) -> ApiResponse {
    match client.read_order(order_id(&request)).await {
        Ok(order) => ApiResponse::ok(&order),
        Err(e) => e.into(),
    }
}

/// `PUT /orders/:orderId`
pub async fn update(client: &OrderClient, request: ApiRequest) -> ApiResponse {
    let id = order_id(&request);
    match client.update_order(id, Payload::from_body(request.body)).await {
        Ok(order) => ApiResponse::ok(&order),
        Err(e) => e.into(),
    }
}

/// `DELETE /orders/:orderId`
pub async fn delete(client: &OrderClient, request: ApiRequest) -> ApiResponse {
    match client.delete_order(order_id(&request)).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_actor;
    use serde_json::{json, Value};

    fn start() -> OrderClient {
        let mut next = 0;
        let (actor, client) = order_actor::with_ids(8, move || {
            next += 1;
            OrderId(format!("o{}", next))
        });
        tokio::spawn(actor.run());
        client
    }

    fn order_body(status: &str) -> Value {
        json!({
            "data": {
                "deliverTo": "308 Negra Arroyo Lane",
                "mobileNumber": "(505) 143-3369",
                "status": status,
                "dishes": [{ "id": "d1", "name": "Taco", "price": 8, "quantity": 2 }]
            }
        })
    }

    fn at(id: &str) -> ApiRequest {
        ApiRequest::new().with_param("orderId", id)
    }

    #[tokio::test]
    async fn test_create_defaults_status() {
        let client = start();
        let mut body = order_body("");
        body["data"].as_object_mut().unwrap().remove("status");

        let created = create(&client, ApiRequest::new().with_body(body)).await;
        assert_eq!(created.status, 201);
        assert_eq!(created.data_value().unwrap()["status"], json!("pending"));
        assert_eq!(created.data_value().unwrap()["id"], json!("o1"));
    }

    #[tokio::test]
    async fn test_delete_pending_then_gone() {
        let client = start();
        create(&client, ApiRequest::new().with_body(order_body("pending"))).await;

        let deleted = delete(&client, at("o1")).await;
        assert_eq!(deleted, ApiResponse::no_content());

        let gone = read(&client, at("o1")).await;
        assert_eq!(gone.status, 404);
        assert_eq!(gone.error_message(), Some("Order does not exist: o1."));
        assert_eq!(delete(&client, at("o1")).await.status, 404);
    }

    #[tokio::test]
    async fn test_delete_non_pending_is_rejected() {
        let client = start();
        create(&client, ApiRequest::new().with_body(order_body("preparing"))).await;

        let rejected = delete(&client, at("o1")).await;
        assert_eq!(rejected.status, 400);
        assert_eq!(
            rejected.error_message(),
            Some("An order cannot be deleted unless it is pending.")
        );
        let listed = list(&client, ApiRequest::new()).await;
        assert_eq!(listed.data_value().unwrap().as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_reports_status_errors() {
        let client = start();
        create(&client, ApiRequest::new().with_body(order_body("pending"))).await;

        let invalid = update(&client, at("o1").with_body(order_body("lost"))).await;
        assert_eq!(invalid.status, 400);
        assert_eq!(
            invalid.error_message(),
            Some("Order must have a status of pending, preparing, out-for-delivery, delivered")
        );

        let moved = update(&client, at("o1").with_body(order_body("out-for-delivery"))).await;
        assert_eq!(moved.status, 200);
        assert_eq!(moved.data_value().unwrap()["status"], json!("out-for-delivery"));
    }

    #[tokio::test]
    async fn test_non_string_text_counts_as_missing() {
        let client = start();
        let mut body = order_body("pending");
        body["data"]["deliverTo"] = json!(5);

        let response = create(&client, ApiRequest::new().with_body(body)).await;
        assert_eq!(response.status, 400);
        assert_eq!(response.error_message(), Some("Order must include a deliverTo"));
    }
}
