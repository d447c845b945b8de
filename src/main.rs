//! Demo: walks a dish and an order through their lifecycles via the request handlers.

use grubdash::api::{self, ApiRequest, ApiResponse};
use grubdash::config::SystemConfig;
use grubdash::lifecycle::GrubDashSystem;
use resource_actor::tracing::setup_tracing;
use serde_json::{json, Value};
use tracing::{info, warn, Instrument};

fn report(step: &str, response: &ApiResponse) {
    match response.error_message() {
        Some(message) => warn!(step, status = response.status, error = message, "Rejected"),
        None => info!(step, status = response.status, body = ?response.body, "Handled"),
    }
}

fn record_id(response: &ApiResponse) -> Result<String, String> {
    response
        .data_value()
        .and_then(|data| data.get("id"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("response carries no record id: {:?}", response.body))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting GrubDash");
    let system = GrubDashSystem::new(&config);
    let dishes = &system.dish_client;
    let orders = &system.order_client;

    let dish_id = async {
        let created = api::dishes::create(
            dishes,
            ApiRequest::new().with_body(json!({
                "data": {
                    "name": "Dirty Rice",
                    "description": "Spicy rice with sausage and peppers",
                    "price": 19,
                    "image_url": "https://images.example.com/dirty-rice.jpg"
                }
            })),
        )
        .await;
        report("create dish", &created);
        let dish_id = record_id(&created)?;

        let rejected = api::dishes::update(
            dishes,
            ApiRequest::new()
                .with_param("dishId", dish_id.as_str())
                .with_body(json!({ "data": { "name": "Dirty Rice", "price": 0 } })),
        )
        .await;
        report("update dish without description", &rejected);

        let listed = api::dishes::list(dishes, ApiRequest::new()).await;
        report("list dishes", &listed);
        Ok::<_, String>(dish_id)
    }
    .instrument(tracing::info_span!("dishes"))
    .await?;

    async {
        let created = api::orders::create(
            orders,
            ApiRequest::new().with_body(json!({
                "data": {
                    "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
                    "mobileNumber": "(202) 456-1111",
                    "dishes": [{ "id": dish_id, "name": "Dirty Rice", "price": 19, "quantity": 2 }]
                }
            })),
        )
        .await;
        report("create order", &created);
        let order_id = record_id(&created)?;

        for status in ["preparing", "out-for-delivery", "delivered", "pending"] {
            let updated = api::orders::update(
                orders,
                ApiRequest::new()
                    .with_param("orderId", order_id.as_str())
                    .with_body(json!({
                        "data": {
                            "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
                            "mobileNumber": "(202) 456-1111",
                            "status": status,
                            "dishes": [{ "id": dish_id, "quantity": 2 }]
                        }
                    })),
            )
            .await;
            report("update order status", &updated);
        }

        let deleted = api::orders::delete(
            orders,
            ApiRequest::new().with_param("orderId", order_id.as_str()),
        )
        .await;
        report("delete delivered order", &deleted);
        Ok::<_, String>(())
    }
    .instrument(tracing::info_span!("orders"))
    .await?;

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
