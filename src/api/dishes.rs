//! Handlers for `/dishes`.

use super::{ApiRequest, ApiResponse};
use crate::clients::DishClient;
use crate::dish_actor::DishError;
use crate::model::DishId;
use crate::payload::Payload;
use resource_actor::ActorClient;

impl From<DishError> for ApiResponse {
    fn from(e: DishError) -> Self {
        ApiResponse::error(e.status_code(), e)
    }
}

fn dish_id(request: &ApiRequest) -> DishId {
    DishId::from(request.param("dishId"))
}

/// `GET /dishes`
pub async fn list(client: &DishClient, _request: ApiRequest) -> ApiResponse {
    match client.list().await {
        Ok(dishes) => ApiResponse::ok(&dishes),
        Err(e) => e.into(),
    }
}

/// `POST /dishes`
pub async fn create(client: &DishClient, request: ApiRequest) -> ApiResponse {
    match client.create_dish(Payload::from_body(request.body)).await {
        Ok(dish) => ApiResponse::created(&dish),
        Err(e) => e.into(),
    }
}

/// `GET /dishes/:dishId`
pub async fn read(client: &DishClient, request: ApiRequest) -> ApiResponse {
    match client.read_dish(dish_id(&request)).await {
        Ok(dish) => ApiResponse::ok(&dish),
        Err(e) => e.into(),
    }
}

/// `PUT /dishes/:dishId`
pub async fn update(client: &DishClient, request: ApiRequest) -> ApiResponse {
    let id = dish_id(&request);
    match client.update_dish(id, Payload::from_body(request.body)).await {
        Ok(dish) => ApiResponse::ok(&dish),
        Err(e) => e.into(),
    }
}
