//! Entity trait implementation for the Order domain type.

use super::validation::{create_checks, requested_status, update_checks, OrderCheck};
use super::OrderError;
use crate::model::{Order, OrderFields, OrderId, OrderStatus};
use crate::payload::Payload;
use resource_actor::ActorEntity;

fn read_fields(body: &Payload) -> Result<OrderFields, OrderError> {
    body.parse()
        .map_err(|e| OrderError::Malformed(e.to_string()))
}

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = Payload;
    type Update = Payload;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Validates the payload and builds an order. A missing status means `pending`.
    fn from_create_params(id: OrderId, params: Payload) -> Result<Self, Self::Error> {
        create_checks().run(&OrderCheck::create(&params))?;
        let status = requested_status(&params).unwrap_or_default();
        Ok(Order::new(id, read_fields(&params)?, status))
    }

    /// Overwrites deliverTo, mobileNumber, dishes and status.
    fn on_update(&mut self, update: Payload) -> Result<(), Self::Error> {
        update_checks().run(&OrderCheck::update(self, &update))?;
        let status = requested_status(&update).ok_or(OrderError::InvalidStatus)?;
        let fields = read_fields(&update)?;
        self.apply(fields, status);
        Ok(())
    }

    /// Only pending orders can be removed.
    fn on_delete(&self) -> Result<(), Self::Error> {
        if self.status == OrderStatus::Pending {
            Ok(())
        } else {
            Err(OrderError::NotPending)
        }
    }
}
