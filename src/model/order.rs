use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delivery status of an order.
///
/// The lifecycle runs `pending → preparing → out-for-delivery → delivered`. `Delivered` is
/// terminal: a delivered order can no longer be changed. Only pending orders may be deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status: {}", s))
    }
}

/// One line of an order: a quantity plus whatever dish details the client sent along
/// (`id`, `name`, `price`, ...), kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    #[serde(deserialize_with = "crate::payload::deserialize_positive_integer")]
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for the create, update and
/// delete rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

/// The writable fields of an order, as they appear in a validated request body.
///
/// `status` is read separately because its rules differ between create and update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}

impl Order {
    /// Creates a new Order instance.
    pub fn new(id: OrderId, fields: OrderFields, status: OrderStatus) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status,
            dishes: fields.dishes,
        }
    }

    /// Overwrites the delivery details, dishes and status. The id never changes.
    pub fn apply(&mut self, fields: OrderFields, status: OrderStatus) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.dishes = fields.dishes;
        self.status = status;
    }
}
