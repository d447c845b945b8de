use crate::clients::{DishClient, OrderClient};
use crate::config::SystemConfig;
use crate::{dish_actor, order_actor};
use tracing::{error, info};

/// The runtime that owns the dish and order actors.
///
/// The two resources are independent: neither actor holds the other's client, so they can
/// be started in any order and each stops as soon as its own channel closes.
///
/// # Example
///
/// ```ignore
/// let system = GrubDashSystem::new(&SystemConfig::default());
///
/// let response = api::dishes::list(&system.dish_client, ApiRequest::new()).await;
///
/// system.shutdown().await?;
/// ```
pub struct GrubDashSystem {
    /// Client for interacting with the Dish actor
    pub dish_client: DishClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for the running actors
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl GrubDashSystem {
    /// Creates both actors and spawns each on its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let (dish_actor, dish_client) = dish_actor::new(config.channel_capacity);
        let (order_actor, order_client) = order_actor::new(config.channel_capacity);

        let dish_handle = tokio::spawn(dish_actor.run());
        let order_handle = tokio::spawn(order_actor.run());
        info!(channel_capacity = config.channel_capacity, "System started");

        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the clients, then waits for every actor task. Returns an error if an actor
    /// task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
