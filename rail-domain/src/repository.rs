use async_trait::async_trait;
use crate::seat::Seat;
use std::error::Error;

/// Seat lookup for a single train
#[async_trait]
pub trait SeatFinder: Send + Sync {
    /// Every seat of the train, booked or not, in coach plan order.
    /// An unknown train is an error, not an empty list.
    async fn find(
        &self,
        train_id: &str,
    ) -> Result<Vec<Seat>, Box<dyn Error + Send + Sync>>;
}

/// Source of booking references. Uniqueness is the implementor's concern.
#[async_trait]
pub trait ReferenceGenerator: Send + Sync {
    async fn generate(&self) -> Result<String, Box<dyn Error + Send + Sync>>;
}
