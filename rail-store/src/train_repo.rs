use async_trait::async_trait;
use rail_domain::{Seat, SeatFinder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

use crate::StoreError;

/// Seat plan of one train as stored in the seat plan file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSeatPlan {
    pub train_id: String,
    pub seats: Vec<Seat>,
}

/// In-memory seat plans keyed by train id
pub struct InMemoryTrainRepository {
    trains: RwLock<HashMap<String, Vec<Seat>>>,
}

impl InMemoryTrainRepository {
    pub fn new() -> Self {
        Self {
            trains: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_seat_plans(plans: Vec<TrainSeatPlan>) -> Self {
        let trains = plans
            .into_iter()
            .map(|plan| (plan.train_id, plan.seats))
            .collect();

        Self {
            trains: RwLock::new(trains),
        }
    }

    /// Load a JSON array of seat plans
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let plans: Vec<TrainSeatPlan> = serde_json::from_str(&raw)?;

        info!("Loaded {} seat plans from {}", plans.len(), path.display());
        Ok(Self::from_seat_plans(plans))
    }

    /// Add or replace the seat plan of a train
    pub async fn insert_train(&self, train_id: impl Into<String>, seats: Vec<Seat>) {
        self.trains.write().await.insert(train_id.into(), seats);
    }

    pub async fn train_count(&self) -> usize {
        self.trains.read().await.len()
    }
}

impl Default for InMemoryTrainRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeatFinder for InMemoryTrainRepository {
    async fn find(
        &self,
        train_id: &str,
    ) -> Result<Vec<Seat>, Box<dyn Error + Send + Sync>> {
        let trains = self.trains.read().await;
        let seats = trains
            .get(train_id)
            .ok_or_else(|| StoreError::UnknownTrain(train_id.to_string()))?;

        Ok(seats.clone())
    }
}
