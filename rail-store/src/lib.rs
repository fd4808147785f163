pub mod app_config;
pub mod train_repo;
pub mod reference;

pub use train_repo::{InMemoryTrainRepository, TrainSeatPlan};
pub use reference::{
    build_reference_generator, ReferenceStrategy, SequentialReferenceGenerator, UuidReferenceGenerator,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown train: {0}")]
    UnknownTrain(String),
    #[error("Failed to read seat plans: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid seat plan data: {0}")]
    Parse(#[from] serde_json::Error),
}
