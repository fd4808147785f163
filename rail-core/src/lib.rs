pub mod allocator;

pub use allocator::{BookTickets, CoachSeats, free_seats_by_coach, select_seats};

use std::error::Error;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Seat lookup failed for train {train_id}: {source}")]
    SeatLookup {
        train_id: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    #[error("Booking reference generation failed: {0}")]
    ReferenceGeneration(#[source] Box<dyn Error + Send + Sync>),
}

pub type CoreResult<T> = Result<T, CoreError>;
