use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::post,
    Router,
};
use rail_domain::BookingDetails;
use serde::Deserialize;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub train_id: String,
    pub seat_count: u32,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(book_tickets))
}

/// Both booked and unallocated outcomes are 200; only the body differs.
async fn book_tickets(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingDetails>, AppError> {
    let Json(req) = payload.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;

    let max_seats = state.business_rules.max_seats_per_request;
    if req.seat_count > max_seats {
        return Err(AppError::ValidationError(format!(
            "At most {} seats can be booked at once, requested {}",
            max_seats, req.seat_count
        )));
    }

    let details = state.book_tickets.execute(&req.train_id, req.seat_count).await?;
    Ok(Json(details))
}
