use axum::Router;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod error;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(bookings::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
