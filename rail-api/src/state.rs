use std::sync::Arc;
use rail_core::BookTickets;
use rail_store::app_config::BusinessRules;

#[derive(Clone)]
pub struct AppState {
    pub book_tickets: Arc<BookTickets>,
    pub business_rules: BusinessRules,
}
