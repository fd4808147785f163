use std::collections::HashMap;
use std::sync::Arc;

use rail_domain::{BookingDetails, FreeSeat, ReferenceGenerator, Seat, SeatFinder};
use tracing::{debug, info, warn};

use crate::{CoreError, CoreResult};

/// Free seats of one coach, in the order the seat lookup returned them
#[derive(Debug, PartialEq, Eq)]
pub struct CoachSeats<'a> {
    pub coach: &'a str,
    pub seats: Vec<&'a Seat>,
}

/// Books a group of seats that fit together in a single coach
pub struct BookTickets {
    seat_finder: Arc<dyn SeatFinder>,
    reference_generator: Arc<dyn ReferenceGenerator>,
}

impl BookTickets {
    pub fn new(
        seat_finder: Arc<dyn SeatFinder>,
        reference_generator: Arc<dyn ReferenceGenerator>,
    ) -> Self {
        Self {
            seat_finder,
            reference_generator,
        }
    }

    /// Reserve `seat_request` seats on `train_id`, all in the same coach.
    ///
    /// The first coach (by order of appearance in the seat plan) holding
    /// enough free seats wins, and its first free seats are taken. When no
    /// coach can hold the group the result carries no reservation and no
    /// reference is generated.
    pub async fn execute(&self, train_id: &str, seat_request: u32) -> CoreResult<BookingDetails> {
        if seat_request == 0 {
            return Err(CoreError::ValidationError(
                "seat request must be at least one seat".to_string(),
            ));
        }

        let seats = self.seat_finder.find(train_id).await.map_err(|source| {
            warn!("Seat lookup failed for train {}: {}", train_id, source);
            CoreError::SeatLookup {
                train_id: train_id.to_string(),
                source,
            }
        })?;

        let Some(seats_to_book) = select_seats(&seats, seat_request) else {
            debug!(
                "No coach on train {} has {} free seats ({} seats checked)",
                train_id,
                seat_request,
                seats.len()
            );
            return Ok(BookingDetails::unallocated(train_id));
        };

        let booking_reference = self
            .reference_generator
            .generate()
            .await
            .map_err(CoreError::ReferenceGeneration)?;

        info!(
            "Booked {} seats in coach {} on train {} under {}",
            seats_to_book.len(),
            seats_to_book[0].coach,
            train_id,
            booking_reference
        );

        Ok(BookingDetails::booked(train_id, booking_reference, seats_to_book))
    }
}

/// Group free seats by coach.
///
/// Coaches come out in the order they first appear in `seats`, booked seats
/// included; within a coach seats keep their input order. Coaches with no
/// free seat are left out.
pub fn free_seats_by_coach(seats: &[Seat]) -> Vec<CoachSeats<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut coaches: Vec<CoachSeats<'_>> = Vec::new();

    for seat in seats {
        let slot = *index.entry(seat.coach.as_str()).or_insert_with(|| {
            coaches.push(CoachSeats {
                coach: seat.coach.as_str(),
                seats: Vec::new(),
            });
            coaches.len() - 1
        });

        if seat.is_available() {
            coaches[slot].seats.push(seat);
        }
    }

    coaches.retain(|coach| !coach.seats.is_empty());
    coaches
}

/// First-fit selection: the first `seat_request` free seats of the first
/// coach that can hold them all, or `None`.
pub fn select_seats(seats: &[Seat], seat_request: u32) -> Option<Vec<FreeSeat>> {
    let wanted = seat_request as usize;

    free_seats_by_coach(seats)
        .into_iter()
        .find(|coach| coach.seats.len() >= wanted)
        .map(|coach| coach.seats.into_iter().take(wanted).map(FreeSeat::from).collect())
}
