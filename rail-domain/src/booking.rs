use serde::{Deserialize, Serialize};
use crate::seat::FreeSeat;

/// Outcome of a booking attempt on one train.
///
/// A booking reference and the reserved seats only ever travel together:
/// either the request was satisfied and `reservation` carries both, or it
/// was not and only the train id is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub train_id: String,
    #[serde(flatten)]
    pub reservation: Option<Reservation>,
}

/// Seats reserved under a single booking reference, all within one coach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub booking_reference: String,
    pub free_seats: Vec<FreeSeat>,
}

impl BookingDetails {
    pub fn booked(
        train_id: impl Into<String>,
        booking_reference: impl Into<String>,
        free_seats: Vec<FreeSeat>,
    ) -> Self {
        debug_assert!(!free_seats.is_empty(), "a booking reserves at least one seat");
        Self {
            train_id: train_id.into(),
            reservation: Some(Reservation {
                booking_reference: booking_reference.into(),
                free_seats,
            }),
        }
    }

    /// No coach could hold the requested seats
    pub fn unallocated(train_id: impl Into<String>) -> Self {
        Self {
            train_id: train_id.into(),
            reservation: None,
        }
    }

    pub fn is_booked(&self) -> bool {
        self.reservation.is_some()
    }

    pub fn booking_reference(&self) -> Option<&str> {
        self.reservation.as_ref().map(|r| r.booking_reference.as_str())
    }

    pub fn free_seats(&self) -> Option<&[FreeSeat]> {
        self.reservation.as_ref().map(|r| r.free_seats.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booked_json_shape() {
        let details = BookingDetails::booked("9043-2018-05-24", "00000000", vec![FreeSeat::new("A", 2)]);

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value, json!({
            "train_id": "9043-2018-05-24",
            "booking_reference": "00000000",
            "free_seats": [{ "coach": "A", "seat_number": 2 }],
        }));
    }

    #[test]
    fn test_unallocated_omits_reservation() {
        let details = BookingDetails::unallocated("9043-2018-05-24");

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value, json!({ "train_id": "9043-2018-05-24" }));
        assert!(!details.is_booked());
        assert_eq!(details.booking_reference(), None);
        assert_eq!(details.free_seats(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "a booking reserves at least one seat")]
    fn test_booked_requires_seats() {
        BookingDetails::booked("9043-2018-05-24", "00000000", vec![]);
    }

    #[test]
    fn test_parse_response_body() {
        let booked: BookingDetails = serde_json::from_value(json!({
            "train_id": "T1",
            "booking_reference": "ABCD1234",
            "free_seats": [{ "coach": "B", "seat_number": 4 }],
        })).unwrap();
        assert_eq!(booked.booking_reference(), Some("ABCD1234"));
        assert_eq!(booked.free_seats().unwrap(), &[FreeSeat::new("B", 4)]);

        let unallocated: BookingDetails = serde_json::from_value(json!({ "train_id": "T1" })).unwrap();
        assert_eq!(unallocated, BookingDetails::unallocated("T1"));
    }
}
