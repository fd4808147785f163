use serde::{Deserialize, Serialize};

/// A seat as reported by the seat lookup for one train
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub coach: String,
    pub seat_number: u32,
    #[serde(default)]
    pub booking_reference: Option<String>, // None = free
}

impl Seat {
    pub fn new(coach: impl Into<String>, seat_number: u32, booking_reference: Option<String>) -> Self {
        Self {
            coach: coach.into(),
            seat_number,
            booking_reference,
        }
    }

    pub fn free(coach: impl Into<String>, seat_number: u32) -> Self {
        Self::new(coach, seat_number, None)
    }

    pub fn booked(coach: impl Into<String>, seat_number: u32, booking_reference: impl Into<String>) -> Self {
        Self::new(coach, seat_number, Some(booking_reference.into()))
    }

    pub fn is_available(&self) -> bool {
        self.booking_reference.is_none()
    }
}

/// A seat picked for a new booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSeat {
    pub coach: String,
    pub seat_number: u32,
}

impl FreeSeat {
    pub fn new(coach: impl Into<String>, seat_number: u32) -> Self {
        Self {
            coach: coach.into(),
            seat_number,
        }
    }
}

impl From<&Seat> for FreeSeat {
    fn from(seat: &Seat) -> Self {
        Self::new(seat.coach.clone(), seat.seat_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        assert!(Seat::free("A", 1).is_available());
        assert!(!Seat::booked("A", 2, "75bcd15").is_available());
    }

    #[test]
    fn test_free_seat_drops_reference() {
        let seat = Seat::booked("B", 7, "75bcd15");
        assert_eq!(FreeSeat::from(&seat), FreeSeat::new("B", 7));
    }

    #[test]
    fn test_missing_reference_deserializes_as_free() {
        let seat: Seat = serde_json::from_str(r#"{"coach":"C","seat_number":3}"#).unwrap();
        assert_eq!(seat, Seat::free("C", 3));
    }
}
