pub mod seat;
pub mod booking;
pub mod repository;

pub use seat::{Seat, FreeSeat};
pub use booking::{BookingDetails, Reservation};
pub use repository::{SeatFinder, ReferenceGenerator};
