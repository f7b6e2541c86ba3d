pub mod booking;
pub mod catalog;

pub use booking::{Booking, BookingRequest};
pub use catalog::{GalleryItem, Service};
