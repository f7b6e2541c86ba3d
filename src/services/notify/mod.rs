pub mod console;
pub mod twilio;

pub use console::ConsoleNotifier;
pub use twilio::TwilioSmsNotifier;

use async_trait::async_trait;

use crate::models::Booking;

/// Operator notification for a new booking. Implementations deliver (or
/// log) the message; callers treat failures as non-fatal.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, booking: &Booking) -> anyhow::Result<()>;
}

pub fn format_message(booking: &Booking) -> String {
    format!(
        "New Appointment Booked:\nName: {}\nPhone: {}\nService: {}\nDate: {}\nTime: {}",
        booking.name, booking.phone, booking.service, booking.date, booking.time
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_template() {
        let booking = Booking {
            id: "b1".to_string(),
            name: "Raj".to_string(),
            phone: "+911234567890".to_string(),
            service: "Classic Haircut".to_string(),
            date: "2024-06-01".to_string(),
            time: "09:00 AM".to_string(),
            created_at: 0,
        };

        assert_eq!(
            format_message(&booking),
            "New Appointment Booked:\n\
             Name: Raj\n\
             Phone: +911234567890\n\
             Service: Classic Haircut\n\
             Date: 2024-06-01\n\
             Time: 09:00 AM"
        );
    }
}
