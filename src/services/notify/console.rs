use async_trait::async_trait;

use super::{format_message, Notifier};
use crate::models::Booking;

/// Logs the confirmation message instead of delivering it. Stands in for a
/// real SMS transport until one is configured.
pub struct ConsoleNotifier {
    destination: String,
}

impl ConsoleNotifier {
    pub fn new(destination: String) -> Self {
        Self { destination }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, booking: &Booking) -> anyhow::Result<()> {
        tracing::info!(to = %self.destination, "{}", format_message(booking));
        Ok(())
    }
}
