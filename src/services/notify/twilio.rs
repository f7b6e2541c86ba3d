use anyhow::Context;
use async_trait::async_trait;

use super::{format_message, Notifier};
use crate::models::Booking;

/// Sends the confirmation message to the shop's phone via the Twilio SMS
/// API.
pub struct TwilioSmsNotifier {
    account_sid: String,
    auth_token: String,
    from_number: String,
    to_number: String,
    client: reqwest::Client,
}

impl TwilioSmsNotifier {
    pub fn new(
        account_sid: String,
        auth_token: String,
        from_number: String,
        to_number: String,
    ) -> Self {
        Self {
            account_sid,
            auth_token,
            from_number,
            to_number,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for TwilioSmsNotifier {
    async fn notify(&self, booking: &Booking) -> anyhow::Result<()> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );
        let body = format_message(booking);

        self.client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", self.to_number.as_str()),
                ("From", &self.from_number),
                ("Body", &body),
            ])
            .send()
            .await
            .context("failed to send Twilio SMS")?
            .error_for_status()
            .context("Twilio API returned error")?;

        Ok(())
    }
}
