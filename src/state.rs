use crate::config::AppConfig;
use crate::services::auth::Authenticator;
use crate::services::booking::BookingRepository;

pub struct AppState {
    pub repo: BookingRepository,
    pub auth: Box<dyn Authenticator>,
    pub config: AppConfig,
}
