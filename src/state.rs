use crate::services::content::SiteContent;
use crate::services::reservation::ReservationFlow;

pub struct AppState {
    pub reservations: Option<ReservationFlow>,
    pub content: SiteContent,
}
