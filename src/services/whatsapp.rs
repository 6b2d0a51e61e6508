use crate::models::BookingRequest;

const SEPARATOR: &str = "— — — — —";

pub fn build_whatsapp_text(booking: &BookingRequest, spa_name: &str) -> String {
    [
        "السلام عليكم".to_string(),
        format!("Nouvelle réservation - {spa_name}"),
        SEPARATOR.to_string(),
        format!("Nom: {}", booking.name),
        format!("Téléphone: {}", booking.phone),
        format!("Email: {}", booking.email),
        format!("Service: {}", booking.service),
        format!("Date: {}", booking.date_or_dash()),
        format!("Heure: {}", booking.time_or_dash()),
        SEPARATOR.to_string(),
        format!("Message: {}", booking.message),
        String::new(),
        "Merci.".to_string(),
    ]
    .join("\n")
}

// `https://wa.me/<number>?text=<encoded>`; `owner_number` is digits only.
pub fn whatsapp_link(owner_number: &str, text: &str) -> String {
    format!(
        "https://wa.me/{owner_number}?text={}",
        urlencoding::encode(text)
    )
}
