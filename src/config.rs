use std::env;

use crate::errors::AppError;

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: String,
    pub allowed_origin: Option<String>,
    pub emailjs_public_key: String,
    pub emailjs_private_key: Option<String>,
    pub emailjs_api_url: String,
    pub emailjs_service_id: String,
    pub owner_template_id: String,
    pub customer_template_id: String,
    pub owner_email: String,
    pub owner_whatsapp_number: String,
    pub spa_name: String,
    pub spa_city: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN").ok().filter(|v| !v.is_empty()),
            emailjs_public_key: env::var("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
            emailjs_private_key: env::var("EMAILJS_PRIVATE_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            emailjs_api_url: env::var("EMAILJS_API_URL")
                .unwrap_or_else(|_| EMAILJS_API_URL.to_string()),
            emailjs_service_id: env::var("EMAILJS_SERVICE_ID").unwrap_or_default(),
            owner_template_id: env::var("EMAILJS_OWNER_TEMPLATE_ID").unwrap_or_default(),
            customer_template_id: env::var("EMAILJS_CUSTOMER_TEMPLATE_ID").unwrap_or_default(),
            owner_email: env::var("OWNER_EMAIL").unwrap_or_default(),
            owner_whatsapp_number: env::var("OWNER_WHATSAPP_NUMBER").unwrap_or_default(),
            spa_name: env::var("SPA_NAME").unwrap_or_else(|_| "Zen & Beauté SPA".to_string()),
            spa_city: env::var("SPA_CITY").unwrap_or_else(|_| "Tétouan".to_string()),
        }
    }

    /// Settings for the reservation flow, or `None` when email delivery is
    /// not configured at all. A half-configured EmailJS setup is an error.
    pub fn reservation_settings(&self) -> Result<Option<ReservationSettings>, AppError> {
        if self.emailjs_public_key.is_empty() {
            return Ok(None);
        }

        let required = [
            ("EMAILJS_SERVICE_ID", &self.emailjs_service_id),
            ("EMAILJS_OWNER_TEMPLATE_ID", &self.owner_template_id),
            ("EMAILJS_CUSTOMER_TEMPLATE_ID", &self.customer_template_id),
            ("OWNER_EMAIL", &self.owner_email),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "EMAILJS_PUBLIC_KEY is set but {} missing",
                missing.join(", ")
            )));
        }

        let owner_whatsapp_number = normalize_whatsapp_number(&self.owner_whatsapp_number);
        if owner_whatsapp_number.is_empty() {
            return Err(AppError::Config(
                "OWNER_WHATSAPP_NUMBER must contain digits".to_string(),
            ));
        }

        Ok(Some(ReservationSettings {
            service_id: self.emailjs_service_id.clone(),
            owner_template_id: self.owner_template_id.clone(),
            customer_template_id: self.customer_template_id.clone(),
            owner_email: self.owner_email.clone(),
            owner_whatsapp_number,
            spa_name: self.spa_name.clone(),
            spa_city: self.spa_city.clone(),
        }))
    }
}

#[derive(Clone, Debug)]
pub struct ReservationSettings {
    pub service_id: String,
    pub owner_template_id: String,
    pub customer_template_id: String,
    pub owner_email: String,
    pub owner_whatsapp_number: String,
    pub spa_name: String,
    pub spa_city: String,
}

pub fn normalize_whatsapp_number(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_plus_and_spaces() {
        assert_eq!(normalize_whatsapp_number("+212 704-831 881"), "212704831881");
        assert_eq!(normalize_whatsapp_number("212704831881"), "212704831881");
    }

    fn test_config() -> AppConfig {
        AppConfig {
            port: 3000,
            data_dir: "data".to_string(),
            allowed_origin: None,
            emailjs_public_key: String::new(),
            emailjs_private_key: None,
            emailjs_api_url: EMAILJS_API_URL.to_string(),
            emailjs_service_id: "service_x".to_string(),
            owner_template_id: "template_owner".to_string(),
            customer_template_id: "template_client".to_string(),
            owner_email: "owner@spa.ma".to_string(),
            owner_whatsapp_number: "+212700000000".to_string(),
            spa_name: "Zen & Beauté SPA".to_string(),
            spa_city: "Tétouan".to_string(),
        }
    }

    #[test]
    fn test_no_public_key_disables_reservations() {
        assert!(test_config().reservation_settings().unwrap().is_none());
    }

    #[test]
    fn test_full_config_builds_settings() {
        let config = AppConfig {
            emailjs_public_key: "pk_live".to_string(),
            ..test_config()
        };
        let settings = config.reservation_settings().unwrap().unwrap();
        assert_eq!(settings.owner_whatsapp_number, "212700000000");
        assert_eq!(settings.service_id, "service_x");
    }

    #[test]
    fn test_partial_config_is_rejected() {
        let config = AppConfig {
            emailjs_public_key: "pk_live".to_string(),
            owner_template_id: String::new(),
            owner_email: " ".to_string(),
            ..test_config()
        };
        let err = config.reservation_settings().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("EMAILJS_OWNER_TEMPLATE_ID"));
        assert!(text.contains("OWNER_EMAIL"));
    }

    #[test]
    fn test_owner_number_without_digits_is_rejected() {
        let config = AppConfig {
            emailjs_public_key: "pk_live".to_string(),
            owner_whatsapp_number: "+".to_string(),
            ..test_config()
        };
        assert!(matches!(
            config.reservation_settings(),
            Err(AppError::Config(_))
        ));
    }
}
