use once_cell::sync::Lazy;
use regex::Regex;

pub const FIELD_NAME: &str = "name";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_SERVICE: &str = "service";
pub const FIELD_DATE: &str = "date";
pub const FIELD_TIME: &str = "time";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_SEND_WHATSAPP: &str = "send_whatsapp";
pub const FIELD_HONEYPOT: &str = "bot_field";

pub const FORM_FIELDS: [&str; 9] = [
    FIELD_NAME,
    FIELD_PHONE,
    FIELD_EMAIL,
    FIELD_SERVICE,
    FIELD_DATE,
    FIELD_TIME,
    FIELD_MESSAGE,
    FIELD_SEND_WHATSAPP,
    FIELD_HONEYPOT,
];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid email address")]
    InvalidEmail,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields(_) => "Veuillez remplir tous les champs obligatoires.",
            ValidationError::InvalidEmail => "Veuillez entrer un email valide.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: String,
    pub send_whatsapp: bool,
}

impl BookingRequest {
    /// Builds a request from raw field values, trimming each one. A missing
    /// field reads as empty; empty `date`/`time` become `None`.
    pub fn from_fields<F>(field: F, send_whatsapp: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| field(name).unwrap_or_default().trim().to_string();
        let optional = |name: &str| Some(text(name)).filter(|v| !v.is_empty());

        Self {
            name: text(FIELD_NAME),
            phone: text(FIELD_PHONE),
            email: text(FIELD_EMAIL),
            service: text(FIELD_SERVICE),
            date: optional(FIELD_DATE),
            time: optional(FIELD_TIME),
            message: text(FIELD_MESSAGE),
            send_whatsapp,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            (FIELD_NAME, &self.name),
            (FIELD_PHONE, &self.phone),
            (FIELD_EMAIL, &self.email),
            (FIELD_SERVICE, &self.service),
            (FIELD_MESSAGE, &self.message),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    pub fn date_or_dash(&self) -> &str {
        self.date.as_deref().unwrap_or("-")
    }

    pub fn time_or_dash(&self) -> &str {
        self.time.as_deref().unwrap_or("-")
    }
}

// HTML checkboxes post `on` when ticked and nothing otherwise; some
// clients send explicit booleans.
pub fn is_checked_value(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value.eq_ignore_ascii_case("off") || value.eq_ignore_ascii_case("false"))
}

pub fn is_honeypot_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn request(pairs: &[(&str, &str)]) -> BookingRequest {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BookingRequest::from_fields(|name| map.get(name).cloned(), false)
    }

    fn valid_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Imane"),
            ("phone", "0612345678"),
            ("email", "imane@test.ma"),
            ("service", "Massage"),
            ("message", "Samedi matin"),
        ]
    }

    #[test]
    fn test_fields_are_trimmed() {
        let req = request(&[("name", "  Imane \n"), ("date", "   "), ("time", " 10:00 ")]);
        assert_eq!(req.name, "Imane");
        assert_eq!(req.date, None);
        assert_eq!(req.time.as_deref(), Some("10:00"));
        assert_eq!(req.phone, "");
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(request(&valid_pairs()).validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_are_listed_in_form_order() {
        let req = request(&[("name", "Imane"), ("email", "imane@test.ma"), ("message", " ")]);
        assert_eq!(
            req.validate(),
            Err(ValidationError::MissingFields(vec!["phone", "service", "message"]))
        );
    }

    #[test]
    fn test_missing_fields_win_over_bad_email() {
        let req = request(&[("email", "not-an-email")]);
        assert!(matches!(req.validate(), Err(ValidationError::MissingFields(_))));
    }

    #[test]
    fn test_date_and_time_are_optional() {
        let req = request(&valid_pairs());
        assert_eq!(req.date_or_dash(), "-");
        assert_eq!(req.time_or_dash(), "-");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_bad_email_is_rejected() {
        for bad in ["imane", "imane@test", "im ane@test.ma", "@test.ma", "imane@@test.ma", "imane@test."] {
            let mut pairs = valid_pairs();
            pairs[2] = ("email", bad);
            assert_eq!(
                request(&pairs).validate(),
                Err(ValidationError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("imane@test.ma"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("imane@testma"));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ValidationError::InvalidEmail.user_message(),
            "Veuillez entrer un email valide."
        );
        assert_eq!(
            ValidationError::MissingFields(vec!["name"]).user_message(),
            "Veuillez remplir tous les champs obligatoires."
        );
    }

    #[test]
    fn test_checkbox_values() {
        assert!(is_checked_value("on"));
        assert!(is_checked_value("true"));
        assert!(is_checked_value("1"));
        assert!(!is_checked_value(""));
        assert!(!is_checked_value("off"));
        assert!(!is_checked_value("FALSE"));
    }

    #[test]
    fn test_honeypot_values() {
        assert!(is_honeypot_filled(Some("http://spam")));
        assert!(!is_honeypot_filled(Some("   ")));
        assert!(!is_honeypot_filled(None));
    }
}
