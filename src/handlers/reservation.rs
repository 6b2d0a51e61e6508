use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::booking::{is_honeypot_filled, FIELD_HONEYPOT, FORM_FIELDS};
use crate::models::FormMessage;
use crate::services::reservation::{FormView, SubmissionOutcome};
use crate::state::AppState;

struct SubmittedForm {
    fields: HashMap<String, String>,
    message: Option<FormMessage>,
}

impl SubmittedForm {
    fn new(fields: HashMap<String, String>) -> Self {
        Self {
            fields,
            message: None,
        }
    }

    fn echo(&self) -> BTreeMap<String, String> {
        FORM_FIELDS
            .iter()
            .filter(|name| **name != FIELD_HONEYPOT)
            .map(|name| {
                let value = self.fields.get(*name).cloned().unwrap_or_default();
                (name.to_string(), value)
            })
            .collect()
    }
}

impl FormView for SubmittedForm {
    fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn reset(&mut self) {
        self.fields.clear();
    }

    // The client owns its submit button.
    fn set_submit_disabled(&mut self, _disabled: bool) {}

    fn show_message(&mut self, message: FormMessage) {
        self.message = Some(message);
    }
}

#[derive(Serialize)]
pub struct ReservationResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<FormMessage>,
    form: BTreeMap<String, String>,
}

// POST /api/reservations
pub async fn submit_reservation(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    // Honeypot first, even when reservations are unavailable
    if is_honeypot_filled(fields.get(FIELD_HONEYPOT).map(String::as_str)) {
        tracing::info!("honeypot filled, dropping reservation");
        return StatusCode::NO_CONTENT.into_response();
    }

    let Some(flow) = state.reservations.as_ref() else {
        tracing::warn!("reservation received but email delivery is not configured");
        return AppError::Unavailable("reservations are not configured".to_string())
            .into_response();
    };

    let mut form = SubmittedForm::new(fields);
    let outcome = flow.submit(&mut form, None).await;

    let (status, label) = match outcome {
        // Bots get nothing to learn from.
        SubmissionOutcome::Suppressed => return StatusCode::NO_CONTENT.into_response(),
        SubmissionOutcome::Invalid(e) => (AppError::Validation(e).status_code(), "invalid"),
        SubmissionOutcome::Sent { .. } => (StatusCode::OK, "sent"),
        SubmissionOutcome::Failed { error, .. } => (error.status_code(), "failed"),
    };

    if let Some(message) = &form.message {
        tracing::debug!(kind = message.kind.as_str(), status = label, "reservation answered");
    }

    let body = ReservationResponse {
        status: label,
        form: form.echo(),
        message: form.message,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_skips_honeypot_and_fills_missing() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Imane".to_string());
        fields.insert("bot_field".to_string(), "".to_string());
        let form = SubmittedForm::new(fields);

        let echo = form.echo();
        assert_eq!(echo.len(), 8);
        assert_eq!(echo["name"], "Imane");
        assert_eq!(echo["date"], "");
        assert!(!echo.contains_key("bot_field"));
    }

    #[test]
    fn test_reset_empties_echo() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Imane".to_string());
        let mut form = SubmittedForm::new(fields);
        form.reset();
        assert!(form.echo().values().all(|v| v.is_empty()));
    }
}
