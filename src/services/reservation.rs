use crate::config::ReservationSettings;
use crate::errors::AppError;
use crate::models::booking::{
    is_checked_value, is_honeypot_filled, FIELD_HONEYPOT, FIELD_SEND_WHATSAPP,
};
use crate::models::{BookingRequest, FormMessage, ValidationError};
use crate::services::email::{EmailProvider, TemplateParams};
use crate::services::whatsapp::{build_whatsapp_text, whatsapp_link};

const SUCCESS_TEXT: &str =
    "✅ Réservation envoyée. Un email de confirmation a été envoyé au client.";
const DELIVERY_FAILED_TEXT: &str =
    "❌ Envoi email échoué. Vous pouvez envoyer la réservation via WhatsApp :";

pub trait FormView: Send {
    fn field(&self, name: &str) -> Option<String>;

    fn is_checked(&self, name: &str) -> bool {
        self.field(name).is_some_and(|v| is_checked_value(&v))
    }

    fn reset(&mut self);

    fn set_submit_disabled(&mut self, disabled: bool);

    fn show_message(&mut self, message: FormMessage);
}

// Popup blockers only allow windows opened before the first await.
pub trait WindowOpener: Send {
    fn open_blank(&mut self) -> Option<Box<dyn PopupWindow>>;
}

pub trait PopupWindow: Send {
    fn navigate(&mut self, url: &str);
    fn close(self: Box<Self>);
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Suppressed,
    Invalid(ValidationError),
    Sent { whatsapp_url: String },
    Failed { whatsapp_url: String, error: AppError },
}

pub struct ReservationFlow {
    settings: ReservationSettings,
    email: Box<dyn EmailProvider>,
}

impl ReservationFlow {
    pub fn new(settings: ReservationSettings, email: Box<dyn EmailProvider>) -> Self {
        Self { settings, email }
    }

    pub async fn submit(
        &self,
        form: &mut dyn FormView,
        opener: Option<&mut dyn WindowOpener>,
    ) -> SubmissionOutcome {
        let submission_id = uuid::Uuid::new_v4();

        // Honeypot
        if is_honeypot_filled(form.field(FIELD_HONEYPOT).as_deref()) {
            tracing::info!(%submission_id, "honeypot filled, dropping submission");
            return SubmissionOutcome::Suppressed;
        }

        let booking = BookingRequest::from_fields(
            |name| form.field(name),
            form.is_checked(FIELD_SEND_WHATSAPP),
        );

        // Validate
        if let Err(e) = booking.validate() {
            tracing::info!(%submission_id, error = %e, "reservation rejected");
            form.show_message(FormMessage::error(e.user_message(), None));
            return SubmissionOutcome::Invalid(e);
        }

        // WhatsApp fallback link
        let text = build_whatsapp_text(&booking, &self.settings.spa_name);
        let whatsapp_url = whatsapp_link(&self.settings.owner_whatsapp_number, &text);

        // Open the popup before any await
        let mut popup = match opener {
            Some(opener) if booking.send_whatsapp => opener.open_blank(),
            _ => None,
        };

        form.set_submit_disabled(true);

        tracing::info!(
            %submission_id,
            service = %booking.service,
            send_whatsapp = booking.send_whatsapp,
            "submitting reservation"
        );

        // Dispatch
        let dispatched = self.dispatch(&booking, &whatsapp_url).await;
        let outcome = match dispatched {
            Ok(()) => {
                form.reset();
                if let Some(popup) = popup.as_mut() {
                    popup.navigate(&whatsapp_url);
                }
                let action = booking.send_whatsapp.then(|| whatsapp_url.clone());
                form.show_message(FormMessage::success(SUCCESS_TEXT, action));

                tracing::info!(%submission_id, "reservation sent");
                SubmissionOutcome::Sent { whatsapp_url }
            }
            Err(error) => {
                if let Some(popup) = popup.take() {
                    popup.close();
                }
                form.show_message(FormMessage::error(
                    DELIVERY_FAILED_TEXT,
                    Some(whatsapp_url.clone()),
                ));

                tracing::error!(%submission_id, error = %error, "reservation delivery failed");
                SubmissionOutcome::Failed {
                    whatsapp_url,
                    error,
                }
            }
        };

        form.set_submit_disabled(false);
        outcome
    }

    async fn dispatch(&self, booking: &BookingRequest, whatsapp_url: &str) -> Result<(), AppError> {
        let base = self.template_params(booking, whatsapp_url);

        let mut owner_params = base.clone();
        owner_params.insert("to_email".to_string(), self.settings.owner_email.clone());
        self.email
            .send(
                &self.settings.service_id,
                &self.settings.owner_template_id,
                &owner_params,
            )
            .await
            .map_err(|e| AppError::Delivery(format!("owner notification: {e:#}")))?;

        let mut customer_params = base;
        customer_params.insert("to_email".to_string(), booking.email.clone());
        self.email
            .send(
                &self.settings.service_id,
                &self.settings.customer_template_id,
                &customer_params,
            )
            .await
            .map_err(|e| AppError::Delivery(format!("customer notification: {e:#}")))?;

        Ok(())
    }

    fn template_params(&self, booking: &BookingRequest, whatsapp_url: &str) -> TemplateParams {
        let pairs = [
            ("spa_name", self.settings.spa_name.as_str()),
            ("spa_city", self.settings.spa_city.as_str()),
            ("name", booking.name.as_str()),
            ("phone", booking.phone.as_str()),
            ("email", booking.email.as_str()),
            ("service", booking.service.as_str()),
            ("date", booking.date_or_dash()),
            ("time", booking.time_or_dash()),
            ("message", booking.message.as_str()),
            ("client_name", booking.name.as_str()),
            ("client_email", booking.email.as_str()),
            ("whatsapp_link", whatsapp_url),
        ];

        let mut params: TemplateParams = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        params.insert(
            "owner_whatsapp".to_string(),
            format!("+{}", self.settings.owner_whatsapp_number),
        );
        params
    }
}
