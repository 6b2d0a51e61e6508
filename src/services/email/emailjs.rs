use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use super::{EmailProvider, TemplateParams};

pub struct EmailJsProvider {
    api_url: String,
    public_key: String,
    private_key: Option<String>,
    client: reqwest::Client,
}

impl EmailJsProvider {
    pub fn new(api_url: String, public_key: String, private_key: Option<String>) -> Self {
        Self {
            api_url,
            public_key,
            private_key,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[async_trait]
impl EmailProvider for EmailJsProvider {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> anyhow::Result<()> {
        let body = SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.private_key.as_deref(),
        };

        let resp = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .context("failed to call EmailJS API")?;

        let status = resp.status();
        if !status.is_success() {
            // EmailJS answers errors as plain text ("The template ID is invalid", ...)
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("EmailJS API error ({status}) for template {template_id}: {text}");
        }

        Ok(())
    }
}
