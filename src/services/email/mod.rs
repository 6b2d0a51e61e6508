pub mod emailjs;

use std::collections::BTreeMap;

use async_trait::async_trait;

pub type TemplateParams = BTreeMap<String, String>;

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> anyhow::Result<()>;
}
