use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::models::{
    Categorized, Gallery, PricingCatalog, ServiceCatalog, SiteConfig, Testimonials,
};

pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub config: Option<SiteConfig>,
    pub services: Option<ServiceCatalog>,
    pub pricing: Option<PricingCatalog>,
    pub testimonials: Option<Testimonials>,
    pub gallery: Option<Gallery>,
}

async fn load_json<T: DeserializeOwned>(dir: &Path, file: &str) -> anyhow::Result<T> {
    let path = dir.join(file);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

async fn load_section<T: DeserializeOwned>(dir: &Path, file: &str) -> Option<T> {
    match load_json(dir, file).await {
        Ok(value) => {
            tracing::info!(file, "content loaded");
            Some(value)
        }
        Err(e) => {
            tracing::error!(error = ?e, file, "failed to load content");
            None
        }
    }
}

pub async fn load_all(dir: &Path) -> SiteContent {
    let (config, services, pricing, testimonials, gallery) = tokio::join!(
        load_section::<SiteConfig>(dir, "config.json"),
        load_section::<ServiceCatalog>(dir, "services.json"),
        load_section::<PricingCatalog>(dir, "pricing.json"),
        load_section::<Testimonials>(dir, "testimonials.json"),
        load_section::<Gallery>(dir, "gallery.json"),
    );

    SiteContent {
        config,
        services,
        pricing,
        testimonials,
        gallery,
    }
}

/// Filter used by the services and gallery grids: no filter, an empty one or
/// `all` keeps everything, anything else must match the category exactly.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], filter: Option<&str>) -> Vec<&'a T> {
    let filter = filter.map(str::trim).filter(|f| !f.is_empty() && *f != FILTER_ALL);
    items
        .iter()
        .filter(|item| filter.map_or(true, |f| item.category() == f))
        .collect()
}

// Half stars round down.
pub fn star_rating(rating: f32) -> [bool; 5] {
    std::array::from_fn(|i| (i + 1) as f32 <= rating)
}
