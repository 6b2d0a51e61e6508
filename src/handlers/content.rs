use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{GalleryImage, PricingCatalog, ServiceCard, SiteConfig, Testimonial};
use crate::services::content::{filter_by_category, star_rating};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

fn missing(section: &str) -> AppError {
    AppError::NotFound(format!("{section} content is not available"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigResponse {
    #[serde(flatten)]
    config: SiteConfig,
    phone_href: String,
}

// GET /api/site/config
pub async fn get_site_config(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SiteConfigResponse>, AppError> {
    let config = state
        .content
        .config
        .as_ref()
        .ok_or_else(|| missing("config"))?;

    Ok(Json(SiteConfigResponse {
        phone_href: config.contact.phone_href(),
        config: config.clone(),
    }))
}

// GET /api/services?category=
pub async fn get_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<ServiceCard>>, AppError> {
    let catalog = state
        .content
        .services
        .as_ref()
        .ok_or_else(|| missing("services"))?;

    let cards = catalog.cards();
    let filtered = filter_by_category(&cards, query.category.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(filtered))
}

// GET /api/pricing
pub async fn get_pricing(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PricingCatalog>, AppError> {
    state
        .content
        .pricing
        .clone()
        .map(Json)
        .ok_or_else(|| missing("pricing"))
}

#[derive(Serialize)]
pub struct TestimonialResponse {
    #[serde(flatten)]
    testimonial: Testimonial,
    stars: [bool; 5],
}

// GET /api/testimonials
pub async fn get_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TestimonialResponse>>, AppError> {
    let testimonials = state
        .content
        .testimonials
        .as_ref()
        .ok_or_else(|| missing("testimonials"))?;

    let response = testimonials
        .testimonials
        .iter()
        .map(|t| TestimonialResponse {
            stars: star_rating(t.rating),
            testimonial: t.clone(),
        })
        .collect();
    Ok(Json(response))
}

// GET /api/gallery?category=
pub async fn get_gallery(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<GalleryImage>>, AppError> {
    let gallery = state
        .content
        .gallery
        .as_ref()
        .ok_or_else(|| missing("gallery"))?;

    // Thumbnails fall back to the full image
    let images = filter_by_category(&gallery.images, query.category.as_deref())
        .into_iter()
        .map(|image| GalleryImage {
            thumb: Some(image.thumbnail().to_string()),
            ..image.clone()
        })
        .collect();
    Ok(Json(images))
}
