use serde::{Deserialize, Serialize};

pub trait Categorized {
    fn category(&self) -> &str;
}

// config.json

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub spa: SpaInfo,
    pub contact: ContactInfo,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaInfo {
    pub name: String,
    #[serde(default)]
    pub slogan: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub logo_white: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl ContactInfo {
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub whatsapp_link: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
}

// services.json

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub categories: Vec<ServiceCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub services: Vec<SpaService>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaService {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: serde_json::Value,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCard {
    pub category_id: String,
    pub category_name: String,
    #[serde(flatten)]
    pub service: SpaService,
}

impl Categorized for ServiceCard {
    fn category(&self) -> &str {
        &self.category_id
    }
}

impl ServiceCatalog {
    pub fn cards(&self) -> Vec<ServiceCard> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.services.iter().map(move |service| ServiceCard {
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                    service: service.clone(),
                })
            })
            .collect()
    }
}

// pricing.json

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingCatalog {
    pub packs: Vec<PricingPack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPack {
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub price: serde_json::Value,
    #[serde(default)]
    pub original_price: Option<serde_json::Value>,
    #[serde(default)]
    pub discount: Option<u32>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

// testimonials.json

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonials {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub service: String,
    pub rating: f32,
    pub comment: String,
    #[serde(default)]
    pub verified: bool,
}

// gallery.json

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
    pub category: String,
}

impl GalleryImage {
    pub fn thumbnail(&self) -> &str {
        self.thumb.as_deref().unwrap_or(&self.src)
    }
}

impl Categorized for GalleryImage {
    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r##"{
            "spa": {"name": "Zen & Beauté SPA", "slogan": "Détente", "description": "Spa", "logo": "img/logo.png", "logoWhite": "img/logo-w.png"},
            "contact": {"phone": "+212 5 39 00 00 00", "email": "contact@spa.ma", "address": "Tétouan"},
            "social": {"whatsappLink": "https://wa.me/212700000000", "instagram": "https://instagram.com/spa"},
            "theme": {"primaryColor": "#c8a97e", "secondaryColor": "#1f1f1f", "accentColor": "#fff"}
        }"##;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.spa.logo_white.as_deref(), Some("img/logo-w.png"));
        assert_eq!(config.contact.phone_href(), "tel:+212539000000");
        assert_eq!(config.social.facebook, None);
        assert_eq!(config.theme.unwrap().primary_color, "#c8a97e");
    }

    #[test]
    fn test_service_cards_carry_category() {
        let json = r#"{"categories": [
            {"id": "massage", "name": "Massages", "services": [
                {"name": "Relaxant", "price": 300, "duration": "60 min", "popular": true},
                {"name": "Pierres chaudes", "price": 400, "duration": "75 min"}
            ]},
            {"id": "hammam", "name": "Hammam", "services": [
                {"name": "Traditionnel", "price": "150", "duration": "45 min"}
            ]}
        ]}"#;
        let catalog: ServiceCatalog = serde_json::from_str(json).unwrap();
        let cards = catalog.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].category(), "massage");
        assert!(cards[0].service.popular);
        assert_eq!(cards[2].category_name, "Hammam");
    }

    #[test]
    fn test_gallery_thumbnail_falls_back_to_src() {
        let json = r#"{"images": [
            {"src": "img/a.jpg", "thumb": "img/a-small.jpg", "category": "spa"},
            {"src": "img/b.jpg", "category": "hammam"}
        ]}"#;
        let gallery: Gallery = serde_json::from_str(json).unwrap();
        assert_eq!(gallery.images[0].thumbnail(), "img/a-small.jpg");
        assert_eq!(gallery.images[1].thumbnail(), "img/b.jpg");
    }

    #[test]
    fn test_testimonial_rating_accepts_fractions() {
        let json = r#"{"testimonials": [
            {"name": "Salma", "rating": 4.5, "comment": "Très bien"},
            {"name": "Nadia", "rating": 5, "comment": "Parfait"}
        ]}"#;
        let parsed: Testimonials = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.testimonials[0].rating, 4.5);
        assert_eq!(parsed.testimonials[1].rating, 5.0);
    }
}
