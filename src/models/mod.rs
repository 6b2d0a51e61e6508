pub mod booking;
pub mod content;
pub mod message;

pub use booking::{BookingRequest, ValidationError};
pub use content::{
    Categorized, Gallery, GalleryImage, PricingCatalog, ServiceCard, ServiceCatalog, SiteConfig,
    Testimonial, Testimonials,
};
pub use message::{FormMessage, MessageKind};
