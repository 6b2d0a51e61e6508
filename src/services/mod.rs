pub mod content;
pub mod email;
pub mod reservation;
pub mod whatsapp;
