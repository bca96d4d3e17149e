//! Content document model for a single-page marketing site.
//!
//! The whole site is described by one [`ContentDocument`]. Its shape is fixed;
//! only the string values and the length of its item lists change.

pub mod builtin;
pub mod document;

pub use document::{
    AboutSection, ContactSection, ContentDocument, FooterSection, GalleryItem, GallerySection,
    HeroSection, ProgramItem, ProgramSection, TestimonialItem, TestimonialsSection,
};
