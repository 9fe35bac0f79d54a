// crates/certilife-app/src/pages/mod.rs
// Page sections for the landing page

mod cases;
mod landing;
mod showcase;

pub use cases::CaseStudies;
pub use landing::LandingPage;
pub use showcase::FeatureShowcase;
