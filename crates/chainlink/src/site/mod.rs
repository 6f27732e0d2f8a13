//! Page routing and the static showcase content served alongside the directory.

pub mod features;
pub mod pages;
pub mod router;
pub mod showcase;

pub use features::{feature, Feature, Plan, FEATURES, PLANS};
pub use pages::SitePage;
pub use router::site_router;
pub use showcase::{
    industries_in, Industry, SuccessStory, Testimonial, INDUSTRIES, SUCCESS_STORIES,
    TESTIMONIALS,
};
