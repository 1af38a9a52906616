//! Configuration module

mod site;

pub use site::AuthConfig;
pub use site::ContentConfig;
pub use site::HighlightConfig;
pub use site::SiteConfig;
