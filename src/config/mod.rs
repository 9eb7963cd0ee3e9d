//! Configuration module

mod site;

pub use site::FailurePolicy;
pub use site::Mode;
pub use site::SiteConfig;
