//! Configuration module

mod site;

pub use site::FrontMatterConfig;
pub use site::GitHubConfig;
pub use site::HighlightConfig;
pub use site::HttpConfig;
pub use site::SiteConfig;
pub use site::SplitMode;
