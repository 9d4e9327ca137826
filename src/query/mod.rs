pub mod builder;
pub mod domain;

pub use builder::{CdxQuery, MatchMode, build_cdx_url};
pub use domain::normalize_domain;
