pub mod bpm;
pub mod catalog;
pub mod client;
pub mod error;
pub mod genre;
pub mod headers;
pub mod parsing;
pub mod persist;
pub mod retry;
pub mod title;
pub mod types;
pub mod views;

pub use catalog::{build_catalog, CatalogConfig};
pub use client::{scrape_catalog, ChannelClient, ChannelPageSource};
#[cfg(feature = "mock")]
pub use client::MockChannelPageSource;
pub use error::CatalogError;
pub use parsing::{parse_channel_title, InitialDataParser, MAX_ITEMS};
pub use types::{Artist, Catalog, RawItem, Track};

pub type Result<T> = std::result::Result<T, CatalogError>;
