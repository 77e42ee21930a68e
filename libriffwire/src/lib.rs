//! Riffwire core library
//!
//! Everything the terminal news reader needs that isn't rendering: the
//! article/category catalog, theme, simulated search backend, share and
//! asset facilities, configuration and logging.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod share;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Result, RiffwireError};
pub use search::{SearchService, SearchSettled, SearchToken};
pub use theme::{ColorName, Theme};
pub use types::{Article, Category, IconName};
