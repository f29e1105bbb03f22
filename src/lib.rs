pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{Settings, TomlConfig};

pub use app::menu::MenuSession;
pub use crate::core::{catalog::Catalog, persistence::TextFileStore};
pub use domain::model::{Course, LoadReport};
pub use utils::error::{CatalogError, LoadWarning, Result};
