pub mod catalog;
pub mod persistence;

pub use crate::domain::model::{Course, LoadReport};
pub use crate::domain::ports::{ConfigProvider, CourseStore};
pub use crate::utils::error::Result;
pub use catalog::Catalog;
pub use persistence::TextFileStore;
