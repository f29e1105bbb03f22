use crate::core::catalog::Catalog;
use crate::domain::model::LoadReport;
use crate::utils::error::Result;

/// Persistence for a catalog. Loading merges into the given catalog rather
/// than replacing it.
pub trait CourseStore {
    fn load(&self, path: &str, catalog: &mut Catalog) -> Result<LoadReport>;
    fn save(&self, path: &str, catalog: &Catalog) -> Result<()>;
}

pub trait ConfigProvider {
    /// Catalog file to load before the first menu is shown.
    fn autoload_file(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;
}
