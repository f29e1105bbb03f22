use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub number: String,
    pub title: String,
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            prerequisites,
        }
    }

    /// Blank entries (left behind by trailing commas or empty prompts) do not
    /// count as prerequisites.
    pub fn has_prerequisites(&self) -> bool {
        self.prerequisites.iter().any(|p| !p.is_empty())
    }

    /// Prerequisites joined for display, or `None` when there are none.
    pub fn prerequisites_display(&self) -> String {
        if !self.has_prerequisites() {
            return "None".to_string();
        }
        self.prerequisites
            .iter()
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Outcome of merging a catalog file into the in-memory catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub added: usize,
    pub warnings: Vec<crate::utils::error::LoadWarning>,
    /// Whether the catalog as a whole is empty once the file is processed.
    pub catalog_empty: bool,
}
