use crate::domain::model::Course;
use crate::utils::error::{CatalogError, Result};
use std::collections::HashMap;

/// In-memory course catalog keyed by course number.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    courses: HashMap<String, Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course. An existing record under the same number is kept and
    /// the new one rejected.
    pub fn insert(&mut self, course: Course) -> Result<()> {
        if course.number.is_empty() {
            return Err(CatalogError::EmptyCourseNumber);
        }
        // first one wins
        if self.courses.contains_key(&course.number) {
            return Err(CatalogError::DuplicateCourse(course.number));
        }
        tracing::debug!("Inserted course {}", course.number);
        self.courses.insert(course.number.clone(), course);
        Ok(())
    }

    pub fn lookup(&self, number: &str) -> Result<&Course> {
        if number.is_empty() {
            return Err(CatalogError::EmptyCourseNumber);
        }
        self.courses
            .get(number)
            .ok_or_else(|| CatalogError::CourseNotFound(number.to_string()))
    }

    /// All courses, ascending by course number.
    pub fn list(&self) -> Vec<&Course> {
        // byte order, so "CS50" sorts after "CS200"
        let mut courses: Vec<&Course> = self.courses.values().collect();
        courses.sort_by(|a, b| a.number.cmp(&b.number));
        courses
    }

    /// Courses in storage order, which is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.courses.contains_key(number)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str, title: &str) -> Course {
        Course::new(number, title, vec![])
    }

    #[test]
    fn test_list_is_sorted_by_number() {
        let mut catalog = Catalog::new();
        for number in ["CS101", "CS050", "CS200"] {
            catalog.insert(course(number, "title")).unwrap();
        }

        let numbers: Vec<&str> = catalog.list().iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, vec!["CS050", "CS101", "CS200"]);
    }

    #[test]
    fn test_duplicate_insert_keeps_original() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Course::new("CS101", "Intro", vec!["MATH1".into()]))
            .unwrap();

        let err = catalog
            .insert(Course::new("CS101", "Replacement", vec![]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCourse(ref n) if n == "CS101"));

        let kept = catalog.lookup("CS101").unwrap();
        assert_eq!(kept.title, "Intro");
        assert_eq!(kept.prerequisites, vec!["MATH1".to_string()]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_lookup_errors() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CS101", "Intro")).unwrap();

        assert!(matches!(catalog.lookup(""), Err(CatalogError::EmptyCourseNumber)));
        assert!(matches!(
            catalog.lookup("cs101"),
            Err(CatalogError::CourseNotFound(ref n)) if n == "cs101"
        ));
        assert_eq!(catalog.lookup("CS101").unwrap().title, "Intro");
    }

    #[test]
    fn test_empty_number_rejected() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.insert(course("", "Nameless")),
            Err(CatalogError::EmptyCourseNumber)
        ));
        assert!(catalog.is_empty());
    }
}
