use crate::core::catalog::Catalog;
use crate::domain::model::{Course, LoadReport};
use crate::domain::ports::CourseStore;
use crate::utils::error::{CatalogError, LoadWarning, Result};
use crate::utils::text::{clean_field, split};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

pub const FIELD_DELIMITER: char = ',';

/// Reads and writes catalogs as quoted, comma-separated lines:
/// `"<number>", "<title>"[, "<prereq>"...]`.
#[derive(Debug, Clone, Default)]
pub struct TextFileStore;

impl TextFileStore {
    pub fn new() -> Self {
        Self
    }

    /// Merges catalog lines from any reader. Lines that are malformed or name
    /// a course already present are skipped and reported.
    pub fn load_from<R: BufRead>(&self, reader: R, catalog: &mut Catalog) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        Self::merge_lines(reader, catalog, &mut report)?;
        Ok(report)
    }

    /// Like `load_from`, but a read failure names `path` and keeps the
    /// warnings gathered before it.
    pub fn load_named<R: BufRead>(
        &self,
        path: &str,
        reader: R,
        catalog: &mut Catalog,
    ) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        if let Err(e) = Self::merge_lines(reader, catalog, &mut report) {
            tracing::debug!("reading '{}' failed after {} line(s): {}", path, report.added, e);
            return Err(CatalogError::ReadFailure {
                path: path.to_string(),
                warnings: report.warnings,
            });
        }
        Ok(report)
    }

    fn merge_lines<R: BufRead>(
        mut reader: R,
        catalog: &mut Catalog,
        report: &mut LoadReport,
    ) -> std::io::Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Bytes that are not UTF-8 are replaced, not rejected
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');

            match Self::merge_line(line, catalog) {
                Some(warning) => {
                    // The menu prints warnings; the log only keeps a trace
                    tracing::debug!("{}", warning);
                    report.warnings.push(warning);
                }
                None => report.added += 1,
            }
        }

        // Emptiness of the whole catalog, not of this file
        report.catalog_empty = catalog.is_empty();
        Ok(())
    }

    fn merge_line(line: &str, catalog: &mut Catalog) -> Option<LoadWarning> {
        let tokens = split(line, FIELD_DELIMITER);
        if tokens.len() < 2 {
            return Some(LoadWarning::MalformedLine {
                line: line.to_string(),
                tokens: tokens.len(),
            });
        }

        // number, title, then any prerequisites
        let number = clean_field(&tokens[0]);
        let title = clean_field(&tokens[1]);
        let prerequisites = tokens[2..].iter().map(|t| clean_field(t)).collect();

        if number.is_empty() {
            return Some(LoadWarning::EmptyCourseNumber {
                line: line.to_string(),
            });
        }
        if catalog.contains(&number) {
            return Some(LoadWarning::DuplicateCourse(number));
        }
        match catalog.insert(Course::new(number, title, prerequisites)) {
            Ok(()) => None,
            Err(CatalogError::DuplicateCourse(number)) => Some(LoadWarning::DuplicateCourse(number)),
            Err(_) => Some(LoadWarning::EmptyCourseNumber {
                line: line.to_string(),
            }),
        }
    }

    /// Writes one line per course, in the catalog's storage order.
    pub fn write_to<W: Write>(&self, writer: &mut W, catalog: &Catalog) -> Result<()> {
        for course in catalog.iter() {
            write!(writer, "\"{}\", \"{}\"", course.number, course.title)?;
            for prereq in &course.prerequisites {
                write!(writer, ", \"{}\"", prereq)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl CourseStore for TextFileStore {
    fn load(&self, path: &str, catalog: &mut Catalog) -> Result<LoadReport> {
        // Open
        let file = File::open(path).map_err(|e| {
            tracing::debug!("open '{}' failed: {}", path, e);
            CatalogError::OpenFailure {
                path: path.to_string(),
            }
        })?;

        let report = self.load_named(path, BufReader::new(file), catalog)?;
        tracing::info!(
            "Loaded {} course(s) from '{}' with {} warning(s)",
            report.added,
            path,
            report.warnings.len()
        );
        Ok(report)
    }

    fn save(&self, path: &str, catalog: &Catalog) -> Result<()> {
        // Truncate or create
        let file = File::create(path).map_err(|e| {
            tracing::debug!("create '{}' failed: {}", path, e);
            CatalogError::OpenForWriteFailure {
                path: path.to_string(),
            }
        })?;

        let write_failed = |e: CatalogError| {
            tracing::debug!("writing '{}' failed: {}", path, e);
            CatalogError::OpenForWriteFailure {
                path: path.to_string(),
            }
        };
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, catalog).map_err(write_failed)?;
        writer
            .flush()
            .map_err(|e| write_failed(CatalogError::IoError(e)))?;
        drop(writer);

        // Existence check only; the content is not read back
        File::open(path).map_err(|_| CatalogError::VerificationFailure {
            path: path.to_string(),
        })?;

        tracing::info!("Saved {} course(s) to '{}'", catalog.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    #[test]
    fn test_load_from_reader() {
        let data = "\"CS101\",\"Intro\",\n\"CS102\",\"Data Structures\",\"CS101\"\n";
        let mut catalog = Catalog::new();

        let report = TextFileStore::new()
            .load_from(Cursor::new(data), &mut catalog)
            .unwrap();

        assert_eq!(report.added, 2);
        assert!(report.warnings.is_empty());
        assert!(!report.catalog_empty);
        assert!(catalog.lookup("CS101").unwrap().prerequisites.is_empty());
        assert_eq!(
            catalog.lookup("CS102").unwrap().prerequisites,
            vec!["CS101".to_string()]
        );
    }

    #[test]
    fn test_malformed_and_duplicate_lines_are_skipped() {
        let data = "CS101\n\n\"CS200\",\"Algorithms\"\n\"CS200\",\"Other\"\r\n";
        let mut catalog = Catalog::new();

        let report = TextFileStore::new()
            .load_from(Cursor::new(data), &mut catalog)
            .unwrap();

        assert_eq!(report.added, 1);
        assert_eq!(
            report.warnings,
            vec![
                LoadWarning::MalformedLine {
                    line: "CS101".to_string(),
                    tokens: 1
                },
                LoadWarning::MalformedLine {
                    line: String::new(),
                    tokens: 0
                },
                LoadWarning::DuplicateCourse("CS200".to_string()),
            ]
        );
        assert_eq!(catalog.lookup("CS200").unwrap().title, "Algorithms");
    }

    #[test]
    fn test_blank_course_number_is_reported() {
        let data = "\"\",\"No Number\"\n  ,\"Padding Only\"\n";
        let mut catalog = Catalog::new();

        let report = TextFileStore::new()
            .load_from(Cursor::new(data), &mut catalog)
            .unwrap();

        assert_eq!(report.added, 0);
        assert!(report.catalog_empty);
        assert_eq!(
            report.warnings[0].to_string(),
            "Skipping line: \"\",\"No Number\" (Course number cannot be empty.)"
        );
        assert!(matches!(
            report.warnings[1],
            LoadWarning::EmptyCourseNumber { .. }
        ));
    }

    struct BrokenReader {
        served: bool,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
            }
            self.served = true;
            let data = b"junk\n\"CS101\",\"Intro\"\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_failure_names_path_and_keeps_warnings() {
        let mut catalog = Catalog::new();
        let reader = BufReader::new(BrokenReader { served: false });

        let err = TextFileStore::new()
            .load_named("courses.txt", reader, &mut catalog)
            .unwrap_err();

        assert!(err.to_string().contains("'courses.txt'"));
        assert!(err.is_file_error());
        match err {
            CatalogError::ReadFailure { warnings, .. } => {
                assert_eq!(
                    warnings,
                    vec![LoadWarning::MalformedLine {
                        line: "junk".to_string(),
                        tokens: 1
                    }]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Lines read before the failure stay merged
        assert!(catalog.contains("CS101"));
    }

    #[test]
    fn test_loading_a_directory_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_str().unwrap();

        let err = TextFileStore::new()
            .load(path, &mut Catalog::new())
            .unwrap_err();
        assert!(err.is_file_error());
        assert!(err.to_string().contains(path));
    }

    #[test]
    fn test_write_format() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Course::new("CS300", "Advanced", vec!["CS101".into(), "CS200".into()]))
            .unwrap();

        let mut out = Vec::new();
        TextFileStore::new().write_to(&mut out, &catalog).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"CS300\", \"Advanced\", \"CS101\", \"CS200\"\n"
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        let path = path.to_str().unwrap();

        let err = TextFileStore::new()
            .load(path, &mut Catalog::new())
            .unwrap_err();
        assert!(matches!(err, CatalogError::OpenFailure { .. }));
        assert!(err.to_string().contains(path));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = TextFileStore::new()
            .save(path.to_str().unwrap(), &Catalog::new())
            .unwrap_err();
        assert!(matches!(err, CatalogError::OpenForWriteFailure { .. }));
    }
}
