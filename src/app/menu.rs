use crate::app::input::Prompter;
use crate::core::catalog::Catalog;
use crate::domain::model::Course;
use crate::domain::ports::CourseStore;
use crate::utils::error::{CatalogError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Load,
    List,
    Info,
    Insert,
    Save,
    Exit,
}

impl TryFrom<i64> for Command {
    type Error = CatalogError;

    fn try_from(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(Command::Load),
            2 => Ok(Command::List),
            3 => Ok(Command::Info),
            4 => Ok(Command::Insert),
            5 => Ok(Command::Save),
            9 => Ok(Command::Exit),
            other => Err(CatalogError::InvalidMenuChoice(other)),
        }
    }
}

const MENU: &str = "\nMain Menu:
1. Load Data Structure
2. Print Course List
3. Print Course Information
4. Insert Course
5. Save Data Structure
9. Exit";

/// The interactive session: owns the catalog and runs the menu loop until
/// the user exits or input runs out.
pub struct MenuSession<S, R, W> {
    catalog: Catalog,
    store: S,
    prompter: Prompter<R, W>,
}

impl<S: CourseStore, R: BufRead, W: Write> MenuSession<S, R, W> {
    pub fn new(store: S, reader: R, writer: W) -> Self {
        Self {
            catalog: Catalog::new(),
            store,
            prompter: Prompter::new(reader, writer),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.prompter.writer(), "{}", MENU)?;

            // Read choice
            let choice = match self.prompter.prompt_number("What would you like to do? ") {
                Ok(choice) => choice,
                Err(CatalogError::InputClosed) => {
                    tracing::debug!("input closed, leaving menu");
                    writeln!(self.prompter.writer())?;
                    self.say("Exiting program.")?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let command = match Command::try_from(choice) {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!("rejected menu choice {}", choice);
                    self.say(&e.to_string())?;
                    continue;
                }
            };

            if command == Command::Exit {
                self.say("Exiting program.")?;
                return Ok(());
            }

            // Dispatch; failures are reported and the menu comes back
            match self.dispatch(command) {
                Ok(()) => {}
                Err(CatalogError::InputClosed) => {
                    writeln!(self.prompter.writer())?;
                    self.say("Exiting program.")?;
                    return Ok(());
                }
                Err(e) => self.report_error(&e)?,
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Load => {
                let filename = self.prompter.prompt_filename()?;
                self.load_file(&filename)
            }
            Command::List => self.print_course_list(),
            Command::Info => {
                let number = self.prompter.prompt_course_number()?;
                self.print_course_info(&number)
            }
            Command::Insert => self.insert_course(),
            Command::Save => {
                let filename = self.prompter.prompt_filename()?;
                self.save_file(&filename)
            }
            Command::Exit => Ok(()),
        }
    }

    /// Merges `path` into the catalog and reports each skipped line.
    pub fn load_file(&mut self, path: &str) -> Result<()> {
        let report = match self.store.load(path, &mut self.catalog) {
            Ok(report) => report,
            Err(e) => {
                // Lines merged before a read failure still get their warnings
                if let CatalogError::ReadFailure { warnings, .. } = &e {
                    for warning in warnings {
                        self.say(&format!("Warning: {}", warning))?;
                    }
                }
                return Err(e);
            }
        };
        for warning in &report.warnings {
            self.say(&format!("Warning: {}", warning))?;
        }
        if report.catalog_empty {
            self.say("Warning: No valid data was loaded. The file may be empty or malformed.")
        } else {
            self.say(&format!("Data loaded successfully from '{}'.", path))
        }
    }

    pub fn save_file(&mut self, path: &str) -> Result<()> {
        self.store.save(path, &self.catalog)?;
        self.say(&format!("Data saved successfully to '{}'.", path))
    }

    fn print_course_list(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            return self.say("No courses available. Please load the data structure first.");
        }

        let lines: Vec<String> = self
            .catalog
            .list()
            .into_iter()
            .map(|course| {
                format!(
                    "{}, {} (Prerequisites: {})",
                    course.number,
                    course.title,
                    course.prerequisites_display()
                )
            })
            .collect();

        self.say("Course List:")?;
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    fn print_course_info(&mut self, number: &str) -> Result<()> {
        let course = self.catalog.lookup(number)?;
        let text = format!(
            "{}, {}\nPrerequisites: {}",
            course.number,
            course.title,
            course.prerequisites_display()
        );
        self.say(&text)
    }

    fn insert_course(&mut self) -> Result<()> {
        let number = self.prompter.prompt_course_number()?;
        let title = self.prompter.prompt_text("Enter the course title: ")?;
        let count = self
            .prompter
            .prompt_number("How many prerequisites does the course have? ")?;

        // A negative count asks for nothing
        let mut prerequisites = Vec::new();
        for i in 1..=count.max(0) {
            let prereq = self
                .prompter
                .prompt_text(&format!("Enter prerequisite {}: ", i))?;
            prerequisites.push(prereq);
        }

        self.catalog
            .insert(Course::new(number.clone(), title, prerequisites))?;
        self.say(&format!("Course {} has been successfully added.", number))
    }

    fn report_error(&mut self, err: &CatalogError) -> Result<()> {
        // stdout carries the message; the log copy is for --verbose only
        if err.is_file_error() {
            tracing::debug!("{}", err);
        }
        self.say(&format!("Error: {}", err))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.prompter.writer(), "{}", message)?;
        Ok(())
    }
}
