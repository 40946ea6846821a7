pub mod errors;
pub mod verbosity;

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

use crate::template::TemplateKind;
use errors::{ParseError, ParseErrorKind};
pub use verbosity::Verbosity;

pub const DEFAULT_FILE_NAME: &str = "main.cpp";
pub const DEFAULT_DIRECTORY: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub verbosity: Verbosity,
    pub file_name: OsString,
    pub destination_directory: OsString,
    pub template_kind: TemplateKind,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            file_name: DEFAULT_FILE_NAME.into(),
            destination_directory: DEFAULT_DIRECTORY.into(),
            template_kind: TemplateKind::default(),
        }
    }
}

/// What the argument list asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Scaffold(Configuration),
}

/// Which field the next positional argument is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
enum Slot {
    #[default]
    File,
    Directory,
    Template,
}

impl Slot {
    fn from_flag(arg: &str) -> Option<Slot> {
        match arg {
            "-f" | "--file" => Some(Slot::File),
            "-d" | "--directory" => Some(Slot::Directory),
            "-t" | "--template-type" => Some(Slot::Template),
            _ => None,
        }
    }
}

/// Inputs that may be given at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Category {
    Verbosity,
    Slot(Slot),
}

fn is_help_flag(arg: &OsStr) -> bool {
    arg == "-h" || arg == "--help"
}

#[derive(Default)]
struct ParseState {
    config: Configuration,
    slot: Slot,
    consumed: HashSet<Category>,
}

impl ParseState {
    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            verbosity: self.config.verbosity,
            kind,
        }
    }

    /// Marks `category` as given; false if it already was.
    fn consume(&mut self, category: Category) -> bool {
        self.consumed.insert(category)
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) -> Result<(), ParseError> {
        if !self.consume(Category::Verbosity) {
            return Err(self.fail(ParseErrorKind::DuplicateVerbosity));
        }
        self.config.verbosity = verbosity;
        Ok(())
    }

    fn set_positional(&mut self, value: &OsStr) -> Result<(), ParseError> {
        let slot = self.slot;
        if !self.consume(Category::Slot(slot)) {
            let kind = match slot {
                Slot::File => ParseErrorKind::DuplicateFileName,
                Slot::Directory => ParseErrorKind::DuplicateDirectory,
                Slot::Template => ParseErrorKind::DuplicateTemplate,
            };
            return Err(self.fail(kind));
        }

        match slot {
            Slot::File => self.config.file_name = value.to_os_string(),
            Slot::Directory => self.config.destination_directory = value.to_os_string(),
            Slot::Template => {
                let kind = value.to_str().and_then(TemplateKind::from_name).ok_or_else(|| {
                    let name = value.to_string_lossy().into_owned();
                    self.fail(ParseErrorKind::UnknownTemplate(name))
                })?;
                self.config.template_kind = kind;
            }
        }
        Ok(())
    }

    fn feed(&mut self, arg: &OsStr) -> Result<(), ParseError> {
        // Flags are ASCII; anything else is a value.
        let Some(flag) = arg.to_str() else {
            return self.set_positional(arg);
        };
        if let Some(verbosity) = Verbosity::from_flag(flag) {
            return self.set_verbosity(verbosity);
        }
        if let Some(slot) = Slot::from_flag(flag) {
            self.slot = slot;
            return Ok(());
        }
        self.set_positional(arg)
    }
}

impl Invocation {
    /// Parses a full argument list; the first item is the program name and
    /// is ignored.
    pub fn parse_from<I, T>(args: I) -> Result<Invocation, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().skip(1).map(Into::into).collect();

        // Help wins over anything else on the line, even malformed input.
        if args.iter().any(|arg| is_help_flag(arg)) {
            return Ok(Invocation::Help);
        }

        let mut state = ParseState::default();
        for arg in &args {
            state.feed(arg)?;
        }
        Ok(Invocation::Scaffold(state.config))
    }
}
