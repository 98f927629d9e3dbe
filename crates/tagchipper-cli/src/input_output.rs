//! Corpus, text and rule file locations.
//!
//! A missing path or `-` selects standard io.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

/// Where a command reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoPath {
    /// Stdin or stdout.
    Std,

    /// A file.
    File(PathBuf),
}

impl IoPath {
    fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => IoPath::Std,
            Some(path) => IoPath::File(path.into()),
        }
    }

    fn name(
        &self,
        std_name: &str,
    ) -> String {
        match self {
            IoPath::Std => std_name.to_string(),
            IoPath::File(path) => path.display().to_string(),
        }
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; "-" or nothing reads stdin.
    #[arg(long)]
    pub input: Option<String>,
}

impl InputArgs {
    /// The resolved input location.
    pub fn path(&self) -> IoPath {
        IoPath::from_arg(self.input.as_deref())
    }

    /// A display name for log lines and trainer names.
    pub fn name(&self) -> String {
        self.path().name("<stdin>")
    }

    /// Open a line reader on the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match self.path() {
            IoPath::Std => Box::new(BufReader::new(std::io::stdin().lock())),
            IoPath::File(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file; "-" or nothing writes stdout.
    #[arg(long)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// The resolved output location.
    pub fn path(&self) -> IoPath {
        IoPath::from_arg(self.output.as_deref())
    }

    /// A display name for log lines.
    pub fn name(&self) -> String {
        self.path().name("<stdout>")
    }

    /// Open a buffered writer on the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match self.path() {
            IoPath::Std => Box::new(BufWriter::new(std::io::stdout().lock())),
            IoPath::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(IoPath::from_arg(None), IoPath::Std);
        assert_eq!(IoPath::from_arg(Some("-")), IoPath::Std);
        assert_eq!(
            IoPath::from_arg(Some("corpus.txt")),
            IoPath::File("corpus.txt".into())
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(InputArgs { input: None }.name(), "<stdin>");
        assert_eq!(
            InputArgs {
                input: Some("-".to_string())
            }
            .name(),
            "<stdin>"
        );
        assert_eq!(OutputArgs { output: None }.name(), "<stdout>");
        assert_eq!(
            OutputArgs {
                output: Some("rules.tsv".to_string())
            }
            .name(),
            "rules.tsv"
        );
    }
}
