use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Walk(ignore::Error),
    InputDir { path: PathBuf, source: io::Error },
    NotADirectory(PathBuf),
    OutputFile { path: PathBuf, source: io::Error },
    ReadFile { path: PathBuf, source: io::Error },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::Walk(e) => write!(f, "failed to walk directory: {}", e),
            AppError::InputDir { path, source } => {
                write!(f, "cannot read input directory {}: {}", path.display(), source)
            }
            AppError::NotADirectory(path) => {
                write!(f, "{} is not a directory", path.display())
            }
            AppError::OutputFile { path, source } => {
                write!(f, "failed to create output file {}: {}", path.display(), source)
            }
            AppError::ReadFile { path, source } => {
                write!(f, "failed to read file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<ignore::Error> for AppError {
    fn from(e: ignore::Error) -> Self {
        AppError::Walk(e)
    }
}
