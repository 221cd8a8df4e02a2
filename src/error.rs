use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    NotFound {
        path: PathBuf,
        working_directory: Option<PathBuf>,
    },
    Io {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Error {
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound {
            path,
            working_directory: std::env::current_dir().ok(),
        }
    }

    pub fn io(path: PathBuf, source: image::ImageError) -> Self {
        Self::Io { path, source }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound {
                path,
                working_directory,
            } => {
                write!(f, "Input file not found: {}", path.display())?;

                match working_directory {
                    Some(working_directory) => write!(
                        f,
                        "\nCurrent working directory: {}",
                        working_directory.display()
                    ),
                    None => write!(f, "\nCurrent working directory: <unavailable>"),
                }
            }
            Error::Io { path, source } => write!(
                f,
                "Failed to read or write image data at {}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { .. } => None,
            Error::Io { source, .. } => Some(source),
        }
    }
}
