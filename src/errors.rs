use std::error;
use std::fmt;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(String),
    /// A path command was followed by fewer numbers than it requires
    TruncatedArgs {
        command: char,
        expected: usize,
        found: usize,
    },
    /// A closepath command was reached before any point was emitted
    EmptyPathClose(char),
    Document(String),
    Render(String),
    Cli(String),
    Other(Box<dyn error::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::TruncatedArgs {
                command,
                expected,
                found,
            } => write!(
                f,
                "Parse error: path command '{command}' needs {expected} numbers, found {found}"
            ),
            Error::EmptyPathClose(command) => {
                write!(f, "Parse error: '{command}' with no preceding point")
            }
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::Render(reason) => write!(f, "Render error: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(e) => Some(&**e),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: error::Error + 'static,
    {
        Error::Other(Box::new(err))
    }

    /// True for errors raised while interpreting path data.
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            Error::TruncatedArgs { .. } | Error::EmptyPathClose(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}
