use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    MalformedRecord(String),
    LoadFailure(String),
    SaveFailure(String),
    Validation(String),
    ParseCommand(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::MalformedRecord(key) => {
                write!(f, "Malformed contact record: missing field '{}'", key)
            }
            AppError::LoadFailure(reason) => {
                write!(f, "Failed to load contacts: {}", reason)
            }
            AppError::SaveFailure(reason) => {
                write!(f, "Failed to save contacts: {}", reason)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
        }
    }
}
