use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    InitializationError(String),
    EnumerationError(String),
    PermissionDenied(String),
    ControlError(String),
    UnsupportedOperation(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CameraError::InitializationError(msg) => {
                write!(f, "Camera initialization error: {}", msg)
            }
            CameraError::EnumerationError(msg) => write!(f, "Device enumeration error: {}", msg),
            CameraError::PermissionDenied(msg) => write!(f, "Permission denied error: {}", msg),
            CameraError::ControlError(msg) => write!(f, "Camera control error: {}", msg),
            CameraError::UnsupportedOperation(msg) => {
                write!(f, "Unsupported operation: {}", msg)
            }
        }
    }
}

impl std::error::Error for CameraError {}
