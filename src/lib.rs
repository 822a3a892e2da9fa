//! camfocus: interactive focus inspection and adjustment for video
//! capture devices.
//!
//! One-shot flow: acquire the platform media subsystem, enumerate video
//! capture devices, let the user pick one, report the device's focus
//! range and state, and optionally write a quantized manual focus value.
//!
//! # Usage
//! ```rust,no_run
//! use camfocus::CameraSession;
//!
//! fn main() -> Result<(), camfocus::CameraError> {
//!     let session = CameraSession::new()?;
//!     for device in session.list_devices()? {
//!         println!("{}: {}", device.id, device.name);
//!     }
//!     Ok(())
//! }
//! ```
pub mod errors;
pub mod interact;
pub mod platform;
pub mod quantize;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use errors::CameraError;
pub use quantize::{snap_to_step, FocusValueError};
pub use session::{CameraSession, FocusControl};
pub use types::{DeviceDescriptor, FocusMode, FocusRange, FocusState, Platform};

/// Detect the current platform using the Platform enum
pub fn current_platform() -> Platform {
    Platform::current()
}

/// Initialize logging for the camera session
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "camfocus=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let platform = current_platform();
        assert_ne!(platform, Platform::Unknown);
    }

    #[test]
    fn test_crate_metadata() {
        assert_eq!(NAME, "camfocus");
        assert!(!VERSION.is_empty());
    }
}
