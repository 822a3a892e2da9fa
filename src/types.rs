//! Core data types shared across the platform backends and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported host platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

impl Platform {
    /// Detect the platform this process is running on
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            Platform::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Unknown => "unknown",
        }
    }
}

/// A video capture device discovered during enumeration.
///
/// Holds only plain data: the platform-specific handle (moniker, device
/// node) stays inside the platform layer and is re-resolved from `id`
/// when a control surface is bound. Order of discovery is preserved by
/// the enumerator and determines the menu index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Platform device index, rendered as a string
    pub id: String,
    /// Human-readable device name
    pub name: String,
    /// Optional longer description from the backend
    pub description: Option<String>,
}

impl DeviceDescriptor {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            description: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}

/// Legal domain of a device focus control: `[min, max]` in increments of
/// `step`, with the driver-advertised default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
}

impl FocusRange {
    /// Build a range from raw driver values.
    ///
    /// Some drivers advertise a zero step for integer controls; that is
    /// normalized to 1 so the quantizer always has a usable grid.
    pub fn new(min: i32, max: i32, step: i32, default: i32) -> Self {
        Self {
            min,
            max,
            step: step.max(1),
            default,
        }
    }
}

/// Auto/Manual flag of the focus control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusMode {
    Auto,
    Manual,
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusMode::Auto => write!(f, "Auto"),
            FocusMode::Manual => write!(f, "Manual"),
        }
    }
}

/// Current focus value and mode as read from the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusState {
    pub value: i32,
    pub mode: FocusMode,
}
