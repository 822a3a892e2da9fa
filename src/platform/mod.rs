//! Platform backends: enumeration and the focus control surface.
//!
//! Each backend exposes the same three-call shape (`acquire`,
//! `list_devices`, `focus_control`); the aliases below pick the one for
//! the compilation target.

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub use linux::{LinuxFocusControl as PlatformFocusControl, LinuxSession as PlatformSession};

#[cfg(target_os = "macos")]
pub use macos::{MacosFocusControl as PlatformFocusControl, MacosSession as PlatformSession};

#[cfg(target_os = "windows")]
pub use windows::{WindowsFocusControl as PlatformFocusControl, WindowsSession as PlatformSession};
