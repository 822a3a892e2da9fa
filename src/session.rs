//! The per-run session over the platform media subsystem.
//!
//! One `CameraSession` is constructed in `main` and passed by reference
//! into each stage of the flow; all platform state (COM apartment,
//! device handles) lives behind it and is released on drop.

use crate::errors::CameraError;
use crate::platform::{PlatformFocusControl, PlatformSession};
use crate::types::{DeviceDescriptor, FocusRange, FocusState};

pub struct CameraSession {
    inner: PlatformSession,
}

impl CameraSession {
    /// Acquire the host media subsystem.
    pub fn new() -> Result<Self, CameraError> {
        let inner = PlatformSession::acquire()?;
        log::debug!("camera session acquired on {}", crate::Platform::current().as_str());
        Ok(Self { inner })
    }

    /// Enumerate video capture devices in raw discovery order.
    ///
    /// Zero devices is a defined outcome (empty vector), not an error;
    /// callers must guard selection against it.
    pub fn list_devices(&self) -> Result<Vec<DeviceDescriptor>, CameraError> {
        let devices = self.inner.list_devices()?;
        log::debug!("enumerated {} video capture device(s)", devices.len());
        Ok(devices)
    }

    /// Capability lookup: bind the focus control surface of `device`.
    ///
    /// Returns `CameraError::UnsupportedOperation` when the device
    /// exposes no camera-control interface or no focus control.
    pub fn focus_control(&self, device: &DeviceDescriptor) -> Result<FocusControl, CameraError> {
        let inner = self.inner.focus_control(device)?;
        log::debug!("focus control bound for device {} ({})", device.id, device.name);
        Ok(FocusControl { inner })
    }
}

/// The focus control surface of one bound device.
///
/// Nothing is cached between calls; every operation round-trips to the
/// device.
pub struct FocusControl {
    inner: PlatformFocusControl,
}

impl FocusControl {
    /// Query the legal focus domain of the device.
    pub fn range(&self) -> Result<FocusRange, CameraError> {
        self.inner.range()
    }

    /// Query the current focus value and Auto/Manual mode.
    pub fn current(&self) -> Result<FocusState, CameraError> {
        self.inner.current()
    }

    /// Write a new focus value in manual mode.
    ///
    /// The value must already be clamped and step-aligned; the quantizer
    /// in [`crate::quantize`] enforces that precondition for callers.
    pub fn set_manual(&mut self, value: i32) -> Result<(), CameraError> {
        self.inner.set_manual(value)
    }
}
