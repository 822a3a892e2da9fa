use crate::errors::CameraError;
use crate::types::{DeviceDescriptor, FocusRange, FocusState};
use nokhwa::query;

/// macOS session handle. AVFoundation needs no explicit bootstrap for
/// enumeration, so this only anchors the session lifetime.
pub struct MacosSession;

impl MacosSession {
    pub fn acquire() -> Result<Self, CameraError> {
        Ok(Self)
    }

    /// List available cameras via the AVFoundation backend.
    pub fn list_devices(&self) -> Result<Vec<DeviceDescriptor>, CameraError> {
        let cameras = query(nokhwa::utils::ApiBackend::AVFoundation)
            .map_err(|e| CameraError::EnumerationError(format!("Failed to query cameras: {}", e)))?;

        let mut device_list = Vec::new();
        for camera_info in cameras {
            let device =
                DeviceDescriptor::new(camera_info.index().to_string(), camera_info.human_name())
                    .with_description(camera_info.description().to_string());
            device_list.push(device);
        }

        Ok(device_list)
    }

    /// AVFoundation exposes no integer focus range compatible with this
    /// control model, so the capability lookup always reports the
    /// device as unsupported.
    pub fn focus_control(&self, device: &DeviceDescriptor) -> Result<MacosFocusControl, CameraError> {
        Err(CameraError::UnsupportedOperation(format!(
            "no camera control surface for {} on macOS",
            device.name
        )))
    }
}

/// Placeholder control surface; [`MacosSession::focus_control`] never
/// hands one out.
pub struct MacosFocusControl {}

impl MacosFocusControl {
    pub fn range(&self) -> Result<FocusRange, CameraError> {
        Err(unsupported())
    }

    pub fn current(&self) -> Result<FocusState, CameraError> {
        Err(unsupported())
    }

    pub fn set_manual(&mut self, _value: i32) -> Result<(), CameraError> {
        Err(unsupported())
    }
}

fn unsupported() -> CameraError {
    CameraError::UnsupportedOperation("focus control is not available on macOS".to_string())
}
