// Windows platform implementation combining nokhwa enumeration with DirectShow controls

pub mod controls;

pub use controls::WindowsFocusControl;

use crate::errors::CameraError;
use crate::types::DeviceDescriptor;
use nokhwa::query;
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_MULTITHREADED};

/// Windows session handle: owns the COM apartment used by the
/// DirectShow control surface, released on drop.
pub struct WindowsSession {
    _com: ComApartment,
}

impl WindowsSession {
    pub fn acquire() -> Result<Self, CameraError> {
        Ok(Self {
            _com: ComApartment::initialize()?,
        })
    }

    /// List available cameras, trying multiple backends to catch
    /// virtual cameras, with duplicates across backends filtered by
    /// name.
    pub fn list_devices(&self) -> Result<Vec<DeviceDescriptor>, CameraError> {
        let mut all_cameras: Vec<nokhwa::utils::CameraInfo> = Vec::new();
        let mut any_backend_worked = false;
        let mut last_error = None;

        let backends = [
            nokhwa::utils::ApiBackend::MediaFoundation,
            nokhwa::utils::ApiBackend::Auto,
        ];

        for backend in backends {
            match query(backend) {
                Ok(cameras) => {
                    log::debug!("Found {} cameras using {:?} backend", cameras.len(), backend);
                    any_backend_worked = true;

                    for camera_info in cameras {
                        let name = camera_info.human_name();
                        if !all_cameras
                            .iter()
                            .any(|existing| existing.human_name() == name)
                        {
                            all_cameras.push(camera_info);
                        }
                    }
                }
                Err(e) => {
                    log::debug!("Backend {:?} failed: {}", backend, e);
                    last_error = Some(e);
                }
            }
        }

        if !any_backend_worked {
            let detail = last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no backend available".to_string());
            return Err(CameraError::EnumerationError(format!(
                "Failed to query cameras on any backend: {}",
                detail
            )));
        }

        // Zero devices with a working backend is a defined outcome; the
        // caller guards selection against an empty list.
        let mut device_list = Vec::new();
        for camera_info in all_cameras {
            let device =
                DeviceDescriptor::new(camera_info.index().to_string(), camera_info.human_name())
                    .with_description(camera_info.description().to_string());
            device_list.push(device);
        }

        Ok(device_list)
    }

    /// Bind the DirectShow focus surface for `device`. The menu index is
    /// re-resolved against the video-input device category, which follows
    /// the same system device order as enumeration.
    pub fn focus_control(
        &self,
        device: &DeviceDescriptor,
    ) -> Result<WindowsFocusControl, CameraError> {
        let index = device
            .id
            .parse::<u32>()
            .map_err(|_| CameraError::ControlError(format!("Invalid device ID: {}", device.id)))?;

        WindowsFocusControl::bind(index)
    }
}

struct ComApartment;

impl ComApartment {
    fn initialize() -> Result<Self, CameraError> {
        unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) }
            .ok()
            .map_err(|e| {
                CameraError::InitializationError(format!("COM initialization failed: {}", e))
            })?;
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}
