use crate::errors::CameraError;
use crate::types::{DeviceDescriptor, FocusMode, FocusRange, FocusState};
use nokhwa::query;
use v4l::control::{Control, Description, Value};
use v4l::Device;

// Focus control ids from the V4L2 camera control class.
const V4L2_CID_FOCUS_ABSOLUTE: u32 = 0x009a_090a;
const V4L2_CID_FOCUS_AUTO: u32 = 0x009a_090c;

/// Linux session handle. V4L2 needs no process-wide bootstrap, so this
/// only anchors the session lifetime.
pub struct LinuxSession;

impl LinuxSession {
    pub fn acquire() -> Result<Self, CameraError> {
        Ok(Self)
    }

    /// List available cameras via the Video4Linux backend.
    pub fn list_devices(&self) -> Result<Vec<DeviceDescriptor>, CameraError> {
        let cameras = query(nokhwa::utils::ApiBackend::Video4Linux)
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

    /// Open the device node behind `device` and confirm it exposes an
    /// absolute focus control.
    pub fn focus_control(&self, device: &DeviceDescriptor) -> Result<LinuxFocusControl, CameraError> {
        let index = device
            .id
            .parse::<usize>()
            .map_err(|_| CameraError::ControlError(format!("Invalid device ID: {}", device.id)))?;

        let dev = Device::new(index).map_err(|e| map_open_error(index, e))?;

        let control = LinuxFocusControl { dev };
        control.focus_description()?;
        Ok(control)
    }
}

fn map_open_error(index: usize, error: std::io::Error) -> CameraError {
    let message = format!("Failed to open /dev/video{}: {}", index, error);
    match error.kind() {
        std::io::ErrorKind::PermissionDenied => CameraError::PermissionDenied(message),
        _ => CameraError::ControlError(message),
    }
}

/// Focus control surface of one opened V4L2 device.
pub struct LinuxFocusControl {
    dev: Device,
}

impl LinuxFocusControl {
    /// Re-query the control descriptors and pick out absolute focus.
    /// Queried per call so every operation reflects live device state.
    fn focus_description(&self) -> Result<Description, CameraError> {
        self.query_descriptions()?
            .into_iter()
            .find(|ctrl| ctrl.id == V4L2_CID_FOCUS_ABSOLUTE)
            .ok_or_else(|| {
                CameraError::UnsupportedOperation(
                    "device exposes no absolute focus control".to_string(),
                )
            })
    }

    fn autofocus_description(&self) -> Result<Option<Description>, CameraError> {
        Ok(self
            .query_descriptions()?
            .into_iter()
            .find(|ctrl| ctrl.id == V4L2_CID_FOCUS_AUTO))
    }

    fn query_descriptions(&self) -> Result<Vec<Description>, CameraError> {
        self.dev
            .query_controls()
            .map_err(|e| CameraError::ControlError(format!("Failed to query controls: {}", e)))
    }

    pub fn range(&self) -> Result<FocusRange, CameraError> {
        let desc = self.focus_description()?;
        Ok(FocusRange::new(
            to_control_value(desc.minimum, "minimum")?,
            to_control_value(desc.maximum, "maximum")?,
            to_control_value(desc.step as i64, "step")?,
            to_control_value(desc.default, "default")?,
        ))
    }

    pub fn current(&self) -> Result<FocusState, CameraError> {
        let desc = self.focus_description()?;
        let control = self
            .dev
            .control(&desc)
            .map_err(|e| CameraError::ControlError(format!("Failed to read focus value: {}", e)))?;

        let value = match control.value {
            Value::Integer(v) => to_control_value(v, "focus value")?,
            other => {
                return Err(CameraError::ControlError(format!(
                    "Unexpected focus control payload: {:?}",
                    other
                )))
            }
        };

        Ok(FocusState {
            value,
            mode: self.focus_mode()?,
        })
    }

    /// Autofocus state decides the reported mode; a device without an
    /// autofocus control is always in manual mode.
    fn focus_mode(&self) -> Result<FocusMode, CameraError> {
        let desc = match self.autofocus_description()? {
            Some(desc) => desc,
            None => return Ok(FocusMode::Manual),
        };

        let control = self.dev.control(&desc).map_err(|e| {
            CameraError::ControlError(format!("Failed to read autofocus state: {}", e))
        })?;

        let enabled = match control.value {
            Value::Boolean(b) => b,
            Value::Integer(v) => v != 0,
            other => {
                return Err(CameraError::ControlError(format!(
                    "Unexpected autofocus payload: {:?}",
                    other
                )))
            }
        };

        Ok(if enabled {
            FocusMode::Auto
        } else {
            FocusMode::Manual
        })
    }

    /// Write `value` in manual mode: autofocus off first (when the
    /// device has it), then the absolute focus value.
    pub fn set_manual(&mut self, value: i32) -> Result<(), CameraError> {
        if let Some(auto) = self.autofocus_description()? {
            self.dev
                .set_control(Control {
                    id: auto.id,
                    value: Value::Boolean(false),
                })
                .map_err(|e| {
                    CameraError::ControlError(format!("Failed to disable autofocus: {}", e))
                })?;
            log::debug!("autofocus disabled before manual focus write");
        }

        self.dev
            .set_control(Control {
                id: V4L2_CID_FOCUS_ABSOLUTE,
                value: Value::Integer(i64::from(value)),
            })
            .map_err(|e| CameraError::ControlError(format!("Failed to set focus value: {}", e)))
    }
}

fn to_control_value(value: i64, what: &str) -> Result<i32, CameraError> {
    i32::try_from(value).map_err(|_| {
        CameraError::ControlError(format!(
            "Focus {} {} does not fit a 32-bit control value",
            what, value
        ))
    })
}
