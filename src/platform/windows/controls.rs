//! DirectShow focus control surface.
//!
//! Binding sequence: walk the video-input device category to the
//! selected index, bind that moniker to a capture filter, then ask the
//! capture graph builder for the filter's `IAMCameraControl` on the
//! capture pin. `GetRange`/`Get`/`Set` on the Focus property do the
//! rest.

use crate::errors::CameraError;
use crate::types::{FocusMode, FocusRange, FocusState};
use windows::core::{w, Interface, BSTR, GUID, VARIANT};
use windows::Win32::Media::DirectShow::{
    CameraControl_Flags_Auto, CameraControl_Flags_Manual, CameraControl_Focus,
    CameraControlFlags, CLSID_CaptureGraphBuilder2, CLSID_FilterGraph, CLSID_SystemDeviceEnum,
    CLSID_VideoInputDeviceCategory, IAMCameraControl, IBaseFilter, ICaptureGraphBuilder2,
    ICreateDevEnum, IGraphBuilder,
};
use windows::Win32::System::Com::StructuredStorage::IPropertyBag;
use windows::Win32::System::Com::{
    CoCreateInstance, IEnumMoniker, IMoniker, CLSCTX_INPROC_SERVER,
};

// Pin category and media type for the capture pin lookup.
const PIN_CATEGORY_CAPTURE: GUID = GUID::from_u128(0xfb6c4281_0353_11d1_905f_0000c0cc16ba);
const MEDIATYPE_VIDEO: GUID = GUID::from_u128(0x73646976_0000_0010_8000_00aa00389b71);

pub struct WindowsFocusControl {
    // The graph objects keep the bound filter's control interface alive.
    _graph: IGraphBuilder,
    _builder: ICaptureGraphBuilder2,
    _filter: IBaseFilter,
    control: IAMCameraControl,
}

impl WindowsFocusControl {
    /// Bind the focus surface of the `index`-th video input device.
    pub fn bind(index: u32) -> Result<Self, CameraError> {
        let moniker = moniker_at(index)?;

        if let Some(name) = friendly_name(&moniker) {
            log::debug!("binding focus control to DirectShow device {}: {}", index, name);
        }

        let filter: IBaseFilter = bind_to_object(&moniker)?;

        let graph: IGraphBuilder =
            unsafe { CoCreateInstance(&CLSID_FilterGraph, None, CLSCTX_INPROC_SERVER) }.map_err(
                |e| CameraError::InitializationError(format!("Failed to create filter graph: {}", e)),
            )?;
        let builder: ICaptureGraphBuilder2 =
            unsafe { CoCreateInstance(&CLSID_CaptureGraphBuilder2, None, CLSCTX_INPROC_SERVER) }
                .map_err(|e| {
                    CameraError::InitializationError(format!(
                        "Failed to create capture graph builder: {}",
                        e
                    ))
                })?;
        unsafe { builder.SetFiltergraph(&graph) }.map_err(|e| {
            CameraError::InitializationError(format!("Failed to attach filter graph: {}", e))
        })?;

        let mut raw = std::ptr::null_mut();
        unsafe {
            builder.FindInterface(
                Some(&PIN_CATEGORY_CAPTURE as *const GUID),
                Some(&MEDIATYPE_VIDEO as *const GUID),
                &filter,
                &IAMCameraControl::IID,
                &mut raw,
            )
        }
        .map_err(|e| {
            CameraError::UnsupportedOperation(format!(
                "device exposes no camera control interface: {}",
                e
            ))
        })?;
        let control = unsafe { IAMCameraControl::from_raw(raw) };

        let bound = Self {
            _graph: graph,
            _builder: builder,
            _filter: filter,
            control,
        };

        // Capability probe: a device can expose the interface but not
        // the Focus property.
        bound.range()?;
        Ok(bound)
    }

    pub fn range(&self) -> Result<FocusRange, CameraError> {
        let mut min = 0i32;
        let mut max = 0i32;
        let mut step = 0i32;
        let mut default = 0i32;
        let mut caps = CameraControlFlags(0);

        unsafe {
            self.control.GetRange(
                CameraControl_Focus,
                &mut min,
                &mut max,
                &mut step,
                &mut default,
                &mut caps,
            )
        }
        .map_err(|e| {
            CameraError::UnsupportedOperation(format!("device exposes no focus control: {}", e))
        })?;

        Ok(FocusRange::new(min, max, step, default))
    }

    pub fn current(&self) -> Result<FocusState, CameraError> {
        let mut value = 0i32;
        let mut flags = CameraControlFlags(0);

        unsafe { self.control.Get(CameraControl_Focus, &mut value, &mut flags) }.map_err(|e| {
            CameraError::ControlError(format!("Failed to read focus value: {}", e))
        })?;

        let mode = if flags.0 & CameraControl_Flags_Auto.0 != 0 {
            FocusMode::Auto
        } else {
            FocusMode::Manual
        };

        Ok(FocusState { value, mode })
    }

    pub fn set_manual(&mut self, value: i32) -> Result<(), CameraError> {
        unsafe {
            self.control
                .Set(CameraControl_Focus, value, CameraControl_Flags_Manual)
        }
        .map_err(|e| CameraError::ControlError(format!("Failed to set focus value: {}", e)))
    }
}

/// Walk the video-input device category to the moniker at `index`.
fn moniker_at(index: u32) -> Result<IMoniker, CameraError> {
    let dev_enum: ICreateDevEnum =
        unsafe { CoCreateInstance(&CLSID_SystemDeviceEnum, None, CLSCTX_INPROC_SERVER) }.map_err(
            |e| {
                CameraError::InitializationError(format!(
                    "Failed to create system device enumerator: {}",
                    e
                ))
            },
        )?;

    let mut class_enum: Option<IEnumMoniker> = None;
    unsafe { dev_enum.CreateClassEnumerator(&CLSID_VideoInputDeviceCategory, &mut class_enum, 0) }
        .ok()
        .map_err(|e| {
            CameraError::EnumerationError(format!("Failed to enumerate video devices: {}", e))
        })?;

    // S_FALSE from CreateClassEnumerator means the category is empty.
    let enumerator = class_enum.ok_or_else(|| {
        CameraError::EnumerationError("no video input devices registered".to_string())
    })?;

    let mut seen = 0u32;
    loop {
        let mut slot: [Option<IMoniker>; 1] = [None];
        let mut fetched = 0u32;
        let hr = unsafe { enumerator.Next(&mut slot, Some(&mut fetched as *mut u32)) };
        if hr.is_err() || fetched == 0 {
            return Err(CameraError::EnumerationError(format!(
                "video input device {} not found (category ended at {})",
                index, seen
            )));
        }

        let moniker = slot[0].take().ok_or_else(|| {
            CameraError::EnumerationError("device enumerator returned an empty slot".to_string())
        })?;

        if seen == index {
            return Ok(moniker);
        }
        seen += 1;
    }
}

fn bind_to_object(moniker: &IMoniker) -> Result<IBaseFilter, CameraError> {
    let mut raw = std::ptr::null_mut();
    unsafe { moniker.BindToObject(None, None, &IBaseFilter::IID, &mut raw) }.map_err(|e| {
        CameraError::ControlError(format!("Failed to bind device to a capture filter: {}", e))
    })?;
    Ok(unsafe { IBaseFilter::from_raw(raw) })
}

/// Best-effort read of the device's friendly name, for diagnostics only.
fn friendly_name(moniker: &IMoniker) -> Option<String> {
    let mut raw = std::ptr::null_mut();
    unsafe { moniker.BindToStorage(None, None, &IPropertyBag::IID, &mut raw) }.ok()?;
    let bag = unsafe { IPropertyBag::from_raw(raw) };

    let mut variant = VARIANT::default();
    unsafe { bag.Read(w!("FriendlyName"), &mut variant, None) }.ok()?;
    BSTR::try_from(&variant).ok().map(|name| name.to_string())
}
