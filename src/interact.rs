//! Terminal dialogue for the one-shot flow: device menu, index selection,
//! focus report, and the adjust prompt.
//!
//! Everything here is generic over `BufRead`/`Write` so the dialogue can
//! be exercised in tests with in-memory buffers instead of a terminal.

use crate::errors::CameraError;
use crate::quantize::snap_to_step;
use crate::types::{DeviceDescriptor, FocusRange, FocusState};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Failures of the prompt loop itself, as opposed to user input errors
/// (those are re-prompted, never surfaced).
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a value was entered")]
    Eof,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Failures of the adjust dialogue: the prompt loop or the device write.
#[derive(Debug, Error)]
pub enum AdjustError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// How the adjust stage ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOutcome {
    /// Empty input; the device was not touched.
    Skipped,
    /// The snapped value that was written.
    Adjusted(i32),
    /// Requested value outside `[min, max]`; the device was not touched.
    Rejected,
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }
    Ok(line)
}

/// Print the numbered device menu in discovery order.
pub fn render_menu<W: Write>(out: &mut W, devices: &[DeviceDescriptor]) -> io::Result<()> {
    writeln!(out, "Available cameras:")?;
    for (index, device) in devices.iter().enumerate() {
        writeln!(out, "    {}: {}", index, device.name)?;
    }
    Ok(())
}

/// Prompt for a device index until the user enters an integer in
/// `0..device_count`. Junk input is reported and re-prompted; end of
/// input aborts.
pub fn prompt_camera_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    device_count: usize,
) -> Result<usize, PromptError> {
    loop {
        write!(out, "Select camera index: ")?;
        out.flush()?;

        let line = read_line(input)?;
        match line.trim().parse::<usize>() {
            Ok(index) if index < device_count => return Ok(index),
            Ok(index) => writeln!(
                out,
                "No camera with index {}; enter a value between 0 and {}",
                index,
                device_count.saturating_sub(1)
            )?,
            Err(_) => writeln!(out, "Enter a numeric camera index")?,
        }
    }
}

/// Print the focus report block for the selected device.
pub fn render_focus_report<W: Write>(
    out: &mut W,
    range: &FocusRange,
    state: &FocusState,
) -> io::Result<()> {
    writeln!(out, "Camera Focus:")?;
    writeln!(
        out,
        "    Range: {} - {} with step size {}",
        range.min, range.max, range.step
    )?;
    writeln!(out, "    Default: {}", range.default)?;
    writeln!(out, "    Current value: {}", state.value)?;
    writeln!(out, "    Current mode: {}", state.mode)?;
    Ok(())
}

/// Prompt for a new focus value. An empty line is the skip path and
/// returns `None`; non-integer input is reported and re-prompted.
pub fn prompt_focus_value<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<i32>, PromptError> {
    loop {
        write!(out, "Input new focus value (or press Enter to skip): ")?;
        out.flush()?;

        let line = read_line(input)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<i32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Enter an integer focus value or press Enter to skip")?,
        }
    }
}

/// Run the adjust stage: prompt, validate, snap, and hand the snapped
/// value to `apply` (the device write). `apply` is invoked at most once,
/// and only with a value that is in range and step-aligned.
pub fn adjust_focus<R, W, F>(
    input: &mut R,
    out: &mut W,
    range: &FocusRange,
    mut apply: F,
) -> Result<AdjustOutcome, AdjustError>
where
    R: BufRead,
    W: Write,
    F: FnMut(i32) -> Result<(), CameraError>,
{
    let requested = match prompt_focus_value(input, out)? {
        Some(value) => value,
        None => return Ok(AdjustOutcome::Skipped),
    };

    match snap_to_step(requested, range) {
        Ok(snapped) => {
            writeln!(out, "Setting focus to: {}", snapped).map_err(PromptError::Io)?;
            apply(snapped)?;
            Ok(AdjustOutcome::Adjusted(snapped))
        }
        Err(rejection) => {
            writeln!(out, "{}", rejection).map_err(PromptError::Io)?;
            Ok(AdjustOutcome::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn devices(names: &[&str]) -> Vec<DeviceDescriptor> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| DeviceDescriptor::new(i.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn test_menu_lists_devices_in_order() {
        let mut out = Vec::new();
        render_menu(&mut out, &devices(&["USB Camera", "Webcam Pro"])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Available cameras:\n    0: USB Camera\n    1: Webcam Pro\n"
        );
    }

    #[test]
    fn test_prompt_index_accepts_valid_input() {
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut out = Vec::new();
        let index = prompt_camera_index(&mut input, &mut out, 2).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_prompt_index_reprompts_on_junk() {
        let mut input = Cursor::new(b"abc\n7\n0\n".to_vec());
        let mut out = Vec::new();
        let index = prompt_camera_index(&mut input, &mut out, 2).unwrap();
        assert_eq!(index, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Enter a numeric camera index"));
        assert!(text.contains("No camera with index 7"));
    }

    #[test]
    fn test_prompt_index_over_empty_list_never_accepts() {
        // Callers guard the empty list; the prompt itself must still not
        // crash, it keeps rejecting until input ends.
        let mut input = Cursor::new(b"0\n".to_vec());
        let mut out = Vec::new();
        let result = prompt_camera_index(&mut input, &mut out, 0);
        assert!(matches!(result, Err(PromptError::Eof)));
    }

    #[test]
    fn test_prompt_index_eof_is_an_error() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let result = prompt_camera_index(&mut input, &mut out, 2);
        assert!(matches!(result, Err(PromptError::Eof)));
    }

    #[test]
    fn test_prompt_focus_value_empty_line_skips() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut out = Vec::new();
        assert_eq!(prompt_focus_value(&mut input, &mut out).unwrap(), None);
    }

    #[test]
    fn test_prompt_focus_value_negative_integer() {
        let mut input = Cursor::new(b"-5\n".to_vec());
        let mut out = Vec::new();
        assert_eq!(prompt_focus_value(&mut input, &mut out).unwrap(), Some(-5));
    }
}
