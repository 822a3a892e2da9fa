//! End-to-end dialogue scenarios, run against in-memory buffers instead
//! of a terminal and a recording apply function instead of a device.

use camfocus::errors::CameraError;
use camfocus::interact::{self, AdjustOutcome};
use camfocus::types::{DeviceDescriptor, FocusMode, FocusRange, FocusState};
use std::io::Cursor;

fn devices(names: &[&str]) -> Vec<DeviceDescriptor> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| DeviceDescriptor::new(i.to_string(), name.to_string()))
        .collect()
}

#[test]
fn test_selecting_index_one_binds_second_device() {
    let list = devices(&["USB Camera", "Webcam Pro"]);
    let mut input = Cursor::new(b"1\n".to_vec());
    let mut out = Vec::new();

    interact::render_menu(&mut out, &list).unwrap();
    let index = interact::prompt_camera_index(&mut input, &mut out, list.len()).unwrap();

    assert_eq!(index, 1);
    assert_eq!(list[index].name, "Webcam Pro");

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("    0: USB Camera\n"));
    assert!(text.contains("    1: Webcam Pro\n"));
}

#[test]
fn test_out_of_bounds_selection_reprompts() {
    let list = devices(&["USB Camera", "Webcam Pro"]);
    let mut input = Cursor::new(b"5\nx\n0\n".to_vec());
    let mut out = Vec::new();

    let index = interact::prompt_camera_index(&mut input, &mut out, list.len()).unwrap();
    assert_eq!(index, 0);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Select camera index: ").count(), 3);
}

#[test]
fn test_focus_report_block() {
    let range = FocusRange::new(0, 255, 5, 60);
    let state = FocusState {
        value: 45,
        mode: FocusMode::Auto,
    };
    let mut out = Vec::new();

    interact::render_focus_report(&mut out, &range, &state).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Camera Focus:\n\
         \x20   Range: 0 - 255 with step size 5\n\
         \x20   Default: 60\n\
         \x20   Current value: 45\n\
         \x20   Current mode: Auto\n"
    );
}

#[test]
fn test_adjust_snaps_and_writes_once() {
    let range = FocusRange::new(0, 100, 5, 0);
    let mut input = Cursor::new(b"52\n".to_vec());
    let mut out = Vec::new();
    let mut writes = Vec::new();

    let outcome = interact::adjust_focus(&mut input, &mut out, &range, |value| {
        writes.push(value);
        Ok(())
    })
    .unwrap();

    assert_eq!(outcome, AdjustOutcome::Adjusted(50));
    assert_eq!(writes, vec![50]);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Setting focus to: 50\n"));
}

#[test]
fn test_adjust_empty_input_skips_write() {
    let range = FocusRange::new(0, 255, 1, 0);
    let mut input = Cursor::new(b"\n".to_vec());
    let mut out = Vec::new();
    let mut writes: Vec<i32> = Vec::new();

    let outcome = interact::adjust_focus(&mut input, &mut out, &range, |value| {
        writes.push(value);
        Ok(())
    })
    .unwrap();

    assert_eq!(outcome, AdjustOutcome::Skipped);
    assert!(writes.is_empty());

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Setting focus to"));
}

#[test]
fn test_adjust_rejects_out_of_range_without_write() {
    let range = FocusRange::new(10, 50, 10, 10);
    let mut input = Cursor::new(b"200\n".to_vec());
    let mut out = Vec::new();
    let mut writes: Vec<i32> = Vec::new();

    let outcome = interact::adjust_focus(&mut input, &mut out, &range, |value| {
        writes.push(value);
        Ok(())
    })
    .unwrap();

    assert_eq!(outcome, AdjustOutcome::Rejected);
    assert!(writes.is_empty());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Focus value must be between 10 and 50\n"));
}

#[test]
fn test_adjust_reprompts_on_junk_then_writes() {
    let range = FocusRange::new(0, 100, 5, 0);
    let mut input = Cursor::new(b"fifty\n52\n".to_vec());
    let mut out = Vec::new();
    let mut writes = Vec::new();

    let outcome = interact::adjust_focus(&mut input, &mut out, &range, |value| {
        writes.push(value);
        Ok(())
    })
    .unwrap();

    assert_eq!(outcome, AdjustOutcome::Adjusted(50));
    assert_eq!(writes, vec![50]);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Enter an integer focus value or press Enter to skip"));
}

#[test]
fn test_adjust_propagates_device_write_failure() {
    let range = FocusRange::new(0, 100, 5, 0);
    let mut input = Cursor::new(b"50\n".to_vec());
    let mut out = Vec::new();

    let result = interact::adjust_focus(&mut input, &mut out, &range, |_| {
        Err(CameraError::ControlError("device detached".to_string()))
    });

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("device detached"));
}
