use anyhow::{bail, Context, Result};
use camfocus::interact::{self, AdjustOutcome};
use camfocus::CameraSession;
use std::io;

fn main() -> Result<()> {
    camfocus::init_logging();

    let session =
        CameraSession::new().context("failed to acquire the platform media subsystem")?;

    let devices = session
        .list_devices()
        .context("failed to enumerate video capture devices")?;
    for device in &devices {
        println!("Found camera: {}", device.name);
    }
    if devices.is_empty() {
        bail!("No video capture devices found.");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    interact::render_menu(&mut out, &devices)?;
    let index = interact::prompt_camera_index(&mut input, &mut out, devices.len())?;
    let device = &devices[index];
    println!("Selected camera: {}", device.name);

    let mut focus = session
        .focus_control(device)
        .with_context(|| format!("no usable focus control on {}", device.name))?;

    let range = focus.range().context("failed to read the focus range")?;
    let state = focus.current().context("failed to read the focus state")?;
    interact::render_focus_report(&mut out, &range, &state)?;

    let outcome = interact::adjust_focus(&mut input, &mut out, &range, |value| {
        focus.set_manual(value)
    })?;

    match outcome {
        AdjustOutcome::Adjusted(value) => log::info!("focus set to {}", value),
        AdjustOutcome::Skipped => log::debug!("focus left unchanged"),
        AdjustOutcome::Rejected => log::debug!("requested focus value rejected, device untouched"),
    }

    Ok(())
}
