use std::fmt::Write;

use owo_colors::OwoColorize;
use replay_core::{Playback, Status, VisualCube};

/// Paint the unfolded net of the cube, one terminal line per sticker row.
pub fn render_net(cube: &VisualCube, sticker_width: usize) -> String {
    let sticker = " ".repeat(sticker_width.max(1));
    let mut out = String::new();

    for row in cube.net() {
        for cell in row {
            match cell {
                Some(color) => {
                    let (r, g, b) = color.rgb();
                    // Writing to a `String` can't fail
                    let _ = write!(out, "{}", sticker.on_truecolor(r, g, b));
                }
                None => out.push_str(&sticker),
            }
        }
        out.push('\n');
    }

    out
}

/// The status line shown under the net, with a description of the next face
/// turn when `describe` is set.
pub fn render_status(playback: &Playback, describe: bool) -> String {
    let status = playback.status();

    let mut out = match status {
        Status::Pending { .. } => status.to_string(),
        Status::Solved => status.to_string().green().bold().to_string(),
    };

    if let Some(description) = playback.description().filter(|_| describe) {
        out.push('\n');
        out.push_str(&description);
    }

    out
}
