use std::io::{self, BufRead, Write};

use log::info;
use replay_core::{Playback, Step};

use crate::{
    config::DisplayConfig,
    render::{render_net, render_status},
};

fn draw(playback: &Playback, display: &DisplayConfig, output: &mut impl Write) -> io::Result<()> {
    writeln!(
        output,
        "{}",
        render_net(playback.visual(), display.sticker_width)
    )?;
    writeln!(output, "{}", render_status(playback, display.describe_moves))?;
    output.flush()
}

/// Step through the solution, one move per line of input. Stops on `q` or at
/// the end of the input; lines after the last move only redraw the solved
/// cube.
pub fn run(
    playback: &mut Playback,
    display: &DisplayConfig,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    draw(playback, display, &mut output)?;

    let mut line = String::new();
    loop {
        if !playback.is_finished() {
            write!(output, "[Enter] next move, [q] quit: ")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        if let Step::Skipped { token, error, .. } = playback.advance() {
            writeln!(output, "Skipped `{token}`: {error}")?;
        }

        draw(playback, display, &mut output)?;
    }

    info!(target: "session", "Stopped at move {} of {}", playback.cursor(), playback.len());

    Ok(())
}
