mod config;
mod render;
mod session;
mod twophase;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use env_logger::TimestampPrecision;
use log::{LevelFilter, info, warn};
use replay_core::{ColorNotationMap, FaceletString, Playback, ScanResult, SolveFailed, oracle};

use crate::{config::ReplayConfig, twophase::TwophaseOracle};

/// Solve a scanned cube and replay the solution one move at a time
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cubereplay.toml` when it exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the facelet string of a scan.
    Encode {
        /// The scan to encode, a TOML table of six 3x3 color grids
        scan: PathBuf,
    },
    /// Ask the solver for a solution and print it.
    Solve {
        /// The scan to solve
        scan: PathBuf,
    },
    /// Step through the solution of a scan in the terminal.
    Replay {
        /// The scan to solve
        scan: PathBuf,
        /// Replay this solution instead of asking the solver, e.g. "R U' F2".
        #[arg(long, short)]
        solution: Option<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = ReplayConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode { scan } => {
            let (_, facelets) = encode(&scan)?;
            println!("{facelets}");
        }
        Commands::Solve { scan } => {
            let (_, facelets) = encode(&scan)?;
            let solution = oracle::solve(&mut TwophaseOracle::new(config.oracle), &facelets)?;
            println!("{solution}");
        }
        Commands::Replay { scan, solution } => {
            let (map, facelets) = encode(&scan)?;

            let solution = match solution {
                Some(solution) => oracle::solve(
                    &mut |_: &FaceletString| -> Result<String, SolveFailed> {
                        Ok(solution.clone())
                    },
                    &facelets,
                )?,
                None => oracle::solve(&mut TwophaseOracle::new(config.oracle), &facelets)?,
            };

            let mut playback = Playback::new(map, solution);

            let mismatches = playback.cube().facelet_string().mismatches(&facelets);
            if mismatches > 0 {
                warn!(
                    target: "replay",
                    "The solution does not start from the scanned cube: {mismatches} stickers differ"
                );
            }

            session::run(
                &mut playback,
                &config.display,
                io::stdin().lock(),
                io::stdout().lock(),
            )?;
        }
    }

    Ok(())
}

/// Read a scan from disk and write it in solver notation
fn encode(path: &Path) -> color_eyre::Result<(ColorNotationMap, FaceletString)> {
    let text = fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {path:?}"))?;
    let scan = toml::from_str::<ScanResult>(&text)
        .wrap_err_with(|| format!("Failed to parse scan file {path:?}"))?;

    let map = ColorNotationMap::resolve(&scan)?;
    let facelets = FaceletString::encode(&scan, &map)?;

    info!(target: "replay", "Scanned cube: {facelets}");

    Ok((map, facelets))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_replay_with_solution() {
        let cli = Cli::try_parse_from([
            "cubereplay",
            "-ll",
            "replay",
            "scan.toml",
            "--solution",
            "R U' F2",
        ])
        .unwrap();

        assert_eq!(cli.log_level, 2);
        assert!(matches!(
            cli.command,
            Commands::Replay { solution: Some(v), .. } if v == "R U' F2"
        ));
    }
}
