use std::{
    fs,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::{Child, ChildStdin, ChildStdout, Command, Stdio},
    thread::available_parallelism,
};

use itertools::Itertools;
use log::{debug, info, warn};
use replay_core::{FaceletString, SolveFailed, SolvingOracle};

use crate::config::OracleConfig;

/// A two-phase solver process, started on the first request and kept alive
/// for later ones.
pub struct TwophaseOracle {
    config: OracleConfig,
    process: Option<Process>,
}

struct Process {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl TwophaseOracle {
    pub fn new(config: OracleConfig) -> TwophaseOracle {
        TwophaseOracle {
            config,
            process: None,
        }
    }

    fn table_dir(&self) -> io::Result<PathBuf> {
        if let Some(dir) = &self.config.table_dir {
            return Ok(dir.clone());
        }

        let mut cache = dirs::cache_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "No cache directory for the solver tables, set `oracle.table_dir`",
            )
        })?;
        cache.push("twophase-tables");
        Ok(cache)
    }

    fn spawn(&self) -> io::Result<Process> {
        // The solver dumps its tables in its current directory
        let tables = self.table_dir()?;
        fs::create_dir_all(&tables)?;

        let threads = match self.config.threads {
            Some(threads) => threads,
            None => match available_parallelism() {
                Ok(v) => v.get(),
                Err(e) => {
                    warn!(target: "twophase", "Failed to get available parallelism; defaulting to 1: {e}");
                    1
                }
            },
        };

        info!(
            target: "twophase",
            "Starting {:?}: tables={tables:?} threads={threads}",
            self.config.program
        );

        let mut child = Command::new(&self.config.program)
            .current_dir(tables)
            .args(["-c", "-m"])
            .arg(self.config.max_length.to_string())
            .arg("-t")
            .arg(threads.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("The solver has no stdin"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("The solver has no stdout"))?;

        Ok(Process {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

/*
The solver's prompt looks like

```
This is rob-twophase v2.0; copyright Elias Frantar 2020.

Loading tables ...
Done. 0.518s

Enter >>solve FACECUBE<< to solve, >>scramble<< to scramble or >>bench<< to benchmark.

Ready!
solve LBDLULDDURDRRRFRURBFFRFBFRDLDBDDBDFBBULRLFFBUFLUUBUULL
30.177ms
R F2 R' U R U2 F2 U2 F' D' R D2 L2 D2 L' U2 F2 (17)
Ready!
```
*/

fn read_line(stdout: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if stdout.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "The solver exited unexpectedly",
        ));
    }
    Ok(line)
}

/// Lines like `30.177ms`
fn is_timing(line: &str) -> bool {
    line.strip_suffix("ms")
        .is_some_and(|v| !v.is_empty() && v.parse::<f64>().is_ok())
}

/// Remove the move count the solver appends, `R U2 F' (3)` becomes
/// `R U2 F'`.
fn strip_move_count(line: &str) -> String {
    line.replace(['(', ')'], "")
        .split_whitespace()
        .filter(|v| v.chars().next().is_some_and(|v| !v.is_ascii_digit()))
        .join(" ")
}

/// Read the answer to one `solve` request
fn read_answer(stdout: &mut impl BufRead) -> Result<String, SolveFailed> {
    loop {
        let line = read_line(stdout)?;
        let line = line.trim();

        if line.starts_with("Error") {
            return Err(SolveFailed::Rejected(line.to_owned()));
        }

        if line.is_empty() || is_timing(line) {
            continue;
        }

        return Ok(strip_move_count(line));
    }
}

fn wait_until_ready(stdout: &mut impl BufRead) -> io::Result<()> {
    loop {
        if read_line(stdout)?.trim() == "Ready!" {
            break Ok(());
        }
    }
}

impl SolvingOracle for TwophaseOracle {
    fn solve_text(&mut self, facelets: &FaceletString) -> Result<String, SolveFailed> {
        let process = match self.process.take() {
            Some(process) => process,
            None => self.spawn()?,
        };
        let process = self.process.insert(process);

        wait_until_ready(&mut process.stdout)?;

        writeln!(process.stdin, "solve {facelets}")?;
        process.stdin.flush()?;

        let answer = read_answer(&mut process.stdout)?;
        debug!(target: "twophase", "Answer: {answer:?}");

        Ok(answer)
    }
}

impl Drop for TwophaseOracle {
    fn drop(&mut self) {
        if let Some(process) = &mut self.process {
            if let Err(e) = process.child.kill() {
                debug!(target: "twophase", "Failed to stop the solver: {e}");
            }
            let _ = process.child.wait();
        }
    }
}
