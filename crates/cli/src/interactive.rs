//! Line-driven evaluation loop.
//!
//! Each accepted line changes the inputs and runs a complete cycle, fresh
//! feed request included. A cycle finishes before the next line is read.

use radrisk_core::error::{RadriskError, RadriskResult};
use radrisk_core::{MissionDuration, ShieldingMaterial};
use radrisk_provider::FluxProvider;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "\
Enter `<days> [material]` to estimate, e.g. `365 aluminum`.
A bare material name keeps the current duration. Materials: none, aluminum, polyethylene.
`help` shows this text, `quit` exits.";

/// Current calculator inputs, carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inputs {
    pub days: MissionDuration,
    pub material: ShieldingMaterial,
}

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Evaluate(Inputs),
    Help,
    Quit,
    Blank,
}

fn parse_line(line: &str, current: Inputs) -> RadriskResult<Line> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Ok(Line::Blank),
        [cmd] if matches!(cmd.to_ascii_lowercase().as_str(), "quit" | "exit" | "q") => {
            Ok(Line::Quit)
        }
        [cmd] if matches!(cmd.to_ascii_lowercase().as_str(), "help" | "?") => Ok(Line::Help),
        [single] => match single.parse::<MissionDuration>() {
            Ok(days) => Ok(Line::Evaluate(Inputs { days, ..current })),
            Err(_) => {
                let material = ShieldingMaterial::from_name(single).map_err(|_| {
                    RadriskError::InvalidInput(format!(
                        "{single:?} is neither a day count (1-1000) nor a shielding material"
                    ))
                })?;
                Ok(Line::Evaluate(Inputs {
                    material,
                    ..current
                }))
            }
        },
        [days, material] => Ok(Line::Evaluate(Inputs {
            days: days.parse()?,
            material: ShieldingMaterial::from_name(material)?,
        })),
        [_, _, extra, ..] => Err(RadriskError::InvalidInput(format!(
            "unexpected trailing input {extra:?}"
        ))),
    }
}

fn prompt<W: Write>(out: &mut W, current: Inputs) -> std::io::Result<()> {
    write!(
        out,
        "[{} days, {}] > ",
        current.days.days(),
        current.material
    )?;
    out.flush()
}

/// Reads lines from `input` until EOF or `quit`. Returns the number of cycles run.
pub async fn run<R, W>(provider: &dyn FluxProvider, input: R, mut out: W) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut current = Inputs::default();
    let mut cycles = 0usize;
    let mut lines = input.lines();

    writeln!(out, "{HELP}")?;
    prompt(&mut out, current)?;

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line, current) {
            Ok(Line::Quit) => break,
            Ok(Line::Blank) => {}
            Ok(Line::Help) => writeln!(out, "{HELP}")?,
            Ok(Line::Evaluate(inputs)) => {
                current = inputs;
                let report =
                    radrisk_estimator::run_cycle(provider, inputs.days, inputs.material).await;
                write!(out, "{}", report.render())?;
                cycles += 1;
            }
            Err(e) => {
                tracing::debug!(error = %e, line = %line, "rejected input line");
                writeln!(out, "error: {e}")?;
            }
        }
        prompt(&mut out, current)?;
    }

    writeln!(out)?;
    out.flush()?;
    tracing::info!(cycles, "interactive session ended");
    Ok(cycles)
}
