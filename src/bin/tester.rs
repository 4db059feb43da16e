use anyhow::Context;
use clap::Parser;
use wormholes::dijkstra::Distance;
use wormholes::{Solver, input, output};

/// Runs a solver command on an input file and judges its output.
#[derive(Parser, Debug)]
struct Cli {
    /// The shell command to run (e.g., the solution binary)
    cmd: String,
    /// Path to the input file
    input: String,
    /// Path to the output file (will be created)
    output: String,
}

/// Compares the produced lines with the expected answers. Returns the first problem found.
fn judge(expected: &[Vec<Option<Distance>>], produced: &str) -> Result<(), String> {
    let lines = produced
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>();
    if lines.len() != expected.len() {
        return Err(format!(
            "expected {} lines, got {}",
            expected.len(),
            lines.len()
        ));
    }
    for (i, (line, want)) in lines.iter().zip(expected).enumerate() {
        let (case, got) = output::parse_case_line(line).map_err(|e| e.to_string())?;
        if case != i + 1 {
            return Err(format!("line {} is labelled Case #{}", i + 1, case));
        }
        if &got != want {
            return Err(format!(
                "case #{}:\n  expected: {}\n  actual  : {}",
                case,
                output::format_case(case, want),
                line.trim()
            ));
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let input_file =
        std::fs::File::open(&cli.input).with_context(|| format!("No such input: {}", cli.input))?;
    let output_file =
        std::fs::File::create(&cli.output).with_context(|| format!("Cannot create {}", cli.output))?;
    let stime = std::time::Instant::now();
    let status = std::process::Command::new("sh")
        .arg("-c")
        .arg(&cli.cmd)
        .stdin(std::process::Stdio::from(input_file))
        .stdout(std::process::Stdio::from(output_file))
        .stderr(std::process::Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute command: {}", cli.cmd))?;
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    if !status.success() {
        if status.code() == Some(124) {
            eprintln!("!log status TLE");
        } else {
            eprintln!("!log status RE");
        }
        return Ok(());
    }

    let text = std::fs::read_to_string(&cli.input)?;
    let cases = input::parse(&text)?;
    let expected = wormholes::solve_all(&cases, &Solver::default())?;
    let produced = std::fs::read_to_string(&cli.output)?;
    match judge(&expected, &produced) {
        Ok(()) => {
            eprintln!("!log status AC");
            eprintln!("!log cases {}", cases.len());
        }
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("!log status WA");
        }
    }
    Ok(())
}
