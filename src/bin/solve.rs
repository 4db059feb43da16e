use anyhow::Context;
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;
use wormholes::dijkstra::DEFAULT_MAX_DENSE_STATES;
use wormholes::{Solver, input, output};

/// Reads test cases and prints the cheapest cost of reaching every galaxy.
#[derive(Parser, Debug)]
struct Cli {
    /// Input file (token format or JSON). Reads stdin when omitted.
    input: Option<PathBuf>,
    /// Print the answers as a JSON array (`null` for unreachable) instead of `Case #n:` lines.
    #[clap(long, default_value_t = false)]
    json: bool,
    /// Largest state space searched with a flat table; larger ones use a hash map.
    #[clap(long, default_value_t = DEFAULT_MAX_DENSE_STATES)]
    max_dense_states: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("Failed to read stdin")?;
            s
        }
    };
    let cases = input::parse(&text).context("Failed to parse input")?;
    log::info!("read {} cases", cases.len());

    let solver = Solver::new(cli.max_dense_states);
    let stime = std::time::Instant::now();
    let mut all = Vec::with_capacity(cases.len());
    for (i, case) in cases.iter().enumerate() {
        let universe = case
            .build()
            .with_context(|| format!("Invalid case #{}", i + 1))?;
        let answers = solver.solve(&universe);
        log::debug!(
            "case #{}: {} galaxies, {} primary colors, {} reachable",
            i + 1,
            universe.num_galaxies(),
            universe.num_primary_colors,
            answers.iter().flatten().count()
        );
        all.push(answers);
    }

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if cli.json {
        writeln!(out, "{}", serde_json::to_string(&all)?)?;
    } else {
        for (i, answers) in all.iter().enumerate() {
            writeln!(out, "{}", output::format_case(i + 1, answers))?;
        }
    }
    out.flush()?;

    eprintln!("!log cases {}", cases.len());
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    Ok(())
}
