use anyhow::{Context, bail};
use clap::Parser;
use std::path::PathBuf;
use wormholes::{input, solve, svg};

/// Draws one case of an input file as SVG, annotated with its answers.
#[derive(Parser, Debug)]
struct Cli {
    input: PathBuf,
    /// 1-based case number.
    #[clap(long, short = 'k', default_value_t = 1)]
    case: usize,
    /// Where to write the SVG. Prints to stdout when omitted.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let cases = input::parse(&text)?;
    if cli.case == 0 || cli.case > cases.len() {
        bail!("Case #{} does not exist ({} cases)", cli.case, cases.len());
    }
    let case = &cases[cli.case - 1];
    let answers = solve(&case.build()?);
    let doc = svg::render(case, &answers);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, doc).with_context(|| format!("Cannot create {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", doc),
    }
    Ok(())
}
