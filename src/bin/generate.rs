use clap::Parser;
use wormholes::input;
use wormholes::mapgen::random::{GenParams, generate};

#[derive(Parser)]
struct Cli {
    #[clap(long, short = 't', default_value = "1")]
    cases: usize,
    #[clap(long, short = 'n', default_value = "10")]
    galaxies: usize,
    #[clap(long, short = 'p', default_value = "3")]
    primaries: usize,
    #[clap(long, short = 'c', default_value = "2")]
    composed: usize,
    #[clap(long, short = 'e', default_value = "2")]
    max_energies: usize,
    #[clap(long, short = 'w', default_value = "20")]
    wormholes: usize,
    #[clap(long, default_value = "100")]
    max_cost: i64,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// Emit JSON instead of the token format.
    #[clap(long, default_value_t = false)]
    json: bool,
    #[clap(long, default_value_t = false)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.primaries > wormholes::color::MAX_PRIMARY_COLORS {
        anyhow::bail!(
            "At most {} primary colors are supported",
            wormholes::color::MAX_PRIMARY_COLORS
        );
    }
    let params = GenParams {
        num_primary: args.primaries,
        num_composed: args.composed,
        num_galaxies: args.galaxies,
        max_energies: args.max_energies,
        num_wormholes: args.wormholes,
        max_cost: args.max_cost,
    };
    // Case i uses seed + i so a seeded file is reproducible case by case.
    let cases = (0..args.cases)
        .map(|i| generate(&params, args.seed.map(|s| s.wrapping_add(i as u64))))
        .collect::<Vec<_>>();
    if args.json {
        if args.compact {
            println!("{}", serde_json::to_string(&cases)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&cases)?);
        }
    } else {
        print!("{}", input::to_text(&cases));
    }
    Ok(())
}
