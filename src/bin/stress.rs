use clap::Parser;
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use wormholes::mapgen::random::{GenParams, generate};
use wormholes::{Solver, input, verify};

/// Cross-checks the Dijkstra engine against exhaustive relaxation on random cases.
#[derive(Parser, Debug)]
struct Args {
    #[clap(long, short = 'i', default_value_t = 1000)]
    iterations: usize,
    #[clap(long, short = 's', default_value_t = 0xC0FF_EE42)]
    seed: u64,
    #[clap(long, default_value_t = 8)]
    max_galaxies: usize,
    #[clap(long, default_value_t = 4)]
    max_primaries: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let mut rng = ChaCha12Rng::seed_from_u64(args.seed);
    let dense = Solver::default();
    let sparse = Solver::new(0);

    for iter in 0..args.iterations {
        let params = GenParams {
            num_primary: rng.random_range(0..=args.max_primaries),
            num_composed: rng.random_range(0..=3),
            num_galaxies: rng.random_range(1..=args.max_galaxies.max(1)),
            max_energies: rng.random_range(0..=3),
            num_wormholes: rng.random_range(0..=3 * args.max_galaxies),
            max_cost: rng.random_range(0..=50),
        };
        let case = generate(&params, Some(rng.random()));
        let universe = case.build()?;
        let expected = verify::solve_by_relaxation(&universe);
        for (name, solver) in [("dense", &dense), ("sparse", &sparse)] {
            let actual = solver.solve(&universe);
            if actual != expected {
                eprintln!("{}", input::to_text(std::slice::from_ref(&case)));
                eprintln!("expected: {:?}", expected);
                eprintln!("actual  : {:?} ({})", actual, name);
                eprintln!("!log status WA");
                anyhow::bail!("Mismatch at iteration {}", iter);
            }
        }
        if (iter + 1) % 100 == 0 {
            log::info!("{} / {} cases agree", iter + 1, args.iterations);
        }
    }
    eprintln!("!log status AC");
    eprintln!("!log cases {}", args.iterations);
    Ok(())
}
