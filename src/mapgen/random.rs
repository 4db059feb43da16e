//! # Random Test Case Generation
//!
//! Builds random but well-formed cases: every composed color only refers to
//! colors declared before it, every cost is non-negative, and every wormhole
//! joins two existing galaxies.

use crate::input::{CaseInput, ColorDecl, EnergyDecl, GalaxyDecl, WormholeDecl};
use rand::seq::{IndexedRandom, index};
use rand::{Rng, SeedableRng};

const PALETTE: &[&str] = &[
    "Red", "Green", "Blue", "Cyan", "Magenta", "Yellow", "Black", "White",
];

#[derive(Debug, Clone)]
pub struct GenParams {
    pub num_primary: usize,
    pub num_composed: usize,
    pub num_galaxies: usize,
    /// Each galaxy gets between 0 and this many recovery offers.
    pub max_energies: usize,
    pub num_wormholes: usize,
    /// Costs are drawn from `0..=max_cost`.
    pub max_cost: i64,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            num_primary: 3,
            num_composed: 2,
            num_galaxies: 10,
            max_energies: 2,
            num_wormholes: 20,
            max_cost: 100,
        }
    }
}

fn primary_name(i: usize) -> String {
    match PALETTE.get(i) {
        Some(name) => name.to_string(),
        None => format!("Primary{}", i),
    }
}

/// Generates one case. A fixed `seed` always gives the same case.
pub fn generate(params: &GenParams, seed: Option<u64>) -> CaseInput {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };

    let mut colors = (0..params.num_primary)
        .map(|i| ColorDecl {
            name: primary_name(i),
            components: vec![],
        })
        .collect::<Vec<_>>();
    // A composed color needs something to be composed of.
    if !colors.is_empty() {
        for j in 0..params.num_composed {
            let k = rng.random_range(1..=colors.len().min(3));
            let components = index::sample(&mut rng, colors.len(), k)
                .into_iter()
                .map(|i| colors[i].name.clone())
                .collect();
            colors.push(ColorDecl {
                name: format!("Mix{}", j),
                components,
            });
        }
    }

    let galaxies = (0..params.num_galaxies)
        .map(|_| {
            let count = if colors.is_empty() {
                0
            } else {
                rng.random_range(0..=params.max_energies)
            };
            let energies = (0..count)
                .filter_map(|_| {
                    let color = colors.choose(&mut rng)?.name.clone();
                    let cost = rng.random_range(0..=params.max_cost.max(0));
                    Some(EnergyDecl { color, cost })
                })
                .collect();
            GalaxyDecl { energies }
        })
        .collect();

    let mut wormholes = vec![];
    if params.num_galaxies > 0 && !colors.is_empty() {
        for _ in 0..params.num_wormholes {
            let Some(color) = colors.choose(&mut rng) else {
                break;
            };
            wormholes.push(WormholeDecl {
                color: color.name.clone(),
                origin: rng.random_range(0..params.num_galaxies),
                destination: rng.random_range(0..params.num_galaxies),
            });
        }
    }

    CaseInput {
        colors,
        galaxies,
        wormholes,
    }
}
