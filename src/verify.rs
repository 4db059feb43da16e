//! Slow reference answers for cross-checking the Dijkstra engine.
//!
//! Sweeps every state and every move until no label changes (Bellman-Ford).
//! Only the `Universe` model is shared with the engine.

use crate::SetMinMax;
use crate::dijkstra::Distance;
use crate::universe::{State, Universe};

/// Same contract as `dijkstra::solve`, in `O(states * moves * sweeps)` time.
pub fn solve_by_relaxation(universe: &Universe) -> Vec<Option<Distance>> {
    let n = universe.num_galaxies();
    if n == 0 {
        return vec![];
    }
    let k = universe.num_inventories();
    let mut dist = vec![vec![None::<Distance>; k]; n];
    dist[0][0] = Some(0);
    let mut updated = true;
    while updated {
        updated = false;
        for galaxy in 0..n {
            for inventory in 0..k {
                let Some(d) = dist[galaxy][inventory] else {
                    continue;
                };
                let state = State {
                    galaxy,
                    inventory: inventory as u32,
                };
                for (next, cost) in universe.moves(state) {
                    let nd = d + Distance::from(cost);
                    let slot = &mut dist[next.galaxy][next.inventory as usize];
                    match slot {
                        Some(old) => updated |= old.setmin(nd),
                        None => {
                            *slot = Some(nd);
                            updated = true;
                        }
                    }
                }
            }
        }
    }
    dist.into_iter()
        .map(|row| row.into_iter().flatten().min())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_agrees_on_small_chain() {
        let mut u = Universe::new(4, 2);
        u.add_energy(0, 3, 0b01);
        u.add_energy(1, 2, 0b10);
        u.add_wormhole(0, 1, 0b01);
        u.add_wormhole(1, 2, 0b10);
        u.add_wormhole(3, 0, 0);
        assert_eq!(
            solve_by_relaxation(&u),
            vec![Some(0), Some(3), Some(5), None]
        );
    }

    #[test]
    fn reference_handles_no_galaxies() {
        assert!(solve_by_relaxation(&Universe::new(0, 1)).is_empty());
    }
}
