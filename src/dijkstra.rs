//! # Shortest paths over (galaxy, inventory) states
//!
//! Colors are consumable, so the cost of reaching a galaxy depends on what we
//! carry. The search therefore runs Dijkstra over pairs of galaxy and
//! inventory mask. Wormholes are free edges and recovery offers cost energy;
//! no edge is negative, so a state popped from the frontier is final.
//!
//! The frontier is a `BinaryHeap` with lazy deletion: an improved label is
//! pushed again and stale entries are skipped when popped.

use crate::SetMinMax;
use crate::universe::{State, Universe};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Total recovery cost of a path. Offer costs are at most `u64::MAX` and a
/// shortest path visits fewer than `2^64` states, so sums never reach `INF`.
pub type Distance = u128;

/// Label of a state that has not been reached.
pub const INF: Distance = Distance::MAX;

/// Above this many states the solver switches from a flat table to a hash map.
/// A dense state takes 17 bytes, so the flat table stays under 40 MB.
pub const DEFAULT_MAX_DENSE_STATES: usize = 1 << 21;

/// Distance labels and settled flags over the state space.
pub trait Labels {
    /// Best known cost of `state`, `INF` if unreached.
    fn get(&self, state: State) -> Distance;
    /// Lowers the label of `state` to `dist`. Returns `true` if it improved.
    fn improve(&mut self, state: State, dist: Distance) -> bool;
    /// Marks `state` as final. Returns `false` if it already was.
    fn settle(&mut self, state: State) -> bool;
    fn num_settled(&self) -> usize;
    /// Every reached state with its label, in no particular order.
    fn reached(&self) -> Box<dyn Iterator<Item = (State, Distance)> + '_>;
}

/// Flat arrays indexed by `State::encode`. Preallocates the whole state space.
pub struct DenseLabels {
    num_primary_colors: usize,
    dist: Vec<Distance>,
    settled: Vec<bool>,
    num_settled: usize,
}

impl DenseLabels {
    pub fn new(num_states: usize, num_primary_colors: usize) -> Self {
        Self {
            num_primary_colors,
            dist: vec![INF; num_states],
            settled: vec![false; num_states],
            num_settled: 0,
        }
    }
}

impl Labels for DenseLabels {
    fn get(&self, state: State) -> Distance {
        self.dist[state.encode(self.num_primary_colors)]
    }
    fn improve(&mut self, state: State, dist: Distance) -> bool {
        self.dist[state.encode(self.num_primary_colors)].setmin(dist)
    }
    fn settle(&mut self, state: State) -> bool {
        let done = self.settled[state.encode(self.num_primary_colors)].setmax(true);
        if done {
            self.num_settled += 1;
        }
        done
    }
    fn num_settled(&self) -> usize {
        self.num_settled
    }
    fn reached(&self) -> Box<dyn Iterator<Item = (State, Distance)> + '_> {
        Box::new(
            self.dist
                .iter()
                .enumerate()
                .filter(|&(_, &d)| d < INF)
                .map(|(code, &d)| (State::decode(code, self.num_primary_colors), d)),
        )
    }
}

/// Hash maps keyed by the composite state. Memory grows with reached states only.
#[derive(Default)]
pub struct SparseLabels {
    dist: FxHashMap<State, Distance>,
    settled: FxHashSet<State>,
}

impl Labels for SparseLabels {
    fn get(&self, state: State) -> Distance {
        self.dist.get(&state).copied().unwrap_or(INF)
    }
    fn improve(&mut self, state: State, dist: Distance) -> bool {
        match self.dist.get_mut(&state) {
            Some(old) => old.setmin(dist),
            None if dist < INF => {
                self.dist.insert(state, dist);
                true
            }
            None => false,
        }
    }
    fn settle(&mut self, state: State) -> bool {
        self.settled.insert(state)
    }
    fn num_settled(&self) -> usize {
        self.settled.len()
    }
    fn reached(&self) -> Box<dyn Iterator<Item = (State, Distance)> + '_> {
        Box::new(
            self.dist
                .iter()
                .filter(|&(_, &d)| d < INF)
                .map(|(&s, &d)| (s, d)),
        )
    }
}

/// Runs the label-setting search from `State::START` until the frontier drains.
pub fn run<L: Labels>(universe: &Universe, labels: &mut L) {
    if universe.num_galaxies() == 0 {
        return;
    }
    labels.improve(State::START, 0);
    let mut queue: BinaryHeap<Reverse<(Distance, State)>> = BinaryHeap::new();
    queue.push(Reverse((0, State::START)));
    while let Some(Reverse((dist, state))) = queue.pop() {
        if !labels.settle(state) {
            continue;
        }
        debug_assert_eq!(dist, labels.get(state));
        for (next, cost) in universe.moves(state) {
            let next_dist = dist + Distance::from(cost);
            if labels.improve(next, next_dist) {
                queue.push(Reverse((next_dist, next)));
            }
        }
    }
}

/// The finished search: a label for every reached state.
pub struct Distances {
    num_galaxies: usize,
    num_primary_colors: usize,
    labels: Box<dyn Labels>,
    dense: bool,
}

impl Distances {
    /// Cost of reaching exactly `state`, `None` if it is unreachable.
    pub fn get(&self, state: State) -> Option<Distance> {
        let inventories = 1usize << self.num_primary_colors;
        if state.galaxy >= self.num_galaxies || (state.inventory as usize) >= inventories {
            return None;
        }
        Some(self.labels.get(state)).filter(|&d| d < INF)
    }

    /// Minimum over all inventories of each galaxy.
    pub fn best_per_galaxy(&self) -> Vec<Option<Distance>> {
        let mut best = vec![INF; self.num_galaxies];
        for (state, dist) in self.labels.reached() {
            best[state.galaxy].setmin(dist);
        }
        best.into_iter().map(|d| Some(d).filter(|&d| d < INF)).collect()
    }

    pub fn num_settled(&self) -> usize {
        self.labels.num_settled()
    }

    pub fn is_dense(&self) -> bool {
        self.dense
    }
}

/// Chooses the label table for a universe and runs the search.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    pub max_dense_states: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_dense_states: DEFAULT_MAX_DENSE_STATES,
        }
    }
}

impl Solver {
    pub fn new(max_dense_states: usize) -> Self {
        Self { max_dense_states }
    }

    pub fn distances(&self, universe: &Universe) -> Distances {
        let num_galaxies = universe.num_galaxies();
        let (labels, dense): (Box<dyn Labels>, bool) = match universe.num_states() {
            Some(n) if n <= self.max_dense_states => {
                let mut labels = DenseLabels::new(n, universe.num_primary_colors);
                run(universe, &mut labels);
                (Box::new(labels), true)
            }
            _ => {
                let mut labels = SparseLabels::default();
                run(universe, &mut labels);
                (Box::new(labels), false)
            }
        };
        log::debug!(
            "dijkstra: galaxies={} colors={} table={} settled={}",
            num_galaxies,
            universe.num_primary_colors,
            if dense { "dense" } else { "sparse" },
            labels.num_settled()
        );
        Distances {
            num_galaxies,
            num_primary_colors: universe.num_primary_colors,
            labels,
            dense,
        }
    }

    pub fn solve(&self, universe: &Universe) -> Vec<Option<Distance>> {
        self.distances(universe).best_per_galaxy()
    }
}

/// Minimum recovery cost to reach every galaxy from galaxy 0, `None` if unreachable.
pub fn solve(universe: &Universe) -> Vec<Option<Distance>> {
    Solver::default().solve(universe)
}
