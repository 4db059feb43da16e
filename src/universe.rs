use crate::color::{MAX_PRIMARY_COLORS, Mask};

/// A recovery offer: paying `cost` at the galaxy adds `mask` to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Energy {
    pub cost: u64,
    pub mask: Mask,
}

/// A one-way wormhole, stored under its origin galaxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wormhole {
    pub destination: usize,
    pub mask: Mask,
}

/// A position in the search: where we are and which colors we hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub galaxy: usize,
    pub inventory: Mask,
}

impl State {
    pub const START: State = State {
        galaxy: 0,
        inventory: 0,
    };

    /// `galaxy * 2^num_primary_colors + inventory`.
    #[inline]
    pub fn encode(self, num_primary_colors: usize) -> usize {
        (self.galaxy << num_primary_colors) | self.inventory as usize
    }

    #[inline]
    pub fn decode(code: usize, num_primary_colors: usize) -> State {
        State {
            galaxy: code >> num_primary_colors,
            inventory: (code & ((1 << num_primary_colors) - 1)) as Mask,
        }
    }
}

/// One test case as the engine sees it: colors are already resolved to masks.
///
/// `num_primary_colors` is at most `MAX_PRIMARY_COLORS`, so every inventory
/// fits a `Mask` and `1 << num_primary_colors` does not overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Universe {
    pub energies: Vec<Vec<Energy>>,
    pub wormholes: Vec<Vec<Wormhole>>,
    pub num_primary_colors: usize,
}

impl Universe {
    pub fn new(num_galaxies: usize, num_primary_colors: usize) -> Self {
        debug_assert!(
            num_primary_colors <= MAX_PRIMARY_COLORS,
            "{} primary colors, at most {} fit a mask",
            num_primary_colors,
            MAX_PRIMARY_COLORS
        );
        Self {
            energies: vec![vec![]; num_galaxies],
            wormholes: vec![vec![]; num_galaxies],
            num_primary_colors,
        }
    }

    pub fn num_galaxies(&self) -> usize {
        self.energies.len()
    }

    /// Number of distinct inventories, `2^num_primary_colors`.
    pub fn num_inventories(&self) -> usize {
        1 << self.num_primary_colors
    }

    /// Size of the full state space, or `None` if it does not fit in `usize`.
    pub fn num_states(&self) -> Option<usize> {
        self.num_galaxies().checked_mul(self.num_inventories())
    }

    pub fn add_energy(&mut self, galaxy: usize, cost: u64, mask: Mask) {
        self.energies[galaxy].push(Energy { cost, mask });
    }

    pub fn add_wormhole(&mut self, origin: usize, destination: usize, mask: Mask) {
        self.wormholes[origin].push(Wormhole { destination, mask });
    }

    /// Every state reachable from `state` by one move, with the cost of that move.
    ///
    /// Wormholes come first (free, consume the required colors), then recovery offers.
    pub fn moves(&self, state: State) -> impl Iterator<Item = (State, u64)> + '_ {
        let State { galaxy, inventory } = state;
        let travel = self.wormholes[galaxy]
            .iter()
            .filter(move |w| w.mask & !inventory == 0)
            .map(move |w| {
                let next = State {
                    galaxy: w.destination,
                    inventory: inventory & !w.mask,
                };
                (next, 0)
            });
        let recover = self.energies[galaxy].iter().map(move |e| {
            let next = State {
                galaxy,
                inventory: inventory | e.mask,
            };
            (next, e.cost)
        });
        travel.chain(recover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_matches_flat_index() {
        let s = State {
            galaxy: 3,
            inventory: 0b101,
        };
        assert_eq!(s.encode(3), 3 * 8 + 5);
        assert_eq!(State::decode(29, 3), s);
        assert_eq!(State::START.encode(5), 0);
        // No colors at all: one inventory per galaxy.
        assert_eq!(State::decode(7, 0), State { galaxy: 7, inventory: 0 });
    }

    #[test]
    fn moves_respect_gating_and_consumption() {
        let mut u = Universe::new(3, 3);
        u.add_wormhole(0, 1, 0b011);
        u.add_wormhole(0, 2, 0b100);
        u.add_energy(0, 7, 0b010);
        let from = State {
            galaxy: 0,
            inventory: 0b111,
        };
        let moves = u.moves(from).collect::<Vec<_>>();
        assert_eq!(
            moves,
            vec![
                (State { galaxy: 1, inventory: 0b100 }, 0),
                (State { galaxy: 2, inventory: 0b011 }, 0),
                (State { galaxy: 0, inventory: 0b111 }, 7),
            ]
        );

        // Missing the blue bit closes the second wormhole.
        let from = State {
            galaxy: 0,
            inventory: 0b011,
        };
        let dests = u.moves(from).map(|(s, _)| s.galaxy).collect::<Vec<_>>();
        assert_eq!(dests, vec![1, 0]);
    }

    #[test]
    fn state_space_size() {
        let u = Universe::new(4, 3);
        assert_eq!(u.num_inventories(), 8);
        assert_eq!(u.num_states(), Some(32));
        assert_eq!(Universe::new(0, 2).num_states(), Some(0));
        let widest = Universe::new(1, MAX_PRIMARY_COLORS);
        assert_eq!(widest.num_inventories(), 1 << 31);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "primary colors")]
    fn too_many_colors_for_a_mask() {
        Universe::new(1, MAX_PRIMARY_COLORS + 1);
    }
}
