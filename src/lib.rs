// # Wormholes: color-gated shortest paths between galaxies
//
// Galaxies are joined by one-way wormholes. Passing through a wormhole needs a
// set of colors and uses them up; colors are bought at galaxies through
// recovery offers. This crate computes, for every galaxy, the cheapest total
// cost of reaching it from galaxy 0.
//
// The search itself lives in `dijkstra`; the other modules read and write the
// contest-style text format, generate random cases and draw them.

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// Color names to bitmasks, one registry per test case.
pub mod color;

/// Galaxies, recovery offers, wormholes and the (galaxy, inventory) state.
pub mod universe;

/// Label-setting shortest paths over the state space.
pub mod dijkstra;

/// Reference answers by exhaustive relaxation, for cross-checking.
pub mod verify;

/// Reading test cases from the token format or JSON.
pub mod input;

/// Writing and reading `Case #n:` answer lines.
pub mod output;

/// Utilities for generating SVG pictures of test cases.
pub mod svg;

/// Tools for generating test cases.
pub mod mapgen {
    /// A module for generating random test cases.
    pub mod random;
}

pub use dijkstra::{Distance, Solver, solve};
pub use universe::{Energy, State, Universe, Wormhole};

/// Solves every case of an input file, in order.
///
/// Fails on the first case whose colors or galaxy indices do not resolve.
pub fn solve_all(
    cases: &[input::CaseInput],
    solver: &Solver,
) -> Result<Vec<Vec<Option<Distance>>>, input::InputError> {
    cases
        .iter()
        .map(|case| case.build().map(|universe| solver.solve(&universe)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setmin_only_lowers() {
        let mut x = 5u64;
        assert!(x.setmin(3));
        assert!(!x.setmin(4));
        assert_eq!(x, 3);
        assert!(x.setmax(9));
        assert_eq!(x, 9);
    }

    #[test]
    fn solve_all_stops_at_a_bad_case() {
        let cases = input::parse("2\n1\nRed 0\n1\n0\n0\n0\n1\n1 Red 1\n0\n").unwrap();
        assert!(solve_all(&cases, &Solver::default()).is_err());
        assert_eq!(
            solve_all(&cases[..1], &Solver::default()).unwrap(),
            vec![vec![Some(0)]]
        );
    }
}
