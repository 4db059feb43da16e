//! # Test case input
//!
//! Two encodings of the same data are accepted:
//!
//! * the whitespace-separated token format (case count, then per case the
//!   color table, the recovery offers of each galaxy and the wormholes), read
//!   with `proconio`;
//! * a JSON array of case objects (or a single object), read with `serde_json`.
//!
//! Both produce [`CaseInput`], which still refers to colors by name.
//! [`CaseInput::build`] resolves the names through a fresh
//! [`ColorRegistry`] and yields the [`Universe`] the solver works on.

use crate::color::{ColorError, ColorRegistry};
use crate::universe::Universe;
use itertools::Itertools;
use proconio::input;
use proconio::source::once::OnceSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDecl {
    pub name: String,
    /// Empty for a primary color.
    #[serde(default)]
    pub components: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyDecl {
    pub color: String,
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalaxyDecl {
    #[serde(default)]
    pub energies: Vec<EnergyDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormholeDecl {
    pub color: String,
    pub origin: usize,
    pub destination: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseInput {
    #[serde(default)]
    pub colors: Vec<ColorDecl>,
    pub galaxies: Vec<GalaxyDecl>,
    #[serde(default)]
    pub wormholes: Vec<WormholeDecl>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("galaxy {galaxy} offers color `{color}` at negative cost {cost}")]
    NegativeCost {
        galaxy: usize,
        color: String,
        cost: i64,
    },
    #[error("wormhole {index} ({origin} -> {destination}) leaves the {num_galaxies} galaxies")]
    GalaxyOutOfRange {
        index: usize,
        origin: usize,
        destination: usize,
        num_galaxies: usize,
    },
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl CaseInput {
    /// Resolves every color name and checks indices and costs.
    pub fn build(&self) -> Result<Universe, InputError> {
        let registry = self.registry()?;
        let n = self.galaxies.len();
        let mut universe = Universe::new(n, registry.num_primary_colors());
        for (galaxy, decl) in self.galaxies.iter().enumerate() {
            for e in &decl.energies {
                if e.cost < 0 {
                    return Err(InputError::NegativeCost {
                        galaxy,
                        color: e.color.clone(),
                        cost: e.cost,
                    });
                }
                universe.add_energy(galaxy, e.cost as u64, registry.resolve(&e.color)?);
            }
        }
        for (index, w) in self.wormholes.iter().enumerate() {
            if w.origin >= n || w.destination >= n {
                return Err(InputError::GalaxyOutOfRange {
                    index,
                    origin: w.origin,
                    destination: w.destination,
                    num_galaxies: n,
                });
            }
            universe.add_wormhole(w.origin, w.destination, registry.resolve(&w.color)?);
        }
        Ok(universe)
    }

    /// The color table of this case alone.
    pub fn registry(&self) -> Result<ColorRegistry, ColorError> {
        let mut registry = ColorRegistry::new();
        for c in &self.colors {
            registry.declare(&c.name, &c.components)?;
        }
        Ok(registry)
    }
}

impl fmt::Display for CaseInput {
    /// Writes the case in the token format, without the leading case count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.colors.len())?;
        for c in &self.colors {
            if c.components.is_empty() {
                writeln!(f, "{} 0", c.name)?;
            } else {
                writeln!(f, "{} {} {}", c.name, c.components.len(), c.components.iter().join(" "))?;
            }
        }
        writeln!(f, "{}", self.galaxies.len())?;
        for g in &self.galaxies {
            write!(f, "{}", g.energies.len())?;
            for e in &g.energies {
                write!(f, " {} {}", e.color, e.cost)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", self.wormholes.len())?;
        for w in &self.wormholes {
            writeln!(f, "{} {} {}", w.color, w.origin, w.destination)?;
        }
        Ok(())
    }
}

/// Writes a whole input file in the token format.
pub fn to_text(cases: &[CaseInput]) -> String {
    let mut out = format!("{}\n", cases.len());
    for case in cases {
        out.push_str(&case.to_string());
    }
    out
}

fn read_case<R: BufRead>(src: &mut OnceSource<R>) -> CaseInput {
    input! { from &mut *src, num_colors: usize }
    let mut colors = Vec::with_capacity(num_colors);
    for _ in 0..num_colors {
        input! { from &mut *src, name: String, k: usize, components: [String; k] }
        colors.push(ColorDecl { name, components });
    }
    input! { from &mut *src, num_galaxies: usize }
    let mut galaxies = Vec::with_capacity(num_galaxies);
    for _ in 0..num_galaxies {
        input! { from &mut *src, num_offers: usize, offers: [(String, i64); num_offers] }
        let energies = offers
            .into_iter()
            .map(|(color, cost)| EnergyDecl { color, cost })
            .collect();
        galaxies.push(GalaxyDecl { energies });
    }
    input! { from &mut *src, num_wormholes: usize, wormholes: [(String, usize, usize); num_wormholes] }
    let wormholes = wormholes
        .into_iter()
        .map(|(color, origin, destination)| WormholeDecl {
            color,
            origin,
            destination,
        })
        .collect();
    CaseInput {
        colors,
        galaxies,
        wormholes,
    }
}

/// Reads the token format. Malformed tokens abort, as with any proconio reader.
pub fn parse_text(s: &str) -> Vec<CaseInput> {
    let mut src = OnceSource::from(s);
    input! { from &mut src, num_cases: usize }
    (0..num_cases).map(|_| read_case(&mut src)).collect()
}

pub fn parse_json(s: &str) -> Result<Vec<CaseInput>, InputError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum JsonIn {
        Many(Vec<CaseInput>),
        One(CaseInput),
    }
    Ok(match serde_json::from_str(s)? {
        JsonIn::Many(cases) => cases,
        JsonIn::One(case) => vec![case],
    })
}

/// Input starting with `[` or `{` is JSON, anything else is the token format.
pub fn parse(s: &str) -> Result<Vec<CaseInput>, InputError> {
    let s = s.trim_start();
    if s.starts_with('[') || s.starts_with('{') {
        parse_json(s)
    } else {
        Ok(parse_text(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::solve;

    const SAMPLE: &str = "\
3
1
Red 0
2
1 Red 5
0
1
Red 0 1
1
Red 0
2
0
0
1
Red 0 1
3
A 0
B 0
AB 2 A B
2
2 A 3 B 4
0
1
AB 0 1
";

    #[test]
    fn parses_token_format() {
        let cases = parse(SAMPLE).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].colors, vec![ColorDecl { name: "Red".into(), components: vec![] }]);
        assert_eq!(
            cases[0].galaxies[0].energies,
            vec![EnergyDecl { color: "Red".into(), cost: 5 }]
        );
        assert!(cases[0].galaxies[1].energies.is_empty());
        assert_eq!(
            cases[2].colors[2].components,
            vec!["A".to_string(), "B".to_string()]
        );
        assert_eq!(cases[2].wormholes[0].color, "AB");
    }

    #[test]
    fn sample_answers() {
        let answers = parse(SAMPLE)
            .unwrap()
            .iter()
            .map(|c| solve(&c.build().unwrap()))
            .collect::<Vec<_>>();
        assert_eq!(
            answers,
            vec![
                vec![Some(0), Some(5)],
                vec![Some(0), None],
                vec![Some(0), Some(7)],
            ]
        );
    }

    #[test]
    fn display_round_trips_through_the_reader() {
        let cases = parse(SAMPLE).unwrap();
        assert_eq!(parse_text(&to_text(&cases)), cases);
    }

    #[test]
    fn json_and_text_give_the_same_answers() {
        let cases = parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&cases).unwrap();
        let from_json = parse(&json).unwrap();
        assert_eq!(from_json, cases);
        let single = serde_json::to_string(&cases[2]).unwrap();
        let one = parse(&format!("  \n{}", single)).unwrap();
        assert_eq!(solve(&one[0].build().unwrap()), vec![Some(0), Some(7)]);
    }

    #[test]
    fn json_defaults_missing_lists() {
        let cases = parse(r#"{"galaxies": [{}, {"energies": []}]}"#).unwrap();
        let u = cases[0].build().unwrap();
        assert_eq!(u.num_galaxies(), 2);
        assert_eq!(u.num_primary_colors, 0);
    }

    #[test]
    fn undefined_color_is_reported() {
        let text = "1\n1\nRed 0\n1\n1 Blue 3\n0\n";
        let err = parse(text).unwrap()[0].build().unwrap_err();
        assert!(matches!(err, InputError::Color(ColorError::UndefinedColor(ref c)) if c == "Blue"));
    }

    #[test]
    fn negative_cost_is_reported() {
        let text = "1\n1\nRed 0\n1\n1 Red -3\n0\n";
        let err = parse(text).unwrap()[0].build().unwrap_err();
        assert!(matches!(err, InputError::NegativeCost { galaxy: 0, cost: -3, .. }));
    }

    #[test]
    fn wormhole_out_of_range_is_reported() {
        let text = "1\n0\n2\n0\n0\n1\nRed 0 5\n";
        let case = &parse(text).unwrap()[0];
        // The color is checked after the indices.
        assert!(matches!(
            case.build().unwrap_err(),
            InputError::GalaxyOutOfRange { origin: 0, destination: 5, num_galaxies: 2, .. }
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(parse("[{\"colors\": 3}]"), Err(InputError::Json(_))));
    }
}
