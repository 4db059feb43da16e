use crate::dijkstra::Distance;
use crate::input::CaseInput;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Definitions, Marker, Path, Text};

const RADIUS: f64 = 22.0;
const MIN_SIZE: f64 = 400.0;

#[derive(Debug, Clone)]
struct Body {
    pos: (f64, f64),
    vel: (f64, f64),
    force: (f64, f64),
}

/// Spring embedder: every pair of galaxies repels, wormholes pull their ends together.
struct Layout {
    bodies: Vec<Body>,
    linked: Vec<Vec<bool>>,
    repel: f64,
    attract: f64,
    damping: f64,
    dt: f64,
}

impl Layout {
    fn new(linked: Vec<Vec<bool>>) -> Self {
        let n = linked.len();
        let mut rng = ChaCha8Rng::seed_from_u64(n as u64);
        let side = (n as f64).sqrt().ceil().max(1.0) as usize;
        let bodies = (0..n)
            .map(|i| Body {
                pos: (
                    (i % side) as f64 * 80.0 + rng.random_range(-5.0..5.0),
                    (i / side) as f64 * 80.0 + rng.random_range(-5.0..5.0),
                ),
                vel: (0.0, 0.0),
                force: (0.0, 0.0),
            })
            .collect();
        Self {
            bodies,
            linked,
            repel: 2000.0,
            attract: 0.05,
            damping: 0.85,
            dt: 0.1,
        }
    }

    fn accumulate_forces(&mut self) {
        const EPS: f64 = 1e-6;
        let n = self.bodies.len();
        for i in 0..n {
            let mut f = (0.0, 0.0);
            let (xi, yi) = self.bodies[i].pos;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (xj, yj) = self.bodies[j].pos;
                let (dx, dy) = (xi - xj, yi - yj);
                let dist = (dx * dx + dy * dy).sqrt().max(EPS);
                let push = self.repel / (dist * dist);
                f.0 += push * dx / dist;
                f.1 += push * dy / dist;
                if self.linked[i][j] || self.linked[j][i] {
                    let pull = self.attract * dist;
                    f.0 -= pull * dx / dist;
                    f.1 -= pull * dy / dist;
                }
            }
            self.bodies[i].force = f;
        }
    }

    fn step(&mut self) -> bool {
        const STILL: f64 = 1e-3;
        self.accumulate_forces();
        let mut moving = false;
        for b in &mut self.bodies {
            b.vel.0 = (b.vel.0 + b.force.0 * self.dt) * self.damping;
            b.vel.1 = (b.vel.1 + b.force.1 * self.dt) * self.damping;
            b.pos.0 += b.vel.0 * self.dt;
            b.pos.1 += b.vel.1 * self.dt;
            moving |= b.vel.0.abs() > STILL || b.vel.1.abs() > STILL;
        }
        moving
    }

    fn run(&mut self, max_steps: usize) -> Vec<(f64, f64)> {
        for _ in 0..max_steps {
            if !self.step() {
                break;
            }
        }
        self.bodies.iter().map(|b| b.pos).collect()
    }
}

/// Centers the layout in a box at least `MIN_SIZE` wide and returns the box size.
fn fit(positions: &mut [(f64, f64)]) -> (f64, f64) {
    if positions.is_empty() {
        return (MIN_SIZE, MIN_SIZE);
    }
    let (min_x, max_x) = positions
        .iter()
        .map(|p| p.0)
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    let (min_y, max_y) = positions
        .iter()
        .map(|p| p.1)
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    let width = ((max_x - min_x) + 4.0 * RADIUS).max(MIN_SIZE);
    let height = ((max_y - min_y) + 4.0 * RADIUS).max(MIN_SIZE);
    let off_x = (width - (max_x - min_x)) / 2.0;
    let off_y = (height - (max_y - min_y)) / 2.0;
    for p in positions.iter_mut() {
        p.0 = p.0 - min_x + off_x;
        p.1 = p.1 - min_y + off_y;
    }
    (width, height)
}

/// Draws a case: galaxies labelled `index: cost`, wormholes as arrows titled with their color.
///
/// `answers` may be shorter than the galaxy count (e.g. when not solved yet);
/// galaxies without an answer are drawn like unreachable ones.
pub fn render(case: &CaseInput, answers: &[Option<Distance>]) -> String {
    let n = case.galaxies.len();
    let mut linked = vec![vec![false; n]; n];
    for w in &case.wormholes {
        if w.origin < n && w.destination < n {
            linked[w.origin][w.destination] = true;
        }
    }
    // Spell out composed colors by their primaries when the color table resolves.
    let registry = case.registry().ok();
    let describe = |color: &str| {
        let names = registry
            .as_ref()
            .and_then(|r| r.resolve(color).ok().map(|mask| r.names_of(mask)));
        match names {
            Some(names) if names.len() > 1 => format!("{} ({})", color, names.join("+")),
            _ => color.to_string(),
        }
    };
    let mut positions = Layout::new(linked).run(2000);
    let (width, height) = fit(&mut positions);

    let arrow = Marker::new()
        .set("id", "arrow")
        .set("viewBox", "0 0 10 10")
        .set("refX", 10)
        .set("refY", 5)
        .set("markerWidth", 8)
        .set("markerHeight", 8)
        .set("orient", "auto-start-reverse")
        .add(Path::new().set("d", "M 0 0 L 10 5 L 0 10 z"));
    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(Definitions::new().add(arrow));

    for w in &case.wormholes {
        if w.origin >= n || w.destination >= n {
            continue;
        }
        let (x1, y1) = positions[w.origin];
        let (x2, y2) = positions[w.destination];
        let data = if w.origin == w.destination {
            Data::new()
                .move_to((x1 - RADIUS * 0.5, y1 - RADIUS * 0.9))
                .cubic_curve_to((
                    x1 - RADIUS * 1.5,
                    y1 - RADIUS * 3.0,
                    x1 + RADIUS * 1.5,
                    y1 - RADIUS * 3.0,
                    x1 + RADIUS * 0.5,
                    y1 - RADIUS * 0.9,
                ))
        } else {
            // Bend to the left of the direction of travel so a pair of
            // opposite wormholes does not overlap.
            let (dx, dy) = (x2 - x1, y2 - y1);
            let len = (dx * dx + dy * dy).sqrt().max(1e-6);
            let (ux, uy) = (dx / len, dy / len);
            let start = (x1 + ux * RADIUS, y1 + uy * RADIUS);
            let end = (x2 - ux * RADIUS, y2 - uy * RADIUS);
            let ctrl = ((x1 + x2) / 2.0 + uy * len * 0.15, (y1 + y2) / 2.0 - ux * len * 0.15);
            Data::new()
                .move_to(start)
                .quadratic_curve_to((ctrl.0, ctrl.1, end.0, end.1))
        };
        let path = Path::new()
            .set("fill", "none")
            .set("stroke", "#444")
            .set("stroke-width", 1.5)
            .set("marker-end", "url(#arrow)")
            .set("d", data)
            .set(
                "title",
                format!("{} -> {} needs {}", w.origin, w.destination, describe(&w.color)),
            )
            .set("onmouseover", "this.setAttribute('stroke-width', 4)")
            .set("onmouseout", "this.setAttribute('stroke-width', 1.5)");
        document = document.add(path);
    }

    for (i, &(x, y)) in positions.iter().enumerate() {
        let answer = answers.get(i).copied().flatten();
        let fill = match answer {
            Some(_) if i == 0 => "#ffe080",
            Some(_) => "#80c0ff",
            None => "#cccccc",
        };
        let offers = case.galaxies[i]
            .energies
            .iter()
            .map(|e| format!("{} for {}", describe(&e.color), e.cost))
            .join(", ");
        let circle = Circle::new()
            .set("cx", x)
            .set("cy", y)
            .set("r", RADIUS)
            .set("fill", fill)
            .set("stroke", "black")
            .set("stroke-width", 2)
            .set("title", format!("Galaxy {}: {}", i, offers));
        document = document.add(circle);

        let label = match answer {
            Some(cost) => format!("{}: {}", i, cost),
            None => format!("{}: -", i),
        };
        let text = Text::new(label)
            .set("x", x)
            .set("y", y + 5.0)
            .set("text-anchor", "middle")
            .set("font-size", "13px");
        document = document.add(text);
    }

    document.to_string()
}
