//! Cheapest routes on a small weighted road network, with and without
//! collapsing equivalent routes by their endpoints.

use wavefront::{Step, Wavefront};

const ROADS: &[(&str, &str, i32)] = &[
    ("depot", "north", 1),
    ("depot", "river", 2),
    ("depot", "market", 12),
    ("north", "mill", 1),
    ("mill", "river", 1),
    ("river", "quarry", 1),
    ("river", "market", 2),
    ("quarry", "forge", 1),
    ("forge", "market", 1),
];

fn main() {
    let steps = |from: &&str, buf: &mut Vec<Step<&str>>| {
        for &(a, b, w) in ROADS {
            if a == *from {
                buf.push(Step::new(b, w));
            }
        }
    };

    let paths = Wavefront::new()
        .find("depot", &steps, |s: &&str| *s == "market")
        .expect("road costs are positive");
    for path in &paths {
        println!("cost {}: depot -> {}", path.cost, path.states.join(" -> "));
    }

    // Collapsed view: one representative per (first, last) pair.
    let collapsed = Wavefront::new()
        .search(
            "depot",
            &steps,
            |s: &&str| *s == "market",
            |_: &[&str]| false,
            |p: &[&str]| (p.first().copied(), p.last().copied()),
        )
        .expect("road costs are positive");
    println!(
        "{} optimal route(s), {} after endpoint collapse",
        paths.len(),
        collapsed.len()
    );
}
