//! Solve a small ASCII maze with unit-cost wavefront search.

use std::collections::HashSet;

use wavefront::{UnitStepper, Wavefront};

const MAZE: &str = "\
#########
#S..#...#
#.#.#.#.#
#.#...#.#
#.###.#.#
#...#.#E#
#########";

type Pos = (i32, i32);

fn main() {
    let mut open: HashSet<Pos> = HashSet::new();
    let mut start = (0, 0);
    let mut exit = (0, 0);
    for (y, line) in MAZE.lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let p = (x as i32, y as i32);
            match ch {
                '#' => continue,
                'S' => start = p,
                'E' => exit = p,
                _ => {}
            }
            open.insert(p);
        }
    }

    let steps = UnitStepper(|&(x, y): &Pos, push: &mut dyn FnMut(Pos)| {
        for n in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if open.contains(&n) {
                push(n);
            }
        }
    });

    let paths = Wavefront::new()
        .find_to(start, &steps, &exit)
        .expect("unit costs are always positive");

    match paths.first() {
        None => println!("no route from S to E"),
        Some(path) => {
            println!("{} optimal route(s) of {} steps:", paths.len(), path.cost);
            let route: HashSet<Pos> = path.states.iter().copied().collect();
            for (y, line) in MAZE.lines().enumerate() {
                let rendered: String = line
                    .chars()
                    .enumerate()
                    .map(|(x, ch)| {
                        if ch == '.' && route.contains(&(x as i32, y as i32)) {
                            '*'
                        } else {
                            ch
                        }
                    })
                    .collect();
                println!("{rendered}");
            }
        }
    }
}
