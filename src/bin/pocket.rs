//! Solve a pocket cube given on the command line.
//!
//! ```text
//! pocket -ft YYYY -ff ROOO -fr BGBB -fbk ORRR -fb WWWW -fl GBGG
//! pocket --scramble "R U R' U'" --max-depth 12
//! ```
//!
//! Faces are given as one color or four in row-major order, using the letters `R B O G W Y`.
//! Faces that are not given keep their solved colors. Set `RUST_LOG=debug` to follow the search.

use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use pocket_cube::cube222::moves::parse_moves;
use pocket_cube::cube222::{parse_face, Cube222, Face};
use pocket_cube::error::ParseError;
use pocket_cube::puzzle::Restore;
use pocket_cube::search::{IdaStar, Outcome, SearchConfig};

fn main() -> Result<()> {
    env_logger::init();
    let started = Instant::now();

    let mut cube = Cube222::new();
    let mut config = SearchConfig::default();

    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| ParseError::MissingValue(flag.clone()))?;
        match flag.as_str() {
            "--max-depth" => {
                let depth = value
                    .parse()
                    .with_context(|| format!("invalid depth '{value}'"))?;
                config = config.with_max_depth(depth);
            }
            "--scramble" => cube.apply_sequence(&parse_moves(&value)?),
            tag => {
                let face = Face::from_tag(tag)?;
                let colors = parse_face(&value).with_context(|| format!("bad value for {tag}"))?;
                cube.set_face(face, &colors);
            }
        }
    }

    // The configured state is the starting point; forget how it was reached.
    cube.snapshot();
    cube.reset();
    println!("{cube}");

    let report = IdaStar::new(config).solve(&mut cube, Some(started));
    match &report.outcome {
        Outcome::Solved(solution) if solution.is_empty() => println!("Already solved"),
        Outcome::Solved(solution) => {
            println!("Solved in {:.3} seconds", report.elapsed.as_secs_f64());
            println!("Solution: {solution}");
        }
        Outcome::Exhausted { max_depth } => {
            bail!(
                "no solution within {max_depth} moves ({} nodes searched)",
                report.nodes
            )
        }
    }
    println!("Nodes: {}", report.nodes);
    println!();
    println!("{cube}");

    Ok(())
}
