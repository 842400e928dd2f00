//! Dark Blue entry point
//!
//! Headless demo driver: builds the bundled level set and plays each level
//! to its outcome with a fixed timestep, logging transitions along the way.
//! Pass a number as the first argument to pin the simulation seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use darkblue::consts::SIM_DT;
use darkblue::plan::LevelParser;
use darkblue::sim::{Status, tick};

/// Bundled demo levels, in the same JSON shape a level pack would ship:
/// an array of levels, each an array of row strings.
///
/// Both resolve without input: the first has a coin bobbing inside the
/// player's box, the second sends a fireball patrol into the player.
const LEVEL_SCHEMAS: &str = r#"[
  [
    "xxxxxxxxx",
    "x       x",
    "x  o    x",
    "x  @ |  x",
    "x!!!!!!!x",
    "xxxxxxxxx"
  ],
  [
    "xxxxxxxxxx",
    "x   v    x",
    "x= @     x",
    "xxxxxxxxxx"
  ]
]"#;

/// Cap per level so an undecidable level cannot spin forever (10 minutes of
/// simulated time at 60 Hz)
const MAX_TICKS: u32 = 36_000;

fn main() {
    env_logger::init();
    log::info!("Dark Blue (headless) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Simulation seed: {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);

    let plans: Vec<Vec<String>> =
        serde_json::from_str(LEVEL_SCHEMAS).expect("bundled level schemas are valid JSON");
    let parser = LevelParser::default();

    for (index, plan) in plans.iter().enumerate() {
        let mut level = parser.parse(plan, &mut rng);
        log::info!(
            "level {}/{}: {}x{} tiles, {} actors",
            index + 1,
            plans.len(),
            level.width(),
            level.height(),
            level.actors().len()
        );

        let mut ticks = 0u32;
        while !level.is_finished() && ticks < MAX_TICKS {
            tick(&mut level, SIM_DT);
            ticks += 1;
        }

        let seconds = f64::from(ticks) * SIM_DT;
        match level.status {
            Some(Status::Won) => log::info!("level {} won after {seconds:.2}s", index + 1),
            Some(Status::Lost) => log::info!("level {} lost after {seconds:.2}s", index + 1),
            None => log::warn!("level {} undecided after {seconds:.2}s, moving on", index + 1),
        }
    }
}
