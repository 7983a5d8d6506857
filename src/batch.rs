//! Batch generation of independent boards.
//!
//! Board `i` is seeded with `seed + i` when the config carries a seed, so a
//! seeded batch is reproducible and does not depend on the thread count.
//! When `threads > 1` boards are generated on a dedicated rayon pool.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::info;

use crate::error::BoardError;
use crate::generator::{BoardGenerator, GeneratedBoard, GeneratorConfig};
use crate::scenario::ScenarioKind;

/// Generates `count` boards, returned in index order.
pub fn generate_batch(
    kind: ScenarioKind,
    config: &GeneratorConfig,
    count: usize,
    threads: usize,
) -> Result<Vec<GeneratedBoard>, BoardError> {
    let start = Instant::now();
    let boards = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| BoardError::WorkerPool(e.to_string()))?;
        pool.install(|| {
            (0..count)
                .into_par_iter()
                .map(|i| generate_one(kind, config, i))
                .collect::<Result<Vec<_>, _>>()
        })?
    } else {
        (0..count)
            .map(|i| generate_one(kind, config, i))
            .collect::<Result<Vec<_>, _>>()?
    };
    info!(
        scenario = kind.name(),
        count,
        threads,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "batch complete"
    );
    Ok(boards)
}

fn generate_one(
    kind: ScenarioKind,
    config: &GeneratorConfig,
    index: usize,
) -> Result<GeneratedBoard, BoardError> {
    let rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(index as u64))
    } else {
        SmallRng::from_entropy()
    };
    let mut generator = BoardGenerator::with_rng(kind.scenario(), config.clone(), rng)?;
    generator.generate_board()?;
    generator.output()
}
