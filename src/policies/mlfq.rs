//! Multi-Level Feedback Queue scheduling.

use serde::{Deserialize, Serialize};

use super::{reset_all, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// MLFQ configuration.
///
/// Level 0 is the highest priority; the level count is the length of
/// `quantums`. Every quantum and the boost interval must be positive —
/// enforced by [`crate::validation::validate_mlfq_config`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlfqConfig {
    /// Time quantum per level, highest priority first (each > 0).
    pub quantums: Vec<u64>,
    /// Ticks between priority boosts (> 0).
    pub boost_interval: u64,
}

impl MlfqConfig {
    /// Creates a configuration.
    pub fn new(quantums: Vec<u64>, boost_interval: u64) -> Self {
        Self {
            quantums,
            boost_interval,
        }
    }

    /// Number of priority levels.
    pub fn levels(&self) -> usize {
        self.quantums.len()
    }
}

impl Default for MlfqConfig {
    /// The reference default: 3 levels with quantums {2, 4, 8} and a
    /// boost every 10 ticks.
    fn default() -> Self {
        Self {
            quantums: vec![2, 4, 8],
            boost_interval: 10,
        }
    }
}

/// Multi-Level Feedback Queue.
///
/// Per tick: if the boost interval has elapsed, every unfinished process
/// returns to level 0 with its quantum usage cleared. Then levels are
/// scanned top-down and, within a level, the first arrived unfinished
/// process in index order runs for one tick. A process that exhausts its
/// level's quantum drops one level (stopping at the bottom) and its
/// usage counter clears — also at the bottom level, where it merely
/// restarts the count.
///
/// Selection within a level is deliberately first-by-index rather than
/// rotating; re-ordering among same-level processes happens only through
/// completions, demotions, and boosts.
///
/// Emits one 1-tick slice per simulated tick, like
/// [`Stcf`](super::Stcf); use [`Timeline::coalesced`] for presentation.
///
/// # Reference
/// Arpaci-Dusseau (2018), "OSTEP", Ch. 8: MLFQ rules 1-5.
#[derive(Debug, Clone, Default)]
pub struct Mlfq {
    /// Level quantums and boost interval.
    pub config: MlfqConfig,
}

impl Mlfq {
    /// Creates an MLFQ policy with the given configuration.
    pub fn new(config: MlfqConfig) -> Self {
        Self { config }
    }
}

impl SchedulingPolicy for Mlfq {
    fn name(&self) -> &'static str {
        "MLFQ"
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        reset_all(processes);
        let mut timeline = Timeline::new();
        let levels = self.config.levels();
        let mut quantum_used = vec![0u64; processes.len()];
        let mut clock: u64 = 0;
        let mut since_boost: u64 = 0;
        let mut completed = 0;

        while completed < processes.len() {
            if since_boost >= self.config.boost_interval {
                for (i, p) in processes.iter_mut().enumerate() {
                    if p.remaining > 0 {
                        p.level = 0;
                        quantum_used[i] = 0;
                    }
                }
                since_boost = 0;
            }

            let selected = (0..levels).find_map(|level| {
                processes
                    .iter()
                    .position(|p| p.has_arrived(clock) && p.remaining > 0 && p.level == level)
            });

            match selected {
                None => {
                    clock += 1;
                    since_boost += 1;
                }
                Some(i) => {
                    let p = &mut processes[i];
                    p.record_start(clock);
                    timeline.record(clock, p.pid, 1);
                    p.remaining -= 1;
                    quantum_used[i] += 1;
                    clock += 1;
                    since_boost += 1;

                    if p.remaining == 0 {
                        p.finish(clock);
                        completed += 1;
                    } else if quantum_used[i] >= self.config.quantums[p.level] {
                        if p.level < levels - 1 {
                            p.level += 1;
                        }
                        quantum_used[i] = 0;
                    }
                }
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Multi-Level Feedback Queue"
    }
}
