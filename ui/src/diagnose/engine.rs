//! State machine for the staged "AI analysis" sequence.
//!
//! The engine owns no timers. `begin` hands back the first step plus a
//! `ScheduledAdvance`; the caller sleeps for `wait_ms` and feeds the
//! schedule back through `advance`, which either surfaces the next step
//! (with the next schedule) or resolves the run to a catalog sample.
//! A `run_id` stamped into every schedule lets stale timer callbacks be
//! dropped instead of corrupting a newer run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog::SampleKind;

/// One named stage of the fake analysis, with the progress percentage
/// it drives the bar to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    pub label: &'static str,
    pub pct: u8,
}

pub const SCAN_STEPS: [ScanStep; 6] = [
    ScanStep {
        label: "Preprocessing image…",
        pct: 10,
    },
    ScanStep {
        label: "Running spectral analysis…",
        pct: 25,
    },
    ScanStep {
        label: "Identifying pathogen signatures…",
        pct: 45,
    },
    ScanStep {
        label: "Computing health index…",
        pct: 65,
    },
    ScanStep {
        label: "Generating recommendations…",
        pct: 85,
    },
    ScanStep {
        label: "Finalizing AI report…",
        pct: 98,
    },
];

/// Step delay bounds: uniform in `[base, base + jitter)` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub base_delay_ms: u64,
    pub jitter_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 480,
            jitter_ms: 240,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Running {
        showing: usize,
    },
    Complete {
        resolved: SampleKind,
    },
}

/// Timer request: after `wait_ms`, call `advance(run_id, after_step)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub run_id: u64,
    pub after_step: usize,
    pub wait_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Stale run id or out-of-order step; drop it.
    Ignored,
    NextStep {
        step: ScanStep,
        schedule: ScheduledAdvance,
    },
    Completed {
        resolved: SampleKind,
    },
}

#[derive(Debug, Clone)]
pub struct ScanEngine {
    pub run_id: u64,
    pub state: EngineState,
    pub config: ScanConfig,
    selection: Option<SampleKind>,
    rng: StdRng,
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self {
            run_id: 0,
            state: EngineState::Idle,
            config: ScanConfig::default(),
            selection: None,
            rng: StdRng::from_entropy(),
        }
    }
}

impl ScanEngine {
    /// Deterministic engine for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, EngineState::Running { .. })
    }

    /// Start a run. Returns the first step to display plus the schedule
    /// for the advance after it, or `None` if a run is already in
    /// flight (the trigger is disabled then, so this is belt-and-braces).
    ///
    /// `selection` of `None` means "visitor uploaded their own image";
    /// the run then resolves to a uniform random catalog pick.
    pub fn begin(&mut self, selection: Option<SampleKind>) -> Option<(ScanStep, ScheduledAdvance)> {
        if self.is_running() {
            return None;
        }

        self.run_id += 1;
        self.selection = selection;
        self.state = EngineState::Running { showing: 0 };
        Some((SCAN_STEPS[0], self.schedule_after(0)))
    }

    /// Apply an elapsed step delay. Exactly one of the six schedules a
    /// run hands out resolves it; everything else chains forward.
    pub fn advance(&mut self, run_id: u64, after_step: usize) -> AdvanceOutcome {
        if run_id != self.run_id {
            return AdvanceOutcome::Ignored;
        }
        match self.state {
            EngineState::Running { showing } if showing == after_step => {}
            _ => return AdvanceOutcome::Ignored,
        }

        let next = after_step + 1;
        if next < SCAN_STEPS.len() {
            self.state = EngineState::Running { showing: next };
            AdvanceOutcome::NextStep {
                step: SCAN_STEPS[next],
                schedule: self.schedule_after(next),
            }
        } else {
            let resolved = self
                .selection
                .take()
                .unwrap_or_else(|| SampleKind::pick_random(&mut self.rng));
            self.state = EngineState::Complete { resolved };
            AdvanceOutcome::Completed { resolved }
        }
    }

    fn schedule_after(&mut self, after_step: usize) -> ScheduledAdvance {
        let jitter = self.rng.gen_range(0..self.config.jitter_ms);
        ScheduledAdvance {
            run_id: self.run_id,
            after_step,
            wait_ms: self.config.base_delay_ms + jitter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a full run to completion, collecting every displayed step
    /// and every scheduled wait along the way.
    fn drive(engine: &mut ScanEngine, selection: Option<SampleKind>) -> (Vec<ScanStep>, Vec<u64>, SampleKind) {
        let (first, mut schedule) = engine.begin(selection).expect("engine idle");
        let mut steps = vec![first];
        let mut waits = vec![schedule.wait_ms];

        loop {
            match engine.advance(schedule.run_id, schedule.after_step) {
                AdvanceOutcome::NextStep {
                    step,
                    schedule: next,
                } => {
                    steps.push(step);
                    waits.push(next.wait_ms);
                    schedule = next;
                }
                AdvanceOutcome::Completed { resolved } => return (steps, waits, resolved),
                AdvanceOutcome::Ignored => panic!("live schedule was ignored"),
            }
        }
    }

    #[test]
    fn run_emits_exactly_six_steps_with_fixed_percentages() {
        let mut engine = ScanEngine::seeded(11);
        let (steps, _, _) = drive(&mut engine, None);

        let pcts: Vec<u8> = steps.iter().map(|s| s.pct).collect();
        assert_eq!(pcts, vec![10, 25, 45, 65, 85, 98]);
        assert!(pcts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(steps[0].label, "Preprocessing image…");
        assert_eq!(steps[5].label, "Finalizing AI report…");
    }

    #[test]
    fn every_selection_resolves_to_itself() {
        for kind in SampleKind::ALL {
            let mut engine = ScanEngine::seeded(3);
            let (_, _, resolved) = drive(&mut engine, Some(kind));
            assert_eq!(resolved, kind);
        }
    }

    #[test]
    fn no_selection_resolves_to_a_catalog_member() {
        for seed in 0..16 {
            let mut engine = ScanEngine::seeded(seed);
            let (_, _, resolved) = drive(&mut engine, None);
            assert!(SampleKind::ALL.contains(&resolved));
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = ScanEngine::seeded(99);
        let mut b = ScanEngine::seeded(99);
        assert_eq!(drive(&mut a, None).2, drive(&mut b, None).2);
    }

    #[test]
    fn step_delays_stay_inside_the_configured_window() {
        let mut engine = ScanEngine::seeded(5);
        let (_, waits, _) = drive(&mut engine, None);

        assert_eq!(waits.len(), 6);
        for wait in &waits {
            assert!((480..720).contains(wait), "delay {wait} out of bounds");
        }
        let total: u64 = waits.iter().sum();
        assert!((2880..4320).contains(&total));
    }

    #[test]
    fn begin_is_refused_while_running() {
        let mut engine = ScanEngine::seeded(1);
        engine.begin(None).expect("engine idle");
        assert!(engine.begin(None).is_none());
    }

    #[test]
    fn stale_run_ids_are_ignored() {
        let mut engine = ScanEngine::seeded(1);
        let (_, schedule) = engine.begin(Some(SampleKind::Healthy)).expect("engine idle");
        assert_eq!(
            engine.advance(schedule.run_id + 1, schedule.after_step),
            AdvanceOutcome::Ignored
        );
        assert_eq!(
            engine.advance(schedule.run_id, schedule.after_step + 3),
            AdvanceOutcome::Ignored
        );
        // The genuine schedule still works afterwards.
        assert!(matches!(
            engine.advance(schedule.run_id, schedule.after_step),
            AdvanceOutcome::NextStep { .. }
        ));
    }

    #[test]
    fn engine_can_start_again_after_completion() {
        let mut engine = ScanEngine::seeded(21);
        let (_, _, first) = drive(&mut engine, Some(SampleKind::Critical));
        assert_eq!(first, SampleKind::Critical);
        let (_, _, second) = drive(&mut engine, Some(SampleKind::Healthy));
        assert_eq!(second, SampleKind::Healthy);
    }
}
