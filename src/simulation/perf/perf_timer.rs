use super::perf_stats::PerfStats;

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

fn stamp() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

fn ms_since(start: Stamp) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() - start
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Frame phases with their own timing slot in `PerfStats`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Step,
    Integrate,
    Collision,
    Boundary,
}

/// Times one phase of a frame. Inert (never reads the clock) while perf
/// metrics are off.
pub(crate) struct PhaseTimer {
    phase: Phase,
    started: Option<Stamp>,
}

impl PhaseTimer {
    pub(crate) fn start(phase: Phase, enabled: bool) -> Self {
        Self {
            phase,
            started: enabled.then(stamp),
        }
    }

    /// Store the elapsed time in the phase's slot; no-op when inert
    pub(crate) fn finish(self, stats: &mut PerfStats) {
        if let Some(start) = self.started {
            stats.record_phase(self.phase, ms_since(start));
        }
    }
}
