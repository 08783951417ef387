//! Windowless runs on a fixed 60 Hz clock.

use orrery_input::InputSnapshot;
use orrery_sim::{FrameSink, ManualClock, Orchestrator, SimError, SimParams};
use tracing::info;

/// Step length of a headless frame.
pub const HEADLESS_DT: f64 = 1.0 / 60.0;

/// Build an orchestrator on a [`ManualClock`] stepping [`HEADLESS_DT`].
///
/// # Errors
///
/// See [`Orchestrator::new`].
pub fn headless_orchestrator(params: SimParams) -> Result<Orchestrator<ManualClock>, SimError> {
    Orchestrator::new(params, ManualClock::fixed_step(HEADLESS_DT))
}

/// Drive up to `frames` idle frames into `sink`. Returns how many ran.
///
/// # Errors
///
/// Stops at the first sink error.
pub fn run_headless<S: FrameSink>(
    orchestrator: &mut Orchestrator<ManualClock>,
    sink: &mut S,
    frames: u64,
) -> Result<u64, SimError> {
    sink.prepare(orchestrator.mesh())?;

    let input = InputSnapshot::default();
    let mut ran = 0;
    while ran < frames {
        let output = orchestrator.frame(&input);
        sink.submit(&output)?;
        ran += 1;
        if !output.should_continue {
            break;
        }
    }

    info!(
        frames = ran,
        sim_time = orchestrator.state().clock.sim_time(),
        "headless run finished"
    );
    Ok(ran)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_sim::{FrameOutput, TracingSink};

    fn params() -> SimParams {
        SimParams {
            sphere_sectors: 8,
            sphere_stacks: 6,
            ..SimParams::default()
        }
    }

    struct Failing;

    impl FrameSink for Failing {
        fn submit(&mut self, _frame: &FrameOutput) -> Result<(), SimError> {
            Err(SimError::Sink("device lost".into()))
        }
    }

    #[test]
    fn test_runs_requested_frames() {
        let mut orch = headless_orchestrator(params()).unwrap();
        let mut sink = TracingSink::default();
        assert_eq!(run_headless(&mut orch, &mut sink, 120).unwrap(), 120);
        assert_eq!(sink.submitted(), 120);
        assert!((orch.state().clock.sim_time() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_frames() {
        let mut orch = headless_orchestrator(params()).unwrap();
        let mut sink = TracingSink::default();
        assert_eq!(run_headless(&mut orch, &mut sink, 0).unwrap(), 0);
        assert_eq!(orch.state().clock.frame_count(), 0);
    }

    #[test]
    fn test_sink_error_stops_run() {
        let mut orch = headless_orchestrator(params()).unwrap();
        let result = run_headless(&mut orch, &mut Failing, 10);
        assert!(matches!(result, Err(SimError::Sink(_))));
        assert_eq!(orch.state().clock.frame_count(), 1);
    }
}
