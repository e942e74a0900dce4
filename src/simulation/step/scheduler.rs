/// Lifecycle of the frame loop.
///
/// The host owns the refresh cadence and calls `tick()` on every display
/// refresh; the scheduler decides whether a frame actually runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    #[default]
    Stopped,
    Running,
    /// Terminal: no frame or pointer event is processed again
    TornDown,
}

#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    state: SchedulerState,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Begin running frames. Calling it while running changes nothing.
    pub fn start(&mut self) -> bool {
        match self.state {
            SchedulerState::Running => false,
            SchedulerState::Stopped => {
                self.state = SchedulerState::Running;
                log::info!("frame loop started");
                true
            }
            SchedulerState::TornDown => {
                log::warn!("start ignored: frame loop already torn down");
                false
            }
        }
    }

    /// Pause; `start()` resumes
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Running {
            self.state = SchedulerState::Stopped;
            log::info!("frame loop stopped");
        }
    }

    pub fn teardown(&mut self) {
        if self.state != SchedulerState::TornDown {
            self.state = SchedulerState::TornDown;
            log::info!("frame loop torn down");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn is_torn_down(&self) -> bool {
        self.state == SchedulerState::TornDown
    }
}
