
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};
use uuid::Uuid;

use crate::core::{
    message::{GuiToJobMsg, GuiToJobTx, JobStatus, JobToGuiMsg, JobToGuiRx, TabAlgorithm},
    note::{NoteTimeline, PitchWindow},
    progress::ProgressEstimator,
    scroll::ScrollAnimator,
    transport::TransportClock,
};

/// Where the current visualization session stands. A new timeline must
/// pass through `NeedsRender` before anything depends on it being on
/// screen; an empty or invalid result never leaves `NoTimeline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoTimeline,
    NeedsRender,
    Rendered,
}

/// Central application state, updated once per frame.
pub struct ScribeState {
    status: JobStatus,
    last_error: Option<String>,
    phase: SessionPhase,
    timeline: Option<Arc<NoteTimeline>>,
    pitch_window: Option<PitchWindow>,
    tab_text: Option<String>,
    tab_algorithm: TabAlgorithm,
    current_job: Option<Uuid>,
    progress: ProgressEstimator,
    pub transport: TransportClock,
    pub scroll: ScrollAnimator,
    tx: GuiToJobTx,
    rx: JobToGuiRx,
}

impl ScribeState {
    pub fn new(tx: GuiToJobTx, rx: JobToGuiRx) -> Self {
        Self {
            status: JobStatus::Idle,
            last_error: None,
            phase: SessionPhase::NoTimeline,
            timeline: None,
            pitch_window: None,
            tab_text: None,
            tab_algorithm: TabAlgorithm::Efficient,
            current_job: None,
            progress: ProgressEstimator::new(),
            transport: TransportClock::new(),
            scroll: ScrollAnimator::new(15.),
            tx,
            rx,
        }
    }

    /// Per frame state update.
    pub fn update(&mut self, dt: f32) {
        self.handle_messages();
        self.transport.update(dt);
        self.progress.update(self.status, dt);
    }

    /// Start a new transcription session from a result file. Replaces
    /// the current session wholesale.
    pub fn process_file(&mut self, path: PathBuf) {
        self.clear_session();
        self.status = JobStatus::Processing;
        let job_id = Uuid::new_v4();
        self.current_job = Some(job_id);
        debug!("job {job_id}: processing {}", path.display());
        let _ = self.tx.push(GuiToJobMsg::Process { job_id, path });
    }

    /// Explicit tab (re)generation command. A no-op until a
    /// transcription result exists.
    pub fn request_tabs(&mut self) {
        let Some(job_id) = self.current_job else {
            return;
        };
        if self.timeline.is_none() {
            return;
        }
        self.status = JobStatus::GeneratingTabs;
        let _ = self.tx.push(GuiToJobMsg::GenerateTabs {
            job_id,
            algorithm: self.tab_algorithm,
        });
    }

    /// Changing the algorithm regenerates only once tabs exist, and
    /// does so through the explicit command above.
    pub fn set_tab_algorithm(&mut self, algorithm: TabAlgorithm) {
        if algorithm == self.tab_algorithm {
            return;
        }
        self.tab_algorithm = algorithm;
        if self.tab_text.is_some() {
            self.request_tabs();
        }
    }

    pub fn reset(&mut self) {
        self.clear_session();
        self.status = JobStatus::Idle;
        self.current_job = None;
    }

    /// First completed frame of a fresh timeline.
    pub fn mark_rendered(&mut self) {
        if self.phase == SessionPhase::NeedsRender {
            self.phase = SessionPhase::Rendered;
        }
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn timeline(&self) -> Option<&Arc<NoteTimeline>> {
        self.timeline.as_ref()
    }

    pub fn pitch_window(&self) -> Option<PitchWindow> {
        self.pitch_window
    }

    pub fn tab_text(&self) -> Option<&str> {
        self.tab_text.as_deref()
    }

    pub fn tab_algorithm(&self) -> TabAlgorithm {
        self.tab_algorithm
    }

    pub fn has_result(&self) -> bool {
        self.timeline.is_some()
    }

    pub fn progress_value(&self) -> f32 {
        self.progress.value()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn clear_session(&mut self) {
        self.timeline = None;
        self.pitch_window = None;
        self.tab_text = None;
        self.last_error = None;
        self.phase = SessionPhase::NoTimeline;
        self.transport.reset();
        self.scroll.reset();
    }

    fn handle_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                JobToGuiMsg::Status(status) => {
                    debug!("job status: {}", status.label());
                    self.status = status;
                }
                JobToGuiMsg::Progress(value) => self.progress.observe(value),
                JobToGuiMsg::NotesReady(timeline) => self.install_timeline(timeline),
                JobToGuiMsg::TabsReady(text) => {
                    self.tab_text = Some(text);
                    self.status = JobStatus::TabsReady;
                }
                JobToGuiMsg::Failed(message) => {
                    warn!("job failed: {message}");
                    self.last_error = Some(message);
                    self.status = JobStatus::Error;
                }
            }
        }
    }

    /// Atomic session swap: the pitch window is derived exactly once
    /// per timeline, here.
    fn install_timeline(&mut self, timeline: Arc<NoteTimeline>) {
        self.pitch_window = PitchWindow::from_notes(&timeline.notes);
        self.transport.reset();
        self.transport.set_duration(timeline.end_time.max(0.));
        self.phase = if self.pitch_window.is_some() && timeline.is_renderable() {
            SessionPhase::NeedsRender
        } else {
            SessionPhase::NoTimeline
        };
        self.timeline = Some(timeline);
    }
}
