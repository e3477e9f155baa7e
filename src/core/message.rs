use std::path::PathBuf;
use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender};
use rtrb::{Consumer, Producer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::note::NoteTimeline;

/// Lifecycle of a transcription job as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Idle,
    Processing,
    Done,
    GeneratingTabs,
    TabsReady,
    Error,
}

impl JobStatus {
    pub fn is_processing(&self) -> bool {
        matches!(self, JobStatus::Processing | JobStatus::GeneratingTabs)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::TabsReady)
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Idle => "idle",
            JobStatus::Processing => "processing",
            JobStatus::Done => "done",
            JobStatus::GeneratingTabs => "generating tabs",
            JobStatus::TabsReady => "tabs ready",
            JobStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabAlgorithm {
    Efficient,
    Simple,
}

impl TabAlgorithm {
    pub fn label(&self) -> &'static str {
        match self {
            TabAlgorithm::Efficient => "Efficient",
            TabAlgorithm::Simple => "Simple",
        }
    }
}

/// Commands from the UI to the job worker.
#[derive(Debug)]
pub enum GuiToJobMsg {
    Process { job_id: Uuid, path: PathBuf },
    GenerateTabs { job_id: Uuid, algorithm: TabAlgorithm },
}

/// Results and status updates from the worker back to the UI.
#[derive(Debug)]
pub enum JobToGuiMsg {
    Status(JobStatus),
    /// Coarse real progress in percent. When the worker reports none,
    /// the UI falls back to its estimator.
    Progress(f32),
    NotesReady(Arc<NoteTimeline>),
    TabsReady(String),
    Failed(String),
}

pub type GuiToJobTx = Producer<GuiToJobMsg>;
pub type GuiToJobRx = Consumer<GuiToJobMsg>;
pub type JobToGuiTx = Sender<JobToGuiMsg>;
pub type JobToGuiRx = Receiver<JobToGuiMsg>;
