//! Worker thread standing in for the remote transcription backend.
//! It loads an already-transcribed result file and renders a plain
//! text tab from it; audio decoding and the real transcription model
//! live on the other side of this boundary.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use crate::core::{
    message::{GuiToJobMsg, GuiToJobRx, JobStatus, JobToGuiMsg, JobToGuiTx, TabAlgorithm},
    note::{Note, NoteTimeline},
};

/// Standard tuning, high string first, with open string pitches.
const TUNING: [(&str, u8); 6] = [
    ("e", 64),
    ("B", 59),
    ("G", 55),
    ("D", 50),
    ("A", 45),
    ("E", 40),
];
const MAX_FRET: u8 = 24;
const CELL_WIDTH: usize = 3;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid transcription result: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("timeline has no playable duration")]
    DegenerateTimeline,
}

pub fn spawn_job_thread(tx: JobToGuiTx, rx: GuiToJobRx) -> JoinHandle<()> {
    thread::spawn(move || worker_loop(tx, rx))
}

fn worker_loop(tx: JobToGuiTx, mut rx: GuiToJobRx) {
    let mut worker = JobWorker { tx, timeline: None };
    loop {
        match rx.pop() {
            Ok(msg) => worker.handle(msg),
            Err(_) => {
                if rx.is_abandoned() {
                    break;
                }
                thread::sleep(Duration::from_millis(20));
            }
        }
    }
}

struct JobWorker {
    tx: JobToGuiTx,
    timeline: Option<Arc<NoteTimeline>>,
}

impl JobWorker {
    fn handle(&mut self, msg: GuiToJobMsg) {
        match msg {
            GuiToJobMsg::Process { job_id, path } => {
                info!("job {job_id}: loading {}", path.display());
                self.send(JobToGuiMsg::Status(JobStatus::Processing));
                match load_timeline(&path) {
                    Ok(timeline) => {
                        self.send(JobToGuiMsg::Progress(80.));
                        let timeline = Arc::new(timeline);
                        self.timeline = Some(timeline.clone());
                        self.send(JobToGuiMsg::NotesReady(timeline));
                        self.send(JobToGuiMsg::Status(JobStatus::Done));
                    }
                    Err(err) => {
                        warn!("job {job_id}: {err}");
                        self.send(JobToGuiMsg::Failed(err.to_string()));
                    }
                }
            }
            GuiToJobMsg::GenerateTabs { job_id, algorithm } => {
                let Some(timeline) = self.timeline.clone() else {
                    self.send(JobToGuiMsg::Failed("no transcription loaded".into()));
                    return;
                };
                info!("job {job_id}: generating {} tabs", algorithm.label());
                self.send(JobToGuiMsg::Status(JobStatus::GeneratingTabs));
                let text = render_tab_text(&timeline, algorithm);
                self.send(JobToGuiMsg::TabsReady(text));
                self.send(JobToGuiMsg::Status(JobStatus::TabsReady));
            }
        }
    }

    fn send(&self, msg: JobToGuiMsg) {
        // The UI hanging up just ends the worker on the next poll
        let _ = self.tx.send(msg);
    }
}

fn load_timeline(path: &Path) -> Result<NoteTimeline, JobError> {
    let data = std::fs::read_to_string(path).map_err(|source| JobError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut timeline: NoteTimeline = serde_json::from_str(&data)?;
    let before = timeline.notes.len();
    timeline.notes.retain(|note| note.is_valid());
    if timeline.notes.len() < before {
        warn!(
            "{}: dropped {} out-of-range notes",
            path.display(),
            before - timeline.notes.len()
        );
    }
    for note in &mut timeline.notes {
        note.velocity = note.velocity.clamp(0., 1.);
    }
    if timeline.end_time <= 0. {
        return Err(JobError::DegenerateTimeline);
    }
    Ok(timeline)
}

/// Plain text tab rows, one per string, notes in start order. `Simple`
/// always takes the lowest playable string, `Efficient` stays close to
/// the previous fret.
fn render_tab_text(timeline: &NoteTimeline, algorithm: TabAlgorithm) -> String {
    let mut notes: Vec<&Note> = timeline.notes.iter().collect();
    notes.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut rows: Vec<String> = TUNING.iter().map(|(name, _)| format!("{name}|")).collect();
    let mut prev_fret = 0u8;
    for note in notes {
        let Some((string, fret)) = place_note(note.pitch, prev_fret, algorithm) else {
            continue;
        };
        prev_fret = fret;
        for (index, row) in rows.iter_mut().enumerate() {
            if index == string {
                row.push_str(&format!("{fret:-<CELL_WIDTH$}"));
            } else {
                row.push_str(&"-".repeat(CELL_WIDTH));
            }
        }
    }
    for row in &mut rows {
        row.push('|');
    }
    rows.join("\n")
}

fn fret_on(string: usize, pitch: u8) -> Option<u8> {
    let open = TUNING[string].1;
    (pitch >= open && pitch - open <= MAX_FRET).then(|| pitch - open)
}

fn place_note(pitch: u8, prev_fret: u8, algorithm: TabAlgorithm) -> Option<(usize, u8)> {
    match algorithm {
        TabAlgorithm::Simple => (0..TUNING.len())
            .rev()
            .find_map(|string| fret_on(string, pitch).map(|fret| (string, fret))),
        TabAlgorithm::Efficient => (0..TUNING.len())
            .filter_map(|string| fret_on(string, pitch).map(|fret| (string, fret)))
            .min_by_key(|&(_, fret)| (fret as i16 - prev_fret as i16).abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(pitch: u8, start: f32) -> Note {
        Note {
            pitch,
            start,
            end: start + 0.5,
            velocity: 0.8,
        }
    }

    #[test]
    fn test_simple_prefers_lowest_string() {
        // E3 (52) is playable on E, A and D strings; simple takes E
        assert_eq!(
            place_note(52, 0, TabAlgorithm::Simple),
            Some((5, 12))
        );
    }

    #[test]
    fn test_efficient_stays_near_previous_fret() {
        // Coming from fret 2, E3 should land on the D string (fret 2)
        assert_eq!(
            place_note(52, 2, TabAlgorithm::Efficient),
            Some((3, 2))
        );
    }

    #[test]
    fn test_unplayable_pitch_is_skipped() {
        assert_eq!(place_note(20, 0, TabAlgorithm::Simple), None);
        let timeline = NoteTimeline {
            notes: vec![note(20, 0.)],
            end_time: 1.,
        };
        let text = render_tab_text(&timeline, TabAlgorithm::Simple);
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("e||"));
    }

    #[test]
    fn test_rows_stay_aligned() {
        let timeline = NoteTimeline {
            notes: vec![note(40, 0.), note(64, 1.), note(52, 2.)],
            end_time: 3.,
        };
        let text = render_tab_text(&timeline, TabAlgorithm::Simple);
        let lengths: Vec<usize> = text.lines().map(str::len).collect();
        assert_eq!(lengths.len(), 6);
        assert!(lengths.iter().all(|&len| len == lengths[0]));
        // Open low E string renders fret 0 on the last row
        assert!(text.lines().last().unwrap().contains("0--"));
    }

    #[test]
    fn test_load_timeline_validates() {
        let path = std::env::temp_dir().join(format!("scribe-test-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"notes":[{"pitch":60,"start":0.0,"end":1.0,"velocity":0.5},
                         {"pitch":61,"start":2.0,"end":1.0,"velocity":0.5}],
                "end_time":4.0}"#,
        )
        .unwrap();
        let timeline = load_timeline(&path).unwrap();
        // The reversed note is dropped, not fatal
        assert_eq!(timeline.notes.len(), 1);
        assert_eq!(timeline.end_time, 4.0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_timeline_rejects_degenerate_duration() {
        let path = std::env::temp_dir().join(format!("scribe-test-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"notes":[{"pitch":60,"start":0.0,"end":1.0,"velocity":0.5}],"end_time":0.0}"#,
        )
        .unwrap();
        assert!(matches!(
            load_timeline(&path),
            Err(JobError::DegenerateTimeline)
        ));
        std::fs::remove_file(&path).ok();
    }
}
