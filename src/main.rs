use crate::{core::message::GuiToJobMsg, job::spawn_job_thread, ui::spawn_ui_thread};

use crossbeam::channel::unbounded;
use rtrb::RingBuffer;

mod config;
mod core;
mod job;
mod ui;

fn main() {
    env_logger::init();

    // Create channels
    let (to_gui_sender, from_job_receiver) = unbounded();
    let (to_job_tx, from_gui_rx) = RingBuffer::<GuiToJobMsg>::new(64);

    // Worker that loads transcription results and renders tabs
    let _worker = spawn_job_thread(to_gui_sender, from_gui_rx);
    // Ui thread (main thread). Opens the app window
    spawn_ui_thread(to_job_tx, from_job_receiver).unwrap();
}
