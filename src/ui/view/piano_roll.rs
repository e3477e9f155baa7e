use egui::{Pos2, Rect, Sense, Ui, pos2, vec2};

use crate::{
    core::{
        note::{Note, NoteTimeline, PitchWindow, pitch_name},
        state::ScribeState,
        transport::TransportClock,
    },
    ui::theme::{NOTE_PLAYED, NOTE_UPCOMING, OCTAVE_GUIDE, PLAYHEAD_COLOR, ROLL_BACKGROUND},
};

pub const NOTE_HEIGHT: f32 = 8.;
pub const NOTE_SPACING: f32 = 2.;
const ROW_STEP: f32 = NOTE_HEIGHT + NOTE_SPACING;
const PLAYHEAD_WIDTH: f32 = 2.;

/// Pure piano roll geometry for one frame: maps note time to x and
/// pitch to y on a surface of the given width. Rebuilt every frame
/// from current inputs; nothing is cached across frames.
#[derive(Debug, Clone, Copy)]
pub struct RollLayout {
    window: PitchWindow,
    end_time: f32,
    width: f32,
}

impl RollLayout {
    /// `None` when there is nothing drawable: no notes to frame, or a
    /// degenerate duration that would make every x position undefined.
    pub fn new(timeline: &NoteTimeline, window: Option<PitchWindow>, width: f32) -> Option<Self> {
        let window = window?;
        if !timeline.is_renderable() {
            return None;
        }
        Some(Self {
            window,
            end_time: timeline.end_time,
            width,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// One row per semitone in the window, top row = highest pitch.
    pub fn rows(&self) -> u32 {
        self.window.range() as u32 + 1
    }

    pub fn height(&self) -> f32 {
        ROW_STEP * self.rows() as f32
    }

    pub fn row_y(&self, row: u32) -> f32 {
        row as f32 * ROW_STEP
    }

    pub fn row_pitch(&self, row: u32) -> u8 {
        self.window.high - row as u8
    }

    /// Surface-local rectangle for a note. Zero-length notes keep a
    /// 1px minimum width so they stay visible.
    pub fn note_rect(&self, note: &Note) -> Rect {
        let row = self.window.high.saturating_sub(note.pitch);
        let x = note.start / self.end_time * self.width;
        let w = (note.duration() / self.end_time * self.width).max(1.);
        Rect::from_min_size(pos2(x, row as f32 * ROW_STEP), vec2(w, NOTE_HEIGHT))
    }

    pub fn playhead_x(&self, time: f32) -> f32 {
        time / self.end_time * self.width
    }

    pub fn x_to_time(&self, x: f32) -> f32 {
        (x / self.width * self.end_time).clamp(0., self.end_time)
    }

    /// Pure function of the note and the clock, re-evaluated every
    /// frame so backward seeks render correctly.
    pub fn is_played(note: &Note, time: f32) -> bool {
        note.start <= time
    }
}

pub struct UIPianoRoll {}

impl UIPianoRoll {
    pub fn new() -> Self {
        Self {}
    }

    /// Full redraw from current state; refuses to allocate a surface
    /// when the session has nothing drawable.
    pub fn ui(&mut self, ui: &mut Ui, state: &mut ScribeState) {
        let Some(timeline) = state.timeline().cloned() else {
            return;
        };
        let width = ui.available_width();
        let Some(layout) = RollLayout::new(&timeline, state.pitch_window(), width) else {
            return;
        };

        let (response, painter) =
            ui.allocate_painter(vec2(width, layout.height()), Sense::click());
        let origin = response.rect.min;
        self.paint(&painter, origin, &layout, &timeline, &state.transport);

        // Click to seek, mirroring the timeline behaviour
        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
        {
            state.transport.seek(layout.x_to_time(pos.x - origin.x));
        }
        if let Some(pos) = response.hover_pos() {
            let row = ((pos.y - origin.y) / ROW_STEP) as u32;
            if row < layout.rows() {
                response.on_hover_text(pitch_name(layout.row_pitch(row)));
            }
        }
        state.mark_rendered();
    }

    fn paint(
        &self,
        painter: &egui::Painter,
        origin: Pos2,
        layout: &RollLayout,
        timeline: &NoteTimeline,
        transport: &TransportClock,
    ) {
        let time = transport.position();
        let surface = Rect::from_min_size(origin, vec2(layout.width(), layout.height()));
        painter.rect_filled(surface, 2.0, ROLL_BACKGROUND);

        // Translucent bands on every C row as octave anchors
        for row in 0..layout.rows() {
            if layout.row_pitch(row) % 12 == 0 {
                let band = Rect::from_min_size(
                    pos2(origin.x, origin.y + layout.row_y(row)),
                    vec2(layout.width(), NOTE_HEIGHT),
                );
                painter.rect_filled(band, 0.0, OCTAVE_GUIDE);
            }
        }

        for note in &timeline.notes {
            let rect = layout.note_rect(note).translate(origin.to_vec2());
            let color = if RollLayout::is_played(note, time) {
                NOTE_PLAYED
            } else {
                NOTE_UPCOMING
            };
            painter.rect_filled(rect, 1.0, color);
        }

        if transport.duration() > 0. {
            let x = origin.x + layout.playhead_x(time);
            let playhead = Rect::from_min_size(
                pos2(x, origin.y),
                vec2(PLAYHEAD_WIDTH, layout.height()),
            );
            painter.rect_filled(playhead, 0.0, PLAYHEAD_COLOR);
        }
    }
}
