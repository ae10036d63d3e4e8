//! Shared helpers for the manual's integration tests.

#![allow(dead_code)]

use academy_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use academy_harness::contains_text;
use academy_render::buffer::Buffer;
use academy_runtime::ProgramSimulator;
use space_academy_manual::{ManualModel, SectionId};

/// A phrase from the first line of each section body.
pub const BODY_MARKERS: [(SectionId, &str); 6] = [
    (SectionId::Intro, "Greetings, cadet!"),
    (SectionId::Brain, "At the heart of our"),
    (SectionId::Memory, "Just like our best"),
    (SectionId::Rewards, "To encourage optimal"),
    (SectionId::Training, "Training happens over"),
    (SectionId::Achievements, "Success metrics include:"),
];

pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c)))
}

pub fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

pub fn click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y))
}

/// Sections whose body text is on screen.
pub fn visible_bodies(buf: &Buffer) -> Vec<SectionId> {
    BODY_MARKERS
        .iter()
        .filter(|(_, marker)| contains_text(buf, marker))
        .map(|(id, _)| *id)
        .collect()
}

/// A simulator sized `width`x`height`, initialized and resized.
pub fn simulator(width: u16, height: u16) -> ProgramSimulator<ManualModel> {
    let mut sim = ProgramSimulator::new(ManualModel::default());
    sim.init();
    sim.inject_event(Event::Resize { width, height });
    sim
}
