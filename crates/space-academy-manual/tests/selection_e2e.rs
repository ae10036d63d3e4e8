//! End-to-end selection tests.
//!
//! Drives `ManualModel` through `ProgramSimulator` with synthetic key and
//! mouse events and asserts on the captured frames, the way a user would see
//! them.
//!
//! # Invariants
//! - Exactly one section body is visible in a frame tall enough to show the
//!   whole document.
//! - Tiles render in registry order whatever is selected.
//! - Clicking a tile selects it; clicking it again changes nothing.

mod common;

use academy_core::event::{Event, KeyCode};
use academy_harness::{contains_text, find_text};
use space_academy_manual::{ContentRegistry, SectionId};

use common::{click, key, press, simulator, visible_bodies};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 60;

#[test]
fn initial_render_expands_intro_only() {
    let mut sim = simulator(WIDTH, HEIGHT);
    let frame = sim.capture_frame(WIDTH, HEIGHT);

    assert_eq!(visible_bodies(frame), vec![SectionId::Intro]);
    for entry in ContentRegistry::global().iter() {
        assert!(contains_text(frame, entry.title), "missing {}", entry.title);
    }
}

#[test]
fn clicking_neural_core_swaps_expanded_section() {
    let mut sim = simulator(WIDTH, HEIGHT);
    let (x, y) = find_text(sim.capture_frame(WIDTH, HEIGHT), "The Neural Core")
        .expect("Neural Core title on screen");

    sim.inject_event(click(x, y));
    assert_eq!(sim.model().selection().current(), SectionId::Brain);
    let frame = sim.capture_frame(WIDTH, HEIGHT);
    assert_eq!(visible_bodies(frame), vec![SectionId::Brain]);

    // Clicking the open tile again keeps it open.
    let (x, y) = find_text(frame, "The Neural Core").expect("title still on screen");
    sim.inject_event(click(x, y));
    assert_eq!(sim.model().selection().current(), SectionId::Brain);
    assert_eq!(
        visible_bodies(sim.capture_frame(WIDTH, HEIGHT)),
        vec![SectionId::Brain]
    );
}

#[test]
fn every_section_is_reachable_by_click() {
    let registry = ContentRegistry::global();
    let mut sim = simulator(WIDTH, HEIGHT);
    for entry in registry.iter().rev() {
        let (x, y) =
            find_text(sim.capture_frame(WIDTH, HEIGHT), entry.title).expect("title on screen");
        sim.inject_event(click(x, y));
        assert_eq!(sim.model().selection().current(), entry.id);
        assert_eq!(
            visible_bodies(sim.capture_frame(WIDTH, HEIGHT)),
            vec![entry.id]
        );
    }
}

#[test]
fn every_section_is_reachable_by_number_key() {
    let mut sim = simulator(WIDTH, HEIGHT);
    for (i, id) in SectionId::ALL.iter().enumerate() {
        sim.inject_event(key(char::from(b'1' + i as u8)));
        assert_eq!(visible_bodies(sim.capture_frame(WIDTH, HEIGHT)), vec![*id]);
    }
}

#[test]
fn keyboard_focus_then_enter_selects() {
    let mut sim = simulator(WIDTH, HEIGHT);
    sim.inject_events(&[press(KeyCode::Tab), press(KeyCode::Tab), press(KeyCode::Enter)]);
    assert_eq!(sim.model().selection().current(), SectionId::Memory);
    assert_eq!(sim.model().focus(), Some(SectionId::Memory));
}

#[test]
fn render_order_ignores_selection() {
    let registry = ContentRegistry::global();
    let mut sim = simulator(WIDTH, HEIGHT);
    for id in SectionId::ALL {
        sim.inject_event(key(char::from(b'1' + registry.position(id).unwrap() as u8)));
        let frame = sim.capture_frame(WIDTH, HEIGHT);
        let positions: Vec<(u16, u16)> = registry
            .iter()
            .map(|e| {
                let (x, y) = find_text(frame, e.title).expect("title on screen");
                (y, x)
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "tiles out of order with {id} selected");
    }
}

#[test]
fn resize_changes_column_count() {
    let mut sim = simulator(120, HEIGHT);
    let frame = sim.capture_frame(120, HEIGHT);
    let intro = find_text(frame, "Welcome to Space Academy").unwrap();
    let brain = find_text(frame, "The Neural Core").unwrap();
    assert_eq!(sim.model().layout().columns, 2);
    assert!(brain.0 > intro.0);

    sim.inject_event(Event::Resize {
        width: 60,
        height: HEIGHT,
    });
    let frame = sim.capture_frame(60, HEIGHT);
    let intro = find_text(frame, "Welcome to Space Academy").unwrap();
    let brain = find_text(frame, "The Neural Core").unwrap();
    assert_eq!(visible_bodies(frame), vec![SectionId::Intro]);
    assert!(brain.1 > intro.1);
    assert_eq!(sim.model().layout().columns, 1);
}

#[test]
fn small_terminal_scrolls_selection_into_view() {
    let mut sim = simulator(60, 16);
    sim.inject_event(key('6'));
    let frame = sim.capture_frame(60, 16);
    assert!(contains_text(frame, "Mission Objectives"));
    assert!(contains_text(frame, "Success metrics include:"));
    assert!(!contains_text(frame, "Space Academy AI Training Manual"));

    sim.inject_event(press(KeyCode::Home));
    let frame = sim.capture_frame(60, 16);
    assert!(contains_text(frame, "Space Academy AI Training Manual"));
}

#[test]
fn quit_stops_the_program() {
    let mut sim = simulator(WIDTH, HEIGHT);
    sim.inject_events(&[key('q'), key('3')]);
    assert!(!sim.is_running());
    assert_eq!(sim.model().selection().current(), SectionId::Intro);
}

#[test]
fn mouse_toggle_releases_and_recaptures_the_pointer() {
    let mut sim = simulator(WIDTH, HEIGHT);
    assert_eq!(sim.mouse_capture(), None);
    sim.inject_event(key('m'));
    assert_eq!(sim.mouse_capture(), Some(false));
    sim.inject_event(key('m'));
    assert_eq!(sim.mouse_capture(), Some(true));
    assert!(sim.is_running());
}
