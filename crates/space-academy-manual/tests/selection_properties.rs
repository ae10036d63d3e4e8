//! Property tests over random input sequences.
//!
//! # Invariants
//! - Exactly one tile is expanded after every event.
//! - The scroll offset never exceeds the document overflow.
//! - A left click inside a tile always selects that tile.

mod common;

use academy_core::event::{Event, KeyCode, MouseEvent, MouseEventKind};
use academy_runtime::ProgramSimulator;
use proptest::prelude::*;
use space_academy_manual::app::dump;
use space_academy_manual::layout::{Columns, MAX_CONTENT_WIDTH};
use space_academy_manual::{ManualModel, SectionId};

use common::{BODY_MARKERS, click, key, press};

#[derive(Debug, Clone)]
enum Op {
    Number(u8),
    Click(u16, u16),
    Hover(u16, u16),
    Key(KeyCode),
    Wheel(bool),
    Resize(u16, u16),
}

impl Op {
    fn event(&self) -> Event {
        match *self {
            Op::Number(n) => key(char::from(b'0' + n)),
            Op::Click(x, y) => click(x, y),
            Op::Hover(x, y) => Event::Mouse(MouseEvent::new(MouseEventKind::Moved, x, y)),
            Op::Key(code) => press(code),
            Op::Wheel(down) => {
                let kind = if down {
                    MouseEventKind::ScrollDown
                } else {
                    MouseEventKind::ScrollUp
                };
                Event::Mouse(MouseEvent::new(kind, 10, 10))
            }
            Op::Resize(width, height) => Event::Resize { width, height },
        }
    }
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u8..=9).prop_map(Op::Number),
        (0u16..160, 0u16..60).prop_map(|(x, y)| Op::Click(x, y)),
        (0u16..160, 0u16..60).prop_map(|(x, y)| Op::Hover(x, y)),
        prop::sample::select(vec![
            KeyCode::Tab,
            KeyCode::BackTab,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Char(' '),
            KeyCode::PageUp,
            KeyCode::PageDown,
            KeyCode::Home,
            KeyCode::End,
        ])
        .prop_map(Op::Key),
        any::<bool>().prop_map(Op::Wheel),
        (40u16..=160, 8u16..=60).prop_map(|(w, h)| Op::Resize(w, h)),
    ]
}

proptest! {
    #[test]
    fn exactly_one_tile_expanded(ops in prop::collection::vec(op(), 0..48)) {
        let mut sim = ProgramSimulator::new(ManualModel::default());
        sim.init();
        sim.inject_event(Event::Resize { width: 80, height: 24 });

        for op in &ops {
            sim.inject_event(op.event());
            let model = sim.model();
            let layout = model.layout();
            let expanded: Vec<SectionId> = layout
                .tiles
                .iter()
                .filter(|t| t.expanded)
                .map(|t| t.id)
                .collect();
            prop_assert_eq!(expanded, vec![model.selection().current()]);
            prop_assert!(model.scroll() <= model.max_scroll());
        }
        prop_assert!(sim.is_running());

        let selected = sim.model().selection().current();
        let text = dump(sim.into_model(), MAX_CONTENT_WIDTH, None);
        let shown: Vec<SectionId> = BODY_MARKERS
            .iter()
            .filter(|(_, marker)| text.contains(marker))
            .map(|(id, _)| *id)
            .collect();
        prop_assert_eq!(shown, vec![selected]);
    }

    #[test]
    fn click_inside_tile_selects_it(
        width in 40u16..=200,
        tile in 0usize..6,
        dx in 0u16..40,
        dy in 0u16..12,
        two_columns in any::<bool>(),
    ) {
        let columns = if two_columns { Columns::Two } else { Columns::Auto };
        let mut sim = ProgramSimulator::new(ManualModel::default().with_columns(columns));
        sim.init();
        sim.inject_event(Event::Resize { width, height: 200 });

        let slot = sim.model().layout().tiles[tile];
        let x = slot.rect.x + dx % slot.rect.width.max(1);
        let y = slot.rect.y + dy % slot.rect.height.max(1);
        sim.inject_event(click(x, y));
        prop_assert_eq!(sim.model().selection().current(), slot.id);
    }
}
