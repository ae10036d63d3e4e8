#![forbid(unsafe_code)]

//! Deterministic program simulator.
//!
//! `ProgramSimulator` runs a [`Model`] without a terminal: events are
//! injected and frames captured into buffers. The manual's `--dump` mode and
//! its integration tests both go through it.
//!
//! # Example
//!
//! ```ignore
//! use academy_runtime::simulator::ProgramSimulator;
//!
//! let mut sim = ProgramSimulator::new(model);
//! sim.init();
//! sim.inject_event(Event::Resize { width: 80, height: 24 });
//! let buf = sim.capture_frame(80, 24);
//! ```

use std::time::Duration;

use academy_core::event::Event;
use academy_render::buffer::Buffer;
use academy_render::frame::Frame;

use crate::program::{Cmd, Model};

/// Deterministic simulator for [`Model`] testing.
pub struct ProgramSimulator<M: Model> {
    model: M,
    frame: Option<Buffer>,
    running: bool,
    tick_rate: Option<Duration>,
    mouse_capture: Option<bool>,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator. The model is not initialized until
    /// [`init`](Self::init) is called.
    pub fn new(model: M) -> Self {
        Self {
            model,
            frame: None,
            running: true,
            tick_rate: None,
            mouse_capture: None,
        }
    }

    /// Call `Model::init()` and execute the returned command.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Inject terminal events, stopping early if the model quits.
    pub fn inject_events(&mut self, events: &[Event]) {
        for event in events {
            if !self.running {
                break;
            }
            let cmd = self.model.update(M::Message::from(event.clone()));
            self.execute_cmd(cmd);
        }
    }

    /// Inject a single terminal event.
    pub fn inject_event(&mut self, event: Event) {
        self.inject_events(&[event]);
    }

    /// Render the model at the given size. The buffer replaces the previous
    /// capture.
    pub fn capture_frame(&mut self, width: u16, height: u16) -> &Buffer {
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);
        self.frame.insert(frame.into_buffer())
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the simulator, returning the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// `false` once a `Cmd::Quit` has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The tick interval requested via `Cmd::Tick`, if any.
    pub fn tick_rate(&self) -> Option<Duration> {
        self.tick_rate
    }

    /// The last mouse capture state requested via `Cmd::SetMouseCapture`.
    pub fn mouse_capture(&self) -> Option<bool> {
        self.mouse_capture
    }

    fn execute_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Tick(duration) => self.tick_rate = Some(duration),
            Cmd::SetMouseCapture(enabled) => self.mouse_capture = Some(enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::event::{KeyCode, KeyEvent};
    use academy_render::cell::Cell;
    use academy_render::drawing::Draw;

    /// Two pages, one visible at a time.
    struct Pager {
        page: u8,
        mouse: bool,
    }

    #[derive(Debug)]
    enum PagerMsg {
        Next,
        ToggleMouse,
        Quit,
        Ignored,
    }

    impl From<Event> for PagerMsg {
        fn from(event: Event) -> Self {
            match event {
                Event::Key(k) => match k.code {
                    KeyCode::Tab => Self::Next,
                    KeyCode::Char('m') => Self::ToggleMouse,
                    KeyCode::Char('q') => Self::Quit,
                    _ => Self::Ignored,
                },
                _ => Self::Ignored,
            }
        }
    }

    impl Model for Pager {
        type Message = PagerMsg;

        fn init(&mut self) -> Cmd {
            Cmd::tick(Duration::from_millis(50))
        }

        fn update(&mut self, msg: PagerMsg) -> Cmd {
            match msg {
                PagerMsg::Next => {
                    self.page = (self.page + 1) % 2;
                    Cmd::none()
                }
                PagerMsg::ToggleMouse => {
                    self.mouse = !self.mouse;
                    Cmd::SetMouseCapture(self.mouse)
                }
                PagerMsg::Quit => Cmd::quit(),
                PagerMsg::Ignored => Cmd::none(),
            }
        }

        fn view(&self, frame: &mut Frame) {
            let text = if self.page == 0 { "A" } else { "B" };
            frame.buffer.print_text(0, 0, text, Cell::default());
        }
    }

    fn pager() -> ProgramSimulator<Pager> {
        ProgramSimulator::new(Pager { page: 0, mouse: true })
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn init_records_tick() {
        let mut sim = pager();
        assert_eq!(sim.tick_rate(), None);
        sim.init();
        assert_eq!(sim.tick_rate(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn events_drive_update() {
        let mut sim = pager();
        sim.inject_events(&[press(KeyCode::Tab), press(KeyCode::Tab), press(KeyCode::Tab)]);
        assert_eq!(sim.model().page, 1);
        assert!(sim.is_running());
    }

    #[test]
    fn mouse_capture_command_is_recorded() {
        let mut sim = pager();
        assert_eq!(sim.mouse_capture(), None);
        sim.inject_event(press(KeyCode::Char('m')));
        assert_eq!(sim.mouse_capture(), Some(false));
        sim.inject_event(press(KeyCode::Char('m')));
        assert_eq!(sim.mouse_capture(), Some(true));
    }

    #[test]
    fn quit_stops_further_events() {
        let mut sim = pager();
        sim.inject_events(&[press(KeyCode::Char('q')), press(KeyCode::Tab)]);
        assert!(!sim.is_running());
        assert_eq!(sim.into_model().page, 0);
    }

    #[test]
    fn capture_frame_renders_current_view() {
        let mut sim = pager();
        let buf = sim.capture_frame(3, 1);
        assert_eq!(buf.get(0, 0).unwrap().content.as_char(), Some('A'));
        sim.inject_event(press(KeyCode::Tab));
        let buf = sim.capture_frame(3, 1);
        assert_eq!(buf.get(0, 0).unwrap().content.as_char(), Some('B'));
    }
}
