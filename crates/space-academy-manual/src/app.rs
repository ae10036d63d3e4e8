#![forbid(unsafe_code)]

//! Application model for the manual.
//!
//! Implements the Elm architecture: [`ManualModel`] owns every piece of
//! state, [`ManualMsg`] drives transitions, and `view()` is a pure function
//! of state. The only state that matters to the content is the
//! [`Selection`]; everything else (focus ring, hover, scroll) is
//! presentation.

use std::time::{Duration, Instant};

use academy_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use academy_core::geometry::Rect;
use academy_render::cell::Cell;
use academy_render::frame::Frame;
use academy_render::export::buffer_to_trimmed_text;
use academy_runtime::{Cmd, Model, ProgramSimulator};
use tracing::{debug, info};

use crate::layout::{Columns, Direction, ManualLayout};
use crate::registry::{ContentRegistry, SectionId};
use crate::selection::Selection;
use crate::theme::{self, Glyphs};
use crate::view::{ManualView, render_document};

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_STEP: u16 = 3;

/// Tick interval used while waiting for `--exit-after-ms`.
const EXIT_POLL: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Messages for [`ManualModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualMsg {
    /// A raw key or mouse event, routed by the model.
    Input(Event),
    /// Terminal resize.
    Resize { width: u16, height: u16 },
    /// Periodic tick.
    Tick,
    /// Expand the given section.
    Select(SectionId),
    /// Move the focus ring forward in render order (wrapping).
    FocusNext,
    /// Move the focus ring backward in render order (wrapping).
    FocusPrev,
    /// Move the focus ring within the grid.
    FocusMove(Direction),
    /// Select the focused tile.
    ActivateFocus,
    /// Scroll by a signed number of rows.
    ScrollBy(i32),
    /// Scroll to an absolute offset (clamped).
    ScrollTo(u16),
    /// Pointer moved over the given tile (or off every tile).
    Hover(Option<SectionId>),
    /// Toggle mouse capture.
    ToggleMouse,
    Quit,
}

impl From<Event> for ManualMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::Resize { width, height } => Self::Resize { width, height },
            Event::Tick => Self::Tick,
            other => Self::Input(other),
        }
    }
}

// ---------------------------------------------------------------------------
// ManualModel
// ---------------------------------------------------------------------------

/// Top-level application state.
pub struct ManualModel {
    registry: &'static ContentRegistry,
    selection: Selection,
    /// Keyboard focus ring; `None` until the keyboard is used.
    focus: Option<SectionId>,
    hover: Option<SectionId>,
    /// Screen cell of the last mouse event.
    pointer: Option<(u16, u16)>,
    /// First document row shown at the top of the terminal.
    scroll: u16,
    viewport: (u16, u16),
    columns: Columns,
    glyphs: Glyphs,
    mouse_capture: bool,
    exit_after: Option<Duration>,
    started: Option<Instant>,
}

impl Default for ManualModel {
    fn default() -> Self {
        Self::new(ContentRegistry::global())
    }
}

impl ManualModel {
    /// A model over `registry`, selecting its default section.
    pub fn new(registry: &'static ContentRegistry) -> Self {
        Self {
            registry,
            selection: Selection::for_registry(registry),
            focus: None,
            hover: None,
            pointer: None,
            scroll: 0,
            viewport: (80, 24),
            columns: Columns::Auto,
            glyphs: Glyphs::Unicode,
            mouse_capture: true,
            exit_after: None,
            started: None,
        }
    }

    /// Start with `id` expanded instead of the default section.
    #[must_use]
    pub fn with_section(mut self, id: SectionId) -> Self {
        self.selection = Selection::new(id);
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Record whether the terminal captures the mouse (for the `m` toggle).
    #[must_use]
    pub fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    /// Quit on the first tick at least `after` past `init`.
    #[must_use]
    pub fn with_exit_after(mut self, after: Option<Duration>) -> Self {
        self.exit_after = after;
        self
    }

    /// Assume a terminal of this size until the first resize event.
    #[must_use]
    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport = (width, height);
        self
    }

    pub fn registry(&self) -> &'static ContentRegistry {
        self.registry
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn focus(&self) -> Option<SectionId> {
        self.focus
    }

    pub fn hover(&self) -> Option<SectionId> {
        self.hover
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture
    }

    /// Layout for the current viewport width and selection.
    pub fn layout(&self) -> ManualLayout {
        ManualLayout::compute(self.viewport.0, self.registry, &self.selection, self.columns)
    }

    /// Largest scroll offset for the current viewport.
    pub fn max_scroll(&self) -> u16 {
        self.layout().max_scroll(self.viewport.1)
    }

    // -- input routing ------------------------------------------------------

    fn route(&self, event: Event) -> Option<ManualMsg> {
        match event {
            Event::Key(key) => self.route_key(key),
            Event::Mouse(mouse) => self.route_mouse(mouse),
            Event::Resize { width, height } => Some(ManualMsg::Resize { width, height }),
            Event::Tick => Some(ManualMsg::Tick),
        }
    }

    fn route_key(&self, key: KeyEvent) -> Option<ManualMsg> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let page = i32::from(self.viewport.1.saturating_sub(1).max(1));
        let msg = match key.code {
            KeyCode::Char('c') if key.ctrl() => ManualMsg::Quit,
            KeyCode::Char('q') | KeyCode::Escape => ManualMsg::Quit,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                ManualMsg::Select(self.registry.at(index)?.id)
            }
            KeyCode::Char('m') => ManualMsg::ToggleMouse,
            KeyCode::Char(' ') | KeyCode::Enter => ManualMsg::ActivateFocus,
            KeyCode::Tab => ManualMsg::FocusNext,
            KeyCode::BackTab => ManualMsg::FocusPrev,
            KeyCode::Up => ManualMsg::FocusMove(Direction::Up),
            KeyCode::Down => ManualMsg::FocusMove(Direction::Down),
            KeyCode::Left => ManualMsg::FocusMove(Direction::Left),
            KeyCode::Right => ManualMsg::FocusMove(Direction::Right),
            KeyCode::PageUp => ManualMsg::ScrollBy(-page),
            KeyCode::PageDown => ManualMsg::ScrollBy(page),
            KeyCode::Home => ManualMsg::ScrollTo(0),
            KeyCode::End => ManualMsg::ScrollTo(u16::MAX),
            _ => return None,
        };
        Some(msg)
    }

    fn route_mouse(&self, mouse: MouseEvent) -> Option<ManualMsg> {
        let doc_y = mouse.y.saturating_add(self.scroll);
        let msg = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let id = self.layout().tile_at(mouse.x, doc_y)?;
                ManualMsg::Select(id)
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let id = self.layout().tile_at(mouse.x, doc_y);
                if id == self.hover {
                    return None;
                }
                ManualMsg::Hover(id)
            }
            MouseEventKind::ScrollUp => ManualMsg::ScrollBy(-i32::from(WHEEL_STEP)),
            MouseEventKind::ScrollDown => ManualMsg::ScrollBy(i32::from(WHEEL_STEP)),
            MouseEventKind::Down(_) | MouseEventKind::Up(_) => return None,
        };
        Some(msg)
    }

    // -- state transitions --------------------------------------------------

    fn select(&mut self, id: SectionId) {
        if self.selection.select(id) {
            info!(section = %id, "section selected");
        } else {
            debug!(section = %id, "section already selected");
        }
        if self.focus.is_some() {
            self.focus = Some(id);
        }
        self.ensure_visible(id);
        self.refresh_hover();
    }

    fn move_focus(&mut self, to: impl FnOnce(&ManualLayout, SectionId) -> SectionId) {
        let from = self.focus.unwrap_or(self.selection.current());
        let target = to(&self.layout(), from);
        self.focus = Some(target);
        self.ensure_visible(target);
        self.refresh_hover();
    }

    fn scroll_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.max_scroll());
        self.refresh_hover();
    }

    /// Resolve the hovered tile again from the last pointer position.
    ///
    /// Scrolling and relayout move tiles under a pointer that stays put.
    fn refresh_hover(&mut self) {
        let Some((x, y)) = self.pointer else {
            return;
        };
        let hover = self.layout().tile_at(x, y.saturating_add(self.scroll));
        if hover != self.hover {
            debug!(?hover, "hover moved under pointer");
            self.hover = hover;
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX));
    }

    /// Scroll so that the tile for `id` is on screen.
    ///
    /// A tile taller than the viewport is aligned to its top edge.
    fn ensure_visible(&mut self, id: SectionId) {
        let layout = self.layout();
        let Some(slot) = layout.tile(id) else {
            return;
        };
        let height = self.viewport.1;
        let rect = slot.rect;
        if rect.y < self.scroll {
            self.scroll = rect.y;
        } else if rect.bottom() > self.scroll.saturating_add(height) {
            self.scroll = rect.bottom().saturating_sub(height).min(rect.y);
        }
        self.scroll = self.scroll.min(layout.max_scroll(height));
    }

    fn exit_due(&self) -> bool {
        match (self.exit_after, self.started) {
            (Some(after), Some(started)) => started.elapsed() >= after,
            _ => false,
        }
    }

    fn view_for<'a>(&self, layout: &'a ManualLayout) -> ManualView<'a> {
        ManualView {
            registry: self.registry,
            layout,
            selection: self.selection,
            focus: self.focus,
            hover: self.hover,
            glyphs: self.glyphs,
        }
    }
}

impl Model for ManualModel {
    type Message = ManualMsg;

    fn init(&mut self) -> Cmd {
        info!(
            section = %self.selection.current(),
            columns = %self.columns,
            "manual started"
        );
        match self.exit_after {
            Some(after) => {
                self.started = Some(Instant::now());
                Cmd::tick(after.min(EXIT_POLL))
            }
            None => Cmd::none(),
        }
    }

    fn update(&mut self, msg: Self::Message) -> Cmd {
        match msg {
            ManualMsg::Input(event) => {
                if let Event::Mouse(mouse) = &event {
                    self.pointer = Some((mouse.x, mouse.y));
                }
                match self.route(event) {
                    Some(routed) => {
                        debug!(?routed, "input routed");
                        self.update(routed)
                    }
                    None => Cmd::none(),
                }
            }
            ManualMsg::Resize { width, height } => {
                self.viewport = (width, height);
                self.scroll_to(self.scroll);
                Cmd::none()
            }
            ManualMsg::Tick => {
                if self.exit_due() {
                    info!("exit timer elapsed");
                    Cmd::quit()
                } else {
                    Cmd::none()
                }
            }
            ManualMsg::Select(id) => {
                self.select(id);
                Cmd::none()
            }
            ManualMsg::FocusNext => {
                self.move_focus(|layout, from| layout.cycle(from, true));
                Cmd::none()
            }
            ManualMsg::FocusPrev => {
                self.move_focus(|layout, from| layout.cycle(from, false));
                Cmd::none()
            }
            ManualMsg::FocusMove(direction) => {
                self.move_focus(|layout, from| layout.neighbor(from, direction));
                Cmd::none()
            }
            ManualMsg::ActivateFocus => {
                let id = self.focus.unwrap_or(self.selection.current());
                self.focus = Some(id);
                self.select(id);
                Cmd::none()
            }
            ManualMsg::ScrollBy(delta) => {
                self.scroll_by(delta);
                Cmd::none()
            }
            ManualMsg::ScrollTo(offset) => {
                self.scroll_to(offset);
                Cmd::none()
            }
            ManualMsg::Hover(id) => {
                self.hover = id;
                Cmd::none()
            }
            ManualMsg::ToggleMouse => {
                self.mouse_capture = !self.mouse_capture;
                if !self.mouse_capture {
                    self.hover = None;
                    self.pointer = None;
                }
                info!(enabled = self.mouse_capture, "mouse capture toggled");
                Cmd::SetMouseCapture(self.mouse_capture)
            }
            ManualMsg::Quit => Cmd::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.bounds();
        if area.is_empty() {
            return;
        }
        frame
            .buffer
            .fill(area, Cell::default().with_bg(theme::bg::PAGE));

        let layout = ManualLayout::compute(area.width, self.registry, &self.selection, self.columns);
        let document = render_document(&self.view_for(&layout));
        let scroll = self.scroll.min(layout.max_scroll(area.height));
        let window = Rect::new(0, scroll, document.width(), area.height);
        frame.buffer.copy_from(&document, window, area.x, area.y);
    }
}

/// Render one frame of `model` as plain text.
///
/// `height` defaults to the full document height at `width`, so nothing is
/// cut off.
pub fn dump(model: ManualModel, width: u16, height: Option<u16>) -> String {
    let height = height.unwrap_or_else(|| {
        ManualLayout::compute(width, model.registry, &model.selection, model.columns).height
    });
    let mut sim = ProgramSimulator::new(model);
    sim.init();
    sim.inject_event(Event::Resize { width, height });
    let text = buffer_to_trimmed_text(sim.capture_frame(width, height));
    debug!(width, height, "frame dumped");
    text
}
