#![forbid(unsafe_code)]

//! Program runtime.
//!
//! The runtime owns the terminal session and the presenter and runs the
//! update/view loop:
//!
//! 1. Report the initial terminal size to the model as a resize event.
//! 2. Call `Model::init()` and execute its command.
//! 3. Loop: render when dirty, poll for input (bounded by the next tick),
//!    convert events to messages, call `Model::update()`, execute commands.
//! 4. Exit when a `Cmd::Quit` is executed; the session restores the terminal
//!    on drop.
//!
//! # Example
//!
//! ```ignore
//! use academy_runtime::{Cmd, Model, Program};
//!
//! let mut program = Program::new(MyModel::default())?;
//! program.run()?;
//! ```

use std::io::{self, BufWriter, Stdout};
use std::time::{Duration, Instant};

use academy_core::event::Event;
use academy_core::terminal_session::{SessionOptions, TerminalSession};
use academy_render::frame::Frame;
use academy_render::presenter::Presenter;
use tracing::{debug, info};

/// The application model.
///
/// All state lives in the model; `update` is the only place it changes and
/// `view` is a pure projection of it onto a frame.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Must be convertible from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Initialize the model with startup commands.
    fn init(&mut self) -> Cmd {
        Cmd::none()
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Side effects requested by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Deliver `Event::Tick` every `Duration` from now on.
    Tick(Duration),
    /// Toggle mouse capture at runtime. The simulator only records it.
    SetMouseCapture(bool),
}

impl Cmd {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn tick(interval: Duration) -> Self {
        Self::Tick(interval)
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Use the alternate screen buffer.
    pub alternate_screen: bool,
    /// Capture mouse events.
    pub mouse: bool,
    /// Upper bound on how long a single input poll blocks.
    pub poll_timeout: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse: true,
            poll_timeout: Duration::from_millis(100),
        }
    }
}

/// Drives a [`Model`] against the real terminal.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    session: TerminalSession,
    presenter: Presenter<BufWriter<Stdout>>,
    running: bool,
    dirty: bool,
    tick_rate: Option<Duration>,
    last_tick: Instant,
    size: (u16, u16),
}

impl<M: Model> Program<M> {
    /// Create a program with the default configuration.
    pub fn new(model: M) -> io::Result<Self> {
        Self::with_config(model, ProgramConfig::default())
    }

    /// Create a program, entering raw mode and the configured terminal modes.
    pub fn with_config(model: M, config: ProgramConfig) -> io::Result<Self> {
        let session = TerminalSession::new(SessionOptions {
            alternate_screen: config.alternate_screen,
            mouse_capture: config.mouse,
        })?;
        let size = session.size()?;
        info!(width = size.0, height = size.1, mouse = config.mouse, "program created");

        Ok(Self {
            model,
            config,
            session,
            presenter: Presenter::new(BufWriter::new(io::stdout())),
            running: true,
            dirty: true,
            tick_rate: None,
            last_tick: Instant::now(),
            size,
        })
    }

    /// Run the update/view loop until the model quits.
    pub fn run(&mut self) -> io::Result<()> {
        let (width, height) = self.size;
        self.dispatch(Event::Resize { width, height })?;

        let cmd = self.model.init();
        self.execute_cmd(cmd)?;

        while self.running {
            if self.dirty {
                self.render_frame()?;
            }

            let timeout = self.next_timeout();
            if self.session.poll_event(timeout)?
                && let Some(event) = self.session.read_event()?
            {
                self.handle_event(event)?;
            }
            self.process_tick()?;
        }

        info!("program exited");
        Ok(())
    }

    /// Borrow the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the program, returning the model.
    ///
    /// Dropping the program here restores the terminal.
    pub fn into_model(self) -> M {
        self.model
    }

    fn next_timeout(&self) -> Duration {
        match self.tick_rate {
            Some(rate) => rate
                .saturating_sub(self.last_tick.elapsed())
                .min(self.config.poll_timeout),
            None => self.config.poll_timeout,
        }
    }

    fn process_tick(&mut self) -> io::Result<()> {
        let Some(rate) = self.tick_rate else {
            return Ok(());
        };
        if self.running && self.last_tick.elapsed() >= rate {
            self.last_tick = Instant::now();
            self.dispatch(Event::Tick)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        if let Event::Resize { width, height } = event {
            debug!(width, height, "terminal resized");
            self.size = (width, height);
            self.presenter.invalidate();
        }
        self.dispatch(event)
    }

    fn dispatch(&mut self, event: Event) -> io::Result<()> {
        let cmd = self.model.update(M::Message::from(event));
        self.dirty = true;
        self.execute_cmd(cmd)
    }

    fn execute_cmd(&mut self, cmd: Cmd) -> io::Result<()> {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Tick(duration) => {
                self.tick_rate = Some(duration);
                self.last_tick = Instant::now();
            }
            Cmd::SetMouseCapture(enabled) => self.session.set_mouse_capture(enabled)?,
        }
        Ok(())
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let (width, height) = self.size;
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);
        let stats = self.presenter.present(&frame.buffer, frame.cursor)?;
        debug!(
            cells = stats.cells_written,
            full = stats.full_redraw,
            "frame rendered"
        );
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_constructors() {
        assert_eq!(Cmd::none(), Cmd::None);
        assert_eq!(Cmd::default(), Cmd::None);
        assert_eq!(Cmd::quit(), Cmd::Quit);
        assert_eq!(
            Cmd::tick(Duration::from_millis(250)),
            Cmd::Tick(Duration::from_millis(250))
        );
    }

    #[test]
    fn default_config() {
        let cfg = ProgramConfig::default();
        assert!(cfg.alternate_screen);
        assert!(cfg.mouse);
        assert_eq!(cfg.poll_timeout, Duration::from_millis(100));
    }

    #[test]
    fn cmd_debug_format() {
        assert_eq!(format!("{:?}", Cmd::Quit), "Quit");
        assert_eq!(
            format!("{:?}", Cmd::SetMouseCapture(false)),
            "SetMouseCapture(false)"
        );
    }
}
