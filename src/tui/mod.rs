//! Terminal user interface for stepping through programs.
//!
//! Presents the machine the way a front panel would: a memory dump of the
//! zero page and the program page, the register and flag state, and a
//! disassembly listing around the program counter. Bytes changed by the
//! last instruction are highlighted, as are the bytes of the instruction
//! about to execute.

mod views;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use emu6502::{Cpu, FlatMemory};

/// TUI application state.
pub struct App {
    cpu: Cpu<FlatMemory>,
    /// Memory snapshot taken before the last executed instruction, used to
    /// highlight changed bytes.
    previous_memory: Box<[u8; 65536]>,
    running: bool,
    run_delay: Duration,
    should_quit: bool,
}

impl App {
    fn new(cpu: Cpu<FlatMemory>, run_delay: Duration) -> Self {
        let mut app = Self {
            cpu,
            previous_memory: Box::new([0; 65536]),
            running: false,
            run_delay,
            should_quit: false,
        };
        app.snapshot_memory();
        app
    }

    /// Executes one instruction, remembering the memory state beforehand so
    /// the view can mark what changed.
    fn step(&mut self) {
        self.snapshot_memory();
        self.cpu.step();
    }

    fn snapshot_memory(&mut self) {
        for addr in 0..=0xFFFFu16 {
            self.previous_memory[addr as usize] = self.cpu.read(addr);
        }
    }

    fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char(' ') | KeyCode::Enter => self.step(),
            KeyCode::Char('e') => self.running = !self.running,
            KeyCode::Char('r') => {
                self.cpu.reset();
                self.running = false;
                self.snapshot_memory();
            }
            KeyCode::Char('i') => self.cpu.irq(),
            KeyCode::Char('n') => self.cpu.nmi(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

/// Sets up the terminal, runs the UI loop until quit, and restores the
/// terminal even when the draw loop panics.
pub fn run(cpu: Cpu<FlatMemory>, run_delay: Duration) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cpu, run_delay);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| views::render(frame, app))?;

        // In free-run mode the poll timeout doubles as the instruction
        // pacing interval.
        let timeout = if app.running {
            app.run_delay
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code, key.modifiers);
                }
            }
        } else if app.running {
            app.step();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
