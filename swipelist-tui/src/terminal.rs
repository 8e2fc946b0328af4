//! Raw-mode terminal session with double-buffered cell rendering.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor,
        SetForegroundColor},
    terminal,
};
use swipelist_lib::Rgb;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

/// A full-screen grid of cells, composed off-screen and then diffed
/// against the previously flushed frame.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); usize::from(width) * usize::from(height)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Write a cell; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    pub fn cells_mut(&mut self) -> std::slice::IterMut<'_, Cell> {
        self.cells.iter_mut()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    fn diff<'a>(&'a self, other: &'a Frame) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % usize::from(self.width)) as u16;
                let y = (i / usize::from(self.width)) as u16;
                (x, y, cell)
            })
    }
}

/// Terminal session guard. Enters raw mode and the alternate screen on
/// construction and restores the terminal on drop.
pub struct Terminal {
    stdout: Stdout,
    previous: Frame,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            previous: Frame::new(width, height),
        })
    }

    /// Current terminal dimensions.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block until the next input event; returns key presses and drops
    /// everything else (a resize still wakes the caller for a redraw).
    pub fn next_key(&self) -> io::Result<Option<KeyEvent>> {
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    /// Diff `frame` against the previously flushed one and write only the
    /// changed cells, updating colors and attributes only when they
    /// change between writes.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        if frame.width() != self.previous.width() || frame.height() != self.previous.height() {
            // Size changed: drop the stale buffer and repaint everything.
            self.previous = Frame::new(frame.width(), frame.height());
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        let mut next_pos: Option<(u16, u16)> = None;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_bold = false;

        for (x, y, cell) in frame.diff(&self.previous) {
            if next_pos != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = Some(cell.fg);
            }

            if last_bg != Some(cell.bg) {
                queue!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = Some(cell.bg);
            }

            if cell.bold != last_bold {
                let attr = if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(self.stdout, SetAttribute(attr))?;
                last_bold = cell.bold;
            }

            queue!(self.stdout, Print(cell.ch))?;
            next_pos = Some((x + 1, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.previous = frame.clone();
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
