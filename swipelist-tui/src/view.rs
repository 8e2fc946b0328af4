//! Frame composition: the list, revealed action buttons, and the modal.

use swipelist_lib::{AcknowledgementRequest, ActionDescriptor, ActionSource, ActionStyle, Edge,
    Rgb};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Reveal};
use crate::terminal::{Cell, Frame};
use crate::theme::{self, Theme};

const LIST_TOP: u16 = 2;
const MAX_BUTTON_LABEL: usize = 18;

pub fn draw<S: ActionSource>(app: &App<S>, theme: &Theme, width: u16, height: u16) -> Frame {
    let mut frame = Frame::new(width, height);
    fill(&mut frame, theme);

    put_str(&mut frame, 2, 0, "Swipe actions", theme.accent, theme.background, true);

    for index in 0..app.source().row_count() {
        draw_row(&mut frame, app, theme, index);
    }

    if height > LIST_TOP {
        put_str(
            &mut frame,
            2,
            height - 1,
            "Up/Down selects, Left/Right swipes, Enter taps, Esc closes, q quits",
            theme.muted,
            theme.background,
            false,
        );
    }

    if let Some(request) = app.modal() {
        backdrop_dim(&mut frame);
        draw_modal(&mut frame, theme, request);
    }

    frame
}

fn fill(frame: &mut Frame, theme: &Theme) {
    for cell in frame.cells_mut() {
        *cell = Cell {
            ch: ' ',
            fg: theme.foreground,
            bg: theme.background,
            bold: false,
        };
    }
}

fn draw_row<S: ActionSource>(frame: &mut Frame, app: &App<S>, theme: &Theme, index: usize) {
    let Some(row) = app.source().row_at(index) else {
        return;
    };
    let y = LIST_TOP + index as u16;
    let selected = index == app.cursor();
    let bg = if selected {
        theme.selection
    } else {
        theme.background
    };

    for x in 0..frame.width() {
        frame.set(
            x,
            y,
            Cell {
                ch: ' ',
                fg: theme.foreground,
                bg,
                bold: false,
            },
        );
    }

    if selected {
        put_str(frame, 1, y, "▸", theme.accent, bg, false);
    }

    let label = truncate_to_width(
        app.source().label_for(row),
        usize::from(frame.width().saturating_sub(4)),
    );
    put_str(frame, 3, y, &label, theme.foreground, bg, selected);

    if selected {
        if let Some(reveal) = app.reveal() {
            draw_buttons(frame, theme, y, reveal);
        }
    }
}

/// Render a revealed button group over the row, covering its content the
/// way a swiped-open row does. Array index 0 always sits nearest the row
/// content: trailing groups grow leftward from the right edge, leading
/// groups grow rightward from the left edge with their screen order
/// reversed.
fn draw_buttons(frame: &mut Frame, theme: &Theme, y: u16, reveal: &Reveal) {
    let rendered: Vec<(String, Rgb, bool)> = reveal
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let focused = i == reveal.focused;
            let mut bg = action.background.unwrap_or(match action.style {
                ActionStyle::Normal => theme.button,
                ActionStyle::Destructive => theme.destructive,
            });
            if focused {
                bg = theme::lighten(bg, 0.25);
            }
            (button_text(action), bg, focused)
        })
        .collect();

    let total: usize = rendered.iter().map(|(text, _, _)| text.width()).sum();

    let mut x = match reveal.edge {
        Edge::Trailing => u16::try_from(usize::from(frame.width()).saturating_sub(total))
            .unwrap_or(0),
        Edge::Leading => 0,
    };

    let draw_one = |frame: &mut Frame, x: &mut u16, (text, bg, focused): &(String, Rgb, bool)| {
        put_str(frame, *x, y, text, theme.foreground, *bg, *focused);
        *x += text.width() as u16;
    };

    match reveal.edge {
        Edge::Trailing => {
            for button in &rendered {
                draw_one(frame, &mut x, button);
            }
        }
        Edge::Leading => {
            for button in rendered.iter().rev() {
                draw_one(frame, &mut x, button);
            }
        }
    }
}

fn button_text(action: &ActionDescriptor) -> String {
    let label = truncate_to_width(&action.label, MAX_BUTTON_LABEL);
    match action.icon.as_deref().and_then(icon_glyph) {
        Some(glyph) => format!(" {glyph} {label} "),
        None => format!(" {label} "),
    }
}

/// Resolve a bundled icon asset name to its glyph.
fn icon_glyph(name: &str) -> Option<char> {
    match name {
        "Icon" => Some('✦'),
        _ => None,
    }
}

fn draw_modal(frame: &mut Frame, theme: &Theme, request: &AcknowledgementRequest) {
    let width = frame.width();
    let height = frame.height();

    let title = truncate_to_width(&request.title, usize::from(width.saturating_sub(8)));
    let modal_width = (title.width().max(12) + 6) as u16;
    let modal_height = 5;
    let left = width.saturating_sub(modal_width) / 2;
    let top = height.saturating_sub(modal_height) / 2;

    for dy in 0..modal_height {
        for dx in 0..modal_width {
            let ch = match (dx, dy) {
                (0, 0) => '╭',
                (dx, 0) if dx == modal_width - 1 => '╮',
                (0, dy) if dy == modal_height - 1 => '╰',
                (dx, dy) if dx == modal_width - 1 && dy == modal_height - 1 => '╯',
                (_, 0) => '─',
                (_, dy) if dy == modal_height - 1 => '─',
                (0, _) => '│',
                (dx, _) if dx == modal_width - 1 => '│',
                _ => ' ',
            };
            frame.set(
                left + dx,
                top + dy,
                Cell {
                    ch,
                    fg: theme.modal_border,
                    bg: theme.modal_background,
                    bold: false,
                },
            );
        }
    }

    let title_x = left + (modal_width.saturating_sub(title.width() as u16)) / 2;
    put_str(frame, title_x, top + 1, &title, theme.foreground, theme.modal_background, true);

    let ok = " OK ";
    let ok_x = left + (modal_width.saturating_sub(ok.width() as u16)) / 2;
    put_str(frame, ok_x, top + 3, ok, theme.background, theme.accent, true);
}

/// Dim the whole frame before the modal goes on top.
fn backdrop_dim(frame: &mut Frame) {
    for cell in frame.cells_mut() {
        cell.fg = theme::dim(cell.fg, 0.45);
        cell.bg = theme::dim(cell.bg, 0.45);
    }
}

fn put_str(frame: &mut Frame, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb, bold: bool) {
    let mut x = x;
    for ch in text.chars() {
        frame.set(x, y, Cell { ch, fg, bg, bold });
        x += ch.width().unwrap_or(0) as u16;
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}
