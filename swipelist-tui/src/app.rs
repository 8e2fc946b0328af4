//! Host list state: cursor, swipe reveal, and the acknowledgement modal.

use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use swipelist_lib::{
    AcknowledgementRequest, ActionConfiguration, ActionDescriptor, ActionSource, Edge,
};

/// A revealed group of action buttons on one edge of the selected row.
#[derive(Debug, Clone)]
pub struct Reveal {
    pub edge: Edge,
    pub actions: Vec<ActionDescriptor>,
    /// Index into `actions`; 0 is nearest the row content.
    pub focused: usize,
}

/// The host list view state machine.
///
/// The keyboard stands in for the swipe gesture: Left drags the row left
/// (revealing the trailing edge), Right drags it right (revealing the
/// leading edge). While a group is revealed the same keys move button
/// focus in screen direction, Enter taps, and Escape closes.
pub struct App<S: ActionSource> {
    source: S,
    cursor: usize,
    reveal: Option<Reveal>,
    modal: Option<AcknowledgementRequest>,
    running: bool,
}

impl<S: ActionSource> App<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cursor: 0,
            reveal: None,
            modal: None,
            running: true,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    pub fn modal(&self) -> Option<&AcknowledgementRequest> {
        self.modal.as_ref()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, key: KeyEvent) {
        // The modal swallows all input until dismissed.
        if self.modal.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.modal = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => {
                if self.reveal.take().is_none() {
                    self.running = false;
                }
            }
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Left => self.on_left(),
            KeyCode::Right => self.on_right(),
            KeyCode::Enter => self.activate(),
            _ => {}
        }
    }

    fn on_left(&mut self) {
        match &mut self.reveal {
            None => self.swipe(Edge::Trailing),
            Some(reveal) => match reveal.edge {
                // Trailing buttons sit right of the content with index 0
                // leftmost, so left on screen is a lower index.
                Edge::Trailing => reveal.focused = reveal.focused.saturating_sub(1),
                // Leading buttons run outward from the content, so left on
                // screen is a higher index.
                Edge::Leading => {
                    reveal.focused = (reveal.focused + 1).min(reveal.actions.len() - 1);
                }
            },
        }
    }

    fn on_right(&mut self) {
        match &mut self.reveal {
            None => self.swipe(Edge::Leading),
            Some(reveal) => match reveal.edge {
                Edge::Trailing => {
                    reveal.focused = (reveal.focused + 1).min(reveal.actions.len() - 1);
                }
                Edge::Leading => reveal.focused = reveal.focused.saturating_sub(1),
            },
        }
    }

    /// Open `edge` of the selected row, resolving the configuration into
    /// concrete buttons. Focus starts at index 0, nearest the finger.
    fn swipe(&mut self, edge: Edge) {
        let Some(row) = self.source.row_at(self.cursor) else {
            return;
        };

        let actions = match self.source.configuration_for(row, edge) {
            ActionConfiguration::Actions(actions) => actions,
            ActionConfiguration::HostDefault => {
                debug!("no override for {row:?} {edge:?}, showing built-in delete");
                vec![ActionDescriptor::destructive("Delete")]
            }
            ActionConfiguration::Empty => {
                debug!("actions suppressed for {row:?} {edge:?}");
                return;
            }
        };

        self.reveal = Some(Reveal {
            edge,
            actions,
            focused: 0,
        });
    }

    /// Tap the focused button: close the reveal and present the
    /// acknowledgement the catalog produces for it. The host's built-in
    /// Delete goes through the same dispatch path.
    fn activate(&mut self) {
        let Some(reveal) = self.reveal.take() else {
            return;
        };
        let action = &reveal.actions[reveal.focused];
        self.modal = Some(self.source.invoke(&action.on_invoke));
    }

    fn move_cursor(&mut self, delta: isize) {
        self.reveal = None;
        let count = self.source.row_count();
        if count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
    }
}
