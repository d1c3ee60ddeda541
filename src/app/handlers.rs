//! Message and input handling for the App.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage, SectionId, SectionView};
use crate::ui::interaction::ClickAction;

/// Rows moved per PageUp/PageDown.
const PAGE_ROWS: i32 = 10;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::LoadingFinished { section, ticket } => {
                let changed = self
                    .sections
                    .get_mut(section.0)
                    .is_some_and(|s| s.finish(ticket));
                if changed {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            _ => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Char('r') | KeyCode::Enter => {
                self.activate_refresh_control(self.focused_section());
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.activate_refresh_control(SectionId(index));
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-PAGE_ROWS),
            KeyCode::PageDown => self.scroll_by(PAGE_ROWS),
            KeyCode::Home => self.scroll_by(-(self.max_scroll as i32)),
            KeyCode::End => self.scroll_by(self.max_scroll as i32),
            _ => {}
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::Moved => {
                let position = Some((mouse.column, mouse.row));
                if self.mouse_position != position {
                    self.mouse_position = position;
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Dispatch a click through the hit areas registered by the last render.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        match self.hit_areas.hit_test(x, y) {
            Some(ClickAction::Refresh(id)) => {
                tracing::debug!(section = %id, x, y, "click: refresh");
                self.focus = id.0;
                self.refresh(id);
            }
            None => {}
        }
    }

    /// Press a section's refresh control from the keyboard.
    ///
    /// The control only exists while the content row is showing, so this is a
    /// no-op during loading.
    fn activate_refresh_control(&mut self, id: SectionId) {
        let now = tokio::time::Instant::now();
        let showing_content = self
            .section(id)
            .is_some_and(|s| s.view(now) == SectionView::Loaded);
        if showing_content {
            self.focus = id.0;
            self.refresh(id);
        }
    }
}
