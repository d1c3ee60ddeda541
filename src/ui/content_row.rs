//! Resolved-state row: avatar, label, and the refresh control.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::animation::Rgba;

use super::shimmer::{paint_avatar, placeholder_layout};
use super::Palette;

const REFRESH_ICON: &str = "↻";

/// The row shown once a section has finished loading.
#[derive(Debug, Clone, Copy)]
pub struct ContentRow<'a> {
    label: &'a str,
    refresh_label: &'a str,
    palette: &'a Palette,
    focused: bool,
    hovered: bool,
}

impl<'a> ContentRow<'a> {
    pub fn new(label: &'a str, refresh_label: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            refresh_label,
            palette,
            focused: false,
            hovered: false,
        }
    }

    /// Highlight the refresh control as the keyboard target.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Highlight the refresh control under the mouse.
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    fn refresh_text(&self) -> String {
        format!("[ {} {} ]", REFRESH_ICON, self.refresh_label)
    }

    /// Where the refresh control lands inside `area`: right-aligned on the
    /// middle line.
    pub fn refresh_area(&self, area: Rect) -> Rect {
        let text = self.refresh_text();
        let width = (text.width() as u16).min(area.width);
        let y = placeholder_layout(area).text_block.y.max(area.y);
        Rect::new(area.right().saturating_sub(width), y, width, 1).intersection(area)
    }

    fn control_style(&self) -> Style {
        let style = Style::default()
            .fg(self.palette.text.into())
            .bg(self.palette.surface.into());
        if self.hovered || self.focused {
            style
                .fg(self.palette.surface.into())
                .bg(self.palette.background.into())
                .add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Widget for ContentRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = placeholder_layout(area);
        let accent: Rgba = self.palette.accent;
        paint_avatar(buf, layout.avatar, self.palette.surface, |_, _| accent);

        let refresh = self.refresh_area(area);
        let label_area = Rect::new(
            layout.text_block.x,
            layout.text_block.y,
            refresh.x.saturating_sub(layout.text_block.x + 1),
            layout.text_block.height,
        );
        buf.set_stringn(
            label_area.x,
            label_area.y,
            self.label,
            label_area.width as usize,
            Style::default()
                .fg(self.palette.text.into())
                .bg(self.palette.surface.into())
                .add_modifier(Modifier::BOLD),
        );

        buf.set_stringn(
            refresh.x,
            refresh.y,
            self.refresh_text(),
            refresh.width as usize,
            self.control_style(),
        );
    }
}
