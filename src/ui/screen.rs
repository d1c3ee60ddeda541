//! Screen composer: the scrollable list of section cards.
//!
//! The whole list is laid out in its own buffer at full height, then the
//! visible window is copied into the frame. Each card shows either its
//! shimmer or its content row, depending on the section's view.

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Widget};
use ratatui::Frame;
use tokio::time::Instant;

use crate::app::{App, SectionId, SectionView};
use crate::config::ShimmerStyle;
use crate::ui::interaction::ClickAction;

use super::content_row::ContentRow;
use super::shimmer::{ShimmerElement, ROW_HEIGHT};
use super::{Density, Palette};

/// Blank rows above the first header.
pub const TOP_PADDING: u16 = 1;
/// Blank columns on either side of the list.
pub const SIDE_PADDING: u16 = 2;
/// Card height: one row of content inside a border.
pub const CARD_HEIGHT: u16 = ROW_HEIGHT + 2;

const HEADER_HEIGHT: u16 = 1;
const HEADER_GAP: u16 = 1;
const SECTION_GAP: u16 = 2;
const SECTION_HEIGHT: u16 = HEADER_HEIGHT + HEADER_GAP + CARD_HEIGHT + SECTION_GAP;

/// Content-space rectangles of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub header: Rect,
    pub card: Rect,
    /// Inside the card's border and padding.
    pub body: Rect,
}

/// Total height of the list for `sections` sections.
pub fn content_height(sections: usize) -> u16 {
    TOP_PADDING.saturating_add((sections as u16).saturating_mul(SECTION_HEIGHT))
}

/// Lay out `count` sections in a list `width` columns wide.
pub fn layout_sections(width: u16, count: usize) -> Vec<SectionLayout> {
    let x = SIDE_PADDING.min(width);
    let inner_width = width.saturating_sub(SIDE_PADDING * 2);

    (0..count)
        .map(|index| {
            let y = TOP_PADDING + index as u16 * SECTION_HEIGHT;
            let header = Rect::new(x, y, inner_width, HEADER_HEIGHT);
            let card = Rect::new(x, y + HEADER_HEIGHT + HEADER_GAP, inner_width, CARD_HEIGHT);
            let body = card.inner(Margin::new(2, 1));
            SectionLayout { header, card, body }
        })
        .collect()
}

/// Map a content-space rect into the viewport, clipping what is scrolled off.
fn to_screen(rect: Rect, viewport: Rect, offset: u16) -> Option<Rect> {
    let top = rect.y.max(offset);
    let bottom = rect.bottom().min(offset.saturating_add(viewport.height));
    if top >= bottom || rect.width == 0 {
        return None;
    }
    let mapped = Rect::new(viewport.x + rect.x, viewport.y + (top - offset), rect.width, bottom - top);
    let clipped = mapped.intersection(viewport);
    (!clipped.is_empty()).then_some(clipped)
}

fn render_shimmer(style: ShimmerStyle, elapsed: std::time::Duration, body: Rect, palette: &Palette, density: Density, buf: &mut Buffer) {
    match style {
        ShimmerStyle::Alpha(alpha) => {
            let color = palette.placeholder.with_alpha(alpha.alpha_at(elapsed));
            ShimmerElement::flat(color, palette.surface, density).render(body, buf);
        }
        ShimmerStyle::Gradient(gradient) => {
            let (container, block_height) = ShimmerElement::sweep_metrics(body, &density);
            let offset = gradient.offset_at(elapsed, container, block_height);
            match ShimmerElement::gradient(&palette.gradient_colors(), offset, palette.surface, density) {
                Ok(element) => element.render(body, buf),
                Err(err) => tracing::warn!(error = %err, "gradient shimmer skipped"),
            }
        }
    }
}

/// Render the screen as of `now`.
pub fn render_screen(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    let palette = app.palette;
    let background = Style::default().bg(palette.background.into());
    Block::default().style(background).render(area, frame.buffer_mut());

    let total = content_height(app.sections.len());
    let overflow = total > area.height;
    let content_width = if overflow { area.width.saturating_sub(1) } else { area.width };
    app.set_max_scroll(total.saturating_sub(area.height));
    let offset = app.scroll_offset;

    let mut content = Buffer::empty(Rect::new(0, 0, content_width, total));
    Block::default().style(background).render(content.area, &mut content);

    let layouts = layout_sections(content_width, app.sections.len());
    let mut refresh_controls: Vec<(Rect, SectionId)> = Vec::new();

    for (section, layout) in app.sections.iter().zip(&layouts) {
        let focused = section.id().0 == app.focus;

        Paragraph::new(app.strings.section_title(&section.style()))
            .style(
                Style::default()
                    .fg(palette.header.into())
                    .bg(palette.background.into())
                    .add_modifier(Modifier::BOLD),
            )
            .render(layout.header, &mut content);

        let border = if focused { palette.accent } else { palette.dim };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border.into()))
            .style(Style::default().bg(palette.surface.into()))
            .render(layout.card, &mut content);

        match section.view(now) {
            SectionView::Loading { style, elapsed } => {
                render_shimmer(style, elapsed, layout.body, &palette, app.density, &mut content);
            }
            SectionView::Loaded => {
                let row = ContentRow::new(&app.strings.temperature, &app.strings.refresh, &palette);
                let control = row.refresh_area(layout.body);
                let hovered = match (to_screen(control, area, offset), app.mouse_position) {
                    (Some(rect), Some((x, y))) => rect.contains((x, y).into()),
                    _ => false,
                };
                row.focused(focused).hovered(hovered).render(layout.body, &mut content);
                refresh_controls.push((control, section.id()));
            }
        }
    }

    let buf = frame.buffer_mut();
    let visible_rows = area.height.min(total.saturating_sub(offset));
    for row in 0..visible_rows {
        for col in 0..content_width.min(area.width) {
            if let (Some(src), Some(dst)) = (
                content.cell((col, offset + row)),
                buf.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }

    app.hit_areas.clear();
    for (rect, id) in refresh_controls {
        if let Some(rect) = to_screen(rect, area, offset) {
            app.hit_areas.register(rect, ClickAction::Refresh(id));
        }
    }

    if overflow {
        let mut state = ScrollbarState::new(total as usize)
            .viewport_content_length(area.height as usize)
            .position(offset as usize);
        frame.render_stateful_widget(Scrollbar::new(ScrollbarOrientation::VerticalRight), area, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_sections() {
        let layouts = layout_sections(60, 2);
        assert_eq!(layouts[0].header, Rect::new(2, 1, 56, 1));
        assert_eq!(layouts[0].card, Rect::new(2, 3, 56, CARD_HEIGHT));
        assert_eq!(layouts[0].body, Rect::new(4, 4, 52, ROW_HEIGHT));
        assert_eq!(layouts[1].header.y, 1 + SECTION_HEIGHT);
        assert_eq!(content_height(2), 1 + 2 * SECTION_HEIGHT);
    }

    #[test]
    fn test_to_screen_translates_and_clips() {
        let viewport = Rect::new(0, 0, 80, 10);
        assert_eq!(to_screen(Rect::new(4, 12, 10, 1), viewport, 5), Some(Rect::new(4, 7, 10, 1)));
        assert_eq!(to_screen(Rect::new(4, 2, 10, 1), viewport, 5), None);
        assert_eq!(to_screen(Rect::new(4, 16, 10, 1), viewport, 5), None);
        assert_eq!(to_screen(Rect::new(4, 4, 10, 3), viewport, 5), Some(Rect::new(4, 0, 10, 2)));
    }
}
