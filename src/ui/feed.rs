use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use std::sync::Arc;

use crate::pane::{Pane, RenderContext};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// Fetched items, shared between the app and the success pane it installed
/// into the layout.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    items: Arc<Mutex<Vec<String>>>,
}

impl Feed {
    pub fn replace(&self, items: Vec<String>) {
        *self.items.lock() = items;
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn pane(&self) -> FeedPane {
        FeedPane { feed: self.clone() }
    }
}

pub struct FeedPane {
    feed: Feed,
}

impl Pane for FeedPane {
    fn render(&self, area: Rect, buf: &mut Buffer, _ctx: &RenderContext) {
        let items = self.feed.items.lock();
        let lines: Vec<Line> = if items.is_empty() {
            vec![Line::styled("Nothing fetched yet", Style::default().fg(MUTED_TEXT))]
        } else {
            items
                .iter()
                .map(|item| Line::styled(format!(" • {item}"), Style::default().fg(HEADER_TEXT)))
                .collect()
        };
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Feed ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}
