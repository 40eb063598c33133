use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " l/e/s: State │ f: Fetch │ r: Retry │ p: Pull │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, notice: Option<&str>) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(HINTS, text_style)];
        let mut used = HINTS.chars().count() + version.chars().count();
        if let Some(notice) = notice {
            let notice = format!(" │ {notice}");
            used += notice.chars().count();
            spans.push(Span::styled(notice, Style::default().fg(STATUS_ERROR)));
        }

        // Char count, not byte count (box-drawing separators)
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
