//! Panes shipped with the crate and used by the default templates.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use super::{Pane, RefreshIndicator, RenderContext, RetryControl, TextSlot};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

const BRAILLE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DOT_FRAMES: &[&str] = &["   ", ".  ", ".. ", "..."];

/// Rows above `content_height` lines so they sit vertically centred in `area`.
fn centered_top(area: Rect, content_height: u16) -> Rect {
    let pad = area.height.saturating_sub(content_height) / 2;
    Rect {
        x: area.x,
        y: area.y + pad,
        width: area.width,
        height: area.height.saturating_sub(pad),
    }
}

/// Animated loading indicator.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    frame_ms: u64,
    label: String,
}

impl Spinner {
    pub fn braille() -> Self {
        Self {
            frames: BRAILLE_FRAMES,
            frame_ms: 80,
            label: "Loading".to_string(),
        }
    }

    pub fn dots() -> Self {
        Self {
            frames: DOT_FRAMES,
            frame_ms: 300,
            label: "Loading".to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn frame_at(&self, now_ms: u64) -> &'static str {
        let index = (now_ms / self.frame_ms.max(1)) as usize % self.frames.len();
        self.frames[index]
    }
}

impl Pane for Spinner {
    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        let line = Line::from(vec![
            Span::styled(self.frame_at(ctx.now_ms), Style::default().fg(ACCENT)),
            Span::raw(" "),
            Span::styled(self.label.as_str(), Style::default().fg(HEADER_TEXT)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(centered_top(area, 1), buf);
    }
}

/// Error message with an optional retry control.
#[derive(Debug, Clone)]
pub struct ErrorPanel {
    title: String,
    message: TextSlot,
    retry: Option<RetryControl>,
}

impl ErrorPanel {
    pub fn new() -> Self {
        Self {
            title: " Error ".to_string(),
            message: TextSlot::default(),
            retry: Some(RetryControl::new("Retry (r)")),
        }
    }

    pub fn without_retry() -> Self {
        Self {
            retry: None,
            ..Self::new()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message.set_text(Some(message.into()));
        self
    }
}

impl Default for ErrorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Pane for ErrorPanel {
    fn render(&self, area: Rect, buf: &mut Buffer, _ctx: &RenderContext) {
        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR));
        let inner = block.inner(area);
        block.render(area, buf);

        let message = self.message.text().unwrap_or("Something went wrong");
        let mut lines = vec![Line::from(Span::styled(
            message,
            Style::default().fg(HEADER_TEXT),
        ))];
        if let Some(retry) = self.retry.as_ref().filter(|r| r.is_visible()) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("[ {} ]", retry.label()),
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let height = lines.len() as u16;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered_top(inner, height), buf);
    }

    fn text_slot(&self) -> Option<&TextSlot> {
        Some(&self.message)
    }

    fn text_slot_mut(&mut self) -> Option<&mut TextSlot> {
        Some(&mut self.message)
    }

    fn retry_control(&self) -> Option<&RetryControl> {
        self.retry.as_ref()
    }

    fn retry_control_mut(&mut self) -> Option<&mut RetryControl> {
        self.retry.as_mut()
    }
}

/// Pull-to-refresh container. Draws a one-line banner over the content
/// while refreshing and nothing otherwise.
#[derive(Debug, Clone)]
pub struct RefreshContainer {
    refreshing: bool,
    label: String,
}

impl RefreshContainer {
    pub fn new() -> Self {
        Self {
            refreshing: false,
            label: "Refreshing".to_string(),
        }
    }
}

impl Default for RefreshContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshIndicator for RefreshContainer {
    fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }
}

impl Pane for RefreshContainer {
    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &RenderContext) {
        if !self.refreshing || area.height == 0 {
            return;
        }
        let frame = BRAILLE_FRAMES[(ctx.now_ms / 80) as usize % BRAILLE_FRAMES.len()];
        let banner = Rect {
            height: 1,
            ..area
        };
        Paragraph::new(Line::from(vec![
            Span::styled(frame, Style::default().fg(ACCENT)),
            Span::raw(" "),
            Span::styled(self.label.as_str(), Style::default().fg(HEADER_TEXT)),
        ]))
        .alignment(Alignment::Center)
        .style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .render(banner, buf);
    }

    fn refresh_indicator(&self) -> Option<&dyn RefreshIndicator> {
        Some(self)
    }

    fn refresh_indicator_mut(&mut self) -> Option<&mut dyn RefreshIndicator> {
        Some(self)
    }
}

/// Static bordered text, handy as success content.
#[derive(Debug, Clone, Default)]
pub struct TextPane {
    title: String,
    lines: Vec<String>,
}

impl TextPane {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Pane for TextPane {
    fn render(&self, area: Rect, buf: &mut Buffer, _ctx: &RenderContext) {
        let lines: Vec<Line> = if self.lines.is_empty() {
            vec![Line::from(Span::styled(
                "(empty)",
                Style::default().fg(MUTED_TEXT),
            ))]
        } else {
            self.lines
                .iter()
                .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(HEADER_TEXT))))
                .collect()
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}
