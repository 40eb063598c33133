use crate::state::State;
use crate::ui::app::App;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let layout = app.layout();
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let committed = layout.committed_state();

        let mut spans = vec![
            Span::styled("  ● ", Style::default().fg(state_color(committed))),
            Span::styled(format!("shown: {committed}"), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("requested: {}", layout.state()), text_style),
        ];
        if let Some(pending) = layout.pending_state() {
            spans.push(Span::styled(
                format!(" (pending {pending})"),
                Style::default().fg(STATUS_PENDING),
            ));
        }
        spans.push(Span::styled("  │  ", separator_style));
        let notified = app
            .last_notified()
            .map_or_else(|| "-".to_string(), |state| state.to_string());
        spans.push(Span::styled(format!("notified: {notified}"), text_style));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            format!(
                "fetch #{} ({} items)",
                app.fetch().attempt(),
                app.feed().len()
            ),
            text_style,
        ));
        if layout.is_refresh_mode() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("pull-to-refresh", Style::default().fg(STATUS_PENDING)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn state_color(state: State) -> ratatui::style::Color {
    match state {
        State::Loading => STATUS_PENDING,
        State::Error => STATUS_ERROR,
        State::Success => STATUS_OK,
    }
}
