use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, SNACKBAR_BG};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: key hints, or the snackbar while one is showing.
pub struct Footer<'a> {
    snackbar: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(snackbar: Option<&'a str>) -> Self {
        Self { snackbar }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        if let Some(message) = self.snackbar {
            let style = Style::default().fg(HEADER_TEXT).bg(SNACKBAR_BG);
            return Paragraph::new(Line::from(Span::styled(format!(" {message} "), style)))
                .alignment(Alignment::Left)
                .block(block);
        }

        let hints = " r: Refresh │ g: Random text │ ↑/↓: Select │ Enter: Open │ q: Quit";
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(block)
    }
}
