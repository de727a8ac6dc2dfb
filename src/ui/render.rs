use crate::data::Item;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::items::ItemsViewState;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let state = app.view_state();
    frame.render_widget(Header::new().widget(state.is_loading()), header);
    frame.render_widget(Clear, body);
    match state {
        ItemsViewState::Loading => draw_loading(frame, body, app.spinner_frame()),
        ItemsViewState::Success { items, random_text } => {
            draw_success(frame, body, items, random_text, app.selection())
        }
        ItemsViewState::Error {
            message,
            random_text,
        } => draw_error(frame, body, message, random_text),
    }
    frame.render_widget(Footer::new(app.snackbar.message()).widget(footer), footer);
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let lines = vec![
        Line::from(Span::styled(spinner, Style::default().fg(ACCENT))),
        Line::from(""),
        Line::from(Span::styled(
            "Loading items...",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        vertically_centered(area, 3),
    );
}

fn draw_success(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &[Item],
    random_text: &str,
    selection: usize,
) {
    let [top, list_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                random_text.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "[g] Generate Random Text",
                Style::default().fg(ACCENT),
            )),
        ])
        .alignment(Alignment::Center),
        top,
    );

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("No items found. Tap refresh to fetch some.")
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center),
            list_area,
        );
        return;
    }

    let cards: Vec<ListItem> = items.iter().map(item_card).collect();
    let list = List::new(cards)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌ ");
    let mut list_state = ListState::default().with_selected(Some(selection));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn item_card(item: &Item) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            item.name().to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            item.description().to_string(),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    if let Some(url) = item.image_url() {
        lines.push(Line::from(Span::styled(
            format!("🖼  {url}"),
            Style::default().fg(ACCENT),
        )));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn draw_error(frame: &mut Frame<'_>, area: Rect, message: &str, random_text: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            random_text.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[r] Retry", Style::default().fg(ACCENT))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        vertically_centered(area, 5),
    );
}

fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
