//! Card painting. Layout is computed in plain cells so the viewer can hit-test the handle
//! without a frame.

use super::card::CardState;
use crate::core::geom::{Axis, Rect};
use crate::kernel::fetch::FetchState;
use crate::kernel::services::ports::settings::ContentSource;
use crate::models::tweet::{PLACEHOLDER_AUTHOR, PLACEHOLDER_TEXT};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const CARD_HEIGHT: u16 = 12;
pub const STATUS_HEIGHT: u16 = 1;
const CARD_TOP_PADDING: u16 = 1;
const VERTICAL_HANDLE_WIDTH: u16 = 3;
const LOADING_TEXT: &str = "Loading tweet…";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardLayout {
    pub card: Rect,
    /// Empty when the card is too small to carry a handle.
    pub handle: Rect,
    pub status: Rect,
}

/// Centers a card `width_cells` wide in `area`, above a one-row status line.
pub fn card_layout(area: Rect, width_cells: u16, axis: Axis) -> CardLayout {
    let status_h = STATUS_HEIGHT.min(area.h);
    let body_h = area.h - status_h;
    let status = Rect::new(area.x, area.y + body_h, area.w, status_h);

    let pad = if body_h > CARD_TOP_PADDING {
        CARD_TOP_PADDING
    } else {
        0
    };
    let w = width_cells.min(area.w);
    let h = CARD_HEIGHT.min(body_h - pad);
    let card = Rect::new(area.x + (area.w - w) / 2, area.y + pad, w, h);

    CardLayout {
        card,
        handle: handle_rect(card, axis),
        status,
    }
}

fn handle_rect(card: Rect, axis: Axis) -> Rect {
    if card.w < VERTICAL_HANDLE_WIDTH || card.h < 2 {
        return Rect::default();
    }
    let y = card.bottom() - 1;
    match axis {
        Axis::Vertical => Rect::new(
            card.x + (card.w - VERTICAL_HANDLE_WIDTH) / 2,
            y,
            VERTICAL_HANDLE_WIDTH,
            1,
        ),
        Axis::Horizontal => Rect::new(card.right() - 1, y, 1, 1),
    }
}

/// What the card shows for its current fetch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub title: String,
    /// Misleading-visualization error the tweet is annotated with.
    pub label: Option<String>,
    pub text: String,
    pub error: Option<String>,
    pub image: Option<String>,
}

pub fn card_content(card: &CardState) -> CardContent {
    let mut content = match card.source() {
        ContentSource::Json => tweet_content(card),
        ContentSource::Text => text_content(card),
    };
    content.label = card.label().map(str::to_owned);
    content.image = card.image().map(|path| path.display().to_string());
    content
}

fn tweet_content(card: &CardState) -> CardContent {
    let fetch = card.tweet();
    match fetch.state() {
        FetchState::Success(tweet) => {
            let title = match tweet.display_date() {
                Some(date) => format!(" {} · {} ", tweet.display_author(), date),
                None => format!(" {} ", tweet.display_author()),
            };
            let text = if tweet.text.trim().is_empty() {
                PLACEHOLDER_TEXT.to_string()
            } else {
                tweet.text.clone()
            };
            CardContent {
                title,
                label: None,
                text,
                error: None,
                image: None,
            }
        }
        FetchState::Failure(message) => CardContent {
            title: format!(" {PLACEHOLDER_AUTHOR} "),
            label: None,
            text: PLACEHOLDER_TEXT.to_string(),
            error: Some(message.clone()),
            image: None,
        },
        FetchState::Idle | FetchState::Loading => CardContent {
            title: format!(" {PLACEHOLDER_AUTHOR} "),
            label: None,
            text: LOADING_TEXT.to_string(),
            error: None,
            image: None,
        },
    }
}

fn text_content(card: &CardState) -> CardContent {
    let fetch = card.text();
    let title = format!(" {} ", card.current_id().unwrap_or(PLACEHOLDER_AUTHOR));
    let text = match fetch.state() {
        FetchState::Idle | FetchState::Loading => LOADING_TEXT.to_string(),
        _ => fetch
            .content()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_TEXT.to_string()),
    };
    CardContent {
        title,
        label: None,
        text,
        error: fetch.error_message().map(str::to_owned),
        image: None,
    }
}

/// 1-based position of the shown tweet among the configured ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

pub fn render_card(frame: &mut Frame, layout: &CardLayout, card: &CardState, position: Position) {
    let dragging = card.resize().is_dragging();

    if !layout.card.is_empty() {
        let content = card_content(card);
        let border_style = if dragging {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(Span::styled(
                content.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));

        let mut lines: Vec<Line> = Vec::new();
        if let Some(label) = content.label {
            lines.push(Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::DarkGray)),
                Span::styled(label, Style::default().fg(Color::Magenta)),
            ]));
            lines.push(Line::default());
        }
        lines.extend(content.text.lines().map(Line::from));
        if let Some(error) = content.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                error,
                Style::default().fg(Color::Red),
            )));
        }
        if let Some(image) = content.image {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("[image] {image}"),
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            to_tui(layout.card),
        );
    }

    if !layout.handle.is_empty() {
        let glyph = match card.resize().settings().axis {
            Axis::Vertical => "━".repeat(layout.handle.w as usize),
            Axis::Horizontal => "◢".to_string(),
        };
        let style = if dragging {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, style)),
            to_tui(layout.handle),
        );
    }

    if !layout.status.is_empty() {
        frame.render_widget(
            Paragraph::new(status_line(card, position)),
            to_tui(layout.status),
        );
    }
}

fn status_line(card: &CardState, position: Position) -> Line<'static> {
    let id = card.current_id().unwrap_or("-").to_string();
    let mut spans = vec![
        Span::styled(
            format!(" {}/{} ", position.index, position.total),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(format!(" {id} ")),
        Span::styled(
            format!(" {:.0}px ", card.width()),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if card.resize().is_dragging() {
        spans.push(Span::styled(
            " resizing ",
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled(
        " n/p: next/prev  r: reload  q: quit",
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

pub fn to_tui(rect: Rect) -> ratatui::layout::Rect {
    ratatui::layout::Rect::new(rect.x, rect.y, rect.w, rect.h)
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
