//! Interactive single-card viewer: steps through tweet ids and lets the user drag the card
//! wider or narrower.

use super::card::{CardEntry, CardLoads, CardState};
use super::render::{card_layout, render_card, CardLayout, Position};
use crate::core::event::{
    InputEvent, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::geom::{PointerPos, Rect};
use crate::kernel::capture::PointerGrab;
use crate::kernel::resize::PointerInput;
use crate::kernel::services::adapters::content::AssetPaths;
use crate::kernel::services::adapters::runtime::{AppMessage, AsyncRuntime};
use crate::kernel::services::ports::settings::{Settings, ViewerSettings, DEFAULT_VIEWPORT_WIDTH};
use crate::tui::view::{EventResult, View};
use ratatui::Frame;
use std::sync::Arc;

pub struct CardViewer {
    viewer: ViewerSettings,
    entries: Vec<CardEntry>,
    index: usize,
    card: CardState,
    grab: PointerGrab,
    runtime: AsyncRuntime,
    last_area: Option<Rect>,
    last_layout: Option<CardLayout>,
}

impl CardViewer {
    pub fn new(
        settings: &Settings,
        assets: AssetPaths,
        entries: Vec<CardEntry>,
        runtime: AsyncRuntime,
    ) -> Self {
        let grab = PointerGrab::new();
        let card = CardState::new(settings, assets, Arc::new(grab.clone()));
        Self {
            viewer: settings.viewer.clone(),
            entries,
            index: 0,
            card,
            grab,
            runtime,
            last_area: None,
            last_layout: None,
        }
    }

    /// Issues the load for the first entry.
    pub fn start(&mut self) {
        self.show_current();
    }

    pub fn card(&self) -> &CardState {
        &self.card
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_grabbed(&self) -> bool {
        self.grab.is_grabbed()
    }

    /// Viewport width in pixels; the terminal width once known.
    pub fn viewport_width(&self) -> f64 {
        match self.last_area {
            Some(area) if area.w > 0 => f64::from(area.w) * self.viewer.px_per_column,
            _ => DEFAULT_VIEWPORT_WIDTH,
        }
    }

    /// Applies a runtime result. Returns whether the card changed.
    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::TweetLoaded(completion) => self.card.tweet_mut().complete(completion),
            AppMessage::TextLoaded(completion) => self.card.text_mut().complete(completion),
        }
    }

    /// Ends any drag and discards outstanding loads.
    pub fn shutdown(&mut self) {
        self.card.teardown();
    }

    fn show_current(&mut self) {
        let Some(entry) = self.entries.get(self.index) else {
            return;
        };
        tracing::info!(id = %entry.id, label = ?entry.label, index = self.index, "show tweet");
        let loads = self.card.show_entry(entry);
        self.issue(loads);
    }

    fn step(&mut self, forward: bool) -> EventResult {
        let len = self.entries.len();
        if len < 2 {
            return EventResult::Ignored;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
        self.show_current();
        EventResult::Consumed
    }

    fn reload(&mut self) -> EventResult {
        let loads = self.card.reload();
        if loads.is_empty() {
            return EventResult::Ignored;
        }
        tracing::info!(id = ?self.card.current_id(), "reload tweet");
        self.issue(loads);
        EventResult::Consumed
    }

    fn issue(&self, loads: CardLoads) {
        if let Some(pending) = loads.tweet {
            self.runtime.spawn_fetch(pending, AppMessage::TweetLoaded);
        }
        if let Some(pending) = loads.text {
            self.runtime.spawn_fetch(pending, AppMessage::TextLoaded);
        }
    }

    fn pointer_pos(&self, event: &MouseEvent) -> PointerPos {
        PointerPos::new(
            f64::from(event.column) * self.viewer.px_per_column,
            f64::from(event.row) * self.viewer.px_per_row,
        )
    }

    fn on_handle(&self, event: &MouseEvent) -> bool {
        self.last_layout
            .is_some_and(|layout| layout.handle.contains(event.column, event.row))
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let viewport = self.viewport_width();

        // A live drag sees every pointer event, wherever it lands.
        if self.grab.is_grabbed() {
            let input = match event.kind {
                MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    PointerInput::Move(self.pointer_pos(event))
                }
                MouseEventKind::Up(_) => PointerInput::Up,
                _ => return EventResult::Consumed,
            };
            self.card.pointer(input, viewport);
            return EventResult::Consumed;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if self.on_handle(event) => {
                let pos = self.pointer_pos(event);
                self.card.pointer(PointerInput::Down(pos), viewport);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn layout_for(&self, area: Rect) -> CardLayout {
        let cells = (self.card.width() / self.viewer.px_per_column).round();
        let cells = if cells.is_finite() {
            cells.clamp(0.0, f64::from(u16::MAX)) as u16
        } else {
            0
        };
        card_layout(area, cells, self.card.resize().settings().axis)
    }
}

impl View for CardViewer {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
                KeyCode::Char('n') | KeyCode::Right | KeyCode::Down => self.step(true),
                KeyCode::Char('p') | KeyCode::Left | KeyCode::Up => self.step(false),
                KeyCode::Char('r') => self.reload(),
                _ => EventResult::Ignored,
            },
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(w, h) => {
                self.last_area = Some(Rect::new(0, 0, *w, *h));
                EventResult::Consumed
            }
            InputEvent::FocusLost if self.grab.is_grabbed() => {
                // The release may never arrive once focus is gone.
                self.card.pointer(PointerInput::Up, self.viewport_width());
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let area = Rect::new(area.x, area.y, area.width, area.height);
        self.last_area = Some(area);
        let layout = self.layout_for(area);
        self.last_layout = Some(layout);

        let position = Position {
            index: self.index + 1,
            total: self.entries.len(),
        };
        render_card(frame, &layout, &self.card, position);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/viewer.rs"]
mod tests;
