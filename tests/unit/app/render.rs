use super::*;
use crate::app::card::CardEntry;
use crate::kernel::services::adapters::content::AssetPaths;
use crate::kernel::services::ports::settings::Settings;
use crate::kernel::NoopCapture;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tempfile::tempdir;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

fn loaded_card(source: ContentSource, files: &[(&str, &str)], id: &str) -> CardState {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::create_dir_all(dir.path().join("texts")).unwrap();
    for (path, body) in files {
        std::fs::write(dir.path().join(path), body).unwrap();
    }

    let mut settings = Settings::default();
    settings.content.source = source;
    let mut card = CardState::new(&settings, AssetPaths::new(dir.path()), Arc::new(NoopCapture));

    let loads = card.show(id);
    if let Some(pending) = loads.tweet {
        let completion = block_on(pending.run());
        card.tweet_mut().complete(completion);
    }
    if let Some(pending) = loads.text {
        let completion = block_on(pending.run());
        card.text_mut().complete(completion);
    }
    card
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for row in buffer.content.chunks(buffer.area.width.max(1) as usize) {
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn layout_centers_card_above_status_line() {
    let layout = card_layout(Rect::new(0, 0, 100, 30), 60, Axis::Vertical);

    assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
    assert_eq!(layout.card, Rect::new(20, 1, 60, CARD_HEIGHT));
    assert_eq!(layout.handle, Rect::new(48, CARD_HEIGHT, 3, 1));
}

#[test]
fn layout_puts_corner_handle_bottom_right() {
    let layout = card_layout(Rect::new(0, 0, 100, 30), 60, Axis::Horizontal);

    assert_eq!(layout.handle, Rect::new(79, CARD_HEIGHT, 1, 1));
}

#[test]
fn layout_never_exceeds_area() {
    let area = Rect::new(2, 3, 40, 6);
    let layout = card_layout(area, 200, Axis::Vertical);

    assert_eq!(layout.card.w, 40);
    assert!(layout.card.bottom() <= layout.status.y);
    assert!(layout.status.bottom() <= area.bottom());
}

#[test]
fn tiny_area_has_no_handle() {
    let layout = card_layout(Rect::new(0, 0, 2, 2), 60, Axis::Vertical);
    assert!(layout.handle.is_empty());

    let empty = card_layout(Rect::default(), 60, Axis::Vertical);
    assert!(empty.card.is_empty());
    assert!(empty.status.is_empty());
}

#[test]
fn loaded_tweet_shows_author_and_formatted_date() {
    let card = loaded_card(
        ContentSource::Json,
        &[(
            "data/7.json",
            r#"{"author":"@viz","date":"2021-03-05T10:00:00Z","text":"Axis starts at 40."}"#,
        )],
        "7",
    );

    let content = card_content(&card);
    assert_eq!(content.title, " @viz · Mar 5, 2021 ");
    assert_eq!(content.text, "Axis starts at 40.");
    assert_eq!(content.error, None);
}

#[test]
fn failed_tweet_falls_back_to_placeholders() {
    let card = loaded_card(ContentSource::Json, &[], "missing");

    let content = card_content(&card);
    assert_eq!(content.title, format!(" {PLACEHOLDER_AUTHOR} "));
    assert_eq!(content.text, PLACEHOLDER_TEXT);
    assert!(content.error.is_some());
}

#[test]
fn failed_text_shows_fallback_and_message() {
    let card = loaded_card(ContentSource::Text, &[], "9");

    let content = card_content(&card);
    assert_eq!(content.title, " 9 ");
    assert_eq!(content.text, "(Could not load tweet text)");
    assert!(content.error.is_some());
}

#[test]
fn pending_card_reads_loading() {
    let dir = tempdir().unwrap();
    let mut card = CardState::new(
        &Settings::default(),
        AssetPaths::new(dir.path()),
        Arc::new(NoopCapture),
    );
    let _loads = card.show("1");

    assert_eq!(card_content(&card).text, LOADING_TEXT);
}

#[test]
fn render_draws_card_handle_and_status() {
    let card = loaded_card(
        ContentSource::Text,
        &[("texts/3.txt", "Truncated y-axis")],
        "3",
    );
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let layout = card_layout(Rect::new(0, 0, 80, 20), 50, Axis::Vertical);

    terminal
        .draw(|frame| {
            render_card(
                frame,
                &layout,
                &card,
                Position { index: 1, total: 4 },
            )
        })
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("Truncated y-axis"));
    assert!(screen.contains("━━━"));
    assert!(screen.contains("1/4"));
    assert!(screen.contains("550px"));
}

#[test]
fn label_and_image_appear_on_the_card() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("texts")).unwrap();
    std::fs::create_dir_all(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("texts/5.txt"), "Cherry picked range").unwrap();
    std::fs::write(dir.path().join("images/5.png"), b"png").unwrap();

    let mut settings = Settings::default();
    settings.content.source = ContentSource::Text;
    let mut card = CardState::new(&settings, AssetPaths::new(dir.path()), Arc::new(NoopCapture));
    let loads = card.show_entry(&CardEntry::parse("5:Cherry Picking"));
    let completion = block_on(loads.text.unwrap().run());
    card.text_mut().complete(completion);

    let content = card_content(&card);
    assert_eq!(content.label.as_deref(), Some("Cherry Picking"));
    assert!(content.image.as_deref().unwrap().ends_with("5.png"));

    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    let layout = card_layout(Rect::new(0, 0, 100, 20), 90, Axis::Vertical);
    terminal
        .draw(|frame| render_card(frame, &layout, &card, Position { index: 1, total: 1 }))
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("Error: Cherry Picking"));
    assert!(screen.contains("[image]"));
}
