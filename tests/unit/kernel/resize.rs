use super::*;
use crate::core::geom::Axis;
use crate::kernel::services::ports::settings::DEFAULT_VIEWPORT_WIDTH;
use std::sync::Mutex;

#[derive(Default)]
struct CountingCapture {
    calls: Mutex<Vec<&'static str>>,
}

impl CountingCapture {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl PointerCapture for CountingCapture {
    fn install(&self) {
        self.calls.lock().unwrap().push("install");
    }

    fn release(&self) {
        self.calls.lock().unwrap().push("release");
    }
}

fn vertical() -> (ResizeController, Arc<CountingCapture>) {
    let capture = Arc::new(CountingCapture::default());
    let controller = ResizeController::new(ResizeSettings::vertical_handle(), capture.clone());
    (controller, capture)
}

#[test]
fn starts_idle_at_default_width() {
    let (controller, capture) = vertical();
    assert!(!controller.is_dragging());
    assert!(controller.session().is_none());
    assert_eq!(controller.current_width(), 550.0);
    assert!(capture.calls().is_empty());
}

#[test]
fn move_within_bounds_publishes_scaled_width() {
    let (mut controller, _) = vertical();
    assert!(controller.begin_drag(100.0));

    // 550 + (130 - 100) * 2
    assert_eq!(controller.on_pointer_move(130.0, 4000.0), Some(610.0));
    assert_eq!(controller.current_width(), 610.0);
}

#[test]
fn move_far_below_anchor_clamps_to_min() {
    let (mut controller, _) = vertical();
    controller.begin_drag(100.0);

    // 550 + (-1000 - 100) * 2 = -1650
    assert_eq!(controller.on_pointer_move(-1000.0, 4000.0), Some(400.0));
}

#[test]
fn max_width_follows_viewport_on_every_move() {
    let (mut controller, _) = vertical();
    controller.begin_drag(0.0);

    assert_eq!(controller.on_pointer_move(1000.0, 4000.0), Some(1500.0));
    assert_eq!(
        controller.on_pointer_move(1000.0, DEFAULT_VIEWPORT_WIDTH),
        Some(1120.0)
    );
    assert_eq!(controller.on_pointer_move(1000.0, 900.0), Some(820.0));
}

#[test]
fn published_width_is_always_within_bounds() {
    let (mut controller, _) = vertical();
    controller.begin_drag(50.0);

    let viewports = [300.0, 800.0, 1200.0, 5000.0];
    for step in -200i32..200 {
        let coordinate = step as f64 * 7.5;
        let viewport = viewports[(step.unsigned_abs() as usize) % viewports.len()];
        let width = controller.on_pointer_move(coordinate, viewport).unwrap();
        let bounds = controller.bounds(viewport);
        assert!(
            bounds.contains(width),
            "width {width} outside [{}, {}]",
            bounds.min(),
            bounds.max()
        );
        assert!(width >= 400.0);
    }
}

#[test]
fn anchor_width_is_width_at_drag_start() {
    let (mut controller, _) = vertical();
    controller.begin_drag(0.0);
    controller.on_pointer_move(50.0, 4000.0); // 650
    controller.on_pointer_up();

    controller.begin_drag(10.0);
    assert_eq!(controller.session().unwrap().anchor_width(), 650.0);
    assert_eq!(controller.session().unwrap().anchor_coordinate(), 10.0);
    assert_eq!(controller.on_pointer_move(20.0, 4000.0), Some(670.0));
}

#[test]
fn begin_drag_twice_keeps_single_session() {
    let (mut controller, capture) = vertical();
    assert!(controller.begin_drag(100.0));
    assert!(!controller.begin_drag(300.0));

    assert_eq!(controller.session().unwrap().anchor_coordinate(), 100.0);
    assert_eq!(capture.calls(), vec!["install"]);

    controller.on_pointer_up();
    assert_eq!(capture.calls(), vec!["install", "release"]);
}

#[test]
fn pointer_up_without_drag_is_a_no_op() {
    let (mut controller, capture) = vertical();
    assert!(!controller.on_pointer_up());
    assert!(!controller.is_dragging());
    assert_eq!(controller.current_width(), 550.0);
    assert!(capture.calls().is_empty());
}

#[test]
fn move_while_idle_is_ignored() {
    let (mut controller, _) = vertical();
    assert_eq!(controller.on_pointer_move(900.0, 4000.0), None);
    assert_eq!(controller.current_width(), 550.0);

    controller.begin_drag(0.0);
    controller.on_pointer_up();
    assert_eq!(controller.on_pointer_move(900.0, 4000.0), None);
    assert_eq!(controller.current_width(), 550.0);
}

#[test]
fn teardown_mid_drag_releases_capture() {
    let (mut controller, capture) = vertical();
    controller.begin_drag(0.0);
    controller.teardown();

    assert!(!controller.is_dragging());
    assert_eq!(capture.calls(), vec!["install", "release"]);

    controller.teardown();
    assert_eq!(capture.calls(), vec!["install", "release"]);
}

#[test]
fn dropping_controller_mid_drag_releases_capture() {
    let (mut controller, capture) = vertical();
    controller.begin_drag(0.0);
    drop(controller);

    assert_eq!(capture.calls(), vec!["install", "release"]);
}

#[test]
fn corner_preset_tracks_horizontal_axis_without_viewport_limit() {
    let capture = Arc::new(CountingCapture::default());
    let mut controller = ResizeController::new(ResizeSettings::corner_handle(), capture);
    assert_eq!(controller.settings().axis, Axis::Horizontal);

    controller.handle(PointerInput::Down(PointerPos::new(200.0, 40.0)), 500.0);
    assert_eq!(
        controller.handle(PointerInput::Move(PointerPos::new(300.0, 900.0)), 500.0),
        Some(650.0)
    );
    assert_eq!(
        controller.handle(PointerInput::Move(PointerPos::new(900.0, 0.0)), 500.0),
        Some(900.0)
    );
    assert_eq!(
        controller.handle(PointerInput::Move(PointerPos::new(-900.0, 0.0)), 500.0),
        Some(320.0)
    );

    controller.handle(PointerInput::Up, 500.0);
    assert!(!controller.is_dragging());
}

#[test]
fn default_width_outside_bounds_is_clamped() {
    let settings = ResizeSettings {
        default_width: 100.0,
        ..ResizeSettings::corner_handle()
    };
    let controller = ResizeController::new(settings, Arc::new(crate::kernel::capture::NoopCapture));
    assert_eq!(controller.current_width(), 320.0);
}
