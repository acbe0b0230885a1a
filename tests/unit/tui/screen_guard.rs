use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingScreen {
    calls: Mutex<Vec<&'static str>>,
}

impl ScreenOps for RecordingScreen {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

struct FailingScreen;

impl ScreenOps for FailingScreen {
    fn enter(&self) -> io::Result<()> {
        Err(io::Error::other("no tty"))
    }

    fn leave(&self) -> io::Result<()> {
        panic!("leave must not run when enter failed");
    }
}

#[test]
fn screen_guard_leaves_on_drop() {
    let ops = Arc::new(RecordingScreen::default());
    {
        let _guard = ScreenGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restorer_leaves_only_once() {
    let ops = Arc::new(RecordingScreen::default());
    let guard = ScreenGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_enter_yields_no_guard() {
    assert!(ScreenGuard::with_ops(Arc::new(FailingScreen)).is_err());
}

#[cfg(unix)]
#[test]
fn enter_sequence_turns_on_focus_reports_and_leave_turns_them_off() {
    let mut enter = Vec::new();
    write_enter_sequence(&mut enter).unwrap();
    let enter = String::from_utf8(enter).unwrap();
    assert!(enter.contains("\x1b[?1004h"));
    assert!(enter.contains("\x1b[?1049h"));

    let mut leave = Vec::new();
    write_leave_sequence(&mut leave).unwrap();
    let leave = String::from_utf8(leave).unwrap();
    assert!(leave.contains("\x1b[?1004l"));
    assert!(leave.contains("\x1b[?1049l"));
}
