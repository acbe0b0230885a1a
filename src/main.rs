use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tweetcard::app::{CardEntry, CardViewer};
use tweetcard::kernel::services::adapters::{
    ensure_settings_file, load_settings, AppMessage, AssetPaths, AsyncRuntime,
};
use tweetcard::kernel::services::ports::settings::{ContentSource, ResizePreset, Settings};
use tweetcard::tui::crossterm::into_input_event;
use tweetcard::tui::screen_guard::ScreenGuard;
use tweetcard::tui::view::{EventResult, View};

mod logging;

const USAGE: &str =
    "usage: tweetcard [--assets=DIR] [--preset=vertical|corner] [--source=json|text] ID[:LABEL]...";
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    assets: Option<String>,
    preset: Option<ResizePreset>,
    source: Option<ContentSource>,
    ids: Vec<String>,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--assets=") {
            out.assets = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--preset=") {
            out.preset = Some(
                ResizePreset::from_name(value)
                    .ok_or_else(|| format!("unknown preset: {value}"))?,
            );
        } else if let Some(value) = arg.strip_prefix("--source=") {
            out.source = Some(
                ContentSource::from_name(value)
                    .ok_or_else(|| format!("unknown source: {value}"))?,
            );
        } else if arg == "-h" || arg == "--help" {
            out.help = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option: {arg}"));
        } else {
            out.ids.push(arg);
        }
    }
    Ok(out)
}

/// CLI flags win over the settings file.
fn apply_overrides(settings: &mut Settings, cli: &CliArgs) {
    if let Some(preset) = cli.preset {
        settings.resize = preset.settings();
    }
    if let Some(source) = cli.source {
        settings.content.source = source;
    }
}

/// Resolves the assets directory against `cwd`: the CLI value, then the configured root,
/// then `cwd` itself.
fn resolve_assets_root(
    cwd: &Path,
    cli: Option<&str>,
    configured: Option<&Path>,
) -> io::Result<PathBuf> {
    let root = match (cli, configured) {
        (Some(arg), _) => cwd.join(arg),
        (None, Some(path)) => cwd.join(path),
        (None, None) => cwd.to_path_buf(),
    };
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("assets directory not found: {}", root.display()),
        ));
    }
    Ok(root)
}

fn main() -> io::Result<()> {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            std::process::exit(2);
        }
    };
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }
    if cli.ids.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let _logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    let mut settings = load_settings().unwrap_or_default();
    apply_overrides(&mut settings, &cli);

    let cwd = std::env::current_dir()?;
    let assets_root = resolve_assets_root(
        &cwd,
        cli.assets.as_deref(),
        settings.content.assets_root.as_deref(),
    )?;
    tracing::info!(
        assets = %assets_root.display(),
        source = ?settings.content.source,
        axis = ?settings.resize.axis,
        tweets = cli.ids.len(),
        "starting viewer"
    );

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx)?;
    let entries = cli.ids.iter().map(|arg| CardEntry::parse(arg)).collect();
    let mut viewer = CardViewer::new(&settings, AssetPaths::new(assets_root), entries, runtime);

    let guard = ScreenGuard::enter()?;
    let (signal_tx, signal_rx) = mpsc::channel::<i32>();
    #[cfg(unix)]
    {
        use tweetcard::tui::screen_guard::watch_termination_signals;
        if let Err(e) = watch_termination_signals(guard.restorer(), signal_tx) {
            tracing::warn!(error = %e, "signal handler not installed");
        }
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    viewer.start();
    let result = run(&mut terminal, &mut viewer, &rx, &signal_rx);
    viewer.shutdown();

    drop(terminal);
    drop(guard);

    match result {
        Ok(Some(code)) => {
            tracing::info!(code, "terminated by signal");
            std::process::exit(code);
        }
        Ok(None) => Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "viewer failed");
            Err(e)
        }
    }
}

/// Runs until quit (`Ok(None)`) or a termination signal (`Ok(Some(exit_code))`).
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    viewer: &mut CardViewer,
    rx: &Receiver<AppMessage>,
    signal_rx: &Receiver<i32>,
) -> io::Result<Option<i32>> {
    let mut dirty = true;
    loop {
        if let Ok(code) = signal_rx.try_recv() {
            return Ok(Some(code));
        }

        while let Ok(msg) = rx.try_recv() {
            dirty |= viewer.handle_message(msg);
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                viewer.render(frame, area);
            })?;
            dirty = false;
        }

        if !crossterm::event::poll(TICK)? {
            continue;
        }
        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };
        match viewer.handle_input(&event) {
            EventResult::Quit => return Ok(None),
            EventResult::Consumed => dirty = true,
            EventResult::Ignored => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
