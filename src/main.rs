use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use notepad::app::Workbench;
use notepad::core::event::InputEvent;
use notepad::kernel::services::adapters::load_settings;
use notepad::tui::{self, TerminalGuard, TerminationSignal, View};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

const USAGE: &str = "usage: notepad [PATH]

Opens PATH (if given) in a minimal terminal notepad.

Keys:
  Ctrl+O  open          Ctrl+S  save         Ctrl+Shift+S  save as
  Ctrl+P  print         Ctrl+Z  undo         Ctrl+Y        redo
  Ctrl+L  clear         Ctrl+Alt+X  wrap     Ctrl+Shift+P  screenshot
  F10     menu          Ctrl+Q  quit         F12 / F9      save as / screenshot";

enum Cli {
    Run(Option<PathBuf>),
    Help,
    Version,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Cli, String> {
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Cli::Help),
            "-V" | "--version" => return Ok(Cli::Version),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}"));
            }
            _ if path.is_some() => return Err("expected at most one path".to_string()),
            _ => path = Some(PathBuf::from(arg)),
        }
    }
    Ok(Cli::Run(path))
}

fn main() -> io::Result<()> {
    let path = match parse_args(std::env::args().skip(1)) {
        Ok(Cli::Run(path)) => path,
        Ok(Cli::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(Cli::Version) => {
            println!("notepad {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("notepad: {message}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let _logging = logging::init();
    let settings = load_settings();
    let cwd = std::env::current_dir()?;
    let mut workbench = Workbench::new(&cwd, settings);
    if let Some(path) = path {
        workbench.open_path(path);
    }

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut workbench, &signal_rx);

    drop(terminal);
    drop(guard);
    if let Err(err) = &result {
        tracing::error!(error = %err, "main loop failed");
    }
    tracing::info!("exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    workbench: &mut Workbench,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<()> {
    loop {
        let completed = terminal.draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })?;
        let frame = completed.buffer.clone();
        workbench.set_last_frame(&frame);

        if let Some(title) = workbench.take_pending_title() {
            if let Err(err) = tui::set_title(&title) {
                tracing::debug!(error = %err, "failed to set terminal title");
            }
        }

        if let Ok(signal) = signals.try_recv() {
            tracing::info!(signal = signal.name(), "quitting on signal");
            return Ok(());
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let input = InputEvent::from(event::read()?);
        if workbench.handle_input(&input).is_quit() || workbench.should_quit() {
            return Ok(());
        }
    }
}
