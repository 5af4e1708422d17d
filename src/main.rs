mod app;
mod config;
mod error;
mod events;
mod log;
mod notification;
mod picker;
mod scroll;
mod tui;

use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::format::ParseErrorKind;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use config::Config;
use error::{DateArgError, WheelError};
use events::EventHandler;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    /// Default date instead of today
    date: Option<NaiveDate>,
    /// Explicit config file
    config: Option<PathBuf>,
    /// Force desktop notifications on
    desktop_notify: bool,
}

/// Parse a `YYYY-MM-DD` date argument.
///
/// Text that doesn't have the shape is a `Format` error; well-formed text
/// naming a day that doesn't exist (2025-02-29, 2024-13-01) is `NotADate`.
fn parse_date_arg(arg: &str) -> std::result::Result<NaiveDate, DateArgError> {
    NaiveDate::parse_from_str(arg.trim(), "%Y-%m-%d").map_err(|e| match e.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
            DateArgError::NotADate(arg.to_string())
        }
        _ => DateArgError::Format(arg.to_string()),
    })
}

/// Parse CLI arguments (without the program name).
fn parse_args(args: &[String]) -> error::Result<CliArgs> {
    let mut parsed = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--date" | "-d" => {
                let value = args.get(i + 1).ok_or(WheelError::MissingValue("--date"))?;
                parsed.date = Some(parse_date_arg(value)?);
                i += 1;
            }
            "--config" | "-c" => {
                let value = args.get(i + 1).ok_or(WheelError::MissingValue("--config"))?;
                parsed.config = Some(PathBuf::from(value));
                i += 1;
            }
            "--desktop-notify" => parsed.desktop_notify = true,
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    // Explicit --config must load; otherwise fall back quietly
    let config = match &cli.config {
        Some(path) => Config::read_from(path).map_err(WheelError::from)?,
        None => Config::load(),
    }
    .with_overrides(cli.desktop_notify);

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(today, config);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(event) = &app.last_confirmed {
        println!("{}", serde_json::to_string(event)?);
    }

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut frame_clock = tokio::time::interval(Duration::from_millis(app.config.frame.tick_ms));
    frame_clock.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // The picker is the whole point; show it straight away
    app.picker.open();

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action);
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Terminal event error: {}", e));
                    }
                    None => break,
                }
            }
            _ = frame_clock.tick() => {
                app.on_frame(Instant::now());
                terminal.draw(|frame| tui::ui::render(frame, app))?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(
            parse_date_arg("2025-02-29"),
            Err(DateArgError::NotADate("2025-02-29".into()))
        );
        assert_eq!(
            parse_date_arg("29/02/2024"),
            Err(DateArgError::Format("29/02/2024".into()))
        );
        assert_eq!(
            parse_date_arg("2024-xx-01"),
            Err(DateArgError::Format("2024-xx-01".into()))
        );
        assert_eq!(
            parse_date_arg("2024-13-01"),
            Err(DateArgError::NotADate("2024-13-01".into()))
        );
        assert_eq!(
            parse_date_arg("2024-02-29 extra"),
            Err(DateArgError::Format("2024-02-29 extra".into()))
        );
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(&args(&[
            "--date",
            "2024-02-29",
            "--desktop-notify",
            "-c",
            "/tmp/wheeldate.toml",
            "--unknown",
        ]))
        .unwrap();

        assert_eq!(
            parsed,
            CliArgs {
                date: NaiveDate::from_ymd_opt(2024, 2, 29),
                config: Some(PathBuf::from("/tmp/wheeldate.toml")),
                desktop_notify: true,
            }
        );
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(
            parse_args(&args(&["--date"])),
            Err(WheelError::MissingValue("--date"))
        ));
        assert!(matches!(
            parse_args(&args(&["--date", "tomorrow"])),
            Err(WheelError::DateArg(DateArgError::Format(_)))
        ));
    }
}
