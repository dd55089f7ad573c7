use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::{Clock, QuizSettings};
use quiz_core::settings::{DEFAULT_AUTO_ADVANCE_MS, DEFAULT_FEEDBACK_CLEAR_MS};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    settings: QuizSettings,
    seed: Option<u64>,
    debug_panel: bool,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn debug_panel(&self) -> bool {
        self.debug_panel
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    feedback_ms: u32,
    advance_ms: u32,
    debug: bool,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--feedback-ms <ms>] [--advance-ms <ms>] [--debug]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --feedback-ms {DEFAULT_FEEDBACK_CLEAR_MS}");
    eprintln!("  --advance-ms {DEFAULT_AUTO_ADVANCE_MS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SEED, QUIZ_FEEDBACK_MS, QUIZ_ADVANCE_MS, QUIZ_DEBUG, RUST_LOG");
}

impl Args {
    /// Environment first, then flags on top.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            seed: None,
            feedback_ms: DEFAULT_FEEDBACK_CLEAR_MS,
            advance_ms: DEFAULT_AUTO_ADVANCE_MS,
            debug: false,
            help: false,
        };

        if let Some(raw) = env("QUIZ_SEED") {
            parsed.seed = Some(parse_number(raw, "QUIZ_SEED")?);
        }
        if let Some(raw) = env("QUIZ_FEEDBACK_MS") {
            parsed.feedback_ms = parse_number(raw, "QUIZ_FEEDBACK_MS")?;
        }
        if let Some(raw) = env("QUIZ_ADVANCE_MS") {
            parsed.advance_ms = parse_number(raw, "QUIZ_ADVANCE_MS")?;
        }
        if let Some(raw) = env("QUIZ_DEBUG") {
            parsed.debug = matches!(raw.trim(), "1" | "true" | "yes");
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_number(value, "--seed")?);
                }
                "--feedback-ms" => {
                    let value = require_value(args, "--feedback-ms")?;
                    parsed.feedback_ms = parse_number(value, "--feedback-ms")?;
                }
                "--advance-ms" => {
                    let value = require_value(args, "--advance-ms")?;
                    parsed.advance_ms = parse_number(value, "--advance-ms")?;
                }
                "--debug" => parsed.debug = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing(debug: bool) {
    let default_directives = if debug {
        "app=info,ui=info,services=debug"
    } else {
        "app=info,ui=info,services=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing(parsed.debug);

    let settings = QuizSettings::new(parsed.feedback_ms, parsed.advance_ms)
        .map_err(quiz_core::Error::from)?;
    info!(
        seed = ?parsed.seed,
        feedback_ms = settings.feedback_clear_ms(),
        advance_ms = settings.auto_advance_ms(),
        debug = parsed.debug,
        "launching quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings,
        seed: parsed.seed,
        debug_panel: parsed.debug,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Math-o-Matic")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
