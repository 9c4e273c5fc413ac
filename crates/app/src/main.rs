use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::{APP_TITLE, Catalog};
use ui::{App, AppContext};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidWindowSize { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidWindowSize { raw } => {
                write!(f, "invalid --window-size value: {raw} (expected WIDTHxHEIGHT)")
            }
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

struct Args {
    window_size: Option<(u32, u32)>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--window-size WIDTHxHEIGHT]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  window sized by the platform");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PALS_WINDOW_SIZE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut window_size = std::env::var("PALS_WINDOW_SIZE")
            .ok()
            .and_then(|value| parse_window_size(&value).ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--window-size" => {
                    let value = require_value(args, "--window-size")?;
                    window_size = Some(parse_window_size(&value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { window_size })
    }
}

fn parse_window_size(raw: &str) -> Result<(u32, u32), ArgsError> {
    let invalid = || ArgsError::InvalidWindowSize {
        raw: raw.to_string(),
    };
    let (width, height) = raw.split_once('x').ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Validate the built-in content once, before any view iterates it.
    let catalog = Catalog::builtin();
    catalog.validate()?;

    let context = AppContext::new(Arc::new(catalog));

    let mut window = WindowBuilder::new()
        .with_title(APP_TITLE)
        .with_always_on_top(false);
    if let Some((width, height)) = parsed.window_size {
        window = window.with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)));
    }
    let desktop_cfg = DesktopConfig::new().with_window(window);

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
