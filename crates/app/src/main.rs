use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Entropy;
use quiz_core::choices::DEFAULT_MAX_CHOICES;
use quiz_core::model::DEFAULT_MAX_IMAGES;
use services::{QuizLimits, QuizService};
use storage::{DirectoryImageSource, ImageSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_IMAGES_DIR: &str = "images";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a positive integer)")
            }
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
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

fn parse_count(flag: &'static str, raw: &str) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ArgsError::InvalidNumber {
            flag,
            raw: raw.to_string(),
        }),
    }
}

fn parse_seed(flag: &'static str, raw: &str) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

fn parse_dir(flag: &'static str, raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(raw))
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    images_dir: PathBuf,
    max_images: usize,
    max_choices: usize,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Run(Args),
    Help,
}

impl Args {
    /// Environment values are read first; flags override them.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Invocation, ArgsError> {
        let mut images_dir = match env("QUIZ_IMAGES_DIR") {
            Some(value) => parse_dir("QUIZ_IMAGES_DIR", value)?,
            None => PathBuf::from(DEFAULT_IMAGES_DIR),
        };
        let mut max_images = env("QUIZ_MAX_IMAGES")
            .map(|value| parse_count("QUIZ_MAX_IMAGES", &value))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_IMAGES);
        let mut max_choices = env("QUIZ_MAX_CHOICES")
            .map(|value| parse_count("QUIZ_MAX_CHOICES", &value))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_CHOICES);
        let mut seed = env("QUIZ_SEED")
            .map(|value| parse_seed("QUIZ_SEED", &value))
            .transpose()?;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--images" => {
                    let value = require_value(&mut args, "--images")?;
                    images_dir = parse_dir("--images", value)?;
                }
                "--max-images" => {
                    let value = require_value(&mut args, "--max-images")?;
                    max_images = parse_count("--max-images", &value)?;
                }
                "--max-choices" => {
                    let value = require_value(&mut args, "--max-choices")?;
                    max_choices = parse_count("--max-choices", &value)?;
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    seed = Some(parse_seed("--seed", &value)?);
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Run(Self {
            images_dir,
            max_images,
            max_choices,
            seed,
        }))
    }

    fn limits(&self) -> QuizLimits {
        QuizLimits::new(self.max_images, self.max_choices)
    }

    fn entropy(&self) -> Entropy {
        self.seed.map_or_else(Entropy::os, Entropy::seeded)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--images <dir>] [--max-images <n>] [--max-choices <n>] [--seed <u64>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --images {DEFAULT_IMAGES_DIR}");
    eprintln!("  --max-images {DEFAULT_MAX_IMAGES}");
    eprintln!("  --max-choices {DEFAULT_MAX_CHOICES}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_IMAGES_DIR, QUIZ_MAX_IMAGES, QUIZ_MAX_CHOICES, QUIZ_SEED, RUST_LOG");
}

struct DesktopApp {
    quiz: Arc<QuizService>,
    images_location: String,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn images_location(&self) -> String {
        self.images_location.clone()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = match Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    let source: Arc<dyn ImageSource> = Arc::new(DirectoryImageSource::new(parsed.images_dir.clone()));
    let images_location = source.location();
    let entropy = parsed.entropy();
    let quiz = Arc::new(QuizService::new(source, parsed.limits(), entropy));

    // The directory must be readable and hold at least one image before the window opens.
    let available = quiz.preflight().await?;
    tracing::info!(
        images = %images_location,
        available,
        max_images = parsed.max_images,
        max_choices = parsed.max_choices,
        seeded = entropy.is_seeded(),
        "image catalog ready"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz,
        images_location,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Image Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
