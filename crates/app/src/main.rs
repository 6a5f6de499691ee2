use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use river_core::model::GameRules;
use tracing::{Level, info};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidEnvSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidEnvSeed { raw } => write!(f, "invalid RIVER_SEED value: {raw}"),
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

struct DesktopApp {
    rules: GameRules,
    seed: Option<u64>,
    reduced_motion: bool,
}

impl UiApp for DesktopApp {
    fn rules(&self) -> GameRules {
        self.rules.clone()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn launch_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--no-timer] [--no-lives] [--reduced-motion]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>       replay the same question order and pad layout");
    eprintln!("  --no-timer         turn off the per-question countdown");
    eprintln!("  --no-lives         wrong answers never end the game");
    eprintln!("  --reduced-motion   start with animations off");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RIVER_SEED, RIVER_LOG (error|warn|info|debug|trace, default info)");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    timer: bool,
    lives: bool,
    reduced_motion: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_seed: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let seed = env_seed
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ArgsError::InvalidEnvSeed { raw: value.clone() })
            })
            .transpose()?;
        let mut parsed = Self {
            seed,
            timer: true,
            lives: true,
            reduced_motion: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--no-timer" => parsed.timer = false,
                "--no-lives" => parsed.lives = false,
                "--reduced-motion" => parsed.reduced_motion = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(parsed))
    }

    fn rules(&self) -> GameRules {
        GameRules::default()
            .with_timer_enabled(self.timer)
            .with_lives_enabled(self.lives)
    }
}

fn log_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = match Args::parse(&mut argv, std::env::var("RIVER_SEED").ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })? {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    let level = log_level(std::env::var("RIVER_LOG").ok().as_deref());
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logging unavailable: {err}");
    }
    info!(
        seed = ?args.seed,
        timer = args.timer,
        lives = args.lives,
        "launching river adventure"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        rules: args.rules(),
        seed: args.seed,
        reduced_motion: args.reduced_motion,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("River Adventure")
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
        eprintln!("{err}");
        std::process::exit(2);
    }
}
