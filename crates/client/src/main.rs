//! Interactive weapon buildup tester.
//!
//! Loads the content catalogs, equips a starting weapon, and reads commands
//! from stdin. Single keys mirror the debug shortcuts (`h` lists them); any
//! other line is parsed as a textual command such as `evolve Flame Blade`.
mod config;
mod format;
mod input;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use buildup_content::ContentFactory;
use buildup_core::BuildupError;
use buildup_runtime::{Command, Event, EventBus, Outcome, ProgressionDriver, Topic};
use tracing::{debug, info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::TesterConfig;
use input::{Input, Keymap};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = TesterConfig::from_env();
    setup_logging(&config.session_id)?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    let content = factory
        .load_all()
        .with_context(|| format!("loading content from {}", factory.data_dir().display()))?;

    let event_bus = EventBus::new();
    let mut receivers = event_bus.subscribe_multiple(&Topic::ALL);
    let mut driver = ProgressionDriver::new(content).with_event_bus(event_bus);
    driver
        .equip(&config.starting_weapon)
        .with_context(|| format!("equipping starting weapon '{}'", config.starting_weapon))?;
    seed_test_items(&mut driver, &config);
    log_events(&mut receivers);

    run(&mut driver, &config, &mut receivers)
}

type Receivers = Vec<(Topic, tokio::sync::broadcast::Receiver<Event>)>;

/// Writes every pending bus event to the session log.
fn log_events(receivers: &mut Receivers) {
    for (topic, rx) in receivers.iter_mut() {
        while let Ok(event) = rx.try_recv() {
            debug!(?topic, "{:?}", event);
        }
    }
}

fn seed_test_items(driver: &mut ProgressionDriver, config: &TesterConfig) {
    if config.seed_quantity == 0 {
        return;
    }
    for item in config.test_items.iter() {
        if let Err(err) = driver.pick_up_item(item, config.seed_quantity) {
            warn!("Skipping test item '{}': {}", item, err);
        }
    }
}

fn run(
    driver: &mut ProgressionDriver,
    config: &TesterConfig,
    receivers: &mut Receivers,
) -> Result<()> {
    let keymap = Keymap::new(config.keys.clone(), config.test_items.clone());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", format::help());
    print_status(driver);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let input = match keymap.resolve(&line, driver.satchel()) {
            Ok(input) => input,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };

        match input {
            Input::Quit => break,
            Input::Help => println!("{}", format::help()),
            Input::DumpJson => match driver.snapshot() {
                Ok(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                Err(err) => println!("error: {err}"),
            },
            Input::Command(command) => execute(driver, command),
        }
        log_events(receivers);
    }

    info!("Tester session ended");
    Ok(())
}

fn execute(driver: &mut ProgressionDriver, command: Command) {
    match driver.handle(command) {
        Ok(Outcome::Evolutions(reports)) => {
            let name = driver.weapon().map(|w| w.name().to_string()).unwrap_or_default();
            println!("{}", format::evolution_check(&name, &reports));
        }
        Ok(outcome) => {
            println!("{}", format::outcome(&outcome));
            if !matches!(outcome, Outcome::Snapshot(_) | Outcome::Unequipped(_)) {
                print_status(driver);
            }
        }
        Err(err) => {
            warn!(code = err.error_code(), "Command rejected: {}", err);
            println!("error: {err}");
        }
    }
}

fn print_status(driver: &ProgressionDriver) {
    match driver.snapshot() {
        Ok(snapshot) => {
            println!(
                "[{}] Lvl {} | {} | Gold: {}",
                snapshot.name,
                snapshot.level,
                format::stats_line(&snapshot),
                driver.wallet().balance()
            );
            if !snapshot.available_evolutions.is_empty() {
                println!(
                    "Evolution available: {}",
                    snapshot.available_evolutions.join(", ")
                );
            }
        }
        Err(_) => println!("No weapon equipped. Gold: {}", driver.wallet().balance()),
    }
}

/// Sets up file logging, plus warnings on stderr when `BUILDUP_LOG_STDERR` is set.
fn setup_logging(session_id: &Option<String>) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let log_dir = get_log_directory();

    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "tester.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = std::env::var_os("BUILDUP_LOG_STDERR").map(|_| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_filter(tracing_subscriber::filter::LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    info!("Logging initialized: session={}", session_id);
    info!("Log file: {}/tester.log", session_log_dir.display());

    Ok(())
}

/// Get the platform-specific log directory
fn get_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Caches")
                .join("buildup")
                .join("logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("buildup").join("logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".cache").join("buildup").join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("buildup").join("logs");
        }
    }

    std::env::temp_dir().join("buildup").join("logs")
}
