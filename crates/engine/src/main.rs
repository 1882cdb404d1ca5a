//! Arcanum - mage character sheet tool.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcanum_domain::RollOutcome;
use arcanum_engine::infrastructure::{
    persistence::XmlSheetStore, random::SystemRandom, settings::SheetSettings,
};
use arcanum_engine::use_cases::CharacterSheetService;

const USAGE: &str = "Usage: arcanum <command>

Commands:
  new <sheet> [splat]         Create a default mage sheet
  show <sheet>                Print the character as JSON
  set <sheet> <stat> <value>  Change a scalar stat and save
  check <sheet>               Verify the sheet saves and loads without loss
  message <sheet> good|bad    Print a flavor message for a roll";

fn main() -> anyhow::Result<()> {
    // Load environment from repo root so sheet settings apply from any directory.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arcanum_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = SheetSettings::from_env();
    tracing::debug!(
        sheet_dir = %settings.sheet_dir.display(),
        extension = %settings.extension,
        "Loaded sheet settings"
    );

    let service = CharacterSheetService::new(
        Arc::new(XmlSheetStore::new()),
        Arc::new(SystemRandom::new()),
        settings,
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["new", sheet] => new_sheet(&service, sheet, None),
        ["new", sheet, splat] => new_sheet(&service, sheet, Some(*splat)),
        ["show", sheet] => show(&service, sheet),
        ["set", sheet, stat, value] => set(&service, sheet, stat, value),
        ["check", sheet] => check(&service, sheet),
        ["message", sheet, outcome] => message(&service, sheet, outcome),
        [cmd, ..] if is_command(cmd) => anyhow::bail!("Wrong arguments for '{cmd}'\n\n{USAGE}"),
        [cmd, ..] => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        [] => anyhow::bail!(USAGE),
    }
}

fn is_command(cmd: &str) -> bool {
    matches!(cmd, "new" | "show" | "set" | "check" | "message")
}

fn new_sheet(service: &CharacterSheetService, sheet: &str, splat: Option<&str>) -> anyhow::Result<()> {
    let (path, _) = service
        .create(sheet, splat)
        .with_context(|| format!("creating sheet '{sheet}'"))?;
    println!("Created {}", path.display());
    Ok(())
}

fn show(service: &CharacterSheetService, sheet: &str) -> anyhow::Result<()> {
    let (_, character) = service
        .load(sheet)
        .with_context(|| format!("loading sheet '{sheet}'"))?;
    let json = serde_json::to_string_pretty(&character).context("serializing character")?;
    println!("{json}");
    Ok(())
}

fn set(service: &CharacterSheetService, sheet: &str, stat: &str, value: &str) -> anyhow::Result<()> {
    let result = service
        .set_stat(sheet, stat, value)
        .with_context(|| format!("setting '{stat}' on sheet '{sheet}'"))?;

    let shown = |v: &arcanum_domain::StatValue| v.scalar_text().unwrap_or_default();
    println!(
        "{}: {} -> {}",
        result.stat,
        shown(&result.previous),
        shown(&result.value)
    );
    if let Some(mana) = result.mana {
        println!("mana: {mana}");
    }
    Ok(())
}

fn check(service: &CharacterSheetService, sheet: &str) -> anyhow::Result<()> {
    let report = service
        .check(sheet)
        .with_context(|| format!("checking sheet '{sheet}'"))?;

    if report.is_lossless() {
        println!(
            "{}: {} stats round-trip cleanly",
            report.path.display(),
            report.stat_count
        );
        return Ok(());
    }

    for stat in &report.differing_stats {
        println!("changed on reload: {stat}");
    }
    if !report.character_fields_match {
        println!("changed on reload: notes, splat or messages");
    }
    anyhow::bail!("{} does not round-trip", report.path.display())
}

fn message(service: &CharacterSheetService, sheet: &str, outcome: &str) -> anyhow::Result<()> {
    let outcome: RollOutcome = outcome.parse().context("parsing roll outcome")?;
    let message = service
        .flavor_message(sheet, outcome)
        .with_context(|| format!("loading sheet '{sheet}'"))?;
    if let Some(message) = message {
        println!("{message}");
    }
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
