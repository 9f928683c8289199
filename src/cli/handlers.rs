use anyhow::{Context, Result};
use std::str::FromStr;

use crate::cli::args::ScenarioArgs;
use crate::config::AppConfig;
use crate::curve::{slider, Scenario, Snapshot};
use crate::models::{CoffeeCount, Preset, Severity};
use crate::utils::format::{cups, format_percent, pad_display, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const CREMA: &str = "\x1b[38;2;212;165;116m";

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => AMBER,
        Severity::Success => GREEN,
        Severity::Info => CYAN,
    }
}

// ─── Scenario resolution ─────────────────────────────────────────────────────

/// Combine command-line overrides with config defaults.
pub fn resolve_scenario(args: &ScenarioArgs, config: &AppConfig) -> Result<Scenario> {
    let preset = match &args.preset {
        Some(p) => Preset::from_str(p)?,
        None => config.curve.preset,
    };
    let coffees = match args.coffees {
        Some(raw) => CoffeeCount::resolve(raw, config.curve.out_of_range)?,
        None => config.curve.default_coffees,
    };
    Ok(Scenario::new(preset, coffees))
}

fn snapshot(args: &ScenarioArgs, config: &AppConfig) -> Result<Snapshot> {
    let scenario = resolve_scenario(args, config)?;
    scenario
        .render(config.display.hour_format)
        .context("Energy table is empty")
}

// ─── Curve ───────────────────────────────────────────────────────────────────

pub fn handle_curve(args: &ScenarioArgs, json: bool, config: &AppConfig) -> Result<()> {
    let snap = snapshot(args, config)?;

    if json {
        let out = serde_json::to_string_pretty(&snap.points).context("Serializing curve")?;
        println!("{}", out);
        return Ok(());
    }

    println!();
    println_colored!(CREMA, "  {}", snap.scenario.title());
    println!();

    for p in &snap.points {
        let label = pad_display(&p.label(snap.format), 6);
        let bar = if config.display.show_bars {
            format!("{}  ", progress_bar(p.energy as u32, 100, 20))
        } else {
            String::new()
        };
        let line = format!(
            "  {}  {}{:>3}%  {}{}",
            label,
            bar,
            p.energy,
            pad_display(p.mood, 3),
            p.status
        );
        if snap.coffee_hours.contains(&p.hour) {
            println_colored!(BOLD, "{}", line);
        } else if p.is_annotated() && p.mood != slider::RESTING_MOOD {
            println_colored!(AMBER, "{}", line);
        } else {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(args: &ScenarioArgs, config: &AppConfig) -> Result<()> {
    let snap = snapshot(args, config)?;
    let stats = &snap.stats;

    println!();
    println_colored!(CREMA, "  Statistics — {}", snap.scenario.title());
    println!();
    println_colored!(BOLD, "  Peak energy:  {}%", stats.peak);
    println!("  Minimum:      {}%", stats.minimum);
    println!("  Mean:         {}", format_percent(stats.mean_rounded()));
    println!(
        "  Coffees:      {}  {}",
        snap.scenario.coffee_total(),
        cups(snap.scenario.coffee_total(), CoffeeCount::MAX)
    );
    println!();
    Ok(())
}

// ─── Moments ─────────────────────────────────────────────────────────────────

pub fn handle_moments(args: &ScenarioArgs, config: &AppConfig) -> Result<()> {
    let snap = snapshot(args, config)?;

    println!();
    if snap.coffee_hours.is_empty() {
        println_colored!(DIM, "  No coffee moments today");
    } else {
        println_colored!(CREMA, "  Coffee moments ({})", snap.coffee_hours.len());
        println!();
        for p in snap.coffee_points() {
            println!("  ☕ {}  {:>3}%", pad_display(&p.label(snap.format), 6), p.energy);
        }
    }
    println!();
    Ok(())
}

// ─── Verdict ─────────────────────────────────────────────────────────────────

pub fn handle_verdict(args: &ScenarioArgs, config: &AppConfig) -> Result<()> {
    let snap = snapshot(args, config)?;
    let verdict = &snap.verdict;

    println!();
    println_colored!(
        severity_color(verdict.severity),
        "  {} {}",
        verdict.severity.icon(),
        verdict.headline
    );
    for line in &verdict.insights {
        println!("    · {}", line);
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(args: &ScenarioArgs, config: &AppConfig) -> Result<()> {
    let snap = snapshot(args, config)?;
    print!("{}", export_text(&snap));
    Ok(())
}

/// Plain-text report of a snapshot, hour labels in the snapshot's format.
pub fn export_text(snap: &Snapshot) -> String {
    let mut out = format!("# coffee-curve — {}\n\n## Energy\n", snap.scenario.title());
    for p in &snap.points {
        out.push_str(&format!(
            "  {}  {:>3}%  {}\n",
            pad_display(&p.label(snap.format), 6),
            p.energy,
            progress_bar(p.energy as u32, 100, 10)
        ));
    }

    let moments: Vec<String> = snap
        .coffee_hours
        .iter()
        .map(|h| snap.format.label(*h))
        .collect();
    let moments = if moments.is_empty() {
        String::new()
    } else {
        format!(" ({})", moments.join(", "))
    };
    out.push_str(&format!(
        "\n## Summary\n  Peak:     {}%\n  Minimum:  {}%\n  Mean:     {}\n  Coffees:  {}{}\n",
        snap.stats.peak,
        snap.stats.minimum,
        format_percent(snap.stats.mean_rounded()),
        snap.scenario.coffee_total(),
        moments
    ));

    out.push_str(&format!("\n## Verdict\n  {}\n", snap.verdict.headline));
    for line in &snap.verdict.insights {
        out.push_str(&format!("  - {}\n", line));
    }
    out
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &mut AppConfig, reset: bool) -> Result<()> {
    if reset {
        *config = AppConfig::default();
        let path = config.save()?;
        println_colored!(GREEN, "  ✓ Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let path = AppConfig::config_path()?;
    println!();
    println_colored!(CREMA, "  Configuration");
    println_colored!(DIM, "  {}", path.display());
    println!();
    println!("  default coffees:  {}", config.curve.default_coffees);
    println!("  preset:           {}", config.curve.preset);
    println!("  out of range:     {}", config.curve.out_of_range.as_str());
    println!("  hour format:      {}", config.display.hour_format.as_str());
    println!("  show bars:        {}", config.display.show_bars);
    println!();
    Ok(())
}
