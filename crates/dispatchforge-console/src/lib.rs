//! Colorful console output for planner events.
//!
//! Provides a custom `tracing` layer that formats planner events with
//! colors, and a plain-text plan report in [`report`].
//!
//! ## Log Levels
//!
//! - **INFO**: Snapshot load, plan lifecycle and one line per evaluated or skipped slot
//! - **DEBUG**: Key choice and search strategy per slot
//! - **TRACE**: Joint search node counts

pub mod report;

pub use report::format_plan;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static PLAN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset. Prefix match: covers the
/// solver, the facade and the `dispatchforge` binary.
const DEFAULT_DIRECTIVE: &str = "dispatchforge=info";

/// Initializes the planner console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(DispatchConsoleLayer)
            .try_init();
    });
}

// Marks the start of planning for elapsed time tracking.
fn mark_plan_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    PLAN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since plan start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = PLAN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____  _                 _       _     _____
|  _ \(_)___ _ __   __ _| |_ ___| |__ |  ___|__  _ __ __ _  ___
| | | | / __| '_ \ / _` | __/ __| '_ \| |_ / _ \| '__/ _` |/ _ \
| |_| | \__ \ |_) | (_| | || (__| | | |  _| (_) | | | (_| |  __/
|____/|_|___/ .__/ \__,_|\__\___|_| |_|_|  \___/|_|  \__, |\___|
            |_|                                      |___/
"#;

    let version_line = format!(
        "                   v{} - Deterministic Slot Planner\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct DispatchConsoleLayer;

impl<S: Subscriber> Layer<S> for DispatchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from planner modules and the binary
        if !target.starts_with("dispatchforge_solver") && !target.starts_with("dispatchforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    slot: Option<String>,
    strategy: Option<String>,
    constraint: Option<String>,
    group: Option<u64>,
    grade: Option<u64>,
    key: Option<u64>,
    chosen: Option<u64>,
    satisfied: Option<u64>,
    reserved: Option<u64>,
    assigned: Option<u64>,
    extras: Option<u64>,
    candidates: Option<u64>,
    nodes: Option<u64>,
    slot_count: Option<u64>,
    busy_count: Option<u64>,
    pool_size: Option<u64>,
    dispatchable: Option<u64>,
    pool_remaining: Option<u64>,
    estimated: Option<f64>,
    groups: Option<u64>,
    resources: Option<u64>,
    pending_reward: Option<bool>,
    solved: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "group" => self.group = Some(value),
            "grade" => self.grade = Some(value),
            "key" => self.key = Some(value),
            "chosen" => self.chosen = Some(value),
            "satisfied" => self.satisfied = Some(value),
            "reserved" => self.reserved = Some(value),
            "assigned" => self.assigned = Some(value),
            "extras" => self.extras = Some(value),
            "candidates" => self.candidates = Some(value),
            "nodes" => self.nodes = Some(value),
            "slot_count" => self.slot_count = Some(value),
            "busy_count" => self.busy_count = Some(value),
            "pool_size" => self.pool_size = Some(value),
            "dispatchable" => self.dispatchable = Some(value),
            "pool_remaining" => self.pool_remaining = Some(value),
            "groups" => self.groups = Some(value),
            "resources" => self.resources = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "estimated" {
            self.estimated = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "pending_reward" => self.pending_reward = Some(value),
            "solved" => self.solved = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "slot" => self.slot = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            "constraint" => self.constraint = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "snapshot_loaded" => format_snapshot_loaded(v),
        "plan_start" => format_plan_start(v),
        "plan_end" => format_plan_end(v),
        "slot_skipped" => format_slot_skipped(v),
        "slot_evaluated" => format_slot_evaluated(v),
        "no_key" => format_no_key(v),
        "key_selected" => format_key_selected(v),
        "search_strategy" => format_search_strategy(v),
        "joint_search" => format_joint_search(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_snapshot_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Snapshot │ {} groups │ {} resources",
        format_elapsed(),
        "◆".bright_cyan(),
        count(v.groups).bright_yellow(),
        count(v.resources).bright_yellow(),
    )
}

fn format_plan_start(v: &EventVisitor) -> String {
    mark_plan_start();
    let mut output = format!(
        "{} {} Planning │ {} slots │ {} resources",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.slot_count).bright_yellow(),
        count(v.pool_size).bright_yellow(),
    );

    if v.busy_count.unwrap_or(0) > 0 {
        output.push_str(&format!(" │ {} busy", count(v.busy_count).bright_black()));
    }

    output
}

fn format_plan_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Plan complete │ {} dispatchable │ {} reserved │ {} resources left",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.dispatchable).bright_green().bold(),
        count(v.reserved).yellow(),
        count(v.pool_remaining).white(),
    )
}

fn format_slot_skipped(v: &EventVisitor) -> String {
    let slot = v.slot.as_deref().unwrap_or("?");
    let reason = if v.pending_reward.unwrap_or(false) {
        "pending reward".to_string()
    } else {
        format!("{} assigned", count(v.assigned))
    };

    format!(
        "{} {} {} │ #{} │ {}",
        format_elapsed(),
        "⏸".bright_black(),
        slot.white(),
        v.group.unwrap_or(0),
        reason.bright_black(),
    )
}

fn format_slot_evaluated(v: &EventVisitor) -> String {
    let slot = v.slot.as_deref().unwrap_or("?");
    let chosen = v.chosen.unwrap_or(0);
    let icon = if chosen > 0 {
        "✓".bright_green().to_string()
    } else {
        "○".yellow().to_string()
    };

    format!(
        "{} {} {} │ #{} │ G{} │ {} chosen │ {} sets │ est {}",
        format_elapsed(),
        icon,
        slot.white().bold(),
        v.group.unwrap_or(0),
        v.grade.unwrap_or(0),
        count(v.chosen).white(),
        count(v.satisfied).bright_magenta(),
        format!("{:.1}", v.estimated.unwrap_or(0.0)).bright_yellow(),
    )
}

fn format_no_key(v: &EventVisitor) -> String {
    let slot = v.slot.as_deref().unwrap_or("?");
    format!(
        "{} {} {} │ G{} │ {} │ {} reserved",
        format_elapsed(),
        "!".yellow().bold(),
        slot.white(),
        v.grade.unwrap_or(0),
        "no eligible key".yellow(),
        count(v.reserved),
    )
}

fn format_key_selected(v: &EventVisitor) -> String {
    let slot = v.slot.as_deref().unwrap_or("?");
    let strategy = v.strategy.as_deref().unwrap_or("?");
    format!(
        "{} {} {} │ key {} │ {} │ {} candidates",
        format_elapsed(),
        "·".bright_blue(),
        slot.white(),
        v.key.unwrap_or(0).bright_cyan(),
        strategy.bright_magenta(),
        count(v.candidates),
    )
}

fn format_search_strategy(v: &EventVisitor) -> String {
    let slot = v.slot.as_deref().unwrap_or("?");
    let strategy = v.strategy.as_deref().unwrap_or("?");
    let mut output = format!(
        "{} {} {} │ key {} │ {}",
        format_elapsed(),
        "·".bright_black(),
        slot.bright_black(),
        v.key.unwrap_or(0),
        strategy.bright_magenta(),
    );

    if let Some(constraint) = v.constraint.as_deref().filter(|c| !c.is_empty()) {
        output.push_str(&format!(" │ {}", constraint.white()));
    }
    if let Some(extras) = v.extras {
        output.push_str(&format!(" │ +{} extras", extras));
    }

    output
}

fn format_joint_search(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let icon = if v.solved.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Joint search │ {} nodes │ {} candidates",
        format_elapsed(),
        icon,
        count(v.nodes).bright_black(),
        count(v.candidates).bright_black(),
    )
}
