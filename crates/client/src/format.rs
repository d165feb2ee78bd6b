//! Plain-text rendering of outcomes and snapshots.

use std::fmt::Write;

use buildup_core::{Attribute, RequirementReport, Stat, WeaponSnapshot};
use buildup_runtime::Outcome;

/// Controls shown at startup and on `h`.
pub fn help() -> String {
    [
        "WEAPON BUILDUP TESTER",
        "  x = Add XP            1 = +Attack     2 = +Speed",
        "  3 = +Magic            4 = +Endurance  f = +Fire Affinity",
        "  e = Check Evolution   s = Full Stats  j = Snapshot JSON",
        "  h = Help              q = Quit",
        "Commands: xp <n> | pickup <item> [n] | apply <item> | stat <stat> <n>",
        "          element <element> <n> | evolutions | evolve <path> | equip <weapon>",
        "          unequip | sell <item> | gold <n> | snapshot",
    ]
    .join("\n")
}

fn stat_label(stat: Stat) -> &'static str {
    match stat {
        Stat::Attack => "ATK",
        Stat::Speed => "SPD",
        Stat::Magic => "MAG",
        Stat::Endurance => "END",
    }
}

/// One-line stat summary: `ATK:10/100 SPD:5/100 MAG:0/50 END:10/100`.
pub fn stats_line(snapshot: &WeaponSnapshot) -> String {
    snapshot
        .stats
        .iter()
        .map(|(stat, value)| format!("{}:{}/{}", stat_label(*stat), value.current, value.max))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn full_stats(snapshot: &WeaponSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "===== {} (Lvl {}/{}) =====",
        snapshot.name, snapshot.level, snapshot.level_max
    );
    let _ = writeln!(
        out,
        "XP: {}/{}",
        snapshot.experience, snapshot.experience_to_next_level
    );
    let _ = writeln!(
        out,
        "Damage: {} | Attack Speed: {:.2} | Range: {:.1} | {}",
        snapshot.damage, snapshot.attack_speed, snapshot.attack_range_base, snapshot.weapon_type
    );
    for (stat, value) in &snapshot.stats {
        let _ = writeln!(out, "{}: {}/{}", stat, value.current, value.max);
    }
    if snapshot.affinities.is_empty() {
        let _ = writeln!(out, "Affinities: none");
    } else {
        let affinities = snapshot
            .affinities
            .iter()
            .map(|(affinity, value)| format!("{affinity}: {value}"))
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(out, "Affinities: {affinities}");
    }
    let _ = write!(
        out,
        "Stat Completion: {:.1}%",
        snapshot.stat_completion * 100.0
    );
    out
}

fn requirement_label(attribute: Attribute) -> String {
    match attribute {
        Attribute::Stat(stat) => stat_label(stat).to_string(),
        Attribute::Affinity(affinity) => affinity.to_string(),
    }
}

/// Evolution check: available paths, or what each path still needs.
pub fn evolution_check(weapon: &str, reports: &[RequirementReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "===== EVOLUTION CHECK: {weapon} =====");

    let available: Vec<_> = reports.iter().filter(|r| r.satisfied).collect();
    if available.is_empty() {
        let _ = write!(out, "No evolution paths available yet.");
    } else {
        let _ = write!(out, "{} Evolution Path(s) Available!", available.len());
        for report in &available {
            let target = report.target.as_ref().map(|t| t.as_str()).unwrap_or("none");
            let _ = write!(out, "\n  -> {}: {}", report.path, target);
        }
    }

    let locked: Vec<_> = reports.iter().filter(|r| !r.satisfied).collect();
    if !locked.is_empty() {
        let _ = write!(out, "\nRequirements:");
        for report in locked {
            let target = report.target.as_ref().map(|t| t.as_str()).unwrap_or("none");
            let _ = write!(out, "\n  {} -> {}", report.path, target);
            for check in &report.checks {
                let mark = if check.is_met() { "ok" } else { "  " };
                let _ = write!(
                    out,
                    "\n    [{}] {}: {}/{}",
                    mark,
                    requirement_label(check.attribute),
                    check.current,
                    check.required
                );
            }
        }
    }
    out
}

pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Experience {
            gained,
            leveled_up,
            level,
            experience,
            experience_to_next_level,
        } => {
            let mut line = format!("[XP] Added {gained} XP. Total: {experience}/{experience_to_next_level}");
            if *leveled_up {
                let _ = write!(line, "\nLEVEL UP! Now Level {level}");
            }
            line
        }
        Outcome::PickedUp {
            item,
            stored,
            leftover,
        } => {
            if *leftover > 0 {
                format!("Picked up {item} x{stored} ({leftover} left behind, satchel full)")
            } else {
                format!("Picked up {item} x{stored}")
            }
        }
        Outcome::ItemApplied(report) => {
            let changes = report
                .changes
                .iter()
                .map(|c| format!("{} {}->{}", c.attribute, c.before, c.after))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[SYNTHESIS] Applied {} ({changes})", report.item)
        }
        Outcome::StatRaised { stat, value } => {
            format!("[STAT] {stat} now {}/{}", value.current, value.max)
        }
        Outcome::ElementRaised { element, value } => format!("[ELEMENT] {element} now {value}"),
        Outcome::Evolutions(reports) => format!("{} evolution path(s)", reports.len()),
        Outcome::Evolved { from, to } => format!("EVOLVED! {from} -> {to}"),
        Outcome::Equipped { weapon, replaced } => match replaced {
            Some(previous) => format!("Equipped weapon: {weapon} (replaced {previous})"),
            None => format!("Equipped weapon: {weapon}"),
        },
        Outcome::Unequipped(weapon) => format!("Unequipped weapon: {weapon}"),
        Outcome::Sold {
            item,
            gold,
            balance,
        } => format!("Sold {item} for {gold} gold. Current gold: {balance}"),
        Outcome::GoldAdded { amount, balance } => {
            format!("Added {amount} gold. Current gold: {balance}")
        }
        Outcome::Snapshot(snapshot) => full_stats(snapshot),
    }
}
