//! Terminal rendering of fortunes.

use std::io::{IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use ft_core::animation::ScoreAnimation;
use ft_core::{FortuneRecord, Language};

const GAUGE_WIDTH: usize = 20;

fn loading_text(lang: Language) -> &'static str {
    match lang {
        Language::ZhHant => "正在諮詢神諭...",
        Language::En => "Consulting the oracles...",
    }
}

fn score_label(lang: Language) -> &'static str {
    match lang {
        Language::ZhHant => "運勢評分",
        Language::En => "Fortune Score",
    }
}

/// Show the loading line and wait out the reveal delay.
pub fn wait_for_reveal(lang: Language, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    eprintln!("  {}", loading_text(lang).dimmed());
    thread::sleep(delay);
}

/// Print a fortune card and count its score up.
pub fn print_fortune(record: &FortuneRecord, animation: &ScoreAnimation, frame_interval: Duration) {
    println!();
    println!(
        "  {}  {}",
        record.display_number.dimmed(),
        record.level_label.bold().yellow()
    );
    println!();
    for line in record.fortune_text.lines() {
        println!("  {}", line.trim());
    }
    println!();

    let mut stdout = std::io::stdout();
    let label = score_label(record.language);

    if stdout.is_terminal() && !animation.duration().is_zero() {
        let mut last = Duration::ZERO;
        for frame in animation.frames(frame_interval) {
            thread::sleep(frame.elapsed.saturating_sub(last));
            last = frame.elapsed;
            let _ = write!(stdout, "\r  {label}  {}", score_line(frame.value, frame.gauge));
            let _ = stdout.flush();
        }
        println!();
    } else {
        let end = animation.frame_at(animation.duration());
        println!("  {label}  {}", score_line(end.value, end.gauge));
    }
}

/// Print a fortune as JSON.
pub fn print_json(record: &FortuneRecord) -> Result<(), String> {
    let json = serde_json::to_string_pretty(record).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn score_line(value: u32, gauge: f64) -> String {
    format!("{} {value}", gauge_bar(gauge))
}

fn gauge_bar(gauge: f64) -> String {
    let filled = ((gauge * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH);
    format!(
        "[{}{}]",
        "█".repeat(filled).green(),
        "░".repeat(GAUGE_WIDTH - filled).dimmed()
    )
}
