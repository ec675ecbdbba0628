//! Terminal front end for the mood journal.
//!
//! # Responsibility
//! - Parse commands and resolve configuration.
//! - Render the visible grid as text and forward edits to the session.
//! - Own descriptor splitting policy (comma-separated, trimmed).

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use moodlog_core::db::open_db;
use moodlog_core::{
    init_logging, week_prompt, ConfigOverrides, DateKey, DayCell, Direction, IntervalKind,
    JournalConfig, JournalSession, KeyValueStore, Mood, SqliteKeyValueStore,
};
use std::path::PathBuf;

const DESCRIPTOR_DELIMITER: char = ',';

/// moodlog - record how each day felt
#[derive(Parser)]
#[command(name = "moodlog", version)]
#[command(about = "Calendar mood journal", long_about = None)]
struct Cli {
    /// Journal database file (overrides MOODLOG_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log directory (overrides MOODLOG_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides MOODLOG_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the calendar grid
    Show {
        /// day|week|month
        #[arg(long, default_value = "month")]
        interval: IntervalKind,

        /// Anchor date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<DateKey>,

        /// Intervals to move from the anchor; negative goes back
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
    /// Set the mood of a day
    Mood { date: DateKey, mood: Mood },
    /// Tag a day with comma-separated feelings
    Feel {
        date: DateKey,
        mood: Mood,
        descriptors: String,
    },
    /// Remove one feeling from a day
    Expunge { date: DateKey, descriptor: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = JournalConfig::resolve(ConfigOverrides {
        db_path: cli.db,
        log_dir: cli.log_dir,
        log_level: cli.log_level,
    });
    init_logging(&config.log_level, &config.log_dir)
        .context("failed to initialize logging")?;

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open journal at {}", config.db_path.display()))?;
    let today = Local::now().date_naive();
    let mut session = JournalSession::open(SqliteKeyValueStore::new(&conn), today);

    match cli.command {
        Command::Show {
            interval,
            date,
            offset,
        } => {
            session.set_interval(interval);
            if let Some(date) = date {
                session.reset_to(date.date());
            }
            let direction = if offset < 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            for _ in 0..offset.unsigned_abs() {
                session.advance(direction);
            }
            print_grid(&session, today);
        }
        Command::Mood { date, mood } => {
            session.set_mood(date, mood)?;
            print_day(&session, date.date(), today);
        }
        Command::Feel {
            date,
            mood,
            descriptors,
        } => {
            let descriptors = split_descriptors(&descriptors);
            info!(
                "event=cli_feel module=cli status=start key={date} count={}",
                descriptors.len()
            );
            session.set_feeling(date, mood, descriptors)?;
            print_day(&session, date.date(), today);
        }
        Command::Expunge { date, descriptor } => {
            session.expunge_feeling(date, &descriptor)?;
            print_day(&session, date.date(), today);
        }
    }

    Ok(())
}

fn split_descriptors(raw: &str) -> Vec<String> {
    raw.split(DESCRIPTOR_DELIMITER)
        .map(|part| part.trim().to_string())
        .collect()
}

fn print_grid<K: KeyValueStore>(session: &JournalSession<K>, today: NaiveDate) {
    let header = session.header();
    let kind = session.interval().kind;
    println!("{} {}", header.month.to_uppercase(), header.year);
    println!("{}", week_prompt(today));
    println!();
    for day in session.visible_days(today) {
        println!("{}", render_cell(&day));
    }
    println!();
    println!(
        "Last {0}: --offset -1    Next {0}: --offset 1",
        kind.display_name()
    );
}

fn print_day<K: KeyValueStore>(session: &JournalSession<K>, date: NaiveDate, today: NaiveDate) {
    let days = moodlog_core::compute_visible_days(date, IntervalKind::Day, session.store(), today);
    for day in &days {
        println!("{}", render_cell(day));
    }
}

fn render_cell(day: &DayCell<'_>) -> String {
    let marker = if day.is_today { '*' } else { ' ' };
    let mut line = format!("{marker} {:<9} {}", day.weekday_name(), day.key());
    if let Some(log) = day.log {
        if let Some(mood) = log.mood {
            line.push_str(&format!("  {mood}"));
        }
        if !log.feelings.is_empty() {
            let tags: Vec<String> = log
                .feelings
                .iter()
                .map(|(descriptor, mood)| format!("{descriptor}:{mood}"))
                .collect();
            line.push_str(&format!("  [{}]", tags.join(", ")));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{render_cell, split_descriptors};
    use chrono::{NaiveDate, Weekday};
    use moodlog_core::{DayCell, LogEntry, Mood};

    #[test]
    fn descriptors_split_on_commas_and_trim() {
        assert_eq!(
            split_descriptors("calm, focused ,,tired"),
            vec!["calm", "focused", "", "tired"]
        );
    }

    #[test]
    fn cell_rendering_shows_mood_and_feelings() {
        let mut entry = LogEntry::with_mood(Mood::Happy);
        entry.feelings.insert("tired".to_string(), Mood::Sad);
        let cell = DayCell {
            weekday: Weekday::Thu,
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            is_today: true,
            log: Some(&entry),
        };
        assert_eq!(
            render_cell(&cell),
            "* Thursday  2024-03-07  happy  [tired:sad]"
        );
    }
}
