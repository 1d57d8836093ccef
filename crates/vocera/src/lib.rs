//! Vocera - console logging for the fumiplan tools
//!
//! Leveled, colored logging to stderr so that stdout stays reserved for the
//! values a command was asked to produce. Multi-line messages keep their
//! prefix on every line.
//!
//! Standard levels: `info()`, `warn()`, `error()`, `debug()`, `success()`
//!
//! Event variants (`event_info()`, `event_warn()`, `event_error()`,
//! `event_success()`) add a local-clock timestamp for long-running output.

use chrono::Local;
use colored::*;

/// Log levels understood by vocera. Each level carries its console tag and
/// prefix color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Info,
  Warn,
  Error,
  Debug,
  Success,
}

impl Level {
  fn tag(self) -> &'static str {
    match self {
      Level::Info => "info",
      Level::Warn => "warn",
      Level::Error => "error",
      Level::Debug => "debug",
      Level::Success => "ok",
    }
  }

  fn color(self) -> Color {
    match self {
      Level::Info => Color::Blue,
      Level::Warn => Color::Yellow,
      Level::Error => Color::Red,
      Level::Debug => Color::Magenta,
      Level::Success => Color::Green,
    }
  }
}

/// Write a message to stderr, line by line.
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

fn prefix(level: Level) -> String {
  let tag = level.tag();
  format!("[{}]{:<pad$}", tag.color(level.color()).bold(), "", pad = 8usize.saturating_sub(tag.len() + 2))
}

/// Emit a message at the given level, prefixing every line.
pub fn emit(level: Level, message: &str) {
  let prefix = prefix(level);
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Emit a timestamped event message at the given level.
pub fn event(level: Level, message: &str) {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  let prefix = format!("[{}] [{}]", level.tag().color(level.color()).bold(), timestamp.cyan());
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Info level logging - general information
pub fn info(message: &str) {
  emit(Level::Info, message);
}

/// Warning level logging - something needs attention
pub fn warn(message: &str) {
  emit(Level::Warn, message);
}

/// Error level logging - something went wrong
pub fn error(message: &str) {
  emit(Level::Error, message);
}

/// Debug level logging - detailed diagnostic information
pub fn debug(message: &str) {
  emit(Level::Debug, message);
}

/// Success level logging - something completed successfully
pub fn success(message: &str) {
  emit(Level::Success, message);
}

pub fn event_info(message: &str) {
  event(Level::Info, message);
}

pub fn event_warn(message: &str) {
  event(Level::Warn, message);
}

pub fn event_error(message: &str) {
  event(Level::Error, message);
}

pub fn event_success(message: &str) {
  event(Level::Success, message);
}

/// Create a banner line of the specified length and character.
pub fn banner_line(length: usize, char: char) -> String {
  char.to_string().repeat(length)
}

/// Display a message framed by banner lines.
pub fn as_banner<F>(log_fn: F, message: &str, width: Option<usize>, border_char: Option<char>)
where
  F: Fn(&str),
{
  let width = width.unwrap_or(50);
  let border_char = border_char.unwrap_or('=');

  let banner = banner_line(width, border_char);

  log_fn(&banner);
  log_fn(message);
  log_fn(&banner);
}

/// Announce something important but not critical.
pub fn announce(message: &str) {
  as_banner(|msg| log(&msg.blue().bold().to_string()), message, Some(50), Some('-'));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn banner_line_repeats_character() {
    assert_eq!(banner_line(5, '='), "=====");
    assert_eq!(banner_line(0, '*'), "");
  }

  #[test]
  fn as_banner_frames_message() {
    let mut captured = Vec::new();
    {
      let sink = std::cell::RefCell::new(&mut captured);
      as_banner(|msg| sink.borrow_mut().push(msg.to_string()), "hello", Some(4), Some('-'));
    }
    assert_eq!(captured, vec!["----", "hello", "----"]);
  }

  #[test]
  fn levels_have_distinct_tags() {
    let tags =
      [Level::Info, Level::Warn, Level::Error, Level::Debug, Level::Success].map(Level::tag);
    let mut deduped = tags.to_vec();
    deduped.dedup();
    assert_eq!(deduped.len(), tags.len());
  }

  #[test]
  fn emit_handles_multiline_messages() {
    // Smoke test: must not panic on empty or multi-line input.
    emit(Level::Info, "");
    emit(Level::Warn, "line one\nline two");
    event(Level::Error, "timestamped\nevent");
  }
}
