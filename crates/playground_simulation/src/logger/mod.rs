//! Глобальный logger симуляции
//!
//! Один sink на процесс (`LogPrinter`), уровень фильтруется здесь, а не в принтере.
//! Host (движок, тесты, headless runner) ставит свой принтер через `set_logger`.

use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

/// Уровни логирования (порядок = приоритет)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Куда уходят сообщения (console, файл, host engine output)
pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

// Poisoned mutex не должен ронять симуляцию из-за логов
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *lock(&LOGGER) = Some(logger);
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    let mut slot = lock(&LOGGER);
    if slot.is_none() {
        *slot = Some(logger);
    }
}

pub fn set_log_level(level: LogLevel) {
    *lock(&LOGGER_LEVEL) = level;
}

pub fn log_level() -> LogLevel {
    *lock(&LOGGER_LEVEL)
}

/// Пройдёт ли сообщение этого уровня через фильтр
pub fn enabled(level: LogLevel) -> bool {
    level >= log_level()
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

/// Фильтр по уровню + timestamp, затем в установленный принтер (если есть)
pub fn log_with_level(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }

    if let Some(logger) = lock(&LOGGER).as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

/// Принтер по умолчанию: stdout, ошибки в stderr
pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if level >= LogLevel::Warning {
            eprintln!("[{}] {}", level.as_str(), message);
        } else {
            println!("[{}] {}", level.as_str(), message);
        }
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_enabled_follows_level() {
        let previous = log_level();

        set_log_level(LogLevel::Warning);
        assert!(!enabled(LogLevel::Debug));
        assert!(enabled(LogLevel::Warning));
        assert!(enabled(LogLevel::Error));

        set_log_level(previous);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }
}
