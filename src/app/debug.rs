use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCategory {
    Auth,
    Nav,
    Net,
    Storage,
    Ui,
    Other,
}

impl fmt::Display for DebugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugCategory::Auth => write!(f, "AUTH"),
            DebugCategory::Nav => write!(f, "NAV"),
            DebugCategory::Net => write!(f, "NET"),
            DebugCategory::Storage => write!(f, "STORE"),
            DebugCategory::Ui => write!(f, "UI"),
            DebugCategory::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Clone)]
pub struct DebugEntry {
    pub timestamp: String,
    pub level: DebugLevel,
    pub category: DebugCategory,
    pub message: String,
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.timestamp, self.level, self.category, self.message
        )
    }
}

/// Ring-buffer logger behind the in-app debug console. Every entry is also
/// forwarded to `tracing`, so the panel and the process log stay in sync.
pub struct DebugLogger {
    entries: Arc<Mutex<Vec<DebugEntry>>>,
    max_entries: usize,
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
        }
    }

    fn timestamp() -> String {
        use std::time::UNIX_EPOCH;
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = duration.as_secs();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60,
            duration.subsec_millis()
        )
    }

    pub fn log(&self, level: DebugLevel, category: DebugCategory, message: impl Into<String>) {
        let entry = DebugEntry {
            timestamp: Self::timestamp(),
            level,
            category,
            message: message.into(),
        };

        match entry.level {
            DebugLevel::Debug => tracing::debug!("[{}] {}", entry.category, entry.message),
            DebugLevel::Info => tracing::info!("[{}] {}", entry.category, entry.message),
            DebugLevel::Warn => tracing::warn!("[{}] {}", entry.category, entry.message),
            DebugLevel::Error => tracing::error!("[{}] {}", entry.category, entry.message),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
            if entries.len() > self.max_entries {
                entries.remove(0);
            }
        }
    }

    pub fn debug(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg);
    }

    pub fn info(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Info, category, msg);
    }

    pub fn warn(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Warn, category, msg);
    }

    pub fn error(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg);
    }

    pub fn get_entries(&self) -> Vec<DebugEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn get_entries_by_category(&self, category: DebugCategory) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| {
                e.iter()
                    .filter(|entry| entry.category == category)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count_by_level(&self, level: DebugLevel) -> usize {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|entry| entry.level == level).count())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }
}

impl Clone for DebugLogger {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            max_entries: self.max_entries,
        }
    }
}
