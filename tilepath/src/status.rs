//! Status message history shown next to the grid.

/// Oldest entries are dropped once the history grows past this.
const MAX_ENTRIES: usize = 256;

/// A single status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub text: String,
    /// How many extra times the same message was repeated in a row.
    pub dups: u32,
}

/// Bounded history of status messages; consecutive duplicates collapse into
/// one entry with a repeat count.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    entries: Vec<StatusEntry>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message.
    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(last) = self.entries.last_mut() {
            if last.text == text {
                last.dups += 1;
                return;
            }
        }
        log::debug!("status: {text}");
        self.entries.push(StatusEntry { text, dups: 0 });

        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(0..excess);
        }
    }

    /// The latest message, or an empty string before the first one.
    pub fn latest(&self) -> &str {
        self.entries.last().map_or("", |e| e.text.as_str())
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    /// The last `n` messages formatted for display, oldest first.
    pub fn recent_lines(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries[skip..]
            .iter()
            .map(|e| {
                if e.dups > 0 {
                    format!("{} ({}×)", e.text, e.dups + 1)
                } else {
                    e.text.clone()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_and_dedup() {
        let mut log = StatusLog::new();
        assert_eq!(log.latest(), "");
        log.push("Start point set");
        log.push("Goal point set");
        log.push("Goal point set");
        assert_eq!(log.latest(), "Goal point set");
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[1].dups, 1);
        assert_eq!(
            log.recent_lines(5),
            vec!["Start point set".to_string(), "Goal point set (2×)".to_string()]
        );
        assert_eq!(log.recent_lines(1), vec!["Goal point set (2×)".to_string()]);
    }

    #[test]
    fn history_is_bounded() {
        let mut log = StatusLog::new();
        for i in 0..MAX_ENTRIES + 10 {
            log.push(format!("message {i}"));
        }
        assert_eq!(log.entries().len(), MAX_ENTRIES);
        assert_eq!(log.entries()[0].text, "message 10");
    }
}
