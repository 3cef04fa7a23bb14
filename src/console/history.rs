//! Submitted-command history with shell-style recall.

/// Result of a recall step, telling the caller what to do with its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Replace the line with this entry.
    Entry(&'a str),
    /// Walked past the newest entry; clear the line.
    Cleared,
    /// Nothing to do.
    Unchanged,
}

/// Raw submitted lines, oldest first, plus a recall cursor.
///
/// Duplicates are kept. Only [`clear`](Self::clear) empties the buffer.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    /// `None` when not recalling.
    cursor: Option<usize>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and leave recall mode.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = None;
    }

    /// Step toward older entries (up arrow). Stops at the oldest.
    pub fn recall_older(&mut self) -> Recall<'_> {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Recall::Entry(&self.entries[index])
    }

    /// Step toward newer entries (down arrow). Past the newest, recall
    /// mode ends and the line is cleared.
    pub fn recall_newer(&mut self) -> Recall<'_> {
        let Some(i) = self.cursor else {
            return Recall::Unchanged;
        };

        if i + 1 >= self.entries.len() {
            self.cursor = None;
            return Recall::Cleared;
        }

        self.cursor = Some(i + 1);
        Recall::Entry(&self.entries[i + 1])
    }

    pub fn is_recalling(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
