//! Navigation history for one browsing session
//!
//! An ordered list of visited URLs plus a cursor marking the entry that is
//! currently displayed. Navigating while the cursor is not at the end
//! discards everything after it, the way browser history does.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationHistory {
    entries: Vec<String>,
    /// `None` until the first navigation
    cursor: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit `url`, dropping any forward entries.
    ///
    /// The URL is stored verbatim; duplicates are allowed.
    pub fn navigate(&mut self, url: impl Into<String>) {
        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(url.into());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry. Returns `None` and leaves state untouched at the
    /// first entry or when nothing was visited.
    pub fn go_back(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Step forward one entry. Returns `None` when already at the newest entry.
    pub fn go_forward(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.current()
            }
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|i| self.entries[i].as_str())
    }

    /// Current entry, or `default` before the first navigation
    pub fn current_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.current().unwrap_or(default)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Cursor as a signed position, -1 meaning nothing visited yet
    pub fn position(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|i| i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor.is_some_and(|i| i + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
