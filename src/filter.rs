//! Allowlist filtering: read, drop the requested entries, write back.
//!
//! An allowlist is any text whose whitespace-separated tokens are entries.
//! The rewritten file always holds one entry per line.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::config::WriteMode;
use crate::error::AllowlistError;
use crate::fs_abstraction::{real_fs, FileSystem};

/// Tokens to drop from an allowlist. Matching is exact string equality.
#[derive(Debug, Default, Clone)]
pub struct RemovalSet<'a> {
    tokens: HashSet<&'a str>,
}

impl<'a> RemovalSet<'a> {
    pub fn new<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        tokens.iter().map(|token| token.as_ref()).collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for RemovalSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Result of filtering an allowlist in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    /// Newline-separated survivors, ready to be written
    pub content: String,
    pub kept: usize,
    pub removed: usize,
}

/// Decode UTF-8, silently dropping invalid byte sequences.
///
/// # Examples
/// ```
/// use allowlist_filter::filter::decode_lossy;
/// assert_eq!(decode_lossy(b"10.0.\xff0.1"), "10.0.0.1");
/// ```
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Whitespace plus the ASCII file/group/record/unit separators (U+001C..U+001F).
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split on any separator run (space, tab, CR, LF, ...), discarding empties.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Keep every token not in `remove`, preserving order and duplicates.
pub fn filter_tokens<'t, I>(tokens: I, remove: &RemovalSet<'_>) -> Vec<&'t str>
where
    I: IntoIterator<Item = &'t str>,
{
    tokens
        .into_iter()
        .filter(|token| !remove.contains(token))
        .collect()
}

/// Join tokens one per line. Non-empty output ends with a single newline,
/// empty output is the empty string.
///
/// # Examples
/// ```
/// use allowlist_filter::filter::render;
/// assert_eq!(render(&["1.1.1.1", "2.2.2.2"]), "1.1.1.1\n2.2.2.2\n");
/// assert_eq!(render(&[]), "");
/// ```
pub fn render(tokens: &[&str]) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    let mut content = tokens.join("\n");
    content.push('\n');
    content
}

/// Filter allowlist text without touching the filesystem.
///
/// # Examples
/// ```
/// use allowlist_filter::filter::apply;
/// let filtered = apply("10.0.0.1 10.0.0.2\t10.0.0.1", &["10.0.0.1"]);
/// assert_eq!(filtered.content, "10.0.0.2\n");
/// assert_eq!(filtered.removed, 2);
/// ```
pub fn apply<S: AsRef<str>>(text: &str, remove: &[S]) -> Filtered {
    let tokens = tokenize(text);
    let total = tokens.len();
    let remove_set = RemovalSet::new(remove);
    debug!(
        "Filtering {} entries against {} distinct removals",
        total,
        remove_set.len()
    );
    let survivors = filter_tokens(tokens, &remove_set);

    Filtered {
        kept: survivors.len(),
        removed: total - survivors.len(),
        content: render(&survivors),
    }
}

/// Read `source`, remove every entry in `remove`, and write the result to
/// `dest` (or back to `source` when `dest` is None).
///
/// Returns the text that was written.
pub fn update<F, S>(
    fs: &F,
    source: &Path,
    remove: &[S],
    dest: Option<&Path>,
    mode: WriteMode,
) -> Result<String, AllowlistError>
where
    F: FileSystem + ?Sized,
    S: AsRef<str>,
{
    let bytes = fs.read(source).map_err(|e| AllowlistError::Input {
        path: source.to_path_buf(),
        source: e,
    })?;
    let text = decode_lossy(&bytes);
    debug!("Read {} bytes from {}", bytes.len(), source.display());

    let filtered = apply(&text, remove);

    let target = dest.unwrap_or(source);
    let written = match mode {
        WriteMode::Direct => fs.write(target, filtered.content.as_bytes()),
        WriteMode::Atomic => fs.write_atomic(target, filtered.content.as_bytes()),
    };
    written.map_err(|e| AllowlistError::Output {
        path: target.to_path_buf(),
        source: e,
    })?;

    info!(
        "Removed {} entries, kept {}, wrote {}",
        filtered.removed,
        filtered.kept,
        target.display()
    );

    Ok(filtered.content)
}

/// [`update`] against the real filesystem with a direct overwrite.
pub fn update_allowlist<S: AsRef<str>>(
    source: &Path,
    remove: &[S],
    dest: Option<&Path>,
) -> Result<String, AllowlistError> {
    update(real_fs(), source, remove, dest, WriteMode::Direct)
}
