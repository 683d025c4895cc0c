use serde::{Deserialize, Serialize};

/// The string used for one level of indentation.
///
/// Levels are rendered by repeating the unit and measured by dividing the
/// number of leading space/tab characters by the unit's character count.
/// An empty unit is allowed: every level then renders as zero width and
/// every line measures as level 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndentUnit(String);

impl Default for IndentUnit {
    /// Four spaces.
    fn default() -> Self {
        Self::spaces(4)
    }
}

impl IndentUnit {
    pub fn new(unit: impl Into<String>) -> Self {
        Self(unit.into())
    }

    /// `count` spaces per level.
    pub fn spaces(count: usize) -> Self {
        Self(" ".repeat(count))
    }

    /// A single tab per level.
    pub fn tab() -> Self {
        Self("\t".to_string())
    }

    /// Number of characters in one unit.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    /// Renders `level` repetitions of the unit.
    pub fn render(&self, level: usize) -> String {
        self.0.repeat(level)
    }

    /// Measures the indentation level already present on a raw line.
    ///
    /// Only spaces and tabs count as indentation characters, and partial
    /// units are truncated.
    pub fn level_of(&self, raw: &str) -> usize {
        let width = self.width();
        if width == 0 {
            return 0;
        }
        leading_indent_chars(raw) / width
    }
}

fn leading_indent_chars(raw: &str) -> usize {
    raw.chars().take_while(|c| matches!(c, ' ' | '\t')).count()
}

/// The stripped form of a line, used for command and environment detection.
pub fn stripped(raw: &str) -> &str {
    raw.trim()
}

/// An ordered sequence of source lines.
///
/// Every pass consumes one `Document` and produces a new one with exactly the
/// same number of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Splits `text` on `\n`. A trailing newline yields a final empty line, so
    /// that [`Document::into_text`] restores it.
    pub fn from_text(text: &str) -> Self {
        text.split('\n').map(str::to_owned).collect()
    }

    /// Joins the lines back together with `\n`.
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }
}

impl FromIterator<String> for Document {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Document {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

impl From<Document> for Vec<String> {
    fn from(doc: Document) -> Self {
        doc.lines
    }
}
