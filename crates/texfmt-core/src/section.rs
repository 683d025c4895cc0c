use crate::document::{Document, IndentUnit, stripped};

const END_DOCUMENT: &str = "\\end{document}";
const BEGIN_VERBATIM: &str = "\\begin{verbatim}";
const END_VERBATIM: &str = "\\end{verbatim}";

/// A sectioning command, ordered from highest to lowest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionLevel {
    Chapter,
    Section,
    Subsection,
    Subsubsection,
}

impl SectionLevel {
    /// Every level in the order the section passes run.
    pub const ALL: [SectionLevel; 4] = [
        SectionLevel::Chapter,
        SectionLevel::Section,
        SectionLevel::Subsection,
        SectionLevel::Subsubsection,
    ];

    /// The command that opens this level, including the backslash.
    pub fn command(self) -> &'static str {
        match self {
            SectionLevel::Chapter => "\\chapter",
            SectionLevel::Section => "\\section",
            SectionLevel::Subsection => "\\subsection",
            SectionLevel::Subsubsection => "\\subsubsection",
        }
    }

    /// Commands that close this level.
    ///
    /// A chapter is closed by a section as well as by the next chapter, so
    /// that section content is indented by the section pass alone. Every other
    /// level is closed by itself and anything above it.
    pub fn exit_commands(self) -> &'static [&'static str] {
        match self {
            SectionLevel::Chapter | SectionLevel::Section => &["\\chapter", "\\section"],
            SectionLevel::Subsection => &["\\chapter", "\\section", "\\subsection"],
            SectionLevel::Subsubsection => {
                &["\\chapter", "\\section", "\\subsection", "\\subsubsection"]
            }
        }
    }
}

/// How section passes treat the interior of `verbatim` environments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerbatimHandling {
    /// Interior lines are measured and re-indented like any other line, so a
    /// verbatim block inside an active section moves one level right.
    #[default]
    Shift,
    /// Interior lines are copied unchanged and never touch the section flag.
    Protect,
}

/// Adds one indentation level to every line between `command` and the next
/// line that starts with one of `exit_commands` or is exactly
/// `\end{document}`.
///
/// The opening and closing lines keep the level they already have. Existing
/// indentation is measured in whole units of `unit`.
pub fn indent_section_level(
    doc: &Document,
    command: &str,
    exit_commands: &[&str],
    unit: &IndentUnit,
    verbatim: VerbatimHandling,
) -> Document {
    let mut in_section = false;
    let mut in_verbatim = false;

    doc.iter()
        .map(|raw| {
            let content = stripped(raw);

            if verbatim == VerbatimHandling::Protect {
                let opens = content.starts_with(BEGIN_VERBATIM);
                if opens {
                    in_verbatim = true;
                } else if content.starts_with(END_VERBATIM) {
                    in_verbatim = false;
                }
                if in_verbatim && !opens {
                    return raw.clone();
                }
            }

            let current = unit.level_of(raw);
            let level = if content.starts_with(command) {
                in_section = true;
                current
            } else if in_section {
                if closes_section(content, exit_commands) {
                    in_section = false;
                    current
                } else {
                    current + 1
                }
            } else {
                current
            };

            format!("{}{}", unit.render(level), content)
        })
        .collect()
}

fn closes_section(content: &str, exit_commands: &[&str]) -> bool {
    content == END_DOCUMENT || exit_commands.iter().any(|cmd| content.starts_with(cmd))
}
