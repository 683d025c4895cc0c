use crate::document::{Document, IndentUnit, stripped};

const BEGIN: &str = "\\begin{";
const END: &str = "\\end{";
const END_VERBATIM: &str = "\\end{verbatim}";
const VERBATIM: &str = "verbatim";

/// Indents every line by the number of environments open around it.
///
/// An `\end{..}` line sits at the depth outside the environment it closes, and
/// a `\begin{..}` line sits at the depth outside the environment it opens.
/// Interior lines of a `verbatim` environment are copied unchanged.
pub fn indent_environments(doc: &Document, unit: &IndentUnit) -> Document {
    let mut pass = EnvironmentPass::new(unit);
    let out: Document = doc.iter().map(|line| pass.process_line(line)).collect();
    pass.finish();
    out
}

/// Extracts `name` from a stripped line starting with `\begin{name}`.
///
/// Returns `None` when the brace is never closed on this line or the name is
/// empty.
pub fn begin_name(stripped: &str) -> Option<&str> {
    let rest = stripped.strip_prefix(BEGIN)?;
    let close = rest.find('}')?;
    let name = &rest[..close];
    (!name.is_empty()).then_some(name)
}

/// Per-call state of the environment pass.
struct EnvironmentPass<'a> {
    unit: &'a IndentUnit,
    stack: Vec<String>,
    in_verbatim: bool,
    line_no: usize,
}

impl<'a> EnvironmentPass<'a> {
    fn new(unit: &'a IndentUnit) -> Self {
        Self {
            unit,
            stack: Vec::new(),
            in_verbatim: false,
            line_no: 0,
        }
    }

    fn process_line(&mut self, raw: &str) -> String {
        self.line_no += 1;
        let content = stripped(raw);
        let closes_verbatim = content.starts_with(END_VERBATIM);

        if self.in_verbatim && !closes_verbatim {
            return raw.to_owned();
        }
        if closes_verbatim {
            self.in_verbatim = false;
        }

        if content.starts_with(END) && self.stack.pop().is_none() {
            log::debug!("line {}: unbalanced \\end absorbed", self.line_no);
        }

        let indented = format!("{}{}", self.unit.render(self.stack.len()), content);

        if let Some(name) = begin_name(content) {
            if name == VERBATIM {
                log::trace!("line {}: verbatim region opened", self.line_no);
                self.in_verbatim = true;
            }
            self.stack.push(name.to_owned());
        }

        indented
    }

    fn finish(self) {
        if self.in_verbatim {
            log::debug!("verbatim region left open at end of input");
        }
        if !self.stack.is_empty() {
            log::debug!("{} environment(s) left open: {:?}", self.stack.len(), self.stack);
        }
    }
}
