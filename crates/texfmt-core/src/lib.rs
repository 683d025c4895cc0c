//! # texfmt Core
//!
//! Line-based indentation engine for LaTeX sources.
//!
//! ## Overview
//!
//! The engine assigns every line of a LaTeX document an indentation depth
//! derived from two kinds of nesting:
//!
//! - **Environments**: `\begin{..}` / `\end{..}` pairs, tracked on a stack
//! - **Sectioning commands**: `\chapter`, `\section`, `\subsection`,
//!   `\subsubsection`, each scoping the lines that follow until a command of
//!   equal or higher rank (or `\end{document}`)
//!
//! The interior of `verbatim` environments is copied through unchanged.
//!
//! It is not a LaTeX parser. Only the start of each stripped line is
//! inspected, malformed markup degrades to a defined indentation instead of an
//! error, and no line is ever added, removed or reordered.
//!
//! ## Pipeline
//!
//! ```text
//!  text ──split──► Document ──environments──► Document
//!                                                │
//!        ┌───────────────────────────────────────┘
//!        ▼
//!    \chapter ─► \section ─► \subsection ─► \subsubsection ──join──► text
//! ```
//!
//! Each arrow is a full pass over the document ([`indent_environments`],
//! then [`indent_section_level`] once per [`SectionLevel`] in rank order).
//! All pass state is local to the call, so formatting is a pure function that
//! can run on any number of threads at once.
//!
//! ## Examples
//!
//! ```
//! let input = "\\section{A}\nSection content\n\\subsection{B}\nSubsection content";
//! let output = texfmt_core::indent_latex(input, "    ");
//!
//! assert_eq!(
//!     output,
//!     "\\section{A}\n    Section content\n    \\subsection{B}\n        Subsection content"
//! );
//! ```
//!
//! ### Custom options
//!
//! ```
//! use texfmt_core::{FormatOptions, IndentUnit, VerbatimHandling, format};
//!
//! let options = FormatOptions {
//!     indent: IndentUnit::tab(),
//!     verbatim: VerbatimHandling::Protect,
//! };
//! let output = format("\\begin{document}\nHello\n\\end{document}", &options);
//! assert_eq!(output, "\\begin{document}\n\tHello\n\\end{document}");
//! ```

/// Lines, documents and the indent unit.
pub mod document;
/// The environment pass.
pub mod environment;
/// The parameterized section-level pass.
pub mod section;


pub use document::{Document, IndentUnit};
pub use environment::indent_environments;
pub use section::{SectionLevel, VerbatimHandling, indent_section_level};

/// Settings for a single formatting call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// One level of indentation.
    pub indent: IndentUnit,
    /// Treatment of verbatim interiors during the section passes.
    pub verbatim: VerbatimHandling,
}

/// Re-indents `code` using `indent_str` as the unit and default options
/// otherwise.
pub fn indent_latex(code: &str, indent_str: &str) -> String {
    format(
        code,
        &FormatOptions {
            indent: IndentUnit::new(indent_str),
            ..FormatOptions::default()
        },
    )
}

/// Re-indents `code` according to `options`.
pub fn format(code: &str, options: &FormatOptions) -> String {
    format_document(&Document::from_text(code), options).into_text()
}

/// Runs the environment pass followed by one section pass per level.
pub fn format_document(doc: &Document, options: &FormatOptions) -> Document {
    log::debug!("formatting {} line(s)", doc.len());

    let mut current = indent_environments(doc, &options.indent);
    for level in SectionLevel::ALL {
        log::trace!("section pass: {}", level.command());
        current = indent_section_level(
            &current,
            level.command(),
            level.exit_commands(),
            &options.indent,
            options.verbatim,
        );
    }

    debug_assert_eq!(current.len(), doc.len());
    current
}
