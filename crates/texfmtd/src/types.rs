//! Request and response bodies

use serde::{Deserialize, Serialize};
use texfmt_core::{FormatOptions, IndentUnit, VerbatimHandling};

/// Body of `POST /format`.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatRequest {
    pub latex_code: String,
    /// Defaults to four spaces.
    #[serde(default)]
    pub indent_str: IndentUnit,
    #[serde(default)]
    pub protect_verbatim: bool,
}

impl FormatRequest {
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            indent: self.indent_str.clone(),
            verbatim: if self.protect_verbatim {
                VerbatimHandling::Protect
            } else {
                VerbatimHandling::Shift
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResponse {
    pub formatted_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
