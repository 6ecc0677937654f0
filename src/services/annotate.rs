//! Line annotations for the editor's learning overlay.
//!
//! Each line is checked against four keyword classes in priority order and
//! gets at most one annotation. Matching is plain substring on the trimmed
//! line, so it over-reports (`"if"` inside `"notify"`); the overlay is a
//! teaching aid, not a parser.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Function,
    Variable,
    Logic,
    Dom,
}

impl AnnotationKind {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Function => "Function definition - defines reusable code block",
            Self::Variable => "Variable declaration - stores data",
            Self::Logic => "Control flow - manages program execution",
            Self::Dom => "DOM manipulation - interacts with web page elements",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// 1-based line number.
    pub line: usize,
    pub kind: AnnotationKind,
    pub text: &'static str,
}

const RULES: &[(AnnotationKind, &[&str])] = &[
    (AnnotationKind::Function, &["function", "=>"]),
    (AnnotationKind::Variable, &["const", "let", "var"]),
    (AnnotationKind::Logic, &["if", "for", "while"]),
    (AnnotationKind::Dom, &["document.", "getElementById", "addEventListener"]),
];

#[must_use]
pub fn annotate(code: &str) -> Vec<Annotation> {
    code.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            RULES
                .iter()
                .find(|(_, needles)| needles.iter().any(|n| trimmed.contains(n)))
                .map(|&(kind, _)| Annotation { line: idx + 1, kind, text: kind.text() })
        })
        .collect()
}

#[cfg(test)]
#[path = "annotate_test.rs"]
mod tests;
