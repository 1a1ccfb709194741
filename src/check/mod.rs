//! Documentation checks — per-source dispatch plus the two validators.

pub mod class;
pub mod method;

pub use class::check_class;
pub use method::check_method;

use crate::diagnostic::Diagnostic;
use crate::model::Declaration;
use crate::scanner;

/// Scan a source text and run every documentation check over it.
pub fn check_source(source: &str) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    for scanned in scanner::scan(source) {
        match &scanned.declaration {
            Declaration::Class(decl) => diags.extend(check_class(decl, &scanned.comments)),
            Declaration::Method(decl) => diags.extend(check_method(decl, &scanned.comments)),
        }
    }
    diags
}
