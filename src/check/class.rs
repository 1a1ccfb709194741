//! Class and module documentation checks.

use crate::diagnostic::{DiagKind, Diagnostic};
use crate::model::{ClassDecl, DocBlock};

/// Every class or module wants a documentation block whose last line is
/// a bare `#`. Stricter than the section blank rule: trailing spaces
/// disqualify the line here.
pub fn check_class(decl: &ClassDecl, block: &DocBlock) -> Vec<Diagnostic> {
    let Some(last) = block.last() else {
        return vec![Diagnostic::new(decl.span, DiagKind::MissingClassDocumentation)];
    };
    if last.text != "#" {
        return vec![Diagnostic::new(last.span, DiagKind::ClassDocEndsWithoutBlank)];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommentLine, Span};

    fn decl() -> ClassDecl {
        ClassDecl {
            name: "Admin".to_string(),
            span: Span { line: 3, col: 1, len: 31 },
            is_module: false,
        }
    }

    fn block(texts: &[&str]) -> DocBlock {
        DocBlock {
            lines: texts
                .iter()
                .enumerate()
                .map(|(i, t)| CommentLine {
                    text: t.to_string(),
                    span: Span { line: i + 1, col: 1, len: t.chars().count() },
                })
                .collect(),
        }
    }

    #[test]
    fn missing_documentation() {
        let diags = check_class(&decl(), &block(&[]));
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].kind, DiagKind::MissingClassDocumentation));
        assert_eq!(diags[0].span, decl().span);
    }

    #[test]
    fn documented_class_passes() {
        assert!(check_class(&decl(), &block(&["# class doc", "#"])).is_empty());
    }

    #[test]
    fn last_line_must_be_bare_hash() {
        let diags = check_class(&decl(), &block(&["# class doc", "# vvvvv"]));
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].kind, DiagKind::ClassDocEndsWithoutBlank));
        assert_eq!(diags[0].span.line, 2);
    }

    #[test]
    fn trailing_space_disqualifies() {
        let diags = check_class(&decl(), &block(&["# class doc", "# "]));
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].kind, DiagKind::ClassDocEndsWithoutBlank));
    }
}
