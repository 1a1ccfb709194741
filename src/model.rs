//! Source model — spans, comment lines, doc blocks, declarations.

use regex::Regex;
use std::sync::LazyLock;

// Annotation keywords conventionally used in Ruby comments.
static RE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^# *(?:todo|fixme|optimize|hack|review|note)\b").unwrap());

// Magic comments consumed by the interpreter rather than read by humans.
static RE_MAGIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^# *(?:frozen_string_literal|encoding|shareable_constant_value|warn_indent) *[:=]")
        .unwrap()
});

static RE_LINT_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# *(?:rubocop|pubdoc): *(?:disable|enable|todo)\b").unwrap());

/// A location in the linted source. Columns are 1-based and counted in
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
    pub len: usize,
}

/// One comment line, with its text starting at the `#` prefix.
/// Indentation is excluded; trailing spaces before the newline are kept.
#[derive(Debug, Clone)]
pub struct CommentLine {
    pub text: String,
    pub span: Span,
}

impl CommentLine {
    /// A blank comment is at most two characters of text (`#` or `# `).
    pub fn is_blank(&self) -> bool {
        self.text.chars().count() <= 2
    }

    /// `# TODO: ...` and friends.
    pub fn is_annotation(&self) -> bool {
        RE_ANNOTATION.is_match(&self.text)
    }

    /// Shebang or Ruby magic comment.
    pub fn is_interpreter_directive(&self) -> bool {
        self.text.starts_with("#!") || RE_MAGIC.is_match(&self.text)
    }

    /// In-source disable/enable instructions aimed at lint tools.
    pub fn is_lint_directive(&self) -> bool {
        RE_LINT_DIRECTIVE.is_match(&self.text)
    }

    /// A line that carries actual documentation, as opposed to a blank
    /// separator, an annotation keyword, or a tool directive.
    pub fn is_documentation(&self) -> bool {
        !self.is_blank()
            && !self.is_annotation()
            && !self.is_interpreter_directive()
            && !self.is_lint_directive()
    }
}

/// The ordered comment lines directly above a declaration, topmost first.
/// Empty when no comment is adjacent to the declaration.
#[derive(Debug, Clone, Default)]
pub struct DocBlock {
    pub lines: Vec<CommentLine>,
}

impl DocBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, i: usize) -> Option<&CommentLine> {
        self.lines.get(i)
    }

    pub fn first(&self) -> Option<&CommentLine> {
        self.lines.first()
    }

    pub fn last(&self) -> Option<&CommentLine> {
        self.lines.last()
    }
}

/// A declaration the linter attaches documentation rules to.
#[derive(Debug, Clone)]
pub enum Declaration {
    Class(ClassDecl),
    Method(MethodDecl),
}

/// A `class` or `module` declaration. The span covers the trimmed
/// declaration line.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub span: Span,
    pub is_module: bool,
}

/// A public `def` declaration. The span covers `def` through the method
/// name; arguments carry their own spans.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub span: Span,
    pub args: Vec<Argument>,
}

#[derive(Debug, Clone)]
pub struct Argument {
    pub name: String,
    pub span: Span,
}

impl Argument {
    /// Name as documentation should spell it. A leading underscore marks
    /// an intentionally unused argument and is not documented.
    pub fn doc_name(&self) -> &str {
        self.name.strip_prefix('_').unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(text: &str) -> CommentLine {
        CommentLine {
            text: text.to_string(),
            span: Span { line: 1, col: 1, len: text.chars().count() },
        }
    }

    #[test]
    fn blank_comment_is_two_chars_or_less() {
        assert!(comment("#").is_blank());
        assert!(comment("# ").is_blank());
        // Any two-character comment counts as blank, odd as that looks.
        assert!(comment("#x").is_blank());
        assert!(!comment("#  ").is_blank());
        assert!(!comment("# x").is_blank());
    }

    #[test]
    fn annotation_keywords() {
        assert!(comment("# TODO: fix").is_annotation());
        assert!(comment("# fixme later").is_annotation());
        assert!(comment("#HACK").is_annotation());
        assert!(!comment("# TODOLIST").is_annotation());
        assert!(!comment("# notes from review").is_annotation());
    }

    #[test]
    fn interpreter_directives() {
        assert!(comment("#!/usr/bin/env ruby").is_interpreter_directive());
        assert!(comment("# frozen_string_literal: true").is_interpreter_directive());
        assert!(comment("# encoding: utf-8").is_interpreter_directive());
        assert!(!comment("# frozen pipes").is_interpreter_directive());
    }

    #[test]
    fn lint_directives() {
        assert!(comment("# rubocop:disable Style/For").is_lint_directive());
        assert!(comment("# pubdoc:disable method-doc").is_lint_directive());
        assert!(!comment("# rubocop is a gem").is_lint_directive());
    }

    #[test]
    fn documentation_excludes_special_lines() {
        assert!(comment("# checks the invoice total").is_documentation());
        assert!(!comment("#").is_documentation());
        assert!(!comment("# TODO: write docs").is_documentation());
        assert!(!comment("# frozen_string_literal: true").is_documentation());
    }

    #[test]
    fn doc_name_strips_one_underscore() {
        let arg = Argument {
            name: "_unused".to_string(),
            span: Span { line: 1, col: 1, len: 7 },
        };
        assert_eq!(arg.doc_name(), "unused");
        let arg = Argument {
            name: "__very".to_string(),
            span: Span { line: 1, col: 1, len: 6 },
        };
        assert_eq!(arg.doc_name(), "_very");
    }
}
