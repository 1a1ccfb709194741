//! Ruby source scanner — line-by-line state machine.
//!
//! Pairs every class, module, and public method declaration with the
//! comment block directly above it. This is not a Ruby parser: it reads
//! exactly as much as the documentation checks need — declarations,
//! argument lists, and the visibility modifiers that decide which
//! methods count as public.

use crate::model::{Argument, ClassDecl, CommentLine, Declaration, DocBlock, MethodDecl, Span};
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*$").unwrap());

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*#").unwrap());

static RE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(class|module)[ \t]+([A-Z]\w*(?:::[A-Z]\w*)*)").unwrap());

// Optional inline visibility, then `def`, optional `self.` receiver,
// then the method name (setters and predicates included).
static RE_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[ \t]*(?:(private|protected|public)[ \t]+)?(def[ \t]+(?:self\.)?([A-Za-z_]\w*[?!=]?))",
    )
    .unwrap()
});

// Bare modifier line switching the visibility of everything below it.
static RE_VISIBILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(private|protected|public)[ \t]*$").unwrap());

// -- Scanner state ------------------------------------------------------------

/// A declaration paired with the comment block directly above it.
#[derive(Debug, Clone)]
pub struct ScannedDecl {
    pub declaration: Declaration,
    pub comments: DocBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

#[derive(Default)]
struct ScannerState {
    decls: Vec<ScannedDecl>,
    comments: Vec<CommentLine>,
    visibility: Visibility,
}

// -- Public API ---------------------------------------------------------------

/// Scan Ruby source and pair each checkable declaration with its comment
/// block. Blank lines and plain code break a block; private and
/// protected methods are skipped entirely.
pub fn scan(source: &str) -> Vec<ScannedDecl> {
    let mut s = ScannerState::default();
    for (i, line) in source.lines().enumerate() {
        process_line(&mut s, line, i + 1);
    }
    s.decls
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ScannerState, line: &str, line_no: usize) {
    if RE_BLANK.is_match(line) {
        s.comments.clear();
        return;
    }

    if RE_COMMENT.is_match(line) {
        s.comments.push(comment_line(line, line_no));
        return;
    }

    if let Some(caps) = RE_VISIBILITY.captures(line) {
        s.visibility = visibility(&caps[1]);
        s.comments.clear();
        return;
    }

    if let Some(caps) = RE_CLASS.captures(line) {
        let comments = DocBlock { lines: std::mem::take(&mut s.comments) };
        // a new class or module body starts out public
        s.visibility = Visibility::Public;
        s.decls.push(ScannedDecl {
            declaration: Declaration::Class(class_decl(line, line_no, &caps)),
            comments,
        });
        return;
    }

    if let Some(caps) = RE_DEF.captures(line) {
        let comments = DocBlock { lines: std::mem::take(&mut s.comments) };
        let effective = match caps.get(1) {
            Some(m) => visibility(m.as_str()),
            None => s.visibility,
        };
        if effective != Visibility::Public {
            return;
        }
        s.decls.push(ScannedDecl {
            declaration: Declaration::Method(method_decl(line, line_no, &caps)),
            comments,
        });
        return;
    }

    // Any other code line breaks comment adjacency.
    s.comments.clear();
}

// -- Helper functions ---------------------------------------------------------

fn visibility(word: &str) -> Visibility {
    match word {
        "private" => Visibility::Private,
        "protected" => Visibility::Protected,
        _ => Visibility::Public,
    }
}

fn comment_line(line: &str, line_no: usize) -> CommentLine {
    let hash = line.find('#').unwrap_or(0);
    let text = line[hash..].to_string();
    let len = text.chars().count();
    CommentLine {
        text,
        span: Span { line: line_no, col: char_col(line, hash), len },
    }
}

fn class_decl(line: &str, line_no: usize, caps: &regex::Captures) -> ClassDecl {
    let start = line.len() - line.trim_start().len();
    let text = line.trim();
    ClassDecl {
        name: caps[2].to_string(),
        span: Span {
            line: line_no,
            col: char_col(line, start),
            len: text.chars().count(),
        },
        is_module: &caps[1] == "module",
    }
}

fn method_decl(line: &str, line_no: usize, caps: &regex::Captures) -> MethodDecl {
    // group 2 spans `def` through the method name
    let decl = caps.get(2).unwrap();
    MethodDecl {
        name: caps[3].to_string(),
        span: Span {
            line: line_no,
            col: char_col(line, decl.start()),
            len: decl.as_str().chars().count(),
        },
        args: parse_args(line, decl.end(), line_no),
    }
}

/// Extract the argument list that follows a method name, with or without
/// parentheses. Defaults, sigils, and keyword colons are stripped down
/// to the bare name; each argument keeps the span of that name.
fn parse_args(line: &str, after: usize, line_no: usize) -> Vec<Argument> {
    let rest = &line[after..];
    let offset = after + (rest.len() - rest.trim_start().len());
    let rest = rest.trim_start();

    let (list, list_start) = if let Some(inner) = rest.strip_prefix('(') {
        (&inner[..closing_paren(inner)], offset + 1)
    } else if rest.is_empty() || rest.starts_with('#') {
        return Vec::new();
    } else {
        (before_comment(rest), offset)
    };

    split_args(list)
        .into_iter()
        .filter_map(|(at, piece)| argument(line, list_start + at, piece, line_no))
        .collect()
}

/// Byte index of the closing parenthesis matching an already-consumed
/// opening one, or the end of the string when unbalanced.
fn closing_paren(s: &str) -> usize {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' | '{' => depth += 1,
                ')' if depth == 0 => return i,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                _ => {}
            },
        }
    }
    s.len()
}

/// Parenless argument lists run to the end of the line, or to an
/// end-of-line comment.
fn before_comment(s: &str) -> &str {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                '#' if depth == 0 => return &s[..i],
                _ => {}
            },
        }
    }
    s
}

/// Split an argument list at top-level commas, respecting brackets and
/// quotes. Yields each piece with its byte offset in the list.
fn split_args(list: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0usize;
    for (i, c) in list.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    pieces.push((start, &list[start..i]));
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    pieces.push((start, &list[start..]));
    pieces
}

fn argument(line: &str, piece_start: usize, piece: &str, line_no: usize) -> Option<Argument> {
    let mut idx = piece.len() - piece.trim_start().len();
    // splat, double-splat, and block sigils
    while piece[idx..].starts_with('*') || piece[idx..].starts_with('&') {
        idx += 1;
    }
    let tail = &piece[idx..];
    let name_len = tail
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(tail.len());
    let name = &tail[..name_len];
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') {
        // anonymous `*`, `**`, `&`, or junk
        return None;
    }
    let at = piece_start + idx;
    Some(Argument {
        name: name.to_string(),
        span: Span { line: line_no, col: char_col(line, at), len: name.chars().count() },
    })
}

/// 1-based character column for a byte offset within a line.
fn char_col(line: &str, byte_idx: usize) -> usize {
    line[..byte_idx].chars().count() + 1
}
