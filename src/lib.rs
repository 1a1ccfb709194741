//! pubdoc — documentation comment linter for Ruby source.
//!
//! Pairs `class`, `module`, and public `def` declarations with the
//! comment block directly above them, segments each block into
//! description, parameter, attribute, and return sections, and reports
//! structural problems: wrong section order, sloppy markers, missing
//! blank separators, malformed entries, and documented parameters that
//! disagree with the real argument list.
//!
//! The library surface is `check::check_source` for one source text and
//! the `report` module for turning diagnostics into human or JSON
//! output; the binary wires both to files, globs, and stdin.

pub mod check;
pub mod diagnostic;
pub mod grammar;
pub mod model;
pub mod report;
pub mod scanner;
pub mod sections;

pub use check::check_source;
pub use diagnostic::{DiagKind, Diagnostic};
pub use model::{Argument, ClassDecl, CommentLine, Declaration, DocBlock, MethodDecl, Span};
pub use report::{create_reporter, FileReport, Reporter};
