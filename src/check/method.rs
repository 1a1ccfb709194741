//! Method documentation checks.
//!
//! The comment block above a public method is segmented into
//! description, parameter, attribute, and return sections, then
//! validated for ordering, marker spelling, blank-comment placement,
//! body format, and agreement with the method's real argument list.
//! Apart from a wholly missing block, no finding suppresses the later
//! checks.

use crate::diagnostic::{DiagKind, Diagnostic};
use crate::grammar;
use crate::model::{CommentLine, DocBlock, MethodDecl, Span};
use crate::sections::{self, Section, Sections};

/// Validate the documentation block above a public method declaration.
pub fn check_method(decl: &MethodDecl, block: &DocBlock) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    let Some(first) = block.first() else {
        diags.push(Diagnostic::new(
            decl.span,
            DiagKind::MissingDocumentation { name: decl.name.clone() },
        ));
        return diags;
    };

    let sections = sections::segment(block);
    let desc = &sections.description;
    let parms = &sections.parameters;
    let attrs = &sections.attributes;
    let returns = &sections.returns;

    if desc.missing() {
        diags.push(Diagnostic::new(
            first.span,
            DiagKind::MissingDescription { name: decl.name.clone() },
        ));
    }

    // Section order: description, then parameters or attributes, then
    // returns.
    let desc_anchor = anchor(desc, block, first);
    if !(desc.before(parms) && desc.before(returns) && desc.before(attrs)) {
        diags.push(Diagnostic::new(desc_anchor, DiagKind::DescriptionShouldBeFirst));
    }
    let parms_before_returns = parms.before(returns);
    if !(parms_before_returns && attrs.before(returns)) {
        diags.push(Diagnostic::new(desc_anchor, DiagKind::ReturnsShouldBeLast));
    }
    if !parms_before_returns {
        if let Some(marker) = parms.start_line(block) {
            diags.push(Diagnostic::new(marker.span, DiagKind::ParametersBeforeReturns));
        }
    }

    if !parms.missing() && !attrs.missing() {
        if let Some(marker) = attrs.start_line(block) {
            diags.push(Diagnostic::new(marker.span, DiagKind::AttributesParametersConflict));
        }
    }

    for section in [parms, attrs, returns] {
        check_marker(section, block, &mut diags);
    }

    if !block.lines.iter().any(CommentLine::is_documentation) {
        diags.push(Diagnostic::new(first.span, DiagKind::InvalidContent));
    }

    check_blank_comments(&sections, block, &mut diags);

    for section in [parms, attrs, returns] {
        if !section.missing() {
            check_body(section, block, &mut diags);
        }
    }

    check_arguments(decl, parms, block, first, &mut diags);

    diags
}

/// Anchor for the ordering diagnostics: the description's first line, or
/// the block's first line when the description never opened.
fn anchor(section: &Section, block: &DocBlock, first: &CommentLine) -> Span {
    section.start_line(block).map(|l| l.span).unwrap_or(first.span)
}

fn check_marker(section: &Section, block: &DocBlock, diags: &mut Vec<Diagnostic>) {
    let Some(marker) = section.start_line(block) else { return };
    let Some(canonical) = section.kind.canonical_marker() else { return };
    if marker.text != canonical {
        diags.push(Diagnostic::new(
            marker.span,
            DiagKind::MarkerMismatch { section: section.kind },
        ));
    }
}

fn check_blank_comments(sections: &Sections, block: &DocBlock, diags: &mut Vec<Diagnostic>) {
    let desc = &sections.description;
    if let Some(start) = desc.start_line(block) {
        if start.is_blank() {
            diags.push(Diagnostic::new(start.span, DiagKind::DescriptionStartsWithBlank));
        }
        if let Some(end) = desc.end_line(block) {
            if !end.is_blank() {
                diags.push(Diagnostic::new(end.span, DiagKind::DescriptionEndsWithoutBlank));
            }
        }
    }

    for section in [&sections.parameters, &sections.attributes, &sections.returns] {
        let Some(marker) = section.start_line(block) else { continue };
        if !section.leading_blank(block) {
            diags.push(Diagnostic::new(
                marker.span,
                DiagKind::MissingLeadingBlank { section: section.kind },
            ));
        }
        if !section.trailing_blank(block) {
            let span = section.end_line(block).map(|l| l.span).unwrap_or(marker.span);
            diags.push(Diagnostic::new(
                span,
                DiagKind::MissingTrailingBlank { section: section.kind },
            ));
        }
    }
}

/// Validate one section's body lines against the entry grammar. Only a
/// well-formed primary entry makes the body non-empty; sub-entries are
/// legal continuations but document nothing on their own.
fn check_body(section: &Section, block: &DocBlock, diags: &mut Vec<Diagnostic>) {
    let Some(marker) = section.start_line(block) else { return };
    let mut found = false;
    for line in section.body(block) {
        if line.is_blank() {
            continue;
        }
        if grammar::is_entry(section.kind, &line.text) {
            found = true;
            continue;
        }
        if grammar::is_sub_entry(&line.text) {
            continue;
        }
        let kind = if line.text.starts_with(grammar::SUB_PREFIX) {
            DiagKind::IllegalSubEntry { section: section.kind }
        } else {
            DiagKind::IllegalEntry { section: section.kind }
        };
        diags.push(Diagnostic::new(line.span, kind));
    }
    if !found {
        diags.push(Diagnostic::new(
            marker.span,
            DiagKind::EmptyBody { section: section.kind },
        ));
    }
}

/// Reconcile documented parameters with the declared argument list.
/// Purely positional: entry i is compared against argument i.
fn check_arguments(
    decl: &MethodDecl,
    parms: &Section,
    block: &DocBlock,
    first: &CommentLine,
    diags: &mut Vec<Diagnostic>,
) {
    let args = &decl.args;
    if parms.missing() {
        if !args.is_empty() {
            diags.push(Diagnostic::new(
                first.span,
                DiagKind::MissingParameters { name: decl.name.clone() },
            ));
        }
        return;
    }
    if args.is_empty() {
        if let Some(marker) = parms.start_line(block) {
            diags.push(Diagnostic::new(
                marker.span,
                DiagKind::UnnecessaryParameters { name: decl.name.clone() },
            ));
        }
        return;
    }

    let documented = parms.param_entries(block);
    if documented.len() > args.len() {
        diags.push(Diagnostic::new(
            documented[args.len()].0.span,
            DiagKind::ArgSizeMismatch { documented: documented.len(), actual: args.len() },
        ));
    }
    if args.len() > documented.len() {
        diags.push(Diagnostic::new(
            args[documented.len()].span,
            DiagKind::ArgSizeMismatch { documented: documented.len(), actual: args.len() },
        ));
    }

    for ((line, doc_name), arg) in documented.iter().zip(args) {
        if doc_name != arg.doc_name() {
            diags.push(Diagnostic::new(
                line.span,
                DiagKind::ArgNameMismatch {
                    documented: doc_name.clone(),
                    actual: arg.doc_name().to_string(),
                },
            ));
        }
    }
}
