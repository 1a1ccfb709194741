//! Diagnostics — typed findings with human message formatting.

use crate::grammar::SectionKind;
use crate::model::Span;

/// One finding, anchored at a source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub span: Span,
    pub kind: DiagKind,
}

impl Diagnostic {
    pub fn new(span: Span, kind: DiagKind) -> Self {
        Diagnostic { span, kind }
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }

    pub fn check(&self) -> &'static str {
        self.kind.check()
    }
}

/// Everything the linter can complain about. Payloads hold the values
/// substituted into the message.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagKind {
    // -- method documentation --
    MissingDocumentation { name: String },
    MissingDescription { name: String },
    DescriptionShouldBeFirst,
    ReturnsShouldBeLast,
    ParametersBeforeReturns,
    AttributesParametersConflict,
    MarkerMismatch { section: SectionKind },
    InvalidContent,
    DescriptionStartsWithBlank,
    DescriptionEndsWithoutBlank,
    MissingLeadingBlank { section: SectionKind },
    MissingTrailingBlank { section: SectionKind },
    IllegalEntry { section: SectionKind },
    IllegalSubEntry { section: SectionKind },
    EmptyBody { section: SectionKind },
    MissingParameters { name: String },
    UnnecessaryParameters { name: String },
    ArgSizeMismatch { documented: usize, actual: usize },
    ArgNameMismatch { documented: String, actual: String },
    // -- class documentation --
    MissingClassDocumentation,
    ClassDocEndsWithoutBlank,
}

impl DiagKind {
    /// Reporting-level grouping, also the `--only` filter names.
    pub fn check(&self) -> &'static str {
        match self {
            DiagKind::MissingClassDocumentation | DiagKind::ClassDocEndsWithoutBlank => "class-doc",
            _ => "method-doc",
        }
    }

    /// Stable machine-readable name for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            DiagKind::MissingDocumentation { .. } => "missing-documentation",
            DiagKind::MissingDescription { .. } => "missing-description",
            DiagKind::DescriptionShouldBeFirst => "description-should-be-first",
            DiagKind::ReturnsShouldBeLast => "returns-should-be-last",
            DiagKind::ParametersBeforeReturns => "parameters-before-returns",
            DiagKind::AttributesParametersConflict => "attributes-parameters-conflict",
            DiagKind::MarkerMismatch { .. } => "marker-mismatch",
            DiagKind::InvalidContent => "invalid-content",
            DiagKind::DescriptionStartsWithBlank => "description-starts-with-blank",
            DiagKind::DescriptionEndsWithoutBlank => "description-ends-without-blank",
            DiagKind::MissingLeadingBlank { .. } => "missing-leading-blank",
            DiagKind::MissingTrailingBlank { .. } => "missing-trailing-blank",
            DiagKind::IllegalEntry { .. } => "illegal-entry",
            DiagKind::IllegalSubEntry { .. } => "illegal-sub-entry",
            DiagKind::EmptyBody { .. } => "empty-body",
            DiagKind::MissingParameters { .. } => "missing-parameters",
            DiagKind::UnnecessaryParameters { .. } => "unnecessary-parameters",
            DiagKind::ArgSizeMismatch { .. } => "arg-size-mismatch",
            DiagKind::ArgNameMismatch { .. } => "arg-name-mismatch",
            DiagKind::MissingClassDocumentation => "missing-class-documentation",
            DiagKind::ClassDocEndsWithoutBlank => "class-doc-ends-without-blank",
        }
    }

    pub fn message(&self) -> String {
        match self {
            DiagKind::MissingDocumentation { name } => {
                format!("Missing public method documentation comment for `{name}`.")
            }
            DiagKind::MissingDescription { name } => {
                format!("Missing description comment for `{name}`.")
            }
            DiagKind::DescriptionShouldBeFirst => "Description should be first.".to_string(),
            DiagKind::ReturnsShouldBeLast => "Returns should be last.".to_string(),
            DiagKind::ParametersBeforeReturns => {
                "Parameters should be before Returns.".to_string()
            }
            DiagKind::AttributesParametersConflict => {
                "Attributes and Parameters should not exist on same method.".to_string()
            }
            DiagKind::MarkerMismatch { section } => format!(
                "{} does not match `{}`.",
                section.name(),
                section.canonical_marker().unwrap_or_default()
            ),
            DiagKind::InvalidContent => {
                "Documentation consists only of annotation or directive comments.".to_string()
            }
            DiagKind::DescriptionStartsWithBlank => {
                "Description should not begin with blank comment.".to_string()
            }
            DiagKind::DescriptionEndsWithoutBlank => {
                "Description should end with blank comment.".to_string()
            }
            DiagKind::MissingLeadingBlank { section } => {
                format!("{} is missing first blank comment.", section.name())
            }
            DiagKind::MissingTrailingBlank { section } => {
                format!("{} should end with blank comment.", section.name())
            }
            DiagKind::IllegalEntry { section } => match section {
                SectionKind::Returns => format!(
                    "Illegal {} format: '# * <tt>{{CLASS}}</tt> {{description}}'.",
                    section.label()
                ),
                _ => format!(
                    "Illegal {} format: '# * <tt>:{{argument}}</tt> {{description}}'.",
                    section.label()
                ),
            },
            DiagKind::IllegalSubEntry { section } => {
                format!("Illegal {} sub-format: '# ** {{description}}'.", section.label())
            }
            DiagKind::EmptyBody { section } => format!("{} body is empty.", section.label()),
            DiagKind::MissingParameters { name } => {
                format!("Parameter is missing for `{name}`.")
            }
            DiagKind::UnnecessaryParameters { name } => {
                format!("Parameter is unnecessary for `{name}`.")
            }
            DiagKind::ArgSizeMismatch { documented, actual } => format!(
                "Parameter size `{documented}` does not match argument size `{actual}`."
            ),
            DiagKind::ArgNameMismatch { documented, actual } => format!(
                "Parameter name `{documented}` does not match argument name `{actual}`."
            ),
            DiagKind::MissingClassDocumentation => "Missing class documentation".to_string(),
            DiagKind::ClassDocEndsWithoutBlank => {
                "Class documentation should end with an empty line".to_string()
            }
        }
    }
}
