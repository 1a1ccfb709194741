//! Comment block segmentation — one pass, one open section at a time.

use crate::grammar::{self, SectionKind};
use crate::model::{CommentLine, DocBlock};

/// One documentation section within a comment block. `start` is `None`
/// when the section never opened; `end` is only meaningful alongside a
/// `start`, and then `start <= end` holds.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub kind: SectionKind,
    pub start: Option<usize>,
    pub end: usize,
}

impl Section {
    fn new(kind: SectionKind) -> Self {
        Section { kind, start: None, end: 0 }
    }

    pub fn missing(&self) -> bool {
        self.start.is_none()
    }

    /// Ordering between sections. Vacuously true when either is missing.
    pub fn before(&self, other: &Section) -> bool {
        match (self.start, other.start) {
            (Some(a), Some(b)) => a < b,
            _ => true,
        }
    }

    pub fn start_line<'a>(&self, block: &'a DocBlock) -> Option<&'a CommentLine> {
        self.start.and_then(|i| block.get(i))
    }

    pub fn end_line<'a>(&self, block: &'a DocBlock) -> Option<&'a CommentLine> {
        self.start?;
        block.get(self.end)
    }

    /// Whether the line directly after the marker is a blank comment.
    /// Missing sections pass; a marker with no line after it does not.
    pub fn leading_blank(&self, block: &DocBlock) -> bool {
        match self.start {
            None => true,
            Some(i) => block.get(i + 1).map(CommentLine::is_blank).unwrap_or(false),
        }
    }

    /// Whether the section's last line is a blank comment. Missing
    /// sections pass.
    pub fn trailing_blank(&self, block: &DocBlock) -> bool {
        match self.start {
            None => true,
            Some(_) => block.get(self.end).map(CommentLine::is_blank).unwrap_or(false),
        }
    }

    /// Body lines between the marker plus its blank separator and the
    /// trailing blank. Empty when the section is missing or holds
    /// nothing but delimiters.
    pub fn body<'a>(&self, block: &'a DocBlock) -> &'a [CommentLine] {
        let Some(start) = self.start else { return &[] };
        let from = start + if self.leading_blank(block) { 2 } else { 1 };
        let to = self.end + if self.trailing_blank(block) { 0 } else { 1 };
        if from >= to || to > block.len() {
            return &[];
        }
        &block.lines[from..to]
    }

    /// Documented parameter entries in body order: each line matching
    /// the parameter pattern, with its extracted name.
    pub fn param_entries<'a>(&self, block: &'a DocBlock) -> Vec<(&'a CommentLine, String)> {
        self.body(block)
            .iter()
            .filter_map(|line| {
                grammar::entry_name(SectionKind::Parameters, &line.text).map(|name| (line, name))
            })
            .collect()
    }
}

/// The four sections of a segmented comment block.
#[derive(Debug)]
pub struct Sections {
    pub description: Section,
    pub parameters: Section,
    pub attributes: Section,
    pub returns: Section,
}

impl Sections {
    fn new() -> Self {
        Sections {
            description: Section::new(SectionKind::Description),
            parameters: Section::new(SectionKind::Parameters),
            attributes: Section::new(SectionKind::Attributes),
            returns: Section::new(SectionKind::Returns),
        }
    }

    fn get_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::Description => &mut self.description,
            SectionKind::Parameters => &mut self.parameters,
            SectionKind::Attributes => &mut self.attributes,
            SectionKind::Returns => &mut self.returns,
        }
    }
}

/// Split a comment block into sections. A marker line closes the open
/// section at the previous index and opens its own kind; a first line
/// that is no marker opens the description. A repeated marker re-opens
/// its section at the new position and the earlier range is forgotten.
pub fn segment(block: &DocBlock) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<SectionKind> = None;
    let last = block.len().saturating_sub(1);

    for (i, line) in block.lines.iter().enumerate() {
        let opened = if grammar::is_marker(SectionKind::Returns, &line.text) {
            Some(SectionKind::Returns)
        } else if grammar::is_marker(SectionKind::Parameters, &line.text) {
            Some(SectionKind::Parameters)
        } else if grammar::is_marker(SectionKind::Attributes, &line.text) {
            Some(SectionKind::Attributes)
        } else if i == 0 {
            Some(SectionKind::Description)
        } else {
            None
        };

        if let Some(kind) = opened {
            // `current` is only set from index 0 onward, so i >= 1 here.
            if let Some(open) = current {
                sections.get_mut(open).end = i - 1;
            }
            sections.get_mut(kind).start = Some(i);
            current = Some(kind);
        }
        if let Some(open) = current {
            sections.get_mut(open).end = last;
        }
    }

    sections
}
