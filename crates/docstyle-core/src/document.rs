//! Document normalization.
//!
//! Converts raw XML/HTML/plain-text input into a line-indexed
//! representation without ever failing. A structured pass streams
//! quick-xml events to recover headings, preformatted regions, and
//! callouts; if the markup is unparseable the document silently degrades
//! to plain-text treatment. Line numbers always refer to the original
//! input.

use tracing::debug;

/// Purpose of a callout/admonition region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    /// Informational callout.
    Info,
    /// Note callout.
    Note,
    /// Tip callout.
    Tip,
    /// Warning callout.
    Warning,
    /// Caution callout.
    Caution,
}

impl CalloutKind {
    fn from_macro_name(name: &str) -> Option<Self> {
        match name {
            "info" => Some(Self::Info),
            "note" => Some(Self::Note),
            "tip" => Some(Self::Tip),
            "warning" => Some(Self::Warning),
            "caution" => Some(Self::Caution),
            _ => None,
        }
    }
}

/// Structural context of a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineContext {
    /// Heading depth (1-6) when the line is part of a heading.
    pub heading: Option<u8>,
    /// Whether the line is inside a preformatted/code region.
    pub preformatted: bool,
    /// Enclosing callout region, if any.
    pub callout: Option<CalloutKind>,
    /// Whether the line consists of markup only (no prose).
    pub markup_only: bool,
}

/// One logical line of the normalized document.
#[derive(Debug, Clone)]
pub struct Line {
    /// 1-based line number in the original input.
    pub number: usize,
    /// Raw line text, exactly as authored.
    pub raw: String,
    /// Markup-stripped text with basic entities decoded.
    pub prose: String,
    /// Structural context at this line.
    pub context: LineContext,
}

impl Line {
    /// Returns the heading text when this line is a heading.
    #[must_use]
    pub fn heading_text(&self) -> Option<String> {
        self.context.heading?;
        let text = self.prose.trim().trim_start_matches('#').trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Whether prose rules should inspect this line.
    ///
    /// Markup-only lines, blank lines, and preformatted regions are exempt.
    #[must_use]
    pub fn is_checkable_prose(&self) -> bool {
        !self.context.markup_only
            && !self.context.preformatted
            && !self.prose.trim().is_empty()
    }
}

/// A line-indexed document with structural context.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
    degraded: bool,
    has_toc: bool,
    callouts: Vec<CalloutKind>,
    source: Option<std::path::PathBuf>,
}

impl Document {
    /// Normalizes raw content. Never fails: unparseable markup degrades to
    /// plain-text line analysis.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw_lines: Vec<&str> = raw.split('\n').collect();
        let line_count = raw_lines.len();

        let structured = structured_pass(raw, line_count);
        let degraded = structured.is_none();
        if degraded {
            debug!("structured markup pass failed, using plain-text treatment");
        }
        let StructuredInfo {
            regions,
            mut has_toc,
            mut callouts,
        } = structured.unwrap_or_default();

        let mut lines: Vec<Line> = raw_lines
            .iter()
            .enumerate()
            .map(|(i, raw_line)| {
                let prose = strip_markup(raw_line);
                let trimmed = raw_line.trim();
                let markup_only = trimmed.starts_with('<')
                    && trimmed.ends_with('>')
                    && prose.trim().is_empty();
                Line {
                    number: i + 1,
                    raw: (*raw_line).to_string(),
                    prose,
                    context: LineContext {
                        markup_only,
                        ..LineContext::default()
                    },
                }
            })
            .collect();

        for region in &regions {
            for line in &mut lines[region.start_line - 1..region.end_line.min(line_count)] {
                match region.kind {
                    RegionKind::Heading(depth) => line.context.heading = Some(depth),
                    RegionKind::Preformatted => line.context.preformatted = true,
                    RegionKind::Callout(kind) => line.context.callout = Some(kind),
                }
            }
        }

        // Plain-text enrichment applies on both paths: Markdown headings,
        // fenced code regions, and a literal table-of-contents marker.
        let mut in_fence = false;
        for line in &mut lines {
            let trimmed = line.raw.trim();
            if trimmed.starts_with("```") {
                line.context.preformatted = true;
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                line.context.preformatted = true;
                continue;
            }
            if line.context.heading.is_none() && !line.context.preformatted {
                if let Some(depth) = markdown_heading_depth(trimmed) {
                    line.context.heading = Some(depth);
                }
            }
            if line.raw.to_lowercase().contains("table of contents") {
                has_toc = true;
            }
        }

        // Plain-text fallback for callout counting: a "warning:" lead-in
        // outside preformatted regions counts as a warning callout.
        if callouts.is_empty() {
            for line in &lines {
                if !line.context.preformatted
                    && line.prose.trim().to_lowercase().starts_with("warning:")
                {
                    callouts.push(CalloutKind::Warning);
                }
            }
        }

        Self {
            lines,
            degraded,
            has_toc,
            callouts,
            source: None,
        }
    }

    /// Attaches the source file name, for rules that validate it.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Returns the source file, when the content came from one.
    #[must_use]
    pub fn source(&self) -> Option<&std::path::Path> {
        self.source.as_deref()
    }

    /// Returns the normalized lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines in the original input.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the structured markup pass failed.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Whether a table-of-contents marker was found.
    #[must_use]
    pub fn has_toc(&self) -> bool {
        self.has_toc
    }

    /// Callout regions in document order.
    #[must_use]
    pub fn callouts(&self) -> &[CalloutKind] {
        &self.callouts
    }

    /// Iterates over heading lines.
    pub fn headings(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.context.heading.is_some())
    }

    /// Iterates over lines prose rules should inspect.
    pub fn prose_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_checkable_prose())
    }
}

#[derive(Debug, Clone, Copy)]
enum RegionKind {
    Heading(u8),
    Preformatted,
    Callout(CalloutKind),
}

#[derive(Debug, Clone, Copy)]
struct Region {
    kind: RegionKind,
    start_line: usize,
    end_line: usize,
}

#[derive(Debug, Default)]
struct StructuredInfo {
    regions: Vec<Region>,
    has_toc: bool,
    callouts: Vec<CalloutKind>,
}

/// What a `structured-macro` element contributes, tracked through its stack.
#[derive(Debug, Clone, Copy)]
enum MacroKind {
    Preformatted,
    Callout(CalloutKind),
    Other,
}

/// Streams quick-xml events over the raw input, building structural
/// regions. Returns `None` when the reader reports an error the tolerant
/// configuration cannot absorb; the caller then falls back to plain text.
fn structured_pass(raw: &str, line_count: usize) -> Option<StructuredInfo> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(raw);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut info = StructuredInfo::default();
    let mut heading_stack: Vec<(u8, usize)> = Vec::new();
    let mut pre_stack: Vec<usize> = Vec::new();
    let mut macro_stack: Vec<(MacroKind, usize)> = Vec::new();

    // Incremental line tracking: `line` is the 1-based line at `scan_pos`.
    let bytes = raw.as_bytes();
    let mut scan_pos = 0usize;
    let mut line = 1usize;
    let mut advance = move |to: usize| -> usize {
        let to = to.min(bytes.len());
        if to > scan_pos {
            line += bytes[scan_pos..to].iter().filter(|&&b| b == b'\n').count();
            scan_pos = to;
        }
        line
    };

    loop {
        let pos_before = usize::try_from(reader.buffer_position()).unwrap_or(raw.len());
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                debug!("markup parse degradation: {err}");
                return None;
            }
        };
        let start_line = advance(pos_before);
        let end_line = advance(usize::try_from(reader.buffer_position()).unwrap_or(raw.len()));

        match event {
            Event::Start(e) => {
                let name = local_name(e.local_name().as_ref());
                if let Some(depth) = heading_depth(&name) {
                    heading_stack.push((depth, start_line));
                } else if name == "pre" || name == "code" {
                    pre_stack.push(start_line);
                } else if name == "structured-macro" {
                    let kind = macro_kind(&e, &mut info);
                    macro_stack.push((kind, start_line));
                }
            }
            Event::Empty(e) => {
                let name = local_name(e.local_name().as_ref());
                if name == "structured-macro" {
                    // Self-closing macros contribute no region, but a toc
                    // macro still marks the document.
                    let _ = macro_kind(&e, &mut info);
                }
            }
            Event::End(e) => {
                let name = local_name(e.local_name().as_ref());
                if heading_depth(&name).is_some() {
                    if let Some((depth, start)) = heading_stack.pop() {
                        info.regions.push(Region {
                            kind: RegionKind::Heading(depth),
                            start_line: start,
                            end_line,
                        });
                    }
                } else if name == "pre" || name == "code" {
                    if let Some(start) = pre_stack.pop() {
                        info.regions.push(Region {
                            kind: RegionKind::Preformatted,
                            start_line: start,
                            end_line,
                        });
                    }
                } else if name == "structured-macro" {
                    if let Some((kind, start)) = macro_stack.pop() {
                        push_macro_region(&mut info, kind, start, end_line);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    // Unbalanced input: close whatever is still open at the last line.
    for (depth, start) in heading_stack {
        info.regions.push(Region {
            kind: RegionKind::Heading(depth),
            start_line: start,
            end_line: line_count,
        });
    }
    for start in pre_stack {
        info.regions.push(Region {
            kind: RegionKind::Preformatted,
            start_line: start,
            end_line: line_count,
        });
    }
    for (kind, start) in macro_stack {
        push_macro_region(&mut info, kind, start, line_count);
    }

    Some(info)
}

fn push_macro_region(info: &mut StructuredInfo, kind: MacroKind, start: usize, end: usize) {
    match kind {
        MacroKind::Preformatted => info.regions.push(Region {
            kind: RegionKind::Preformatted,
            start_line: start,
            end_line: end,
        }),
        MacroKind::Callout(c) => {
            info.callouts.push(c);
            info.regions.push(Region {
                kind: RegionKind::Callout(c),
                start_line: start,
                end_line: end,
            });
        }
        MacroKind::Other => {}
    }
}

/// Classifies a Confluence `structured-macro` by its `ac:name` attribute.
fn macro_kind(e: &quick_xml::events::BytesStart<'_>, info: &mut StructuredInfo) -> MacroKind {
    let name = e
        .try_get_attribute("ac:name")
        .ok()
        .flatten()
        .or_else(|| e.try_get_attribute("name").ok().flatten())
        .map(|attr| String::from_utf8_lossy(&attr.value).to_lowercase());

    match name.as_deref() {
        Some("code") => MacroKind::Preformatted,
        Some("toc") => {
            info.has_toc = true;
            MacroKind::Other
        }
        Some(other) => match CalloutKind::from_macro_name(other) {
            Some(kind) => MacroKind::Callout(kind),
            None => MacroKind::Other,
        },
        None => MacroKind::Other,
    }
}

fn local_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_lowercase()
}

fn heading_depth(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn markdown_heading_depth(trimmed: &str) -> Option<u8> {
    let hashes = trimmed.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && trimmed[hashes..].starts_with(' ') {
        Some(u8::try_from(hashes).unwrap_or(6))
    } else {
        None
    }
}

/// Removes `<...>` tag spans and decodes the common entities.
///
/// Tolerant by construction: an unterminated tag swallows to end of line,
/// an unmatched `>` passes through as text.
fn strip_markup(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '<' {
            for inner in chars.by_ref() {
                if inner == '>' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_numbers_are_stable() {
        let doc = Document::parse("one\ntwo\nthree");
        assert_eq!(doc.line_count(), 3);
        let numbers: Vec<usize> = doc.lines().iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(doc.lines()[1].raw, "two");
    }

    #[test]
    fn xml_heading_is_detected() {
        let doc = Document::parse("<h1>Overview</h1>\n<p>Body text.</p>");
        let line = &doc.lines()[0];
        assert_eq!(line.context.heading, Some(1));
        assert_eq!(line.heading_text().as_deref(), Some("Overview"));
        assert_eq!(doc.lines()[1].context.heading, None);
    }

    #[test]
    fn markdown_heading_is_detected() {
        let doc = Document::parse("## Install Steps\nbody");
        assert_eq!(doc.lines()[0].context.heading, Some(2));
        assert_eq!(
            doc.lines()[0].heading_text().as_deref(),
            Some("Install Steps")
        );
    }

    #[test]
    fn pre_region_marks_enclosed_lines() {
        let doc = Document::parse("<p>before</p>\n<pre>\nssh 10.0.0.1\n</pre>\nafter");
        assert!(!doc.lines()[0].context.preformatted);
        assert!(doc.lines()[2].context.preformatted);
        assert!(!doc.lines()[4].context.preformatted);
    }

    #[test]
    fn fenced_region_marks_enclosed_lines() {
        let doc = Document::parse("text\n```\nlet x = 1;\n```\nmore");
        assert!(doc.lines()[2].context.preformatted);
        assert!(!doc.lines()[4].context.preformatted);
    }

    #[test]
    fn confluence_code_macro_is_preformatted() {
        let content = concat!(
            "<ac:structured-macro ac:name=\"code\">\n",
            "<ac:plain-text-body>nutanix@cvm$ ls</ac:plain-text-body>\n",
            "</ac:structured-macro>"
        );
        let doc = Document::parse(content);
        assert!(doc.lines()[1].context.preformatted);
    }

    #[test]
    fn callout_macro_sets_context_and_count() {
        let content = concat!(
            "<ac:structured-macro ac:name=\"warning\">\n",
            "<p>Do not do this.</p>\n",
            "</ac:structured-macro>"
        );
        let doc = Document::parse(content);
        assert_eq!(doc.lines()[1].context.callout, Some(CalloutKind::Warning));
        assert_eq!(doc.callouts(), &[CalloutKind::Warning]);
    }

    #[test]
    fn toc_macro_marks_document() {
        let doc = Document::parse("<ac:structured-macro ac:name=\"toc\" />");
        assert!(doc.has_toc());
    }

    #[test]
    fn toc_text_marks_document() {
        let doc = Document::parse("Table of Contents\n1. Overview");
        assert!(doc.has_toc());
    }

    #[test]
    fn markup_only_lines_are_exempt_from_prose_checks() {
        let doc = Document::parse("<ac:layout-cell>\n<p>real content</p>");
        assert!(doc.lines()[0].context.markup_only);
        assert!(!doc.lines()[0].is_checkable_prose());
        assert!(doc.lines()[1].is_checkable_prose());
    }

    #[test]
    fn prose_strips_markup_and_entities() {
        let doc = Document::parse("<p>Fish &amp; chips</p>");
        assert_eq!(doc.lines()[0].prose, "Fish & chips");
    }

    #[test]
    fn unbalanced_tags_do_not_panic() {
        let doc = Document::parse("<h1>Open heading\n<p>text</p>\n</div>");
        assert_eq!(doc.line_count(), 3);
        // The unclosed heading extends to the end of the document.
        assert_eq!(doc.lines()[0].context.heading, Some(1));
    }

    #[test]
    fn line_numbers_survive_degradation() {
        // An invalid token stream must still yield every original line.
        let content = "ok line\n<<<%% not markup at all\nlast line";
        let doc = Document::parse(content);
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.lines()[2].number, 3);
        assert_eq!(doc.lines()[2].raw, "last line");
    }

    #[test]
    fn empty_input_yields_single_empty_line() {
        let doc = Document::parse("");
        assert_eq!(doc.line_count(), 1);
        assert!(!doc.lines()[0].is_checkable_prose());
    }

    #[test]
    fn plain_warning_leadins_count_as_callouts() {
        let doc = Document::parse("Warning: hot\nWarning: sharp\nplain line");
        assert_eq!(doc.callouts().len(), 2);
        assert_eq!(doc.callouts()[0], CalloutKind::Warning);
    }
}
