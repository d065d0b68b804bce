use super::{
    codec::{DecodeSource, decode_with_report},
    document::Document,
    html::{render_html, render_toc_html},
    raw::RawContent,
    render::{RenderNode, render},
    toc::{TocEntry, extract_toc},
};

/// Everything a reader view needs for one content record.
///
/// Built with `decode`, then `render`, then `extract_toc`. Placeholders for
/// empty pages or outlines are chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub document: Document,
    pub nodes: Vec<RenderNode>,
    pub toc: Vec<TocEntry>,
    pub source: DecodeSource,
}

impl Page {
    pub fn from_raw(raw: &RawContent) -> Self {
        let report = decode_with_report(raw);
        let nodes = render(&report.document);
        let toc = extract_toc(&report.document);

        Self {
            document: report.document,
            nodes,
            toc,
            source: report.source,
        }
    }

    /// True when there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_toc(&self) -> bool {
        !self.toc.is_empty()
    }

    /// Body markup with the outline, if any, in front of it.
    pub fn to_html(&self) -> String {
        let body = render_html(&self.nodes);
        match render_toc_html(&self.toc) {
            nav if nav.is_empty() => body,
            nav => format!("{nav}\n{body}"),
        }
    }
}
