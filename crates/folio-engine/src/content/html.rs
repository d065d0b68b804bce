//! HTML projection of render nodes for the browser reader.
//!
//! One element per line, no styling. Heading ids and TOC links share the
//! same [`AnchorId`](super::anchor::AnchorId) values.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::{block::ListStyle, render::RenderNode, toc::TocEntry};

pub fn render_html(nodes: &[RenderNode]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        push_node(&mut lines, node);
    }
    lines.join("\n")
}

/// A `<nav>` of in-page links, or an empty string when there are no entries.
pub fn render_toc_html(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut lines = vec!["<nav class=\"toc\">".to_string(), "<ul>".to_string()];
    for entry in entries {
        lines.push(format!(
            "<li class=\"toc-level-{}\"><a href=\"{}\">{}</a></li>",
            entry.level,
            attr(&entry.anchor_id.href()),
            text(&entry.text)
        ));
    }
    lines.push("</ul>".to_string());
    lines.push("</nav>".to_string());
    lines.join("\n")
}

/// Markup for a caller-chosen placeholder, e.g. when a page has no content.
pub fn render_placeholder(message: &str) -> String {
    format!("<p class=\"placeholder\">{}</p>", text(message))
}

fn push_node(lines: &mut Vec<String>, node: &RenderNode) {
    match node {
        RenderNode::Text { text: body } => lines.push(format!("<p>{}</p>", text(body))),
        RenderNode::Heading {
            level,
            text: title,
            anchor_id,
        } => lines.push(format!(
            "<h{level} id=\"{}\">{}</h{level}>",
            attr(anchor_id.as_str()),
            text(title)
        )),
        RenderNode::List { style, items } => {
            let tag = match style {
                ListStyle::Ordered => "ol",
                ListStyle::Unordered => "ul",
            };
            lines.push(format!("<{tag}>"));
            lines.extend(items.iter().map(|item| format!("<li>{}</li>", text(item))));
            lines.push(format!("</{tag}>"));
        }
        RenderNode::Quote { text: body } => {
            lines.push(format!("<blockquote>{}</blockquote>", text(body)))
        }
        RenderNode::Figure { url, caption } => {
            lines.push("<figure>".to_string());
            lines.push(format!(
                "<img src=\"{}\" alt=\"{}\">",
                attr(url),
                attr(caption.as_deref().unwrap_or_default())
            ));
            if let Some(caption) = caption {
                lines.push(format!("<figcaption>{}</figcaption>", text(caption)));
            }
            lines.push("</figure>".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::anchor::AnchorId;

    #[test]
    fn escapes_text_and_attributes() {
        let html = render_html(&[
            RenderNode::Text {
                text: "a < b & c".into(),
            },
            RenderNode::Figure {
                url: "/x.png?a=1&b=\"2\"".into(),
                caption: None,
            },
        ]);

        assert_eq!(
            html,
            "<p>a &lt; b &amp; c</p>\n<figure>\n<img src=\"/x.png?a=1&amp;b=&quot;2&quot;\" alt=\"\">\n</figure>"
        );
    }

    #[test]
    fn figure_caption_only_when_present() {
        let html = render_html(&[RenderNode::Figure {
            url: "/y.png".into(),
            caption: Some("Y".into()),
        }]);
        assert!(html.contains("<figcaption>Y</figcaption>"));
    }

    #[test]
    fn placeholder_is_escaped() {
        assert_eq!(
            render_placeholder("<none>"),
            "<p class=\"placeholder\">&lt;none&gt;</p>"
        );
    }

    #[test]
    fn empty_toc_renders_nothing() {
        assert_eq!(render_toc_html(&[]), "");
    }

    #[test]
    fn toc_links_target_heading_ids() {
        let nav = render_toc_html(&[TocEntry {
            text: "Intro".into(),
            anchor_id: AnchorId::for_position(0),
            level: 2,
        }]);
        assert!(nav.contains("<a href=\"#heading-0\">Intro</a>"));
    }
}
