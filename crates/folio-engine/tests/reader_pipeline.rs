//! End-to-end behaviour of the content pipeline: stored value in, reader
//! nodes and outline out, and authoring round trips through a store.

use folio_engine::content::*;
use folio_engine::io::{ContentStore, MemoryStore};
use folio_engine::models::{ContentKind, ContentRecord, RecordKey};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn heading_anchors(nodes: &[RenderNode]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(RenderNode::anchor_id)
        .map(|id| id.to_string())
        .collect()
}

fn toc_anchors(entries: &[TocEntry]) -> Vec<String> {
    entries.iter().map(|e| e.anchor_id.to_string()).collect()
}

#[test]
fn legacy_paragraphs_decode_in_order() {
    let doc = decode(&RawContent::from("Para one.\n\nPara two."));

    assert_eq!(
        doc.blocks,
        vec![Block::paragraph("Para one."), Block::paragraph("Para two.")]
    );
}

#[test]
fn heading_and_paragraph_render_with_matching_outline() {
    let raw = RawContent::from(
        r#"{"blocks":[{"type":"heading","text":"Intro","level":2},{"type":"paragraph","text":"Hi"}]}"#,
    );
    let doc = decode(&raw);

    assert_eq!(
        render(&doc),
        vec![
            RenderNode::Heading {
                level: 2,
                text: "Intro".into(),
                anchor_id: AnchorId::for_position(0),
            },
            RenderNode::Text { text: "Hi".into() },
        ]
    );
    assert_eq!(
        extract_toc(&doc),
        vec![TocEntry {
            text: "Intro".into(),
            anchor_id: AnchorId::for_position(0),
            level: 2,
        }]
    );
}

#[test]
fn ordered_list_renders_items_in_order() {
    let doc = decode(&RawContent::from(
        r#"{"blocks":[{"type":"list","style":"ordered","items":["a","b"]}]}"#,
    ));

    assert_eq!(
        render(&doc),
        vec![RenderNode::List {
            style: ListStyle::Ordered,
            items: vec!["a".into(), "b".into()],
        }]
    );
}

#[test]
fn broken_json_becomes_one_literal_paragraph() {
    let doc = decode(&RawContent::from("{not valid json"));
    assert_eq!(doc.blocks, vec![Block::paragraph("{not valid json")]);
}

#[test]
fn null_content_renders_nothing() {
    let doc = decode(&RawContent::from(serde_json::Value::Null));
    assert!(doc.is_empty());
    assert!(render(&doc).is_empty());
    assert!(extract_toc(&doc).is_empty());
}

#[test]
fn middle_block_missing_field_is_the_only_loss() {
    let raw = RawContent::Structured(json!({"blocks": [
        {"type": "heading", "text": "One"},
        {"type": "quote"},
        {"type": "paragraph", "text": "Three"},
    ]}));

    let doc = decode(&raw);
    assert_eq!(
        doc.blocks,
        vec![Block::heading("One", 2), Block::paragraph("Three")]
    );
}

#[rstest]
#[case::prose("Just words, no structure at all.")]
#[case::truncated(r#"{"blocks":[{"type":"heading","text":"Int"#)]
#[case::wrong_shape(r#"[{"type":"paragraph","text":"x"}]"#)]
#[case::garbage("}{][\u{0}\n\n\n\u{feff}")]
#[case::empty("")]
fn decode_is_total(#[case] input: &str) {
    let doc = decode(&RawContent::from(input));
    let _ = render(&doc);
    let _ = extract_toc(&doc);
}

#[rstest]
#[case::headings_only(vec![Block::heading("a", 1), Block::heading("b", 2)])]
#[case::mixed(vec![
    Block::paragraph("p"),
    Block::heading("a", 1),
    Block::list(ListStyle::Unordered, ["x"]),
    Block::heading("b", 3),
    Block::image("/i.png", None),
    Block::heading("c", 6),
])]
#[case::with_invalid(vec![
    Block::heading("bad", 0),
    Block::paragraph("p"),
    Block::heading("good", 2),
])]
#[case::no_headings(vec![Block::paragraph("p"), Block::quote("q")])]
fn outline_and_rendered_headings_agree(#[case] blocks: Vec<Block>) {
    let doc = Document::new(blocks);
    assert_eq!(heading_anchors(&render(&doc)), toc_anchors(&extract_toc(&doc)));
}

#[test]
fn encoded_documents_decode_unchanged() {
    let doc = Document::new(vec![
        Block::heading("Chapter 1", 1),
        Block::paragraph("It was a dark and stormy night."),
        Block::list(ListStyle::Ordered, ["first", "second"]),
        Block::quote("\"Quoted\" text"),
        Block::image("https://example.com/cover.jpg", Some("Cover".into())),
        Block::image("https://example.com/plain.jpg", None),
    ]);

    assert_eq!(decode(&RawContent::from(encode(&doc))), doc);
}

#[test]
fn authoring_through_a_store_reaches_the_reader() {
    let mut store = MemoryStore::new();
    let key = RecordKey::new(ContentKind::BlogPost, "launch").unwrap();

    // Quick paragraph dump from the editor
    let saved = prepare_for_save("We launched.\n\nThanks everyone.");
    store
        .put(ContentRecord::new(key.clone(), "Launch", saved))
        .unwrap();

    // Re-open in the editor, add a heading by hand, save again
    let stored = store.get(&key).unwrap();
    let editable = prepare_for_edit(&stored.content);
    let mut value: serde_json::Value = serde_json::from_str(&editable).unwrap();
    value["blocks"]
        .as_array_mut()
        .unwrap()
        .insert(0, json!({"type": "heading", "text": "News", "level": 1}));
    let edited = prepare_for_save(&value.to_string());
    store
        .put(ContentRecord {
            content: edited,
            ..stored
        })
        .unwrap();

    let page = Page::from_raw(&store.get(&key).unwrap().content);
    assert_eq!(page.source, DecodeSource::Blocks);
    assert_eq!(toc_anchors(&page.toc), vec!["heading-0"]);
    assert_eq!(page.nodes.len(), 3);
}

#[test]
fn page_html_links_outline_to_headings() {
    let doc = Document::new(vec![
        Block::heading("Getting started", 1),
        Block::paragraph("Read this & that."),
        Block::list(ListStyle::Ordered, ["Install", "Run"]),
        Block::heading("Notes", 2),
        Block::quote("Ship it."),
        Block::image("/img/a.png", Some("Diagram".into())),
    ]);
    let page = Page::from_raw(&RawContent::from(encode(&doc)));

    insta::assert_snapshot!(page.to_html(), @r##"
    <nav class="toc">
    <ul>
    <li class="toc-level-1"><a href="#heading-0">Getting started</a></li>
    <li class="toc-level-2"><a href="#heading-3">Notes</a></li>
    </ul>
    </nav>
    <h1 id="heading-0">Getting started</h1>
    <p>Read this &amp; that.</p>
    <ol>
    <li>Install</li>
    <li>Run</li>
    </ol>
    <h2 id="heading-3">Notes</h2>
    <blockquote>Ship it.</blockquote>
    <figure>
    <img src="/img/a.png" alt="Diagram">
    <figcaption>Diagram</figcaption>
    </figure>
    "##);
}
