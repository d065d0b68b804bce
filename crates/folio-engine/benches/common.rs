// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_legacy_text(paragraphs: usize) -> String {
    let base = "Some paragraph content with multiple sentences. This helps create realistic document structure for benchmarking.";
    vec![base; paragraphs].join("\n\n")
}

#[allow(dead_code)]
pub fn generate_block_json(sections: usize) -> String {
    let mut blocks = Vec::new();

    for section in 0..sections {
        blocks.push(format!(
            r#"{{"type":"heading","text":"Section {section}","level":2}}"#
        ));
        blocks.push(
            r#"{"type":"paragraph","text":"Some paragraph content with multiple sentences."}"#
                .to_string(),
        );
        blocks.push(
            r#"{"type":"list","style":"unordered","items":["one","two","three"]}"#.to_string(),
        );
        if section % 3 == 0 {
            blocks.push(
                r#"{"type":"image","url":"/img/figure.png","caption":"Figure"}"#.to_string(),
            );
        }
        if section % 5 == 0 {
            // Invalid on purpose so the drop path is measured too
            blocks.push(r#"{"type":"quote"}"#.to_string());
        }
    }

    format!(r#"{{"blocks":[{}]}}"#, blocks.join(","))
}
