use anyhow::{Context, Result};
use folio_engine::content::{
    Page, RawContent, decode_with_report, prepare_for_edit, prepare_for_save_as,
    render_placeholder,
};
use folio_engine::io::{ContentStore, FileStore, StoreError};
use folio_engine::models::{ContentRecord, RecordKey};
use std::io::Read;
use std::path::PathBuf;

use crate::Settings;

fn open_store(settings: &Settings) -> Result<FileStore> {
    FileStore::open(&settings.content_path).with_context(|| {
        format!(
            "Content directory '{}' is invalid",
            settings.content_path.display()
        )
    })
}

fn load(settings: &Settings, key: &RecordKey) -> Result<ContentRecord> {
    let store = open_store(settings)?;
    store
        .get(key)
        .with_context(|| format!("Failed to read {key}"))
}

pub fn list(settings: &Settings) -> Result<()> {
    let catalog = open_store(settings)?.list()?;
    if catalog.is_empty() {
        println!("No records in {}", settings.content_path.display());
        return Ok(());
    }

    for entry in catalog.entries() {
        println!("{}\t{}\t{}", entry.key, entry.key.kind.label(), entry.title);
    }
    Ok(())
}

pub fn html(settings: &Settings, key: &RecordKey) -> Result<()> {
    let record = load(settings, key)?;
    let page = Page::from_raw(&record.content);

    if page.is_empty() {
        println!("{}", render_placeholder(&settings.reader.empty_placeholder));
    } else {
        println!("{}", page.to_html());
    }
    Ok(())
}

pub fn toc(settings: &Settings, key: &RecordKey) -> Result<()> {
    let record = load(settings, key)?;
    let page = Page::from_raw(&record.content);

    if !page.has_toc() {
        println!("{}", settings.reader.empty_toc_placeholder);
        return Ok(());
    }

    for entry in &page.toc {
        let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
        println!("{}\t{indent}{}", entry.anchor_id, entry.text);
    }
    Ok(())
}

pub fn edit(settings: &Settings, key: &RecordKey) -> Result<()> {
    let record = load(settings, key)?;
    println!("{}", prepare_for_edit(&record.content));
    Ok(())
}

pub fn save(
    settings: &Settings,
    key: RecordKey,
    title: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let input = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            buffer
        }
    };

    let content = prepare_for_save_as(&input, settings.storage_format);
    report_dropped_blocks(&content);

    let mut store = FileStore::create(&settings.content_path)?;
    let record = match store.get(&key) {
        Ok(existing) => ContentRecord {
            title: title.unwrap_or(existing.title),
            content,
            ..existing
        },
        Err(StoreError::NotFound(_)) => {
            let title = title.unwrap_or_else(|| key.slug().to_string());
            ContentRecord::new(key.clone(), title, content)
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {key}")),
    };

    store
        .put(record)
        .with_context(|| format!("Failed to save {key}"))?;
    println!("Saved {key}");
    Ok(())
}

/// Warns the operator about blocks that were saved but will not be shown.
fn report_dropped_blocks(content: &RawContent) {
    let report = decode_with_report(content);
    for dropped in &report.dropped {
        eprintln!(
            "warning: block {} will not be displayed: {}",
            dropped.index, dropped.reason
        );
    }
}
