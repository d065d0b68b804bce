use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_config::ReaderConfig;
use folio_engine::content::{ListStyle, Page, RenderNode, TocEntry};
use folio_engine::io::{ContentStore, FileStore};
use folio_engine::models::CatalogEntry;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

use crate::Settings;

struct App {
    store: FileStore,
    reader: ReaderConfig,
    entries: Vec<CatalogEntry>,
    list_state: ListState,
    show_toc: bool,
    page: Option<Page>,
    error: Option<String>,
}

impl App {
    fn new(store: FileStore, reader: ReaderConfig) -> Result<Self> {
        let show_toc = reader.show_toc;
        let mut app = Self {
            store,
            reader,
            entries: Vec::new(),
            list_state: ListState::default(),
            show_toc,
            page: None,
            error: None,
        };
        app.reload()?;
        Ok(app)
    }

    fn reload(&mut self) -> Result<()> {
        self.entries = self.store.list()?.entries().cloned().collect();
        log::debug!("Loaded {} records", self.entries.len());

        // Select first item if available
        if self.entries.is_empty() {
            self.list_state.select(None);
        } else {
            let selected = self
                .list_state
                .selected()
                .unwrap_or(0)
                .min(self.entries.len() - 1);
            self.list_state.select(Some(selected));
        }
        self.update_page_for_selection();
        Ok(())
    }

    fn next_record(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_page_for_selection();
    }

    fn previous_record(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_page_for_selection();
    }

    fn update_page_for_selection(&mut self) {
        self.page = None;
        self.error = None;

        if let Some(index) = self.list_state.selected()
            && let Some(entry) = self.entries.get(index)
        {
            match self.store.get(&entry.key) {
                Ok(record) => self.page = Some(Page::from_raw(&record.content)),
                Err(e) => self.error = Some(format!("Error reading record: {e}")),
            }
        }
    }

    fn selected_title(&self) -> String {
        self.list_state
            .selected()
            .and_then(|index| self.entries.get(index))
            .map_or_else(|| "Content".to_string(), |entry| entry.title.clone())
    }
}

pub fn run(settings: &Settings) -> Result<()> {
    let store = FileStore::open(&settings.content_path).with_context(|| {
        format!(
            "Content directory '{}' is invalid",
            settings.content_path.display()
        )
    })?;
    let mut app = App::new(store, settings.reader.clone())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_record(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_record(),
                KeyCode::Char('t') => app.show_toc = !app.show_toc,
                KeyCode::Char('r') => {
                    if let Err(e) = app.reload() {
                        app.error = Some(format!("Error reloading records: {e}"));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Terminal lines for a rendered page.
fn page_lines(page: &Page, placeholder: &str) -> Vec<Line<'static>> {
    if page.is_empty() {
        return vec![Line::from(placeholder.to_string())];
    }

    let mut lines = Vec::new();
    for node in &page.nodes {
        match node {
            RenderNode::Text { text } => {
                lines.extend(text.lines().map(|l| Line::from(l.to_string())));
            }
            RenderNode::Heading { level, text, .. } => {
                let prefix = "#".repeat(usize::from(*level));
                lines.push(Line::styled(
                    format!("{prefix} {text}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            RenderNode::List { style, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = match style {
                        ListStyle::Ordered => format!("{}.", i + 1),
                        ListStyle::Unordered => "•".to_string(),
                    };
                    lines.push(Line::from(format!("{marker} {item}")));
                }
            }
            RenderNode::Quote { text } => {
                lines.extend(text.lines().map(|l| {
                    Line::styled(
                        format!("> {l}"),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )
                }));
            }
            RenderNode::Figure { url, caption } => {
                lines.push(Line::from(format!("[image] {url}")));
                if let Some(caption) = caption {
                    lines.push(Line::styled(
                        format!("  {caption}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
        }
        lines.push(Line::from(String::new()));
    }

    lines
}

/// Terminal lines for an outline, indented by heading level.
fn toc_lines(toc: &[TocEntry], placeholder: &str) -> Vec<Line<'static>> {
    if toc.is_empty() {
        return vec![Line::from(placeholder.to_string())];
    }

    toc.iter()
        .map(|entry| {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            Line::from(format!("{indent}{}", entry.text))
        })
        .collect()
}

fn ui(f: &mut Frame, app: &mut App) {
    let constraints = if app.show_toc {
        vec![
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ]
    } else {
        vec![Constraint::Percentage(30), Constraint::Percentage(70)]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    // Record list panel
    let record_items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", entry.key.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.title.clone()),
            ]))
        })
        .collect();

    let records = List::new(record_items)
        .block(Block::default().borders(Borders::ALL).title("Records"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(records, chunks[0], &mut app.list_state);

    // Content panel
    let content_text = match (&app.error, &app.page) {
        (Some(error), _) => vec![Line::from(error.clone())],
        (None, Some(page)) => page_lines(page, &app.reader.empty_placeholder),
        (None, None) => vec![Line::from("Select a record to read it")],
    };

    let content = Paragraph::new(content_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.selected_title()),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Outline panel
    if app.show_toc {
        let outline = match &app.page {
            Some(page) => toc_lines(&page.toc, &app.reader.empty_toc_placeholder),
            None => Vec::new(),
        };
        let outline = Paragraph::new(outline)
            .block(Block::default().borders(Borders::ALL).title("Contents"))
            .wrap(Wrap { trim: true });
        f.render_widget(outline, chunks[2]);
    }

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("t: Toggle contents | r: Reload"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::content::RawContent;
    use pretty_assertions::assert_eq;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn empty_page_shows_placeholder() {
        let page = Page::from_raw(&RawContent::Empty);
        assert_eq!(
            plain(&page_lines(&page, "Nothing here")),
            vec!["Nothing here"]
        );
    }

    #[test]
    fn page_lines_follow_block_order() {
        let page = Page::from_raw(&RawContent::from(
            r#"{"blocks":[
                {"type":"heading","text":"Intro","level":2},
                {"type":"list","style":"ordered","items":["a","b"]},
                {"type":"image","url":"/x.png","caption":"X"}
            ]}"#,
        ));

        assert_eq!(
            plain(&page_lines(&page, "")),
            vec![
                "## Intro", "", "1. a", "2. b", "", "[image] /x.png", "  X", ""
            ]
        );
    }

    #[test]
    fn outline_indents_by_level() {
        let page = Page::from_raw(&RawContent::from(
            r#"{"blocks":[{"type":"heading","text":"Top","level":1},{"type":"heading","text":"Sub","level":3}]}"#,
        ));
        assert_eq!(
            plain(&toc_lines(&page.toc, "none")),
            vec!["Top", "    Sub"]
        );
        assert_eq!(plain(&toc_lines(&[], "none")), vec!["none"]);
    }
}
