use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap};

use super::app::{AddField, MessageType, StatusMessage, View};
use super::layout::AppLayout;
use super::timestamps::format_item_date;
use crate::models::{KnowledgeItem, SourceRef};
use crate::utils::derive_title;

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ERROR: Color = Color::Rgb(239, 68, 68);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs for one frame, borrowed from app state
pub struct RenderState<'a> {
    pub view: View,
    pub note_input: &'a str,
    pub url_input: &'a str,
    pub add_field: AddField,
    pub items: &'a [KnowledgeItem],
    pub selected_idx: usize,
    pub question_input: &'a str,
    pub answer: Option<&'a str>,
    pub sources: &'a [SourceRef],
    pub ingest_in_flight: bool,
    pub query_in_flight: bool,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, layout.tabs_area, state);
    match state.view {
        View::Add => render_add_view(frame, layout.body_area, state),
        View::Knowledge => render_knowledge_view(frame, layout.body_area, state),
        View::Ask => render_ask_view(frame, layout.body_area, state),
    }
    render_status_bar(frame, layout.status_area, state);
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &RenderState) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|view| {
            let label = if *view == View::Knowledge && !state.items.is_empty() {
                format!(" {} ({}) ", view.title(), state.items.len())
            } else {
                format!(" {} ", view.title())
            };
            Line::from(label)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.view.index())
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" knowledge-box "),
        );

    frame.render_widget(tabs, area);
}

fn render_add_view(frame: &mut Frame, area: Rect, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Note input
            Constraint::Length(1), // Divider
            Constraint::Length(3), // URL input
        ])
        .split(area);

    let field_style = |focused: bool| {
        if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
    };

    let note = Paragraph::new(if state.note_input.is_empty() {
        Text::from(Span::styled("Paste your notes here...", Style::default().fg(MUTED)))
    } else {
        Text::from(state.note_input)
    })
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_style(state.add_field == AddField::Note))
            .title(" Note "),
    );
    frame.render_widget(note, chunks[0]);

    let divider = Paragraph::new(Line::from(Span::styled("── OR ──", Style::default().fg(MUTED))))
        .centered();
    frame.render_widget(divider, chunks[1]);

    let url = Paragraph::new(if state.url_input.is_empty() {
        Text::from(Span::styled("https://example.com/article", Style::default().fg(MUTED)))
    } else {
        Text::from(state.url_input)
    })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_style(state.add_field == AddField::Url))
            .title(" URL "),
    );
    frame.render_widget(url, chunks[2]);
}

fn render_knowledge_view(frame: &mut Frame, area: Rect, state: &RenderState) {
    if state.items.is_empty() {
        let empty = Paragraph::new(
            "No knowledge stored yet.\n\nSwitch to the Add tab to add your first entry.",
        )
        .style(Style::default().fg(MUTED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Knowledge Base "),
        );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let icon = match item.source {
                crate::models::SourceType::Url => "🔗",
                crate::models::SourceType::Note => "📝",
            };
            let title = derive_title(&item.content, item.source);
            let date = format_item_date(&item.created_at);

            let content = format!("{} {} | {} | {}", icon, title, item.source, date);

            let style = if idx == state.selected_idx {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Knowledge Base "),
    );

    frame.render_widget(list, area);
}

fn render_ask_view(frame: &mut Frame, area: Rect, state: &RenderState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question input
            Constraint::Min(3),    // Answer + sources
        ])
        .split(area);

    let question = Paragraph::new(if state.question_input.is_empty() {
        Text::from(Span::styled("What would you like to know?", Style::default().fg(MUTED)))
    } else {
        Text::from(state.question_input)
    })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Question "),
    );
    frame.render_widget(question, chunks[0]);

    let content = if state.query_in_flight {
        Text::from(Span::styled("Thinking...", Style::default().fg(MUTED)))
    } else if let Some(answer) = state.answer {
        let mut lines: Vec<Line> = answer.lines().map(Line::from).collect();
        if !state.sources.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Sources:", Style::default().fg(ACCENT))));
            for (idx, source) in state.sources.iter().enumerate() {
                lines.push(Line::from(format!("  {}. {}", idx + 1, source.label())));
            }
        }
        Text::from(lines)
    } else {
        Text::from(Span::styled(
            "Ask a question to search the knowledge base.",
            Style::default().fg(MUTED),
        ))
    };

    let answer = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Answer "),
        );
    frame.render_widget(answer, chunks[1]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    // A transient status message overrides the hint line
    if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        let paragraph = Paragraph::new(format!(" {} ", message.text))
            .style(Style::default().fg(fg).bg(STATUS_BG));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut parts = vec![];

    match state.view {
        View::Add => {
            if state.ingest_in_flight {
                parts.push("Ingesting...".to_string());
            }
            parts.push("Enter: submit".to_string());
            parts.push("Up/Down: switch field".to_string());
        }
        View::Knowledge => {
            if state.items.is_empty() {
                parts.push("No entries".to_string());
            } else {
                parts.push(format!("{} entries", state.items.len()));
                parts.push(format!("entry {}/{}", state.selected_idx + 1, state.items.len()));
            }
            parts.push("r: refresh".to_string());
        }
        View::Ask => {
            if state.query_in_flight {
                parts.push("Processing...".to_string());
            }
            parts.push("Enter: ask".to_string());
        }
    }

    parts.push("Tab: switch view".to_string());
    parts.push("Esc: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(STATUS_BG));

    frame.render_widget(paragraph, area);
}
