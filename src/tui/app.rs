//! TUI application state and event handling.
//!
//! This module implements the main application logic for the knowledge-box
//! client. It manages:
//!
//! - **View switching**: Three mutually exclusive views (Add, Knowledge, Ask)
//! - **Network sidework**: Requests run on tokio tasks and report back over
//!   an mpsc channel, drained each tick without blocking the render loop
//! - **Single-flight guards**: A second ingest or query is a no-op while one
//!   of the same kind is in flight; the two kinds never block each other
//! - **Stale-response discard**: Each query carries a sequence number and a
//!   response is applied only if it matches the latest issued request
//! - **Status messages**: Transient feedback for validation and failures
//! - **Dirty state tracking**: Redraws only when state changes
//!
//! Decision logic (validation, guards, sequencing) is separated from task
//! spawning in `begin_ingest`/`begin_query` so it is testable without a
//! network.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::events::{Action, poll_event};
use super::net::{self, NetEvent};
use super::rendering::{RenderState, render_ui};
use crate::api::ApiClient;
use crate::models::{IngestRequest, KnowledgeItem, SourceRef};
use crate::utils::{InFlight, OpKind};

/// Fixed answer text shown when a query fails, regardless of cause
pub const QUERY_ERROR_ANSWER: &str = "Error getting answer. Please try again.";

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Input fields refuse further characters beyond this length
const MAX_INPUT_LEN: usize = 2048;

/// The three mutually exclusive views, selected by one active-tab value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Add,
    Knowledge,
    Ask,
}

impl View {
    pub const ALL: [View; 3] = [View::Add, View::Knowledge, View::Ask];

    pub fn title(&self) -> &'static str {
        match self {
            View::Add => "Add",
            View::Knowledge => "Knowledge",
            View::Ask => "Ask",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> View {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> View {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which input has focus in the Add view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Note,
    Url,
}

impl AddField {
    pub fn toggle(&self) -> AddField {
        match self {
            AddField::Note => AddField::Url,
            AddField::Url => AddField::Note,
        }
    }
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    client: ApiClient,
    view: View,
    // Add view inputs
    note_input: String,
    url_input: String,
    add_field: AddField,
    // Knowledge view state
    items: Vec<KnowledgeItem>,
    selected_idx: usize,
    // Ask view state
    question_input: String,
    answer: Option<String>,
    sources: Vec<SourceRef>,
    query_seq: u64,
    // Request coordination
    in_flight: InFlight,
    net_tx: mpsc::UnboundedSender<NetEvent>,
    net_rx: mpsc::UnboundedReceiver<NetEvent>,
    // Status message (validation feedback, failures)
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Create the app and kick off the initial item list fetch.
    pub fn new(client: ApiClient) -> Self {
        let (net_tx, net_rx) = mpsc::unbounded_channel();

        net::spawn_list_fetch(client.clone(), net_tx.clone());

        Self {
            client,
            view: View::Add,
            note_input: String::new(),
            url_input: String::new(),
            add_field: AddField::Note,
            items: Vec::new(),
            selected_idx: 0,
            question_input: String::new(),
            answer: None,
            sources: Vec::new(),
            query_seq: 0,
            in_flight: InFlight::new(),
            net_tx,
            net_rx,
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            // Apply completed network work without blocking
            while let Ok(event) = self.net_rx.try_recv() {
                self.apply_net_event(event);
            }

            // Clear expired status messages (marks dirty if cleared)
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(self.view, Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            view: self.view,
            note_input: &self.note_input,
            url_input: &self.url_input,
            add_field: self.add_field,
            items: &self.items,
            selected_idx: self.selected_idx,
            question_input: &self.question_input,
            answer: self.answer.as_deref(),
            sources: &self.sources,
            ingest_in_flight: self.in_flight.active(OpKind::Ingest),
            query_in_flight: self.in_flight.active(OpKind::Query),
            status_message: self.status_message.as_ref(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextView => {
                self.view = self.view.next();
                self.needs_redraw = true;
            }
            Action::PrevView => {
                self.view = self.view.prev();
                self.needs_redraw = true;
            }
            Action::Input(c) => self.push_char(c),
            Action::DeleteChar => self.pop_char(),
            Action::ToggleField => {
                if self.view == View::Add {
                    self.add_field = self.add_field.toggle();
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::Refresh => {
                net::spawn_list_fetch(self.client.clone(), self.net_tx.clone());
            }
            Action::SubmitIngest => self.submit_ingest(),
            Action::SubmitQuery => self.submit_query(),
            Action::None => {}
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.view {
            View::Add => Some(match self.add_field {
                AddField::Note => &mut self.note_input,
                AddField::Url => &mut self.url_input,
            }),
            View::Ask => Some(&mut self.question_input),
            View::Knowledge => None,
        }
    }

    fn push_char(&mut self, c: char) {
        if let Some(input) = self.focused_input_mut()
            && input.len() < MAX_INPUT_LEN
        {
            input.push(c);
            self.needs_redraw = true;
        }
    }

    fn pop_char(&mut self) {
        if let Some(input) = self.focused_input_mut()
            && input.pop().is_some()
        {
            self.needs_redraw = true;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.view != View::Knowledge || self.items.is_empty() {
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(self.items.len() - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn submit_ingest(&mut self) {
        let Some(request) = self.begin_ingest() else { return };
        net::spawn_ingest(self.client.clone(), request, self.net_tx.clone());
    }

    /// Validate and reserve an ingest submission. Returns `None` (issuing no
    /// request) when both inputs are blank or a submission is in flight.
    fn begin_ingest(&mut self) -> Option<IngestRequest> {
        let request =
            IngestRequest { content: self.note_input.clone(), url: self.url_input.clone() };
        if request.is_blank() {
            self.set_status(
                "Enter a note or a URL first",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
            return None;
        }

        if !self.in_flight.begin(OpKind::Ingest) {
            // Submission already in flight
            return None;
        }

        self.needs_redraw = true;
        Some(request)
    }

    fn submit_query(&mut self) {
        let Some((seq, question)) = self.begin_query() else { return };
        net::spawn_query(self.client.clone(), seq, question, self.net_tx.clone());
    }

    /// Validate and reserve a query. A blank question is a silent no-op that
    /// leaves the previous answer untouched; otherwise the previous answer
    /// and sources are cleared and the next sequence number is issued.
    fn begin_query(&mut self) -> Option<(u64, String)> {
        let question = self.question_input.trim().to_string();
        if question.is_empty() {
            return None;
        }

        if !self.in_flight.begin(OpKind::Query) {
            return None;
        }

        self.query_seq += 1;
        self.answer = None;
        self.sources.clear();
        self.needs_redraw = true;
        Some((self.query_seq, question))
    }

    /// Apply a completed network event to app state.
    fn apply_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::ItemsLoaded(items) => {
                self.items = items;
                if self.selected_idx >= self.items.len() {
                    self.selected_idx = self.items.len().saturating_sub(1);
                }
                self.needs_redraw = true;
            }
            NetEvent::ItemsFailed(reason) => {
                // Stale snapshot is kept; the failure is diagnostic-only.
                warn!("item list fetch failed: {}", reason);
            }
            NetEvent::IngestDone => {
                self.in_flight.finish(OpKind::Ingest);
                self.note_input.clear();
                self.url_input.clear();
                self.view = View::Knowledge;
                self.set_status(
                    "Added to knowledge base",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
                net::spawn_list_fetch(self.client.clone(), self.net_tx.clone());
            }
            NetEvent::IngestFailed(reason) => {
                self.in_flight.finish(OpKind::Ingest);
                warn!("ingest failed: {}", reason);
                self.set_status(
                    "Error ingesting content",
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
            NetEvent::QueryDone { seq, answer } => {
                if seq != self.query_seq {
                    debug!(seq, latest = self.query_seq, "discarding stale query response");
                    return;
                }
                self.in_flight.finish(OpKind::Query);
                self.answer = Some(answer.answer);
                self.sources = answer.sources;
                self.needs_redraw = true;
            }
            NetEvent::QueryFailed { seq } => {
                if seq != self.query_seq {
                    debug!(seq, latest = self.query_seq, "discarding stale query failure");
                    return;
                }
                self.in_flight.finish(OpKind::Query);
                self.answer = Some(QUERY_ERROR_ANSWER.to_string());
                self.sources.clear();
                self.needs_redraw = true;
            }
        }
    }
}
