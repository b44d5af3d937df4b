//! Demo application state, input handling and drawing.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crossterm::cursor::MoveTo;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use futures::StreamExt;
use log::{debug, info};
use settings_view::binder::ViewType;
use settings_view::host::RequestToken;
use settings_view::item::ResourceUri;
use settings_view::render::{render_row, truncate_to_width};
use settings_view::row::{ENABLED_ALPHA, RowControl, RowView};
use settings_view::{SettingsAdapter, SettingsView};

use crate::error::DemoError;
use crate::host::{HostRequest, TerminalHost};
use crate::terminal::TerminalGuard;

/// Header, status and prompt lines.
const CHROME_ROWS: u16 = 3;

/// Path prompt standing in for a file chooser.
struct Prompt {
    token: RequestToken,
    mime_type: String,
    input: String,
}

pub struct DemoApp {
    view: SettingsView,
    host: TerminalHost,
    /// Recycled rows, per view type.
    pool: HashMap<ViewType, Vec<RowView>>,
    cursor: usize,
    status: Arc<Mutex<String>>,
    prompt: Option<Prompt>,
    quit: bool,
}

impl DemoApp {
    pub fn new(view: SettingsView, host: TerminalHost) -> Self {
        let status = Arc::new(Mutex::new(String::from("↑/↓ move  space toggle  ←/→ adjust  q quit")));
        if let Some(adapter) = view.adapter() {
            register_listeners(adapter, &status);
        }
        let cursor = view.scroll_position().top_index;
        Self {
            view,
            host,
            pool: HashMap::new(),
            cursor,
            status,
            prompt: None,
            quit: false,
        }
    }

    pub fn view(&self) -> &SettingsView {
        &self.view
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn set_status(&self, message: impl Into<String>) {
        if let Ok(mut status) = self.status.lock() {
            *status = message.into();
        }
    }

    // -------------------------------------------------------------------------
    // Row recycling
    // -------------------------------------------------------------------------

    fn take_row(&mut self, view_type: ViewType) -> RowView {
        self.pool
            .get_mut(&view_type)
            .and_then(Vec::pop)
            .unwrap_or_else(|| RowView::new(view_type))
    }

    fn recycle(&mut self, row: RowView) {
        self.pool.entry(row.view_type()).or_default().push(row);
    }

    /// Bind the focused item onto a recycled row and run `gesture` on it.
    fn with_focused_row(&mut self, gesture: impl FnOnce(&mut RowView)) -> Result<(), DemoError> {
        let Some(adapter) = self.view.adapter().cloned() else {
            return Ok(());
        };
        let Some(view_type) = adapter.view_type_for(self.cursor) else {
            return Ok(());
        };
        let mut row = self.take_row(view_type);
        adapter.bind(self.cursor, &mut row)?;
        gesture(&mut row);
        self.recycle(row);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), DemoError> {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.with_focused_row(RowView::click)?,
            KeyCode::Left | KeyCode::Char('h') => self.with_focused_row(|row| step(row, -1))?,
            KeyCode::Right | KeyCode::Char('l') => self.with_focused_row(|row| step(row, 1))?,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn move_cursor(&mut self, delta: isize) {
        let count = self.view.adapter().map_or(0, SettingsAdapter::item_count);
        if count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = &mut self.prompt else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => prompt.input.push(c),
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Enter => {
                let input = prompt.input.trim().to_string();
                let chosen = (!input.is_empty()).then(|| ResourceUri::new(input));
                self.finish_prompt(chosen);
            }
            KeyCode::Esc => self.finish_prompt(None),
            _ => {}
        }
    }

    fn finish_prompt(&mut self, chosen: Option<ResourceUri>) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let Some(adapter) = self.view.adapter() else {
            return;
        };
        match &chosen {
            Some(uri) => self.set_status(format!("Picked {}", uri)),
            None => self.set_status("File selection cancelled"),
        }
        adapter.bridge().complete_chooser(prompt.token, chosen);
    }

    /// Answer queued host requests: grant capabilities, open the prompt for choosers.
    pub fn process_host_requests(&mut self) {
        while let Some(request) = self.host.next_request() {
            let Some(adapter) = self.view.adapter().cloned() else {
                return;
            };
            match request {
                HostRequest::Capability(token, capability) => {
                    info!("Granting '{}'", capability);
                    adapter.bridge().complete_capability(token, true);
                }
                HostRequest::Chooser(token, request) => {
                    if let Some(previous) = self.prompt.take() {
                        adapter.bridge().complete_chooser(previous.token, None);
                    }
                    let input = request
                        .initial_uri
                        .map(|uri| uri.as_str().to_string())
                        .unwrap_or_default();
                    self.prompt = Some(Prompt {
                        token,
                        mime_type: request.mime_type,
                        input,
                    });
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    pub fn draw(&mut self, out: &mut impl Write, columns: u16, rows: u16) -> Result<(), DemoError> {
        let width = usize::from(columns);
        let list_rows = usize::from(rows.saturating_sub(CHROME_ROWS));
        self.view.scroll_into_view(self.cursor, list_rows);

        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(truncate_to_width("Settings", width)),
            SetAttribute(Attribute::Reset)
        )?;

        if let Some(adapter) = self.view.adapter().cloned() {
            for (line, position) in self.view.visible_range(list_rows).enumerate() {
                let Some(view_type) = adapter.view_type_for(position) else {
                    continue;
                };
                let mut row = self.take_row(view_type);
                adapter.bind(position, &mut row)?;

                let marker = if position == self.cursor { "> " } else { "  " };
                let text = format!("{marker}{}", render_row(&row, width.saturating_sub(2)));
                let dim = row.alpha() < ENABLED_ALPHA;
                self.recycle(row);

                queue!(out, MoveTo(0, line as u16 + 1))?;
                if dim {
                    queue!(out, SetAttribute(Attribute::Dim))?;
                }
                queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
            }
            adapter.clear_dirty();
        }

        let status = self.status.lock().map(|s| s.clone()).unwrap_or_default();
        queue!(
            out,
            MoveTo(0, rows.saturating_sub(2)),
            Print(truncate_to_width(&status, width))
        )?;

        if let Some(prompt) = &self.prompt {
            let line = format!("Open ({}): {}", prompt.mime_type, prompt.input);
            queue!(
                out,
                MoveTo(0, rows.saturating_sub(1)),
                SetAttribute(Attribute::Reverse),
                Print(truncate_to_width(&line, width)),
                SetAttribute(Attribute::Reset)
            )?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Adjust a spinner or bar row by one step.
fn step(row: &mut RowView, delta: i32) {
    match row.control().clone() {
        RowControl::Spinner(spinner) => {
            let len = spinner.options.len() as i32;
            if len > 0 {
                let next = (spinner.selected as i32 + delta).rem_euclid(len);
                row.select_option(next as usize);
            }
        }
        RowControl::Bar(bar) => {
            row.start_tracking();
            row.move_bar(bar.progress + delta);
            row.stop_tracking();
        }
        _ => {}
    }
}

fn register_listeners(adapter: &SettingsAdapter, status: &Arc<Mutex<String>>) {
    let sink = status.clone();
    adapter.set_on_checked_change(move |position, checked| {
        if let Ok(mut status) = sink.lock() {
            *status = format!("Row {} switched {}", position, if checked { "on" } else { "off" });
        }
    });

    let sink = status.clone();
    adapter.set_on_value_change(move |_adapter, value| {
        if let Ok(mut status) = sink.lock() {
            *status = format!("Value set to {}", value);
        }
    });

    adapter.set_on_item_click(|row, position| debug!("Clicked '{}' at {}", row.title(), position));
}

/// Run the event loop until the user quits.
pub async fn run(app: &mut DemoApp, terminal: &mut TerminalGuard) -> Result<(), DemoError> {
    let mut events = EventStream::new();
    let (columns, rows) = terminal.size()?;
    app.draw(terminal.stdout(), columns, rows)?;

    while let Some(event) = events.next().await {
        match event? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
            Event::Resize(..) => {}
            _ => continue,
        }
        app.process_host_requests();
        if app.should_quit() {
            break;
        }
        let (columns, rows) = terminal.size()?;
        app.draw(terminal.stdout(), columns, rows)?;
    }
    Ok(())
}
