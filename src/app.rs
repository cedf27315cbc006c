//! Application state and key-event dispatch.
//!
//! `App` is the single source of truth: session, registry, draft form,
//! table cursor and status line all live here and are mutated only by the
//! synchronous key handlers. The name dialog is modal and consumes every
//! key until the session becomes active.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clock::Clock;
use crate::config::Config;
use crate::export;
use crate::form::{advance_on_confirm, FocusAdvance, ProductForm, TextField};
use crate::registry::ProductRegistry;
use crate::session::SessionState;

pub struct App {
    pub session: SessionState,
    pub registry: ProductRegistry,
    pub form: ProductForm,
    /// Input of the modal name dialog.
    pub name_input: TextField,
    /// Table cursor; meaningful only while the registry is non-empty.
    pub selected: usize,
    /// One-line feedback shown in the status bar (export results mostly).
    pub status: Option<String>,
    pub export_dir: PathBuf,
    clock: Box<dyn Clock>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, export_dir_override: Option<PathBuf>, clock: Box<dyn Clock>) -> Self {
        let export_dir = export_dir_override
            .or_else(|| config.export.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            session: SessionState::default(),
            registry: ProductRegistry::new(),
            form: ProductForm::new(),
            name_input: TextField::new("Projeto").with_placeholder("Digite o nome do projeto"),
            selected: 0,
            status: None,
            export_dir,
            clock,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.session.is_active() {
            self.handle_main_key(key);
        } else {
            self.handle_dialog_key(key);
        }
    }

    /// Name dialog keys. Modal: everything is consumed here, nothing
    /// reaches the main screen until the session is active.
    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.session.submit_name(&self.name_input.value) {
                    let name = self.session.project().map(|p| p.name()).unwrap_or_default();
                    tracing::info!(project = %name, "Project named, session active");
                }
                // whitespace-only: dialog stays open, no message
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {
                self.name_input.handle_key(key);
            }
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('e') if ctrl => self.export(),
            KeyCode::Char('d') if ctrl => self.remove_selected(),
            KeyCode::Enter => self.confirm_focused(),
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            _ => {
                self.form.focused_field_mut().handle_key(key);
            }
        }
    }

    /// Enter in a form field: hop focus, or submit from the last field.
    fn confirm_focused(&mut self) {
        match advance_on_confirm(self.form.focused) {
            FocusAdvance::Field(next) => self.form.focus(next),
            FocusAdvance::Submit => self.submit_form(),
        }
    }

    /// Commit the draft. An incomplete draft is refused silently and left
    /// untouched for the user to finish.
    pub fn submit_form(&mut self) {
        if let Some(record) = self.form.submit() {
            tracing::debug!(code = %record.code, quantity = record.quantity, "Product added");
            self.registry.add(record);
        }
    }

    /// Remove the selected product's code, which removes every record
    /// carrying that code (see `ProductRegistry::remove`).
    pub fn remove_selected(&mut self) {
        let Some(record) = self.registry.get(self.selected) else {
            return;
        };
        let code = record.code.clone();
        self.registry.remove(&code);
        tracing::debug!(code = %code, remaining = self.registry.len(), "Product removed");
        if self.selected >= self.registry.len() {
            self.selected = self.registry.len().saturating_sub(1);
        }
    }

    /// Export the registry as CSV. Only available while non-empty, matching
    /// the export control's visibility.
    pub fn export(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        let Some(project) = self.session.project() else {
            return;
        };
        let now = self.clock.now_sao_paulo();
        match export::write_export(&self.export_dir, &self.registry, project.name(), now) {
            Ok(path) => {
                tracing::info!(path = %path.display(), records = self.registry.len(), "CSV exported");
                self.status = Some(format!("Exportado: {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Export failed: {:#}", e);
                self.status = Some(format!("Falha na exportação: {:#}", e));
            }
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.registry.len() {
            self.selected += 1;
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("records", &self.registry.len())
            .field("focused", &self.form.focused)
            .field("selected", &self.selected)
            .finish()
    }
}
