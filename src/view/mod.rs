//! Rendering: name dialog, add-product form, table, status bar.
//!
//! Pure presentation over [`App`]; nothing in here mutates state, so every
//! screen can be rendered against a `TestBackend` in tests.

mod dialog;
mod field;
mod table;
mod theme;

pub use theme::Theme;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::form::FormField;

/// Render one frame of the whole UI.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    if !app.session.is_active() {
        dialog::render_name_dialog(frame, app, &theme);
        return;
    }

    let [title_area, _, form_area, _, table_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_title(frame, title_area, app, &theme);
    render_form(frame, form_area, app, &theme);
    if !app.registry.is_empty() {
        table::render_table(frame, table_area, app, &theme);
    }
    render_status(frame, status_area, app, &theme);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = Paragraph::new(Line::styled(
        "Gerenciador de Produtos",
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);

    if let Some(project) = app.session.project() {
        let name = Paragraph::new(Line::styled(
            project.name().to_string(),
            Style::default().fg(theme.label),
        ))
        .right_aligned();
        frame.render_widget(name, area);
    }
}

/// The three draft fields, labels aligned in a column.
fn render_form(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    const FIELDS: [FormField; 3] = [FormField::Code, FormField::Description, FormField::Quantity];

    let label_width = FIELDS
        .iter()
        .map(|f| UnicodeWidthStr::width(app.form.field(*f).label.as_str()))
        .max()
        .unwrap_or(0) as u16;
    let field_width = 32u16.min(area.width.saturating_sub(label_width + 4));

    for (i, form_field) in FIELDS.iter().enumerate() {
        if i as u16 >= area.height {
            break;
        }
        let line = Rect::new(area.x, area.y + i as u16, area.width, 1);
        field::render_field(
            frame,
            line,
            app.form.field(*form_field),
            app.form.focused == *form_field,
            label_width,
            field_width,
            theme,
        );
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let text = match &app.status {
        Some(message) => message.clone(),
        None => {
            let mut hints = String::from("Enter: próximo campo · Tab: alternar · ");
            if !app.registry.is_empty() {
                hints.push_str("Ctrl+E: exportar CSV · Ctrl+D: remover · ");
            }
            hints.push_str("Ctrl+Q: sair");
            hints
        }
    };
    let status = Paragraph::new(Line::styled(text, Style::default().fg(theme.status)));
    frame.render_widget(status, area);
}
