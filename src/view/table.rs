//! Product table.
//!
//! Rendered only while the registry holds at least one record, mirroring
//! the list's visibility in the main screen.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;

use super::theme::Theme;

pub fn render_table(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let rows = app.registry.iter().map(|record| {
        Row::new(vec![
            record.code.clone(),
            record.description.clone(),
            record.quantity.to_string(),
        ])
    });

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Código", "Descrição", "Quantidade"]).style(
                Style::default()
                    .fg(theme.table_header)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .row_highlight_style(Style::default().bg(theme.selection_bg))
        .block(
            Block::bordered()
                .title("Lista de Produtos")
                .border_style(Style::default().fg(theme.border)),
        );

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}
