//! Modal project-name dialog.
//!
//! Blocks the whole screen until a non-empty name is submitted. The box is
//! centered, everything behind it is cleared, and the single input gets the
//! cursor.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;

use super::field::render_field;
use super::theme::Theme;

pub fn render_name_dialog(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = centered_rect(frame.area(), 46, 6);
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title("Nome do Projeto")
        .border_style(Style::default().fg(theme.focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, input_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    if input_area.height > 0 {
        let field_width = inner.width.saturating_sub(4);
        let input_area = Rect::new(input_area.x + 1, input_area.y, field_width + 2, 1);
        render_field(frame, input_area, &app.name_input, true, 0, field_width, theme);
    }

    let hint = Paragraph::new(Line::styled(
        "Enter: Começar",
        Style::default().fg(theme.placeholder),
    ))
    .centered();
    frame.render_widget(hint, hint_area);
}

/// Center a `width` x `height` box inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
