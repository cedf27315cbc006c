//! Text field rendering.
//!
//! A field renders as `Label: [value     ]` on a single line, with the
//! value window scrolled so the cursor stays visible and the cursor cell
//! drawn reversed when the field has focus.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::form::TextField;

use super::theme::Theme;

/// Render a text field into a one-line area.
///
/// `label_width` aligns a column of fields; a zero `label_width` with an
/// empty label renders the bracketed value only (the dialog input).
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    focused: bool,
    label_width: u16,
    field_width: u16,
    theme: &Theme,
) {
    if area.height == 0 || area.width < 5 {
        return;
    }

    let (label_color, border_color) = if focused {
        (theme.focused, theme.focused)
    } else {
        (theme.label, theme.border)
    };

    let (display_text, is_placeholder) = if field.value.is_empty() && !field.placeholder.is_empty()
    {
        (field.placeholder.as_str(), true)
    } else {
        (field.value.as_str(), false)
    };

    let prefix_width = if label_width > 0 { label_width + 2 } else { 0 };
    let inner_width = field_width
        .min(area.width.saturating_sub(prefix_width + 2))
        .max(1) as usize;

    // Scroll so the cursor's visual column stays inside the window.
    let text_before_cursor = &field.value[..field.cursor.min(field.value.len())];
    let cursor_visual = UnicodeWidthStr::width(text_before_cursor);
    let scroll = cursor_visual.saturating_sub(inner_width - 1);

    let mut visible = String::new();
    let mut visual_pos = 0;
    for ch in display_text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visual_pos + w <= scroll {
            visual_pos += w;
            continue;
        }
        if visual_pos.saturating_sub(scroll) >= inner_width {
            break;
        }
        visible.push(ch);
        visual_pos += w;
    }
    let padding = " ".repeat(inner_width.saturating_sub(UnicodeWidthStr::width(visible.as_str())));

    let text_style = if is_placeholder {
        Style::default().fg(theme.placeholder)
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = Vec::new();
    if label_width > 0 {
        let padded_label = format!("{:width$}", field.label, width = label_width as usize);
        spans.push(Span::styled(padded_label, Style::default().fg(label_color)));
        spans.push(Span::styled(": ", Style::default().fg(label_color)));
    }
    spans.push(Span::styled("[", Style::default().fg(border_color)));
    spans.push(Span::styled(format!("{visible}{padding}"), text_style));
    spans.push(Span::styled("]", Style::default().fg(border_color)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if focused && !is_placeholder {
        draw_cursor_cell(frame, area, field, theme, prefix_width, cursor_visual - scroll);
    } else if focused {
        // empty field showing its placeholder: cursor sits on the first cell
        let cursor_x = area.x + prefix_width + 1;
        if cursor_x < area.x + area.width {
            draw_reversed_cell(frame, cursor_x, area.y, ' ', theme);
        }
    }
}

fn draw_cursor_cell(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    theme: &Theme,
    prefix_width: u16,
    cursor_col: usize,
) {
    let cursor_x = area.x + prefix_width + 1 + cursor_col as u16;
    if cursor_x >= area.x + area.width {
        return;
    }
    let under_cursor = field.value[field.cursor.min(field.value.len())..]
        .chars()
        .next()
        .unwrap_or(' ');
    draw_reversed_cell(frame, cursor_x, area.y, under_cursor, theme);
}

fn draw_reversed_cell(frame: &mut Frame, x: u16, y: u16, c: char, theme: &Theme) {
    let cell = Rect::new(x, y, 1, 1);
    let span = Span::styled(
        c.to_string(),
        Style::default()
            .fg(theme.cursor)
            .add_modifier(Modifier::REVERSED),
    );
    frame.render_widget(Paragraph::new(Line::from(vec![span])), cell);
}
