//! The add-product form: editable fields, focus policy, quantity parsing.
//!
//! The draft record lives in three [`TextField`]s. Focus advancement on
//! Enter is a pure function ([`advance_on_confirm`]) so the policy can be
//! tested without a rendered UI, and invalid quantity text is handled by
//! the explicit [`parse_quantity_or_default`] rule rather than an inline
//! fallback.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::registry::ProductRecord;

/// Which draft field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Code,
    Description,
    Quantity,
}

/// Where a confirm keypress (Enter) sends you from a given field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAdvance {
    /// Move focus to another field.
    Field(FormField),
    /// Trigger the same action as the submit control.
    Submit,
}

/// Focus-advance policy: code -> description -> quantity -> submit.
pub fn advance_on_confirm(field: FormField) -> FocusAdvance {
    match field {
        FormField::Code => FocusAdvance::Field(FormField::Description),
        FormField::Description => FocusAdvance::Field(FormField::Quantity),
        FormField::Quantity => FocusAdvance::Submit,
    }
}

/// Parse the quantity field text, substituting 0 for anything that is not a
/// non-negative integer. Negative values cannot be typed at all: the
/// quantity field only accepts digits.
pub fn parse_quantity_or_default(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Per-field character normalization applied on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharFilter {
    /// Store characters verbatim.
    Verbatim,
    /// Upper-case every inserted character (product codes).
    Uppercase,
    /// Accept ASCII digits only (quantities).
    Digits,
}

/// Single-line editable text field: value plus a cursor byte offset.
///
/// Shared by the name dialog and the three form inputs. Editing keys are
/// handled here; Enter/Tab/shortcuts are routed a level up by the app.
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: String,
    pub value: String,
    /// Byte offset into `value`, always on a char boundary.
    pub cursor: usize,
    pub placeholder: String,
    filter: CharFilter,
}

impl TextField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            placeholder: String::new(),
            filter: CharFilter::Verbatim,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Upper-case every inserted character.
    pub fn uppercased(mut self) -> Self {
        self.filter = CharFilter::Uppercase;
        self
    }

    /// Accept only ASCII digits.
    pub fn digits_only(mut self) -> Self {
        self.filter = CharFilter::Digits;
        self
    }

    pub fn insert(&mut self, c: char) {
        match self.filter {
            CharFilter::Verbatim => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            CharFilter::Uppercase => {
                // to_uppercase may expand to more than one char (e.g. ß)
                for up in c.to_uppercase() {
                    self.value.insert(self.cursor, up);
                    self.cursor += up.len_utf8();
                }
            }
            CharFilter::Digits => {
                if c.is_ascii_digit() {
                    self.value.insert(self.cursor, c);
                    self.cursor += c.len_utf8();
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Handle an editing key. Returns `true` if the key was consumed.
    ///
    /// Enter, Escape, Tab and control shortcuts are not editing keys and
    /// are left for the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_home();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

/// The not-yet-committed record being edited.
#[derive(Debug)]
pub struct ProductForm {
    pub code: TextField,
    pub description: TextField,
    pub quantity: TextField,
    pub focused: FormField,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            code: TextField::new("Código").uppercased(),
            description: TextField::new("Descrição"),
            quantity: TextField::new("Quantidade").with_placeholder("0").digits_only(),
            focused: FormField::Code,
        }
    }

    pub fn field(&self, field: FormField) -> &TextField {
        match field {
            FormField::Code => &self.code,
            FormField::Description => &self.description,
            FormField::Quantity => &self.quantity,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextField {
        match field {
            FormField::Code => &mut self.code,
            FormField::Description => &mut self.description,
            FormField::Quantity => &mut self.quantity,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focused)
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    /// Tab order: code -> description -> quantity -> code.
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            FormField::Code => FormField::Description,
            FormField::Description => FormField::Quantity,
            FormField::Quantity => FormField::Code,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            FormField::Code => FormField::Quantity,
            FormField::Description => FormField::Code,
            FormField::Quantity => FormField::Description,
        };
    }

    /// Commit the draft.
    ///
    /// Rejected (returns `None`, draft untouched) when code or description
    /// is empty. The emptiness check deliberately does not trim: a
    /// whitespace-only description counts as filled in (see DESIGN.md).
    /// On success the draft resets to defaults and focus returns to code.
    pub fn submit(&mut self) -> Option<ProductRecord> {
        if self.code.value.is_empty() || self.description.value.is_empty() {
            return None;
        }
        let record = ProductRecord::new(
            self.code.value.clone(),
            self.description.value.clone(),
            parse_quantity_or_default(&self.quantity.value),
        );
        self.reset();
        Some(record)
    }

    pub fn reset(&mut self) {
        self.code.clear();
        self.description.clear();
        self.quantity.clear();
        self.focused = FormField::Code;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any string of digits parses to its numeric value.
        #[test]
        fn digit_strings_parse(n in 0u32..1_000_000) {
            prop_assert_eq!(parse_quantity_or_default(&n.to_string()), n);
        }

        /// Property: parsing never panics and never yields a negative-like
        /// wraparound, whatever the input.
        #[test]
        fn arbitrary_text_parses_to_default(text in ".*") {
            let parsed = parse_quantity_or_default(&text);
            let expected: u32 = text.trim().parse().unwrap_or(0);
            prop_assert_eq!(parsed, expected);
        }

        /// Property: typing into an upper-casing field yields the
        /// upper-cased input, cursor at the end.
        #[test]
        fn uppercase_field_matches_to_uppercase(text in "[a-zà-ÿ0-9 ]{0,20}") {
            let mut field = TextField::new("Código").uppercased();
            for c in text.chars() {
                field.insert(c);
            }
            prop_assert_eq!(field.value.clone(), text.to_uppercase());
            prop_assert_eq!(field.cursor, field.value.len());
        }
    }
}
