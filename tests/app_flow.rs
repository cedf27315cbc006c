// End-to-end flows driven through key events against a TestBackend.

use std::path::PathBuf;

use chrono::TimeZone;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use prodman::app::App;
use prodman::clock::{sao_paulo_offset, FixedClock};
use prodman::config::Config;
use prodman::view;

struct AppHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl AppHarness {
    fn new(width: u16, height: u16) -> Self {
        Self::with_export_dir(width, height, PathBuf::from("."))
    }

    fn with_export_dir(width: u16, height: u16, export_dir: PathBuf) -> Self {
        let clock = FixedClock(
            sao_paulo_offset()
                .with_ymd_and_hms(2024, 5, 7, 14, 3, 9)
                .unwrap(),
        );
        let app = App::new(&Config::default(), Some(export_dir), Box::new(clock));
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self { app, terminal }
    }

    fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app.handle_key(KeyEvent::new(code, modifiers));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn render(&mut self) {
        let app = &self.app;
        self.terminal.draw(|frame| view::render(frame, app)).unwrap();
    }

    fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut screen = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            screen.push_str(cell.symbol());
            if (i + 1) % width == 0 {
                screen.push('\n');
            }
        }
        screen
    }

    fn assert_screen_contains(&mut self, needle: &str) {
        self.render();
        let screen = self.screen_to_string();
        assert!(
            screen.contains(needle),
            "expected screen to contain {needle:?}, screen was:\n{screen}"
        );
    }

    fn assert_screen_not_contains(&mut self, needle: &str) {
        self.render();
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(needle),
            "expected screen NOT to contain {needle:?}, screen was:\n{screen}"
        );
    }

    fn name_project(&mut self, name: &str) {
        self.type_text(name);
        self.send_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    fn add_product(&mut self, code: &str, description: &str, quantity: &str) {
        self.type_text(code);
        self.send_key(KeyCode::Enter, KeyModifiers::NONE);
        self.type_text(description);
        self.send_key(KeyCode::Enter, KeyModifiers::NONE);
        self.type_text(quantity);
        self.send_key(KeyCode::Enter, KeyModifiers::NONE);
    }
}

#[test]
fn test_startup_shows_name_dialog() {
    let mut harness = AppHarness::new(80, 24);
    harness.assert_screen_contains("Nome do Projeto");
    harness.assert_screen_contains("Digite o nome do projeto");
    harness.assert_screen_not_contains("Gerenciador de Produtos");
}

#[test]
fn test_whitespace_name_keeps_dialog_open() {
    let mut harness = AppHarness::new(80, 24);
    harness.type_text("   ");
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE);
    harness.assert_screen_contains("Nome do Projeto");
    assert!(!harness.app.session.is_active());
}

#[test]
fn test_naming_opens_main_screen() {
    let mut harness = AppHarness::new(80, 24);
    harness.name_project("Obra Norte");

    harness.assert_screen_contains("Gerenciador de Produtos");
    harness.assert_screen_contains("Obra Norte");
    harness.assert_screen_contains("Código");
    harness.assert_screen_contains("Descrição");
    harness.assert_screen_contains("Quantidade");
    // empty registry: no table yet
    harness.assert_screen_not_contains("Lista de Produtos");
}

#[test]
fn test_code_renders_uppercased_as_typed() {
    let mut harness = AppHarness::new(80, 24);
    harness.name_project("P");
    harness.type_text("abc");
    harness.assert_screen_contains("ABC");
}

#[test]
fn test_added_products_appear_in_table_in_order() {
    let mut harness = AppHarness::new(80, 24);
    harness.name_project("P");
    harness.add_product("abc", "Widget", "5");
    harness.add_product("xyz", "Gadget", "");

    harness.assert_screen_contains("Lista de Produtos");
    harness.assert_screen_contains("ABC");
    harness.assert_screen_contains("Widget");
    harness.assert_screen_contains("XYZ");
    harness.assert_screen_contains("Gadget");

    assert_eq!(harness.app.registry.len(), 2);
    assert_eq!(harness.app.registry.get(0).unwrap().code, "ABC");
    assert_eq!(harness.app.registry.get(0).unwrap().quantity, 5);
    assert_eq!(harness.app.registry.get(1).unwrap().code, "XYZ");
    assert_eq!(harness.app.registry.get(1).unwrap().quantity, 0);
}

#[test]
fn test_incomplete_submission_adds_nothing() {
    let mut harness = AppHarness::new(80, 24);
    harness.name_project("P");
    // description left empty
    harness.add_product("abc", "", "5");

    assert!(harness.app.registry.is_empty());
    harness.assert_screen_not_contains("Lista de Produtos");
}

#[test]
fn test_remove_selected_row() {
    let mut harness = AppHarness::new(80, 24);
    harness.name_project("P");
    harness.add_product("abc", "Widget", "5");
    harness.add_product("xyz", "Gadget", "2");

    harness.send_key(KeyCode::Char('d'), KeyModifiers::CONTROL);
    harness.assert_screen_not_contains("Widget");
    harness.assert_screen_contains("Gadget");

    harness.send_key(KeyCode::Char('d'), KeyModifiers::CONTROL);
    // table disappears with the last record
    harness.assert_screen_not_contains("Lista de Produtos");
    assert!(harness.app.registry.is_empty());
}

#[test]
fn test_export_writes_contract_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness = AppHarness::with_export_dir(80, 24, dir.path().to_path_buf());
    harness.name_project("Projeto Teste");
    harness.add_product("abc", "Widget", "5");
    harness.add_product("xyz", "Gadget", "0");

    harness.send_key(KeyCode::Char('e'), KeyModifiers::CONTROL);

    let path = dir.path().join("Projeto Teste_07_05_2024_14_03_09.csv");
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(
        bytes,
        "\u{FEFF}Código;Descrição;Quantidade\nABC;Widget;5\nXYZ;Gadget;0".as_bytes()
    );

    harness.assert_screen_contains("Exportado");
}

#[test]
fn test_export_unavailable_while_registry_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness = AppHarness::with_export_dir(80, 24, dir.path().to_path_buf());
    harness.name_project("P");

    harness.send_key(KeyCode::Char('e'), KeyModifiers::CONTROL);

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    // the hint line only offers export once there is something to export
    harness.assert_screen_not_contains("Ctrl+E");
}

#[test]
fn test_quantity_field_ignores_letters() {
    let mut harness = AppHarness::new(80, 24);
    harness.name_project("P");
    harness.add_product("abc", "Widget", "abc");

    assert_eq!(harness.app.registry.len(), 1);
    assert_eq!(harness.app.registry.get(0).unwrap().quantity, 0);
}

#[test]
fn test_tab_cycles_fields() {
    let mut harness = AppHarness::new(80, 24);
    harness.name_project("P");

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE);
    harness.type_text("só descrição");
    assert_eq!(harness.app.form.description.value, "só descrição");

    harness.send_key(KeyCode::BackTab, KeyModifiers::SHIFT);
    harness.type_text("c1");
    assert_eq!(harness.app.form.code.value, "C1");
}
