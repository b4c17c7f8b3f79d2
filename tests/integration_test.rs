//! Integration tests for toolpack
//!
//! These tests drive the library API end to end: the palette flow
//! through the application state machine, the pure tool cores the CLI
//! and the panels share, and the notes store against a real temp dir.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use toolpack::app::{handle_key, App, EventResult, Mode};
use toolpack::config::ToolpackConfig;
use toolpack::palette::{filter_indices, Palette, ToolEntry};
use toolpack::store::{load_notes, save_notes, NoteRecord};
use toolpack::tools::{calc, contrast, convert, encode, hash, textutil};
use toolpack::ui::MessageLevel;

/// Helper to build an app whose notes live in a throwaway directory.
fn setup_app(name: &str) -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = ToolpackConfig {
        notes_path: Some(dir.path().join(format!("{name}.json"))),
        ..ToolpackConfig::new_default()
    };
    (App::new(&config), dir)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}

#[test]
fn test_palette_jump_to_tool() {
    let (mut app, _dir) = setup_app("palette_jump");

    handle_key(&mut app, ctrl('k'));
    assert_eq!(app.mode(), Mode::Palette);

    type_text(&mut app, "uuid");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode(), Mode::Normal);
    assert_eq!(app.labels()[app.selected()], "UUID Generator");
    assert_eq!(app.flash_index(), Some(app.selected()));
}

#[test]
fn test_palette_keyword_match() {
    let (mut app, _dir) = setup_app("palette_keyword");

    // "wcag" is a keyword of the contrast checker, not part of its label.
    handle_key(&mut app, ctrl('k'));
    type_text(&mut app, "wcag");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.labels()[app.selected()], "Contrast Checker");
}

#[test]
fn test_palette_no_match_stays_open() {
    let (mut app, _dir) = setup_app("palette_no_match");

    handle_key(&mut app, ctrl('k'));
    type_text(&mut app, "zzzzzz");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode(), Mode::Palette);

    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.mode(), Mode::Normal);
}

#[test]
fn test_palette_reopen_resets_query() {
    let (mut app, _dir) = setup_app("palette_reset");

    handle_key(&mut app, ctrl('k'));
    type_text(&mut app, "hash");
    handle_key(&mut app, key(KeyCode::Esc));

    handle_key(&mut app, ctrl('k'));
    type_text(&mut app, "calc");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.labels()[app.selected()], "Calculator");
}

#[test]
fn test_ctrl_q_requests_exit() {
    let (mut app, _dir) = setup_app("exit");
    assert_eq!(handle_key(&mut app, ctrl('q')), EventResult::Exit);
}

#[test]
fn test_page_keys_clamp_at_ends() {
    let (mut app, _dir) = setup_app("clamp");

    handle_key(&mut app, key(KeyCode::PageUp));
    assert_eq!(app.selected(), 0);

    let last = app.labels().len() - 1;
    for _ in 0..50 {
        handle_key(&mut app, key(KeyCode::PageDown));
    }
    assert_eq!(app.selected(), last);
}

#[test]
fn test_navigate_unknown_id_is_noop() {
    let (mut app, _dir) = setup_app("unknown_id");
    let before = app.selected();
    app.navigate("does-not-exist");
    assert_eq!(app.selected(), before);
    assert_eq!(app.flash_index(), None);
}

#[test]
fn test_status_messages_survive_one_tick() {
    let (mut app, _dir) = setup_app("messages");
    app.add_message(MessageLevel::Info, "hello".to_string());
    app.tick();
    assert_eq!(app.active_messages().len(), 1);
}

#[test]
fn test_filter_is_plain_substring() {
    let items = vec![
        ToolEntry::new("calc", "Calculator", "math arithmetic"),
        ToolEntry::new("convert", "Unit Converter", "length mass"),
    ];

    // Substring, not fuzzy: "clc" matches nothing.
    assert!(filter_indices(&items, "clc").is_empty());
    assert_eq!(filter_indices(&items, "CALC"), vec![0]);
    assert_eq!(filter_indices(&items, "mass"), vec![1]);
    assert_eq!(filter_indices(&items, "").len(), 2);
}

#[test]
fn test_palette_selection_survives_shrinking_results() {
    let items = vec![
        ToolEntry::new("a", "Alpha", ""),
        ToolEntry::new("b", "Beta", ""),
        ToolEntry::new("c", "Gamma", ""),
    ];
    let mut palette = Palette::new();
    palette.open(&items);
    palette.move_selection(2);
    assert_eq!(palette.view().selected, 2);

    palette.set_query("a", &items);
    assert!(palette.view().selected < palette.view().results.len());
}

#[test]
fn test_calc_core() {
    assert_eq!(calc::evaluate("2 + 3 * 4").unwrap(), 14.0);
    assert_eq!(calc::evaluate("(2 + 3) * 4").unwrap(), 20.0);
    assert!(calc::evaluate("1 / 0").is_err());
}

#[test]
fn test_convert_core() {
    let kind = convert::kind_for("km", "mi").unwrap();
    let miles = convert::convert(kind, 10.0, "km", "mi").unwrap();
    assert!((miles - 6.213_712).abs() < 1e-4);

    let kind = convert::kind_for("c", "f").unwrap();
    assert_eq!(convert::convert(kind, 100.0, "c", "f").unwrap(), 212.0);

    assert!(convert::kind_for("km", "kg").is_none());
}

#[test]
fn test_encode_round_trips() {
    let text = "héllo wörld & more";
    assert_eq!(encode::b64_decode(&encode::b64_encode(text)).unwrap(), text);
    assert_eq!(encode::url_decode(&encode::url_encode(text)).unwrap(), text);
}

#[test]
fn test_hash_known_vector() {
    assert_eq!(
        hash::sha256_hex("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_contrast_black_on_white() {
    let black = contrast::parse_hex_color("#000000").unwrap();
    let white = contrast::parse_hex_color("#ffffff").unwrap();
    let ratio = contrast::contrast_ratio(black, white);
    assert!((ratio - 21.0).abs() < f64::EPSILON);

    let rating = contrast::rate(ratio);
    assert!(rating.aaa_normal);
}

#[test]
fn test_text_core() {
    assert_eq!(textutil::title_case("hello WORLD"), "Hello World");
    assert_eq!(textutil::squeeze_whitespace("a   b\t c"), "a b c");

    let stats = textutil::stats("one two\nthree");
    assert_eq!(stats.words, 3);
    assert_eq!(stats.lines, 2);
}

#[test]
fn test_notes_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.json");

    let notes = vec![
        NoteRecord::new("Scratch", "first note"),
        NoteRecord::new("Links", "second note"),
    ];
    save_notes(&path, &notes).unwrap();

    let loaded = load_notes(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].title, "Scratch");
    assert_eq!(loaded[1].content, "second note");
}

#[test]
fn test_notes_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let loaded = load_notes(&dir.path().join("absent.json")).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_config_notes_override() {
    let config = ToolpackConfig {
        notes_path: Some("/tmp/custom-notes.json".into()),
        ..ToolpackConfig::new_default()
    };
    assert_eq!(
        config.notes_file(),
        std::path::PathBuf::from("/tmp/custom-notes.json")
    );
}
