use skillkit::render::Line;
use skillkit::widgets::skill_card::MAX_LEVEL;
use skillkit::{
    OptionRow, Select, SelectOption, SelectProps, SelectTheme, SkillCard, options_from,
};

fn theme() -> SelectTheme {
    SelectTheme::dark()
}

fn plain(lines: &[Line]) -> Vec<String> {
    lines.iter().map(Line::plain).collect()
}

// ============================================================================
// Option rows
// ============================================================================

#[test]
fn test_row_markers() {
    let apple = SelectOption::new("1", "Apple");
    let selected = vec![apple.clone()];

    let multi_on = OptionRow::new(&apple, true, &selected, None).render(12, &theme());
    let multi_off = OptionRow::new(&apple, true, &[], None).render(12, &theme());
    let single_on = OptionRow::new(&apple, false, &selected, None).render(12, &theme());
    let single_off = OptionRow::new(&apple, false, &[], None).render(12, &theme());

    assert_eq!(multi_on.plain(), "[x] Apple   ");
    assert_eq!(multi_off.plain(), "[ ] Apple   ");
    assert_eq!(single_on.plain(), "(•) Apple   ");
    assert_eq!(single_off.plain(), "( ) Apple   ");
}

#[test]
fn test_row_is_exact_width() {
    let long = SelectOption::new("x", "A very long option label");
    let line = OptionRow::new(&long, true, &[], None).render(10, &theme());
    assert_eq!(line.width(), 10);
    assert_eq!(line.plain(), "[ ] A ver…");
}

#[test]
fn test_row_styles_selected_and_active() {
    let theme = theme();
    let apple = SelectOption::new("1", "Apple");
    let selected = vec![apple.clone()];

    let plain_row = OptionRow::new(&apple, true, &[], Some("2"));
    assert!(!plain_row.selected && !plain_row.active);
    let line = plain_row.render(10, &theme);
    assert!(line.spans.iter().all(|s| s.style.fg == Some(theme.text)));
    assert!(line.spans.iter().all(|s| s.style.bg == Some(theme.surface)));

    let row = OptionRow::new(&apple, true, &selected, Some("1"));
    assert!(row.selected && row.active);
    let line = row.render(10, &theme);
    assert!(line.spans.iter().all(|s| s.style.fg == Some(theme.selected)));
    assert!(line.spans.iter().all(|s| s.style.bold));
    assert!(line.spans.iter().all(|s| s.style.bg == Some(theme.active_background)));
}

// ============================================================================
// Whole widget
// ============================================================================

fn fruit() -> Select {
    let select = Select::new(
        SelectProps::new(options_from([("1", "Apple"), ("2", "Banana"), ("3", "Apricot")]))
            .caption("Fruit")
            .placeholder("Search"),
    );
    select.place(0, 0, 14);
    select
}

#[test]
fn test_closed_render_shows_caption() {
    let select = fruit();
    assert_eq!(plain(&select.render(&theme())), vec!["Fruit        ▼"]);
}

#[test]
fn test_open_render_shows_placeholder_and_rows() {
    let select = fruit();
    select.open();
    select.toggle_selection(&SelectOption::new("2", "Banana"));

    assert_eq!(
        plain(&select.render(&theme())),
        vec![
            "Search       ▲",
            "( ) Apple     ",
            "(•) Banana    ",
            "( ) Apricot   ",
        ]
    );
}

#[test]
fn test_open_render_shows_query() {
    let select = fruit();
    select.open();
    select.filter_options("ap");
    assert_eq!(
        plain(&select.render(&theme())),
        vec!["ap           ▲", "( ) Apple     ", "( ) Apricot   "]
    );
}

#[test]
fn test_unplaced_render_is_empty() {
    let select = Select::new(SelectProps::new(Vec::new()));
    assert!(select.render(&theme()).is_empty());
}

#[test]
fn test_draw_clears_dirty() {
    let select = fruit();
    assert!(select.is_dirty());

    let mut out = Vec::new();
    select.draw(&mut out, &theme()).unwrap();
    assert!(!select.is_dirty());
    assert!(String::from_utf8_lossy(&out).contains("Fruit"));

    select.open();
    assert!(select.is_dirty());
}

// ============================================================================
// Skill card
// ============================================================================

#[test]
fn test_skill_card_lines() {
    let card = SkillCard::new("Rust", "Systems programming").level(3);
    assert_eq!(
        plain(&card.render(14, &theme())),
        vec!["✓ Rust        ", "  Systems pro…", "  ■■■□□       "]
    );
}

#[test]
fn test_skill_card_level_is_clamped() {
    assert_eq!(SkillCard::new("Rust", "").level(9).level, MAX_LEVEL);
    assert_eq!(SkillCard::new("Rust", "").level, 0);

    let lines = SkillCard::new("Rust", "").render(9, &theme());
    assert_eq!(lines[2].plain(), "  □□□□□  ");
}

#[test]
fn test_skill_card_narrow_width() {
    let card = SkillCard::new("TypeScript", "Typed JS").level(4);
    for width in [0, 1, 4] {
        let lines = card.render(width, &theme());
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.width() == width as usize), "width {}", width);
    }
    assert_eq!(card.render(4, &theme())[2].plain(), "  ■■");
}

#[test]
fn test_skill_card_styles() {
    let theme = theme();
    let lines = SkillCard::new("SQL", "Queries").level(2).render(12, &theme);

    let check = &lines[0].spans[0];
    assert_eq!(check.style.fg, Some(theme.selected));
    assert!(check.style.bold);
    assert_eq!(lines[1].spans[1].style.fg, Some(theme.muted));
    assert_eq!(lines[2].spans[1].style.fg, Some(theme.selected));
    assert_eq!(lines[2].spans[2].style.fg, Some(theme.muted));
    assert!(lines.iter().flat_map(|l| &l.spans).all(|s| s.style.bg == Some(theme.surface)));
}

#[test]
fn test_theme_from_partial_json() {
    let theme: SelectTheme = serde_json::from_str(r#"{ "muted": { "r": 9, "g": 9, "b": 9 } }"#)
        .unwrap();
    assert_eq!(theme.muted, skillkit::Rgb::new(9, 9, 9));
    assert_eq!(theme.selected, SelectTheme::dark().selected);
}
