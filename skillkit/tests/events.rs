use std::sync::Arc;

use skillkit::{
    Event, EventResult, Key, Modifiers, MouseButton, PointerEvent, PointerHub, Rect, Select,
    SelectOption, SelectProps, TopTarget, options_from,
};

/// Fruit select placed at (2, 1), 20 columns wide.
fn placed(multi: bool) -> Select {
    let select = Select::new(
        SelectProps::new(options_from([("1", "Apple"), ("2", "Banana"), ("3", "Apricot")]))
            .multi(multi),
    );
    select.place(2, 1, 20);
    select
}

fn selected_ids(select: &Select) -> Vec<String> {
    select.selected().into_iter().map(|o| o.id).collect()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_unplaced_select_has_no_layout() {
    let select = Select::new(SelectProps::new(Vec::new()));
    assert!(select.layout().is_none());
    assert!(select.bounds().is_none());
    assert_eq!(select.handle_event(&Event::click(0, 0)), EventResult::Ignored);
}

#[test]
fn test_closed_layout_is_one_row() {
    let select = placed(false);
    let layout = select.layout().unwrap();
    assert_eq!(layout.area, Rect::new(2, 1, 20, 1));
    assert_eq!(layout.field, Rect::new(2, 1, 18, 1));
    assert_eq!(layout.arrow, Rect::new(20, 1, 2, 1));
    assert!(layout.panel.is_none());
    assert!(layout.rows.is_empty());
}

#[test]
fn test_open_layout_has_row_per_visible_option() {
    let select = placed(true);
    select.open();
    select.toggle_selection(&skillkit::SelectOption::new("3", "Apricot"));
    select.filter_options("ap");

    let layout = select.layout().unwrap();
    assert_eq!(layout.area, Rect::new(2, 1, 20, 3));
    assert_eq!(layout.panel, Some(Rect::new(2, 2, 20, 2)));
    assert!(layout.aria_multiselectable);

    let rows: Vec<(&str, u16, bool)> = layout
        .rows
        .iter()
        .map(|r| (r.option_id.as_str(), r.area.y, r.aria_selected))
        .collect();
    assert_eq!(rows, vec![("1", 2, false), ("3", 3, true)]);
}

#[test]
fn test_open_layout_stops_at_last_screen_row() {
    let options: Vec<SelectOption> = (0..70_000)
        .map(|i| SelectOption::new(i.to_string(), format!("Option {}", i)))
        .collect();
    let select = Select::new(SelectProps::new(options));
    select.place(0, 0, 20);
    select.open();

    let layout = select.layout().unwrap();
    let last = u16::MAX - 1;
    assert_eq!(layout.panel, Some(Rect::new(0, 1, 20, last)));
    assert_eq!(layout.rows.len(), last as usize);
    assert_eq!(layout.rows.last().unwrap().area, Rect::new(0, last, 20, 1));
    assert_eq!(layout.row_at(3, last).unwrap().option_id, (last - 1).to_string());
    assert_eq!(select.render(&skillkit::SelectTheme::dark()).len(), last as usize + 1);
}

#[test]
fn test_mounted_large_list_handles_presses() {
    let options: Vec<SelectOption> = (0..65_536)
        .map(|i| SelectOption::new(i.to_string(), format!("Option {}", i)))
        .collect();
    let select = Select::new(SelectProps::new(options));
    select.place(0, 0, 20);
    let hub = PointerHub::new();
    let _mounted = select.mount(Arc::new(hub.clone()));
    select.open();

    // A press on a row is inside the widget
    hub.dispatch(&PointerEvent::new(3, 40_000));
    assert!(select.is_open());

    hub.dispatch(&PointerEvent::new(50, 50));
    assert!(!select.is_open());
}

#[test]
fn test_top_targets() {
    let select = placed(false);
    let layout = select.layout().unwrap();
    assert_eq!(layout.top_target_at(2, 1), Some(TopTarget::Caption));
    assert_eq!(layout.top_target_at(21, 1), Some(TopTarget::Arrow));
    assert_eq!(layout.top_target_at(22, 1), None);

    select.open();
    let layout = select.layout().unwrap();
    assert_eq!(layout.top_target_at(5, 1), Some(TopTarget::FilterInput));
    assert_eq!(layout.top_target_at(20, 1), Some(TopTarget::Arrow));
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_click_caption_then_arrow() {
    let select = placed(false);
    assert_eq!(select.handle_event(&Event::click(3, 1)), EventResult::Consumed);
    assert!(select.is_open());

    assert!(select.handle_event(&Event::click(21, 1)).is_handled());
    assert!(!select.is_open());
}

#[test]
fn test_click_filter_input_keeps_open() {
    let select = placed(false);
    select.handle_event(&Event::click(3, 1));
    select.handle_event(&Event::key(Key::Char('b')));

    assert!(select.handle_event(&Event::click(3, 1)).is_handled());
    assert!(select.is_open());
    assert_eq!(select.query(), "");
    assert_eq!(select.visible_options().len(), 3);
}

#[test]
fn test_click_row_toggles_option() {
    let select = placed(true);
    select.handle_event(&Event::click(3, 1));

    select.handle_event(&Event::click(4, 3));
    select.handle_event(&Event::click(4, 2));
    assert_eq!(selected_ids(&select), vec!["1", "2"]);
    assert!(select.is_open());

    select.handle_event(&Event::click(4, 3));
    assert_eq!(selected_ids(&select), vec!["1"]);
}

#[test]
fn test_click_outside_widget_is_ignored() {
    let select = placed(false);
    select.open();
    assert_eq!(select.handle_event(&Event::click(2, 10)), EventResult::Ignored);
    assert_eq!(select.handle_event(&Event::click(0, 1)), EventResult::Ignored);
    assert!(select.is_open());
}

#[test]
fn test_non_primary_button_ignored() {
    let select = placed(false);
    let right = Event::Pointer(PointerEvent::new(3, 1).with_button(MouseButton::Right));
    assert_eq!(select.handle_event(&right), EventResult::Ignored);
    assert!(!select.is_open());
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_keys_open_closed_select() {
    for key in [Key::Enter, Key::Down, Key::Char(' ')] {
        let select = placed(false);
        assert!(select.handle_event(&Event::key(key)).is_handled());
        assert!(select.is_open(), "{:?} should open", key);
    }

    let select = placed(false);
    assert_eq!(select.handle_event(&Event::key(Key::Char('a'))), EventResult::Ignored);
    assert!(!select.is_open());
}

#[test]
fn test_typing_filters() {
    let select = placed(false);
    select.open();
    for c in "AP".chars() {
        select.handle_event(&Event::key(Key::Char(c)));
    }
    assert_eq!(select.query(), "AP");
    assert_eq!(select.visible_options().len(), 2);

    select.handle_event(&Event::key(Key::Backspace));
    select.handle_event(&Event::key(Key::Backspace));
    assert_eq!(select.query(), "");
    assert_eq!(select.visible_options().len(), 3);

    // Backspace on an empty query is harmless
    assert!(select.handle_event(&Event::key(Key::Backspace)).is_handled());
}

#[test]
fn test_arrow_navigation_and_enter() {
    let select = placed(false);
    select.open();

    select.handle_event(&Event::key(Key::Down));
    assert_eq!(select.active_id().as_deref(), Some("1"));
    select.handle_event(&Event::key(Key::Down));
    select.handle_event(&Event::key(Key::Down));
    select.handle_event(&Event::key(Key::Down));
    assert_eq!(select.active_id().as_deref(), Some("3"));
    select.handle_event(&Event::key(Key::Up));
    assert_eq!(select.active_id().as_deref(), Some("2"));

    select.handle_event(&Event::key(Key::Enter));
    assert_eq!(selected_ids(&select), vec!["2"]);

    select.handle_event(&Event::key(Key::Home));
    assert_eq!(select.active_id().as_deref(), Some("1"));
    select.handle_event(&Event::key(Key::End));
    assert_eq!(select.active_id().as_deref(), Some("3"));
}

#[test]
fn test_enter_without_active_does_nothing() {
    let select = placed(false);
    select.open();
    select.handle_event(&Event::key(Key::Enter));
    assert!(select.selected().is_empty());
}

#[test]
fn test_escape_closes() {
    let select = placed(false);
    select.open();
    select.handle_event(&Event::key(Key::Escape));
    assert!(!select.is_open());
}

#[test]
fn test_modified_keys_ignored() {
    let select = placed(false);
    select.open();
    let ctrl_a = Event::Key {
        key: Key::Char('a'),
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(select.handle_event(&ctrl_a), EventResult::Ignored);
    assert_eq!(select.query(), "");
}

// ============================================================================
// Crossterm conversion
// ============================================================================

#[test]
fn test_convert_mouse_down() {
    use crossterm::event::{
        Event as CtEvent, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
    };

    let down = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column: 7,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(skillkit::convert_event(down), Some(Event::click(7, 4)));

    let moved = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 7,
        row: 4,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(skillkit::convert_event(moved), None);
}

#[test]
fn test_convert_keys() {
    use crossterm::event::{Event as CtEvent, KeyCode, KeyEvent, KeyModifiers};

    let ctrl_c = CtEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(skillkit::convert_event(ctrl_c), Some(Event::Quit));

    let a = CtEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert_eq!(skillkit::convert_event(a), Some(Event::key(Key::Char('a'))));

    let esc = CtEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(skillkit::convert_event(esc), Some(Event::key(Key::Escape)));
}
