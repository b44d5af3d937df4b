//! Tests for row rendering and viewport scrolling.

use settings_view::SettingsAdapter;
use settings_view::binder::ViewType;
use settings_view::item::{IconId, NumericalSelector, SettingItem, SpinnerChoice, ToggleSwitch};
use settings_view::render::{display_width, gauge, render_row, truncate_to_width};
use settings_view::row::{BarControl, RowView};
use settings_view::view::SettingsView;

fn bound(item: SettingItem) -> RowView {
    let adapter = SettingsAdapter::new(vec![item]).unwrap();
    let mut row = adapter.create_row(adapter.view_type_for(0).unwrap());
    adapter.bind(0, &mut row).unwrap();
    row
}

#[test]
fn test_render_toggle_row() {
    let row = bound(
        ToggleSwitch::builder("wifi", "Wi-Fi")
            .checked(true)
            .icon(IconId(1))
            .build()
            .unwrap()
            .into(),
    );
    let line = render_row(&row, 24);
    assert_eq!(display_width(&line), 24);
    assert!(line.starts_with("◆ Wi-Fi"));
    assert!(line.ends_with("ON [x]"));
}

#[test]
fn test_render_spinner_row_hides_text() {
    let row = bound(
        SpinnerChoice::builder("mode", "Mode")
            .options(["Auto", "Manual"])
            .select(1)
            .build()
            .unwrap()
            .into(),
    );
    let line = render_row(&row, 30);
    assert!(line.starts_with("  Mode"));
    assert!(line.ends_with("< Manual >"));
}

#[test]
fn test_render_bar_row() {
    let row = bound(
        NumericalSelector::builder("volume", "Volume")
            .state(50)
            .unit("%")
            .build()
            .unwrap()
            .into(),
    );
    let line = render_row(&row, 40);
    assert!(line.ends_with("50% [=====-----]"));
}

#[test]
fn test_render_truncates_title_first() {
    let row = bound(
        ToggleSwitch::new("long", "A really long title for a narrow row")
            .unwrap()
            .into(),
    );
    let line = render_row(&row, 16);
    assert_eq!(display_width(&line), 16);
    assert!(line.ends_with("OFF [ ]"));
    assert!(line.contains('…'));
}

#[test]
fn test_truncate_wide_characters() {
    assert_eq!(truncate_to_width("設定画面", 5), "設定…");
    assert_eq!(truncate_to_width("abc", 3), "abc");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn test_gauge_empty_range() {
    let bar = BarControl {
        min: 5,
        max: 5,
        progress: 5,
        enabled: true,
        tracking: false,
    };
    assert_eq!(gauge(&bar), "[----------]");
}

#[test]
fn test_render_blank_row() {
    let row = RowView::new(ViewType::Normal);
    assert_eq!(render_row(&row, 6), "      ");
}

#[test]
fn test_visible_range_and_scroll_into_view() {
    let items: Vec<SettingItem> = (0..10)
        .map(|i| ToggleSwitch::new(format!("k{i}"), format!("Item {i}")).unwrap().into())
        .collect();
    let mut view = SettingsView::with_adapter(SettingsAdapter::new(items).unwrap());

    assert_eq!(view.visible_range(4), 0..4);
    view.scroll_into_view(6, 4);
    assert_eq!(view.visible_range(4), 3..7);
    view.scroll_into_view(1, 4);
    assert_eq!(view.visible_range(4), 1..5);

    view.scroll_by(-5);
    assert_eq!(view.scroll_position().top_index, 0);
    view.scroll_to(42, 7);
    assert_eq!(view.scroll_position().top_index, 9);
    assert_eq!(view.visible_range(4), 9..10);
}
