//! Tests for the list controller and per-variant binding.

use std::sync::{Arc, Mutex};

use settings_view::SettingsAdapter;
use settings_view::binder::ViewType;
use settings_view::config::SettingsConfig;
use settings_view::error::SettingsError;
use settings_view::item::{NumericalSelector, SettingItem, SpinnerChoice, StorageFileSelect, ToggleSwitch};
use settings_view::row::{RowControl, RowView};

fn bound_row(adapter: &SettingsAdapter, position: usize) -> RowView {
    let mut row = adapter.create_row(adapter.view_type_for(position).unwrap());
    adapter.bind(position, &mut row).unwrap();
    row
}

fn sample_items() -> Vec<SettingItem> {
    vec![
        ToggleSwitch::builder("wifi", "Wi-Fi")
            .text_on_true("TRUE")
            .text_on_false("FALSE")
            .build()
            .unwrap()
            .into(),
        SpinnerChoice::builder("mode", "Mode")
            .options(["Auto", "Manual", "Off"])
            .build()
            .unwrap()
            .into(),
        NumericalSelector::builder("size", "Size")
            .range(20, 80)
            .divine(5)
            .state(50)
            .unit("px")
            .build()
            .unwrap()
            .into(),
        StorageFileSelect::new("wallpaper", "Wallpaper").unwrap().into(),
    ]
}

#[test]
fn test_item_count_and_view_types() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    assert_eq!(adapter.item_count(), 4);
    assert_eq!(adapter.view_type_for(0), Some(ViewType::Switch));
    assert_eq!(adapter.view_type_for(1), Some(ViewType::Spinner));
    assert_eq!(adapter.view_type_for(2), Some(ViewType::SeekBar));
    assert_eq!(adapter.view_type_for(3), Some(ViewType::Normal));
    assert_eq!(adapter.view_type_for(4), None);
}

#[test]
fn test_bind_rejects_bad_position() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let mut row = RowView::new(ViewType::Switch);
    let err = adapter.bind(9, &mut row).unwrap_err();
    assert!(matches!(err, SettingsError::OutOfRange { field: "position", value: 9, .. }));
}

#[test]
fn test_bind_rejects_wrong_row_type() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let mut row = RowView::new(ViewType::Spinner);
    let err = adapter.bind(0, &mut row).unwrap_err();
    assert_eq!(
        err,
        SettingsError::ViewTypeMismatch {
            expected: ViewType::Switch,
            found: ViewType::Spinner,
        }
    );
}

#[test]
fn test_toggle_tap_flips_state() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    adapter.set_on_checked_change(move |position, checked| sink.lock().unwrap().push((position, checked)));

    let mut row = bound_row(&adapter, 0);
    assert_eq!(row.text(), "FALSE");
    assert_eq!(row.is_checked(), Some(false));

    row.click();
    assert_eq!(row.text(), "TRUE");
    assert_eq!(row.is_checked(), Some(true));
    assert!(adapter.item(0).unwrap().as_toggle().unwrap().is_checked());

    row.click_switch();
    assert_eq!(row.text(), "FALSE");
    assert!(!adapter.item(0).unwrap().as_toggle().unwrap().is_checked());

    assert_eq!(*events.lock().unwrap(), vec![(0, true), (0, false)]);
}

#[test]
fn test_disabled_toggle_ignores_gestures() {
    let adapter = SettingsAdapter::new(vec![
        ToggleSwitch::builder("wifi", "Wi-Fi")
            .enabled(false)
            .build()
            .unwrap()
            .into(),
    ])
    .unwrap();
    let fired = Arc::new(Mutex::new(0));
    let counter = fired.clone();
    adapter.set_on_checked_change(move |_, _| *counter.lock().unwrap() += 1);

    let mut row = bound_row(&adapter, 0);
    assert_eq!(row.alpha(), adapter.config().disabled_alpha);
    assert!(!row.is_control_enabled());

    row.click();
    row.click_switch();
    assert_eq!(row.is_checked(), Some(false));
    assert!(!adapter.item(0).unwrap().as_toggle().unwrap().is_checked());
    assert_eq!(*fired.lock().unwrap(), 0);
}

#[test]
fn test_disabled_alpha_follows_config() {
    let config = SettingsConfig::new().disabled_alpha(0.3);
    let adapter = SettingsAdapter::with_config(
        vec![
            StorageFileSelect::builder("file", "File")
                .enabled(false)
                .build()
                .unwrap()
                .into(),
        ],
        config,
    )
    .unwrap();
    let row = bound_row(&adapter, 0);
    assert_eq!(row.alpha(), 0.3);
}

#[test]
fn test_rebind_leaves_nothing_from_previous_item() {
    let adapter = SettingsAdapter::new(vec![
        ToggleSwitch::builder("a", "Alpha")
            .checked(true)
            .text_on_true("yes")
            .build()
            .unwrap()
            .into(),
        ToggleSwitch::builder("b", "Beta").build().unwrap().into(),
    ])
    .unwrap();

    let mut row = bound_row(&adapter, 0);
    assert_eq!(row.text(), "yes");

    adapter.bind(1, &mut row).unwrap();
    assert_eq!(row.title(), "Beta");
    assert_eq!(row.text(), "OFF");
    assert_eq!(row.is_checked(), Some(false));

    row.click();
    assert!(adapter.item(0).unwrap().as_toggle().unwrap().is_checked());
    assert!(adapter.item(1).unwrap().as_toggle().unwrap().is_checked());
    assert_eq!(row.text(), "ON");
}

#[test]
fn test_rebind_disabled_bar_drops_handlers() {
    let adapter = SettingsAdapter::new(vec![
        NumericalSelector::builder("live", "Live").state(10).build().unwrap().into(),
        NumericalSelector::builder("locked", "Locked")
            .state(40)
            .enabled(false)
            .build()
            .unwrap()
            .into(),
    ])
    .unwrap();

    let mut row = bound_row(&adapter, 0);
    adapter.bind(1, &mut row).unwrap();
    row.start_tracking();
    row.move_bar(90);
    row.stop_tracking();

    assert_eq!(row.bar().unwrap().progress, 40);
    assert_eq!(row.text(), "40");
    assert_eq!(adapter.item(0).unwrap().as_numerical().unwrap().state(), 10);
    assert_eq!(adapter.item(1).unwrap().as_numerical().unwrap().state(), 40);
}

#[test]
fn test_spinner_hides_text_and_selects() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let mut row = bound_row(&adapter, 1);
    assert!(!row.is_text_visible());
    assert_eq!(row.selected_option(), Some(0));

    row.select_option(2);
    let spinner = adapter.item(1).unwrap().as_spinner().cloned().unwrap();
    assert_eq!(spinner.select(), 2);
    assert!(spinner.is_focusable());

    row.select_option(7);
    assert_eq!(adapter.item(1).unwrap().as_spinner().unwrap().select(), 2);
}

#[test]
fn test_bar_updates_text_and_reports_once() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = values.clone();
    adapter.set_on_value_change(move |_adapter, value| sink.lock().unwrap().push(value));

    let mut row = bound_row(&adapter, 2);
    let bar = *row.bar().unwrap();
    assert_eq!((bar.min, bar.max, bar.progress), (0, 12, 6));
    assert_eq!(row.text(), "50px");

    row.start_tracking();
    row.move_bar(7);
    assert_eq!(row.text(), "55px");
    row.move_bar(9);
    row.move_bar(8);
    assert!(values.lock().unwrap().is_empty());
    row.stop_tracking();

    assert_eq!(row.text(), "60px");
    assert_eq!(adapter.item(2).unwrap().as_numerical().unwrap().state(), 60);
    assert_eq!(*values.lock().unwrap(), vec![60]);
}

#[test]
fn test_item_click_listener_receives_position() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let clicks = Arc::new(Mutex::new(Vec::new()));
    let sink = clicks.clone();
    adapter.set_on_item_click(move |row, position| sink.lock().unwrap().push((row.title().to_string(), position)));

    let mut row = bound_row(&adapter, 3);
    row.click();
    assert_eq!(*clicks.lock().unwrap(), vec![("Wallpaper".to_string(), 3)]);
}

#[test]
fn test_clear_listeners() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let fired = Arc::new(Mutex::new(0));
    let counter = fired.clone();
    adapter.set_on_checked_change(move |_, _| *counter.lock().unwrap() += 1);
    adapter.clear_listeners();

    bound_row(&adapter, 0).click();
    assert_eq!(*fired.lock().unwrap(), 0);
}

#[test]
fn test_gestures_mark_adapter_dirty() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    adapter.clear_dirty();

    let mut row = bound_row(&adapter, 0);
    assert!(!adapter.is_dirty());
    row.click();
    assert!(adapter.is_dirty());
}

#[test]
fn test_push_and_remove() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let err = adapter.push(ToggleSwitch::new("wifi", "Again").unwrap()).unwrap_err();
    assert_eq!(err, SettingsError::DuplicateIdentifier("wifi".to_string()));

    adapter.push(ToggleSwitch::new("bluetooth", "Bluetooth").unwrap()).unwrap();
    assert_eq!(adapter.position_of("bluetooth"), Some(4));

    let removed = adapter.remove("mode").unwrap();
    assert_eq!(removed.keyword(), "mode");
    assert_eq!(adapter.item_count(), 4);
    assert_eq!(adapter.position_of("bluetooth"), Some(3));
    assert!(adapter.remove("mode").is_none());
}

#[test]
fn test_toggle_reads_enabled_at_fire_time() {
    let adapter = SettingsAdapter::new(vec![
        ToggleSwitch::new("a", "A").unwrap().into(),
        ToggleSwitch::new("b", "B").unwrap().into(),
    ])
    .unwrap();
    let mut row = bound_row(&adapter, 1);

    adapter.update_item(1, |item| item.set_enabled(false));
    row.click();
    assert!(!adapter.item(1).unwrap().as_toggle().unwrap().is_checked());
}

#[test]
fn test_bar_reads_enabled_at_fire_time() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = values.clone();
    adapter.set_on_value_change(move |_adapter, value| sink.lock().unwrap().push(value));
    let mut row = bound_row(&adapter, 2);

    adapter.update_item(2, |item| item.set_enabled(false));
    row.start_tracking();
    row.move_bar(8);
    row.stop_tracking();

    assert_eq!(adapter.item(2).unwrap().as_numerical().unwrap().state(), 50);
    assert!(values.lock().unwrap().is_empty());
    let bar = *row.bar().unwrap();
    assert_eq!(bar.progress, 6);
    assert!(!bar.enabled);
    assert!(!bar.tracking);
    assert_eq!(row.text(), "50px");
}

#[test]
fn test_spinner_reads_enabled_at_fire_time() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    let mut row = bound_row(&adapter, 1);

    adapter.update_item(1, |item| item.set_enabled(false));
    row.select_option(2);

    let spinner = adapter.item(1).unwrap().as_spinner().cloned().unwrap();
    assert_eq!(spinner.select(), 0);
    assert!(!spinner.is_focusable());
    assert_eq!(row.selected_option(), Some(0));
    assert!(!row.is_control_enabled());
}

#[test]
fn test_control_kinds_per_row() {
    let adapter = SettingsAdapter::new(sample_items()).unwrap();
    assert!(matches!(bound_row(&adapter, 0).control(), RowControl::Switch(_)));
    assert!(matches!(bound_row(&adapter, 1).control(), RowControl::Spinner(_)));
    assert!(matches!(bound_row(&adapter, 2).control(), RowControl::Bar(_)));
    assert!(matches!(bound_row(&adapter, 3).control(), RowControl::None));
}
