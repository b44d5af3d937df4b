//! Tests for saving and restoring view state through a bundle.

use settings_view::SettingsAdapter;
use settings_view::bundle::{BundleBackend, MemoryBundle, StateBundle};
use settings_view::item::{SettingItem, SpinnerChoice, ToggleSwitch};
use settings_view::persist::{ITEM_KEY_PREFIX, SCROLL_KEY, SavedItem, ScrollPosition};
use settings_view::view::SettingsView;

/// Backend that ignores the prefix when listing keys.
#[derive(Default)]
struct UnfilteredBundle(MemoryBundle);

impl BundleBackend for UnfilteredBundle {
    fn get_bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.0.get_bytes(key)
    }

    fn set_bytes(&mut self, key: &str, value: Vec<u8>) {
        self.0.set_bytes(key, value);
    }

    fn delete(&mut self, key: &str) {
        self.0.delete(key);
    }

    fn keys_with_prefix(&self, _prefix: &str) -> Vec<String> {
        self.0.keys_with_prefix("")
    }
}

fn items() -> Vec<SettingItem> {
    vec![
        ToggleSwitch::new("wifi", "Wi-Fi").unwrap().into(),
        ToggleSwitch::new("bluetooth", "Bluetooth").unwrap().into(),
        SpinnerChoice::builder("mode", "Mode")
            .options(["a", "b", "c"])
            .build()
            .unwrap()
            .into(),
        ToggleSwitch::new("nfc", "NFC").unwrap().into(),
    ]
}

fn toggle(adapter: &SettingsAdapter, keyword: &str) -> ToggleSwitch {
    let position = adapter.position_of(keyword).unwrap();
    adapter.item(position).unwrap().as_toggle().cloned().unwrap()
}

#[test]
fn test_save_restore_round_trip() {
    let adapter = SettingsAdapter::new(items()).unwrap();
    adapter.update_item(0, |item| item.as_toggle_mut().unwrap().set_checked(true));
    adapter.update_item(1, |item| item.set_enabled(false));
    let mut view = SettingsView::with_adapter(adapter);
    view.scroll_to(2, 14);

    let mut bundle: StateBundle = StateBundle::default();
    view.save_state(&mut bundle).unwrap();

    let mut restored = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    restored.restore_state(&mut bundle).unwrap();

    let adapter = restored.adapter().unwrap();
    assert!(toggle(adapter, "wifi").is_checked());
    assert!(toggle(adapter, "wifi").is_enabled());
    assert!(!toggle(adapter, "bluetooth").is_enabled());
    assert!(!toggle(adapter, "nfc").is_checked());
    assert_eq!(restored.scroll_position(), ScrollPosition::new(2, 14));
}

#[test]
fn test_only_toggles_are_saved() {
    let view = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    view.adapter()
        .unwrap()
        .update_item(2, |item| item.as_spinner_mut().unwrap().set_select(2).unwrap());

    let mut bundle: StateBundle = StateBundle::default();
    view.save_state(&mut bundle).unwrap();

    let keys = bundle.keys_with_prefix(ITEM_KEY_PREFIX);
    assert_eq!(keys, vec!["item:bluetooth", "item:nfc", "item:wifi"]);

    let mut restored = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    restored.restore_state(&mut bundle).unwrap();
    let spinner = restored.adapter().unwrap().item(2).unwrap();
    assert_eq!(spinner.as_spinner().unwrap().select(), 0);
}

#[test]
fn test_restore_drops_unknown_keywords() {
    let mut bundle: StateBundle = StateBundle::default();
    bundle
        .set(
            "item:removed",
            &SavedItem::Toggle {
                enabled: false,
                checked: true,
            },
        )
        .unwrap();
    bundle
        .set(
            "item:nfc",
            &SavedItem::Toggle {
                enabled: true,
                checked: true,
            },
        )
        .unwrap();
    bundle.set(SCROLL_KEY, &ScrollPosition::new(1, 3)).unwrap();

    let mut view = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    view.restore_state(&mut bundle).unwrap();

    let adapter = view.adapter().unwrap();
    assert!(toggle(adapter, "nfc").is_checked());
    assert_eq!(adapter.item_count(), 4);
    assert_eq!(view.scroll_position(), ScrollPosition::new(1, 3));
}

#[test]
fn test_restore_skips_kind_mismatch() {
    let mut bundle: StateBundle = StateBundle::default();
    bundle
        .set(
            "item:mode",
            &SavedItem::Toggle {
                enabled: false,
                checked: true,
            },
        )
        .unwrap();

    let mut view = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    view.restore_state(&mut bundle).unwrap();
    assert!(view.adapter().unwrap().item(2).unwrap().is_enabled());
}

#[test]
fn test_restore_consumes_bundle_keys() {
    let mut view = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    let mut bundle: StateBundle = StateBundle::default();
    view.save_state(&mut bundle).unwrap();
    assert!(!bundle.backend().is_empty());

    view.restore_state(&mut bundle).unwrap();
    assert!(bundle.backend().is_empty());
}

#[test]
fn test_save_without_adapter_zeroes_offset() {
    let mut view = SettingsView::new();
    view.scroll_to(3, 25);

    let mut bundle: StateBundle = StateBundle::default();
    view.save_state(&mut bundle).unwrap();
    assert_eq!(bundle.get::<ScrollPosition>(SCROLL_KEY).unwrap(), Some(ScrollPosition::new(3, 0)));
}

#[test]
fn test_save_with_empty_adapter_zeroes_offset() {
    let mut view = SettingsView::with_adapter(SettingsAdapter::new(Vec::new()).unwrap());
    view.scroll_to(0, 25);

    let mut bundle: StateBundle = StateBundle::default();
    view.save_state(&mut bundle).unwrap();
    assert_eq!(bundle.get::<ScrollPosition>(SCROLL_KEY).unwrap(), Some(ScrollPosition::new(0, 0)));
}

#[test]
fn test_restore_before_attach_applies_on_attach() {
    let source = SettingsAdapter::new(items()).unwrap();
    source.update_item(3, |item| item.as_toggle_mut().unwrap().set_checked(true));
    let mut bundle: StateBundle = StateBundle::default();
    SettingsView::with_adapter(source).save_state(&mut bundle).unwrap();

    let mut view = SettingsView::new();
    view.restore_state(&mut bundle).unwrap();
    view.attach(SettingsAdapter::new(items()).unwrap());

    assert!(toggle(view.adapter().unwrap(), "nfc").is_checked());
}

#[test]
fn test_memory_bundle_survives_bytes() {
    let adapter = SettingsAdapter::new(items()).unwrap();
    adapter.update_item(0, |item| item.as_toggle_mut().unwrap().set_checked(true));
    let mut bundle: StateBundle = StateBundle::default();
    SettingsView::with_adapter(adapter).save_state(&mut bundle).unwrap();

    let bytes = bundle.into_backend().to_bytes().unwrap();
    let mut reloaded = StateBundle::new(MemoryBundle::from_bytes(&bytes).unwrap());

    let mut view = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    view.restore_state(&mut reloaded).unwrap();
    assert!(toggle(view.adapter().unwrap(), "wifi").is_checked());
}

#[test]
fn test_corrupt_record_is_an_error() {
    let mut backend = MemoryBundle::new();
    backend.set_bytes(SCROLL_KEY, vec![1]);
    let mut bundle = StateBundle::new(backend);

    let mut view = SettingsView::new();
    assert!(view.restore_state(&mut bundle).is_err());
}

#[test]
fn test_save_replaces_stale_item_records() {
    let mut bundle: StateBundle = StateBundle::default();
    bundle
        .set(
            "item:removed",
            &SavedItem::Toggle {
                enabled: false,
                checked: true,
            },
        )
        .unwrap();

    let view = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    view.save_state(&mut bundle).unwrap();

    let keys = bundle.keys_with_prefix(ITEM_KEY_PREFIX);
    assert_eq!(keys, vec!["item:bluetooth", "item:nfc", "item:wifi"]);

    let mut restored = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    restored.restore_state(&mut bundle).unwrap();
    let adapter = restored.adapter().unwrap();
    assert!(!toggle(adapter, "wifi").is_checked());
    assert!(toggle(adapter, "bluetooth").is_enabled());
}

#[test]
fn test_restore_skips_keys_outside_item_prefix() {
    let mut bundle = StateBundle::new(UnfilteredBundle::default());
    bundle.set(SCROLL_KEY, &ScrollPosition::new(1, 0)).unwrap();
    bundle
        .set(
            "item:wifi",
            &SavedItem::Toggle {
                enabled: true,
                checked: true,
            },
        )
        .unwrap();

    let mut view = SettingsView::with_adapter(SettingsAdapter::new(items()).unwrap());
    view.restore_state(&mut bundle).unwrap();

    assert!(toggle(view.adapter().unwrap(), "wifi").is_checked());
    assert_eq!(view.scroll_position(), ScrollPosition::new(1, 0));
}
