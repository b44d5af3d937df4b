//! Per-variant binding of items onto rows.
//!
//! Dispatch is a match over [`SettingItem`]: toggles get a switch row,
//! spinners a drop-down row, numeric selectors a bar row, and file selects a
//! plain text row. Every binder begins with [`RowView::reset`] and registers
//! fresh handlers that capture the adapter's shared store and the row
//! position, never a copy of the item.

use std::sync::Arc;

use log::{debug, trace};

use crate::adapter::SettingsAdapter;
use crate::config::SettingsConfig;
use crate::host::ChooserRequest;
use crate::item::{NumericalSelector, SettingItem, SpinnerChoice, StorageFileSelect, ToggleSwitch};
use crate::mapper::BarMapping;
use crate::row::{BarControl, ENABLED_ALPHA, RowControl, RowHandler, RowView, SpinnerControl, SwitchControl};

/// Row layout used for an item. The host recycles rows per view type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// Title and text. Used by file selects.
    Normal,
    Switch,
    Spinner,
    SeekBar,
}

/// Render enabled state: full opacity and a live control when enabled,
/// reduced opacity and a locked control when not.
pub fn apply_enabled(row: &mut RowView, enabled: bool, config: &SettingsConfig) {
    let alpha = if enabled { ENABLED_ALPHA } else { config.disabled_alpha };
    row.set_alpha(alpha);
    row.set_control_enabled(enabled);
}

/// Bind `item`, found at `position`, onto `row`.
pub(crate) fn bind_item(adapter: &SettingsAdapter, position: usize, item: &SettingItem, row: &mut RowView) {
    row.reset();
    row.set_title(item.title());
    row.set_icon(item.icon());

    match item {
        SettingItem::Toggle(toggle) => bind_toggle(adapter, position, toggle, row),
        SettingItem::Spinner(spinner) => bind_spinner(adapter, position, spinner, row),
        SettingItem::Numerical(selector) => bind_numerical(adapter, position, selector, row),
        SettingItem::FileSelect(file) => bind_file_select(adapter, file, row),
    }

    let owner = adapter.clone();
    row.set_on_item_click(Arc::new(move |row: &mut RowView| owner.notify_item_click(row, position)));
}

// =============================================================================
// Toggle
// =============================================================================

fn bind_toggle(adapter: &SettingsAdapter, position: usize, item: &ToggleSwitch, row: &mut RowView) {
    row.set_control(RowControl::Switch(SwitchControl {
        checked: item.is_checked(),
        enabled: item.is_enabled(),
    }));
    row.set_text(item.display_text());
    apply_enabled(row, item.is_enabled(), adapter.config());

    // Row tap and switch tap share one mutation path.
    let owner = adapter.clone();
    let handler: RowHandler = Arc::new(move |row: &mut RowView| toggle_checked(&owner, position, row));
    row.set_on_click(handler.clone());
    row.set_on_switch_click(handler);
}

fn toggle_checked(adapter: &SettingsAdapter, position: usize, row: &mut RowView) {
    let store = adapter.store();
    let enabled = store.read(|items| {
        items
            .get(position)
            .and_then(SettingItem::as_toggle)
            .map(ToggleSwitch::is_enabled)
    });
    if enabled != Some(true) {
        return;
    }

    let Some((checked, text)) = store
        .update_at(position, |item| {
            item.as_toggle_mut().map(|toggle| {
                toggle.set_checked(!toggle.is_checked());
                (toggle.is_checked(), toggle.display_text().to_string())
            })
        })
        .flatten()
    else {
        return;
    };

    row.set_checked(checked);
    row.set_text(text);
    debug!("Toggle at {} switched to {}", position, checked);
    adapter.notify_checked_change(position, checked);
}

// =============================================================================
// Spinner
// =============================================================================

fn bind_spinner(adapter: &SettingsAdapter, position: usize, item: &SpinnerChoice, row: &mut RowView) {
    row.set_text_visible(false);
    row.set_control(RowControl::Spinner(SpinnerControl {
        options: item.options().to_vec(),
        selected: item.select(),
        enabled: item.is_enabled(),
    }));
    apply_enabled(row, item.is_enabled(), adapter.config());

    let owner = adapter.clone();
    row.set_on_option_selected(Arc::new(move |row: &mut RowView, index: i32| {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        let locked_at = owner
            .store()
            .update_at(position, |item| {
                let spinner = item.as_spinner_mut()?;
                if !spinner.is_enabled() {
                    return Some(spinner.select());
                }
                if spinner.set_select(index).is_ok() {
                    spinner.mark_focusable();
                    trace!("Spinner '{}' selected option {}", spinner.keyword(), index);
                }
                None
            })
            .flatten();
        if let Some(selected) = locked_at {
            if let RowControl::Spinner(mut spinner) = row.control().clone() {
                spinner.selected = selected;
                row.set_control(RowControl::Spinner(spinner));
            }
            apply_enabled(row, false, owner.config());
        }
    }));
}

// =============================================================================
// Numerical selector
// =============================================================================

fn bind_numerical(adapter: &SettingsAdapter, position: usize, item: &NumericalSelector, row: &mut RowView) {
    let mapping = BarMapping::for_selector(item, adapter.config());
    row.set_control(RowControl::Bar(BarControl {
        min: mapping.bar_min(),
        max: mapping.bar_max(),
        progress: mapping.to_position(item.state()),
        enabled: item.is_enabled(),
        tracking: false,
    }));
    row.set_text(item.display_text());
    apply_enabled(row, item.is_enabled(), adapter.config());

    // A disabled selector shows its value but takes no input.
    if !item.is_enabled() {
        return;
    }

    let owner = adapter.clone();
    row.set_on_progress_changed(Arc::new(move |row: &mut RowView, bar_position: i32| {
        let value = mapping.to_value(bar_position);
        let outcome = owner
            .store()
            .update_at(position, |item| {
                item.as_numerical_mut().map(|selector| {
                    if !selector.is_enabled() {
                        return Err(selector.state());
                    }
                    if selector.set_state(value).is_err() {
                        debug!("Bar produced {} outside the domain of '{}'", value, selector.keyword());
                    }
                    Ok(selector.display_text())
                })
            })
            .flatten();
        match outcome {
            Some(Ok(text)) => row.set_text(text),
            // Disabled since the bind: put the bar back and lock it.
            Some(Err(state)) => {
                if let RowControl::Bar(mut bar) = row.control().clone() {
                    bar.progress = mapping.to_position(state);
                    bar.tracking = false;
                    row.set_control(RowControl::Bar(bar));
                }
                apply_enabled(row, false, owner.config());
            }
            None => {}
        }
    }));

    let owner = adapter.clone();
    row.set_on_stop_tracking(Arc::new(move |_row: &mut RowView| {
        let value = owner.store().read(|items| {
            items
                .get(position)
                .and_then(SettingItem::as_numerical)
                .filter(|selector| selector.is_enabled())
                .map(NumericalSelector::state)
        });
        if let Some(value) = value {
            owner.notify_value_change(value);
        }
    }));
}

// =============================================================================
// File select
// =============================================================================

fn bind_file_select(adapter: &SettingsAdapter, item: &StorageFileSelect, row: &mut RowView) {
    row.set_text(item.display_text());
    apply_enabled(row, item.is_enabled(), adapter.config());

    let owner = adapter.clone();
    let keyword = item.keyword().to_string();
    row.set_on_click(Arc::new(move |_row: &mut RowView| request_file(&owner, &keyword)));
}

/// Ask for storage access, then open the chooser for the item `keyword`.
///
/// The result is written to the item found by keyword when it arrives.
fn request_file(adapter: &SettingsAdapter, keyword: &str) {
    let request = adapter.store().read(|items| {
        items
            .iter()
            .find(|item| item.keyword() == keyword)
            .and_then(SettingItem::as_file_select)
            .filter(|file| file.is_enabled())
            .map(|file| ChooserRequest {
                mime_type: file.mime_type().to_string(),
                initial_uri: file.uri().cloned(),
            })
    });
    let Some(request) = request else {
        return;
    };

    let bridge = adapter.bridge().clone();
    let store = adapter.store().clone();
    let keyword = keyword.to_string();
    let capability = adapter.config().storage_capability.clone();

    adapter.bridge().request_capability(&capability, move |granted| {
        if !granted {
            debug!("Storage access denied for '{}'", keyword);
            return;
        }
        bridge.launch_chooser(&request, move |chosen| {
            let Some(uri) = chosen else {
                debug!("File chooser for '{}' cancelled", keyword);
                return;
            };
            let callback = store
                .update_by_keyword(&keyword, |item| {
                    item.as_file_select_mut().and_then(|file| {
                        file.set_uri(Some(uri.clone()));
                        file.on_file_chosen()
                    })
                })
                .flatten();
            debug!("'{}' now points at {}", keyword, uri);
            if let Some(callback) = callback {
                callback(&uri);
            }
        });
    });
}
