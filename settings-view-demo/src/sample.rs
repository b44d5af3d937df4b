//! The settings shown by the demo.

use log::info;
use settings_view::Result;
use settings_view::item::{IconId, NumericalSelector, SettingItem, SpinnerChoice, StorageFileSelect, ToggleSwitch};

pub fn sample_items() -> Result<Vec<SettingItem>> {
    Ok(vec![
        ToggleSwitch::builder("switch", "Switch")
            .icon(IconId(1))
            .text_on_true("TRUE")
            .text_on_false("FALSE")
            .build()?
            .into(),
        ToggleSwitch::builder("locked_switch", "Locked switch")
            .checked(true)
            .enabled(false)
            .build()?
            .into(),
        SpinnerChoice::builder("theme", "Theme")
            .options(["System", "Light", "Dark"])
            .build()?
            .into(),
        NumericalSelector::builder("font_size", "Font size")
            .range(8, 32)
            .divine(2)
            .state(14)
            .unit("pt")
            .build()?
            .into(),
        NumericalSelector::builder("refresh_rate", "Refresh rate")
            .params([30, 60, 90, 120, 144])
            .state(60)
            .unit("Hz")
            .build()?
            .into(),
        NumericalSelector::builder("temperature", "Temperature")
            .range(-20, 40)
            .state(21)
            .unit("°C")
            .build()?
            .into(),
        StorageFileSelect::builder("wallpaper", "Wallpaper")
            .icon(IconId(2))
            .mime_type("image/*")
            .on_file_chosen(|uri| info!("Wallpaper set to {}", uri))
            .build()?
            .into(),
    ])
}
