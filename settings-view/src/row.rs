//! Recyclable row widget state.
//!
//! A [`RowView`] is what the host keeps for each on-screen row: the texts,
//! icon slot, opacity, primary control and the handlers wired to the row's
//! gestures. The host creates rows per [`ViewType`] and hands them back to
//! the adapter to be rebound as the list scrolls. Binders always start from
//! [`RowView::reset`], so nothing from a previous item survives a rebind.

use std::fmt;
use std::sync::Arc;

use crate::binder::ViewType;
use crate::item::IconId;

/// Opacity of an enabled row.
pub const ENABLED_ALPHA: f32 = 1.0;

/// Handler fired by a plain gesture (click, end of drag).
pub type RowHandler = Arc<dyn Fn(&mut RowView) + Send + Sync>;
/// Handler fired with an index (option picked, bar moved).
pub type RowIndexHandler = Arc<dyn Fn(&mut RowView, i32) + Send + Sync>;

/// Switch shown by toggle rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchControl {
    pub checked: bool,
    pub enabled: bool,
}

/// Drop-down shown by spinner rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpinnerControl {
    pub options: Vec<String>,
    pub selected: usize,
    pub enabled: bool,
}

/// Bar shown by numeric selector rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarControl {
    pub min: i32,
    pub max: i32,
    pub progress: i32,
    pub enabled: bool,
    /// A drag gesture is in progress.
    pub tracking: bool,
}

/// The interactive part of a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RowControl {
    #[default]
    None,
    Switch(SwitchControl),
    Spinner(SpinnerControl),
    Bar(BarControl),
}

#[derive(Default, Clone)]
struct RowHandlers {
    on_click: Option<RowHandler>,
    on_switch_click: Option<RowHandler>,
    on_option_selected: Option<RowIndexHandler>,
    on_progress_changed: Option<RowIndexHandler>,
    on_stop_tracking: Option<RowHandler>,
    on_item_click: Option<RowHandler>,
}

/// Widget state of one on-screen row.
#[derive(Clone)]
pub struct RowView {
    view_type: ViewType,
    title: String,
    text: String,
    text_visible: bool,
    icon: Option<IconId>,
    alpha: f32,
    control: RowControl,
    handlers: RowHandlers,
}

impl RowView {
    /// Create an empty row for `view_type`.
    pub fn new(view_type: ViewType) -> Self {
        Self {
            view_type,
            title: String::new(),
            text: String::new(),
            text_visible: true,
            icon: None,
            alpha: ENABLED_ALPHA,
            control: RowControl::None,
            handlers: RowHandlers::default(),
        }
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// Clear everything a previous bind left behind.
    pub fn reset(&mut self) {
        *self = Self::new(self.view_type);
    }

    // -------------------------------------------------------------------------
    // Display state
    // -------------------------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title. Blank titles are ignored.
    pub fn set_title(&mut self, title: &str) {
        if !title.trim().is_empty() {
            self.title = title.to_string();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_text_visible(&self) -> bool {
        self.text_visible
    }

    pub fn set_text_visible(&mut self, visible: bool) {
        self.text_visible = visible;
    }

    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    pub fn is_icon_visible(&self) -> bool {
        self.icon.is_some()
    }

    pub fn set_icon(&mut self, icon: Option<IconId>) {
        self.icon = icon;
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    pub fn control(&self) -> &RowControl {
        &self.control
    }

    pub fn set_control(&mut self, control: RowControl) {
        self.control = control;
    }

    /// Whether the row's primary control accepts input.
    pub fn is_control_enabled(&self) -> bool {
        match &self.control {
            RowControl::None => true,
            RowControl::Switch(switch) => switch.enabled,
            RowControl::Spinner(spinner) => spinner.enabled,
            RowControl::Bar(bar) => bar.enabled,
        }
    }

    pub fn set_control_enabled(&mut self, enabled: bool) {
        match &mut self.control {
            RowControl::None => {}
            RowControl::Switch(switch) => switch.enabled = enabled,
            RowControl::Spinner(spinner) => spinner.enabled = enabled,
            RowControl::Bar(bar) => bar.enabled = enabled,
        }
    }

    /// Check state of the switch, if this row has one.
    pub fn is_checked(&self) -> Option<bool> {
        match &self.control {
            RowControl::Switch(switch) => Some(switch.checked),
            _ => None,
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let RowControl::Switch(switch) = &mut self.control {
            switch.checked = checked;
        }
    }

    /// Selected spinner index, if this row has a spinner.
    pub fn selected_option(&self) -> Option<usize> {
        match &self.control {
            RowControl::Spinner(spinner) => Some(spinner.selected),
            _ => None,
        }
    }

    /// Bar state, if this row has a bar.
    pub fn bar(&self) -> Option<&BarControl> {
        match &self.control {
            RowControl::Bar(bar) => Some(bar),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Handler registration
    // -------------------------------------------------------------------------

    pub fn set_on_click(&mut self, handler: RowHandler) {
        self.handlers.on_click = Some(handler);
    }

    pub fn set_on_switch_click(&mut self, handler: RowHandler) {
        self.handlers.on_switch_click = Some(handler);
    }

    pub fn set_on_option_selected(&mut self, handler: RowIndexHandler) {
        self.handlers.on_option_selected = Some(handler);
    }

    pub fn set_on_progress_changed(&mut self, handler: RowIndexHandler) {
        self.handlers.on_progress_changed = Some(handler);
    }

    pub fn set_on_stop_tracking(&mut self, handler: RowHandler) {
        self.handlers.on_stop_tracking = Some(handler);
    }

    /// Handler run after the row's own click handling.
    pub fn set_on_item_click(&mut self, handler: RowHandler) {
        self.handlers.on_item_click = Some(handler);
    }

    /// Whether any gesture handler is currently registered.
    pub fn has_handlers(&self) -> bool {
        let h = &self.handlers;
        h.on_click.is_some()
            || h.on_switch_click.is_some()
            || h.on_option_selected.is_some()
            || h.on_progress_changed.is_some()
            || h.on_stop_tracking.is_some()
            || h.on_item_click.is_some()
    }

    // -------------------------------------------------------------------------
    // Gestures (delivered by the host)
    // -------------------------------------------------------------------------

    /// The user tapped the row.
    pub fn click(&mut self) {
        if let Some(handler) = self.handlers.on_click.clone() {
            handler(self);
        }
        if let Some(handler) = self.handlers.on_item_click.clone() {
            handler(self);
        }
    }

    /// The user tapped the switch itself. Ignored while the switch is disabled.
    pub fn click_switch(&mut self) {
        if !matches!(self.control, RowControl::Switch(SwitchControl { enabled: true, .. })) {
            return;
        }
        if let Some(handler) = self.handlers.on_switch_click.clone() {
            handler(self);
        }
    }

    /// The user picked spinner option `index`. Ignored while disabled or out of bounds.
    pub fn select_option(&mut self, index: usize) {
        let RowControl::Spinner(spinner) = &mut self.control else {
            return;
        };
        if !spinner.enabled || index >= spinner.options.len() {
            return;
        }
        spinner.selected = index;
        if let Some(handler) = self.handlers.on_option_selected.clone() {
            handler(self, index as i32);
        }
    }

    /// The user started dragging the bar.
    pub fn start_tracking(&mut self) {
        if let RowControl::Bar(bar) = &mut self.control
            && bar.enabled
        {
            bar.tracking = true;
        }
    }

    /// The user moved the bar to `position`. Ignored while disabled.
    pub fn move_bar(&mut self, position: i32) {
        let RowControl::Bar(bar) = &mut self.control else {
            return;
        };
        if !bar.enabled {
            return;
        }
        let position = position.clamp(bar.min, bar.max.max(bar.min));
        if position == bar.progress {
            return;
        }
        bar.progress = position;
        if let Some(handler) = self.handlers.on_progress_changed.clone() {
            handler(self, position);
        }
    }

    /// The user released the bar.
    pub fn stop_tracking(&mut self) {
        let RowControl::Bar(bar) = &mut self.control else {
            return;
        };
        if !bar.enabled {
            return;
        }
        bar.tracking = false;
        if let Some(handler) = self.handlers.on_stop_tracking.clone() {
            handler(self);
        }
    }
}

impl fmt::Debug for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowView")
            .field("view_type", &self.view_type)
            .field("title", &self.title)
            .field("text", &self.text)
            .field("text_visible", &self.text_visible)
            .field("icon", &self.icon)
            .field("alpha", &self.alpha)
            .field("control", &self.control)
            .field("has_handlers", &self.has_handlers())
            .finish()
    }
}
