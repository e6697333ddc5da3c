//! Tip selection state
//!
//! A selection is either a preset amount or a custom entry, never both.
//! Picking a preset clears the custom text and typing a custom amount
//! clears the preset.

use super::amount::{Sats, parse_sats};

/// Where the current amount comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    PresetSelected,
    CustomEntered,
}

impl SelectionState {
    pub fn as_str(&self) -> &str {
        match self {
            SelectionState::NoSelection => "no-selection",
            SelectionState::PresetSelected => "preset",
            SelectionState::CustomEntered => "custom",
        }
    }
}

/// Transient tip selection for one screen visit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipSelection {
    preset: Option<Sats>,
    custom_text: String,
}

impl TipSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from raw parts without edit-boundary filtering
    pub fn from_parts(preset: Option<Sats>, custom_text: impl Into<String>) -> Self {
        Self {
            preset,
            custom_text: custom_text.into(),
        }
    }

    pub fn preset(&self) -> Option<Sats> {
        self.preset
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    /// Choose a preset, discarding any custom entry
    pub fn select_preset(&mut self, amount: Sats) {
        self.preset = Some(amount);
        self.custom_text.clear();
    }

    /// Replace the custom entry with the digits of `text`.
    ///
    /// Non-digit characters are dropped. A non-empty entry clears the preset.
    pub fn enter_custom(&mut self, text: &str) {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            self.preset = None;
        }
        self.custom_text = digits;
    }

    pub fn clear_custom(&mut self) {
        self.custom_text.clear();
    }

    pub fn reset(&mut self) {
        self.preset = None;
        self.custom_text.clear();
    }

    pub fn state(&self) -> SelectionState {
        if !self.custom_text.is_empty() {
            SelectionState::CustomEntered
        } else if self.preset.is_some() {
            SelectionState::PresetSelected
        } else {
            SelectionState::NoSelection
        }
    }

    pub fn effective_amount(&self) -> Sats {
        resolve_effective_amount(self)
    }
}

/// Effective amount of a selection.
///
/// Custom text wins when present; unparsable text resolves to zero.
pub fn resolve_effective_amount(selection: &TipSelection) -> Sats {
    if selection.custom_text.is_empty() {
        selection.preset.unwrap_or(0)
    } else {
        parse_sats(&selection.custom_text)
    }
}
