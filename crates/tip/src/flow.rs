//! Tip flow for the post-ride tip screen.
//!
//! Owns the selection for one screen visit and hands the resolved amount to
//! the caller when the passenger confirms. Clipboard, wallet intents and
//! payment execution belong to the host; this type only produces the values
//! they need.

use crate::domain::{
    CurrencyDisplayMode, ExchangeRate, LightningAddress, Sats, SelectionState, TipSelection,
    format_for_display, is_submittable,
};
use crate::error::{Result, TipError};
use crate::storage::TipSettings;

/// Tip flow state machine
pub struct TipFlow {
    presets: Vec<Sats>,
    display_mode: CurrencyDisplayMode,
    exchange_rate: Option<ExchangeRate>,
    recipient: Option<LightningAddress>,
    selection: TipSelection,
    on_tip_sent: Option<Box<dyn FnMut(Sats)>>,
    on_back: Option<Box<dyn FnMut()>>,
}

impl TipFlow {
    pub fn new(settings: &TipSettings) -> Self {
        Self {
            presets: settings.presets.clone(),
            display_mode: settings.display_mode,
            exchange_rate: None,
            recipient: None,
            selection: TipSelection::new(),
            on_tip_sent: None,
            on_back: None,
        }
    }

    pub fn recipient(mut self, address: LightningAddress) -> Self {
        self.recipient = Some(address);
        self
    }

    pub fn exchange_rate(mut self, rate: Option<ExchangeRate>) -> Self {
        self.exchange_rate = rate;
        self
    }

    pub fn on_tip_sent<F>(mut self, f: F) -> Self
    where
        F: FnMut(Sats) + 'static,
    {
        self.on_tip_sent = Some(Box::new(f));
        self
    }

    pub fn on_back<F>(mut self, f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_back = Some(Box::new(f));
        self
    }

    pub fn presets(&self) -> &[Sats] {
        &self.presets
    }

    /// Preset amounts rendered in the current display mode
    pub fn preset_labels(&self) -> Vec<String> {
        self.presets
            .iter()
            .map(|amount| format_for_display(*amount, self.display_mode, self.exchange_rate))
            .collect()
    }

    pub fn selection(&self) -> &TipSelection {
        &self.selection
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Select the preset at `index`. Out-of-range taps are ignored.
    pub fn select_preset(&mut self, index: usize) {
        match self.presets.get(index) {
            Some(amount) => {
                self.selection.select_preset(*amount);
                tracing::debug!(index, amount, "Tip preset selected");
            }
            None => {
                tracing::debug!(index, presets = self.presets.len(), "Ignoring unknown preset");
            }
        }
    }

    pub fn enter_custom(&mut self, text: &str) {
        self.selection.enter_custom(text);
        tracing::debug!(state = self.selection.state().as_str(), "Custom tip edited");
    }

    pub fn clear_custom(&mut self) {
        self.selection.clear_custom();
    }

    pub fn set_display_mode(&mut self, mode: CurrencyDisplayMode) {
        self.display_mode = mode;
    }

    pub fn display_mode(&self) -> CurrencyDisplayMode {
        self.display_mode
    }

    pub fn set_exchange_rate(&mut self, rate: Option<ExchangeRate>) {
        self.exchange_rate = rate;
    }

    pub fn effective_amount(&self) -> Sats {
        self.selection.effective_amount()
    }

    /// Current amount rendered for the amount label
    pub fn display_amount(&self) -> String {
        format_for_display(
            self.effective_amount(),
            self.display_mode,
            self.exchange_rate,
        )
    }

    pub fn can_submit(&self) -> bool {
        is_submittable(self.effective_amount())
    }

    /// Hand the amount to `on_tip_sent` and start a fresh selection
    pub fn confirm(&mut self) -> Result<Sats> {
        let amount = self.effective_amount();
        if !is_submittable(amount) {
            return Err(TipError::NoAmount);
        }

        tracing::info!(
            amount,
            mode = self.display_mode.as_str(),
            recipient = ?self.recipient.as_ref().map(ToString::to_string),
            "Tip confirmed"
        );

        if let Some(on_tip_sent) = &mut self.on_tip_sent {
            on_tip_sent(amount);
        }
        self.selection.reset();

        Ok(amount)
    }

    pub fn back(&mut self) {
        if let Some(on_back) = &mut self.on_back {
            on_back();
        }
    }

    /// Address text for the host clipboard
    pub fn copy_target(&self) -> Result<String> {
        self.recipient
            .as_ref()
            .map(|address| address.to_string())
            .ok_or(TipError::NoRecipient)
    }

    /// URI for opening an external wallet app
    pub fn wallet_uri(&self) -> Result<String> {
        self.recipient
            .as_ref()
            .map(LightningAddress::to_uri)
            .ok_or(TipError::NoRecipient)
    }
}
