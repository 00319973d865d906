//! Display configuration shared by all document views.
//!
//! The App shell provides one [`DisplayConfig`] through Leptos context;
//! components read it with [`use_display_config`].

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Three-letter currency code shown before amounts, e.g. "USD"
    pub currency_code: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    /// chrono format string for timestamps
    pub datetime_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_code: "USD".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
            datetime_format: "%d.%m.%Y %H:%M".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn with_currency(mut self, code: &str) -> Self {
        self.currency_code = code.to_uppercase();
        self
    }
}

pub fn provide_display_config(config: DisplayConfig) {
    log::debug!("display config: {:?}", config);
    provide_context(config);
}

/// Config from context, or the defaults when no shell provided one
pub fn use_display_config() -> DisplayConfig {
    use_context::<DisplayConfig>().unwrap_or_default()
}
