//! Rule symbols and how caller overrides are merged over the defaults.

/// Default symbol for the rules above the header and below the body.
pub const EQUAL: &str = "=";

/// Default symbol for the rule between header and body.
pub const DASH: &str = "-";

/// Resolved rule symbols for a renderer.
///
/// Each symbol is repeated once per cell of width, so a multi-character
/// symbol produces a proportionally longer rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Rule above the header rows.
    pub head_top: String,
    /// Rule between header and body rows.
    pub head_bottom: String,
    /// Rule after the last body row.
    pub body_bottom: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            head_top: EQUAL.to_string(),
            head_bottom: DASH.to_string(),
            body_bottom: EQUAL.to_string(),
        }
    }
}

impl Settings {
    /// Create settings with the default symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol of the rule above the header.
    #[must_use]
    pub fn head_top(mut self, symbol: impl Into<String>) -> Self {
        self.head_top = symbol.into();
        self
    }

    /// Set the symbol of the rule between header and body.
    #[must_use]
    pub fn head_bottom(mut self, symbol: impl Into<String>) -> Self {
        self.head_bottom = symbol.into();
        self
    }

    /// Set the symbol of the closing rule.
    #[must_use]
    pub fn body_bottom(mut self, symbol: impl Into<String>) -> Self {
        self.body_bottom = symbol.into();
        self
    }

    /// Apply `overrides` on top of these settings.
    ///
    /// A present value always wins, including an empty string.
    #[must_use]
    pub fn merge(mut self, overrides: &SettingsOverride) -> Self {
        if let Some(symbol) = &overrides.head_top {
            self.head_top.clone_from(symbol);
        }
        if let Some(symbol) = &overrides.head_bottom {
            self.head_bottom.clone_from(symbol);
        }
        if let Some(symbol) = &overrides.body_bottom {
            self.body_bottom.clone_from(symbol);
        }
        self
    }
}

/// A partial set of rule symbols supplied by a caller.
///
/// `None` means "use the default"; `Some("")` is honored as an empty
/// symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverride {
    /// Override for [`Settings::head_top`].
    pub head_top: Option<String>,
    /// Override for [`Settings::head_bottom`].
    pub head_bottom: Option<String>,
    /// Override for [`Settings::body_bottom`].
    pub body_bottom: Option<String>,
}

impl SettingsOverride {
    /// Create an override that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the rule above the header.
    #[must_use]
    pub fn head_top(mut self, symbol: impl Into<String>) -> Self {
        self.head_top = Some(symbol.into());
        self
    }

    /// Override the rule between header and body.
    #[must_use]
    pub fn head_bottom(mut self, symbol: impl Into<String>) -> Self {
        self.head_bottom = Some(symbol.into());
        self
    }

    /// Override the closing rule.
    #[must_use]
    pub fn body_bottom(mut self, symbol: impl Into<String>) -> Self {
        self.body_bottom = Some(symbol.into());
        self
    }

    /// Merge this override over the default settings.
    #[must_use]
    pub fn resolve(&self) -> Settings {
        Settings::default().merge(self)
    }
}

impl From<SettingsOverride> for Settings {
    fn from(overrides: SettingsOverride) -> Self {
        overrides.resolve()
    }
}
