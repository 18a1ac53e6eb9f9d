use crate::encumbrance::EncumbranceMethod;

/// Rules configuration passed explicitly into every derivation.
///
/// Settings that a table would normally toggle for the whole campaign live
/// here instead of in process-wide state, so two engines with different
/// settings can run side by side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    pub encumbrance: EncumbranceConfig,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encumbrance(encumbrance: EncumbranceConfig) -> Self {
        Self { encumbrance }
    }
}

/// Encumbrance tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncumbranceConfig {
    /// When false, the stored base speed is used and no load tier applies.
    pub enabled: bool,

    /// Weighing method used to turn carried items into a speed tier.
    pub method: EncumbranceMethod,

    /// Percentage of capacity at which treasure counts as a significant load.
    pub significant_load_percent: u32,
}

impl EncumbranceConfig {
    pub const DEFAULT_SIGNIFICANT_LOAD_PERCENT: u32 = 50;

    pub fn new(method: EncumbranceMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_significant_load_percent(mut self, percent: u32) -> Self {
        self.significant_load_percent = percent;
        self
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for EncumbranceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            method: EncumbranceMethod::default(),
            significant_load_percent: Self::DEFAULT_SIGNIFICANT_LOAD_PERCENT,
        }
    }
}
