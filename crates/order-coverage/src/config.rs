use {
    crate::{fees::FeeSelectionOptions, selection::SelectionOptions},
    alloy::primitives::U256,
    number::serialization::HexOrDecimalU256,
    serde::Deserialize,
    serde_with::serde_as,
};

/// Defaults applied to every selection, read from TOML.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Buffer added to the target of asset selections, in base units.
    #[serde_as(as = "HexOrDecimalU256")]
    #[serde(default)]
    pub slippage_buffer: U256,

    /// Buffer added to the fee liability of fee selections, in base units.
    /// The liability is rounded down per order, so this is where callers
    /// account for the accumulated rounding.
    #[serde_as(as = "HexOrDecimalU256")]
    #[serde(default)]
    pub fee_slippage_buffer: U256,
}

impl Config {
    pub fn from_toml(config: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config)
    }

    /// Options for an asset selection over fully fillable orders.
    pub fn selection_options(&self) -> SelectionOptions<'static> {
        SelectionOptions {
            available_amounts: None,
            slippage_buffer: self.slippage_buffer,
        }
    }

    /// Options for a fee selection over fully fillable orders.
    pub fn fee_selection_options(&self) -> FeeSelectionOptions<'static> {
        FeeSelectionOptions {
            available_for_orders: None,
            available_for_fee_orders: None,
            slippage_buffer: self.fee_slippage_buffer,
        }
    }
}
