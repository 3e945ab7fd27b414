//! Order records consumed by the selectors.

use {
    alloy::primitives::U256,
    number::serialization::HexOrDecimalU256,
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// An offer to sell `maker_asset_amount` base units of the maker asset in
/// exchange for `taker_asset_amount` base units of the taker asset.
///
/// Filling the whole order costs the taker `taker_fee` base units of the fee
/// asset. Partial fills pay a proportional share, rounded down.
///
/// Amounts serialize as decimal strings. Fields other than the ones below are
/// ignored when deserializing, so full exchange order records can be read
/// directly.
#[serde_as]
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde_as(as = "HexOrDecimalU256")]
    pub maker_asset_amount: U256,
    #[serde_as(as = "HexOrDecimalU256")]
    #[serde(default)]
    pub taker_asset_amount: U256,
    #[serde_as(as = "HexOrDecimalU256")]
    #[serde(default)]
    pub taker_fee: U256,
}

/// Amounts of an order that the selectors read.
///
/// Implement this for richer order records (signed orders, orders with
/// metadata, ...) to select over them without converting to [`Order`].
pub trait FillableOrder {
    fn maker_asset_amount(&self) -> U256;
    fn taker_asset_amount(&self) -> U256;
    fn taker_fee(&self) -> U256;
}

impl FillableOrder for Order {
    fn maker_asset_amount(&self) -> U256 {
        self.maker_asset_amount
    }

    fn taker_asset_amount(&self) -> U256 {
        self.taker_asset_amount
    }

    fn taker_fee(&self) -> U256 {
        self.taker_fee
    }
}

impl<T: FillableOrder + ?Sized> FillableOrder for &T {
    fn maker_asset_amount(&self) -> U256 {
        (**self).maker_asset_amount()
    }

    fn taker_asset_amount(&self) -> U256 {
        (**self).taker_asset_amount()
    }

    fn taker_fee(&self) -> U256 {
        (**self).taker_fee()
    }
}

/// The asset whose fillable amount is being accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetSide {
    Maker,
    Taker,
}

impl AssetSide {
    /// The full amount of the order on this side, used when the caller does
    /// not provide remaining fillable amounts.
    pub fn amount<O: FillableOrder + ?Sized>(self, order: &O) -> U256 {
        match self {
            Self::Maker => order.maker_asset_amount(),
            Self::Taker => order.taker_asset_amount(),
        }
    }
}
