//! Selection of exchange orders covering a requested fill amount.
//!
//! Orders are expected to be sorted by ascending effective price. The
//! selectors walk them from the front and keep taking orders until the
//! requested amount (plus a slippage buffer) is covered, so the result is the
//! cheapest prefix that fills the request. A second pass computes the fees
//! owed for filling the selected orders and picks fee orders covering them.
//!
//! Everything here is pure computation over borrowed inputs. Untyped input
//! (JSON orders, amount strings) can be checked with [`validation`] first.

pub mod config;
pub mod error;
pub mod fees;
pub mod order;
pub mod selection;
pub mod validation;

pub use {
    alloy::primitives::U256,
    config::Config,
    error::{AmountError, Error, SchemaError, ValidationError},
    fees::{
        FeeSelectionOptions,
        FeeSelectionResult,
        fee_to_fill_available,
        select_fee_orders_covering_fees,
        total_fee_for_orders,
    },
    order::{AssetSide, FillableOrder, Order},
    selection::{
        SelectionOptions,
        SelectionResult,
        select_orders_covering_maker_asset,
        select_orders_covering_taker_asset,
    },
};
