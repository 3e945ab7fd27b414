//! Fee liability of a set of orders and the fee orders paying for it.
//!
//! Filling part of an order costs the same fraction of its taker fee, rounded
//! down. The rounding is per order and no slack is added for it, so the total
//! computed here can fall short of what an exchange charges across many
//! small fills. Callers that need exact coverage should pass a larger
//! `slippage_buffer`.

use {
    crate::{
        error::ValidationError,
        order::{AssetSide, FillableOrder},
        selection::{self, AvailableAmounts},
    },
    alloy::primitives::U256,
    number::u256_ext::U256Ext,
    tracing::instrument,
};

/// Optional inputs of a fee order selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSelectionOptions<'a> {
    /// Amounts that will be filled of the orders whose fees must be paid,
    /// aligned by index. Defaults to the full maker asset amounts.
    pub available_for_orders: Option<&'a [U256]>,
    /// Remaining fillable maker asset amounts of the fee orders, aligned by
    /// index. Defaults to the full maker asset amounts.
    pub available_for_fee_orders: Option<&'a [U256]>,
    /// Added to the fee liability before selecting fee orders.
    pub slippage_buffer: U256,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeSelectionResult<'a, O> {
    pub result_fee_orders: Vec<&'a O>,
    pub fee_orders_remaining_fillable_maker_asset_amounts: Vec<U256>,
    /// Part of the fee liability (plus buffer) left uncovered.
    pub remaining_fee_amount: U256,
}

/// Fee owed for filling `available` maker asset base units of `order`:
/// `floor(available * taker_fee / maker_asset_amount)`.
///
/// `index` is the position of `order` in its batch and is only used in
/// [`ValidationError::ZeroMakerAssetAmount`]. A fee that does not fit into
/// 256 bits is reported as [`ValidationError::Overflow`].
pub fn fee_to_fill_available<O: FillableOrder + ?Sized>(
    index: usize,
    order: &O,
    available: U256,
) -> Result<U256, ValidationError> {
    let maker_asset_amount = order.maker_asset_amount();
    if maker_asset_amount.is_zero() {
        return Err(ValidationError::ZeroMakerAssetAmount { index });
    }
    available
        .checked_mul_div_floor(&order.taker_fee(), &maker_asset_amount)
        .ok_or(ValidationError::Overflow {
            name: "total_fee_amount",
        })
}

/// Sum of the fees owed for filling every order at its available amount.
pub fn total_fee_for_orders<O: FillableOrder>(
    orders: &[O],
    available_for_orders: Option<&[U256]>,
) -> Result<U256, ValidationError> {
    let available = AvailableAmounts::new("available_for_orders", available_for_orders);
    available.validate(orders.len())?;
    total_fee(orders, available)
}

fn total_fee<O: FillableOrder>(
    orders: &[O],
    available: AvailableAmounts,
) -> Result<U256, ValidationError> {
    let mut total = U256::ZERO;
    for (index, order) in orders.iter().enumerate() {
        let filled = available.get(index, order, AssetSide::Maker);
        let fee = fee_to_fill_available(index, order, filled)?;
        total = total.checked_add(fee).ok_or(ValidationError::Overflow {
            name: "total_fee_amount",
        })?;
    }
    Ok(total)
}

/// Selects the fee orders needed to pay the taker fees of filling `orders`.
///
/// `fee_orders` sell the fee asset and must be sorted by ascending effective
/// price, like the inputs of
/// [`crate::selection::select_orders_covering_maker_asset`], which does the
/// actual selection.
#[instrument(skip_all, fields(orders = orders.len(), fee_orders = fee_orders.len()))]
pub fn select_fee_orders_covering_fees<'a, O: FillableOrder, F: FillableOrder>(
    orders: &[O],
    fee_orders: &'a [F],
    options: &FeeSelectionOptions,
) -> Result<FeeSelectionResult<'a, F>, ValidationError> {
    let available_for_orders =
        AvailableAmounts::new("available_for_orders", options.available_for_orders);
    let available_for_fee_orders =
        AvailableAmounts::new("available_for_fee_orders", options.available_for_fee_orders);
    available_for_orders.validate(orders.len())?;
    available_for_fee_orders.validate(fee_orders.len())?;

    let total_fee_amount = total_fee(orders, available_for_orders)?;
    tracing::debug!(%total_fee_amount, "computed fee liability");

    let selection = selection::cover(
        fee_orders,
        total_fee_amount,
        options.slippage_buffer,
        available_for_fee_orders,
        AssetSide::Maker,
    )?;
    Ok(FeeSelectionResult {
        result_fee_orders: selection.selected_orders,
        fee_orders_remaining_fillable_maker_asset_amounts: selection
            .selected_available_amounts,
        remaining_fee_amount: selection.remaining_uncovered,
    })
}
