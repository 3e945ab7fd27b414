//! Greedy selection of the order prefix covering a target amount.

use {
    crate::{
        error::ValidationError,
        order::{AssetSide, FillableOrder},
    },
    alloy::primitives::U256,
    tracing::instrument,
};

/// Optional inputs of a coverage selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionOptions<'a> {
    /// Remaining fillable amount of every order, aligned by index with the
    /// orders. Without it every order is assumed to be completely fillable.
    /// Entries may exceed the nominal order amount.
    pub available_amounts: Option<&'a [U256]>,
    /// Added to the target to absorb estimation errors.
    pub slippage_buffer: U256,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionResult<'a, O> {
    /// Selected orders in their original relative order.
    pub selected_orders: Vec<&'a O>,
    /// Fillable amount of each selected order.
    pub selected_available_amounts: Vec<U256>,
    /// Part of `target + slippage_buffer` the orders could not cover.
    pub remaining_uncovered: U256,
}

/// Selects the shortest prefix of `orders`, minus orders with nothing left to
/// fill, whose fillable maker asset amounts add up to `target` plus the
/// slippage buffer.
///
/// `orders` must already be sorted by ascending effective price, which makes
/// the prefix the cheapest way to cover the target.
#[instrument(skip_all, fields(orders = orders.len(), requested = %target))]
pub fn select_orders_covering_maker_asset<'a, O: FillableOrder>(
    orders: &'a [O],
    target: U256,
    options: &SelectionOptions,
) -> Result<SelectionResult<'a, O>, ValidationError> {
    cover(
        orders,
        target,
        options.slippage_buffer,
        AvailableAmounts::new("available_amounts", options.available_amounts),
        AssetSide::Maker,
    )
}

/// Like [`select_orders_covering_maker_asset`] but accumulates taker asset
/// amounts, for requests that specify how much the taker wants to spend.
#[instrument(skip_all, fields(orders = orders.len(), requested = %target))]
pub fn select_orders_covering_taker_asset<'a, O: FillableOrder>(
    orders: &'a [O],
    target: U256,
    options: &SelectionOptions,
) -> Result<SelectionResult<'a, O>, ValidationError> {
    cover(
        orders,
        target,
        options.slippage_buffer,
        AvailableAmounts::new("available_amounts", options.available_amounts),
        AssetSide::Taker,
    )
}

/// Caller supplied fillable amounts together with the argument name used to
/// report them.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AvailableAmounts<'a> {
    name: &'static str,
    amounts: Option<&'a [U256]>,
}

impl<'a> AvailableAmounts<'a> {
    pub(crate) fn new(name: &'static str, amounts: Option<&'a [U256]>) -> Self {
        Self { name, amounts }
    }

    /// Checks that there is exactly one amount per order.
    pub(crate) fn validate(&self, orders: usize) -> Result<(), ValidationError> {
        match self.amounts {
            Some(amounts) if amounts.len() != orders => Err(ValidationError::LengthMismatch {
                name: self.name,
                expected: orders,
                actual: amounts.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Fillable amount of the order at `index`. Only valid after
    /// [`Self::validate`] succeeded.
    pub(crate) fn get<O: FillableOrder>(&self, index: usize, order: &O, side: AssetSide) -> U256 {
        match self.amounts {
            Some(amounts) => amounts[index],
            None => side.amount(order),
        }
    }
}

pub(crate) fn cover<'a, O: FillableOrder>(
    orders: &'a [O],
    target: U256,
    slippage_buffer: U256,
    available: AvailableAmounts,
    side: AssetSide,
) -> Result<SelectionResult<'a, O>, ValidationError> {
    available.validate(orders.len())?;
    let mut need = target
        .checked_add(slippage_buffer)
        .ok_or(ValidationError::Overflow {
            name: "slippage_buffer",
        })?;

    let mut selected_orders = Vec::new();
    let mut selected_available_amounts = Vec::new();
    for (index, order) in orders.iter().enumerate() {
        if need.is_zero() {
            break;
        }
        let amount = available.get(index, order, side);
        if amount.is_zero() {
            tracing::trace!(index, "skipping order without fillable amount");
            continue;
        }
        selected_orders.push(order);
        selected_available_amounts.push(amount);
        need = need.saturating_sub(amount);
    }

    tracing::debug!(
        selected = selected_orders.len(),
        remaining_uncovered = %need,
        "selected orders"
    );
    Ok(SelectionResult {
        selected_orders,
        selected_available_amounts,
        remaining_uncovered: need,
    })
}
