use {
    order_coverage::{
        FeeSelectionOptions,
        Order,
        SelectionOptions,
        U256,
        select_fee_orders_covering_fees,
        select_orders_covering_maker_asset,
        total_fee_for_orders,
    },
    proptest::prelude::*,
};

prop_compose! {
    /// Orders together with a remaining fillable amount for each of them.
    fn orders_with_available()
        (entries in prop::collection::vec((0u64..1_000, 0u64..1_000, 0u64..100), 0..20))
        -> (Vec<Order>, Vec<U256>) {
        entries
            .into_iter()
            .map(|(maker_asset_amount, available, taker_fee)| {
                let order = Order {
                    maker_asset_amount: U256::from(maker_asset_amount),
                    taker_fee: U256::from(taker_fee),
                    ..Default::default()
                };
                (order, U256::from(available))
            })
            .unzip()
    }
}

fn position(orders: &[Order], order: &Order) -> usize {
    orders
        .iter()
        .position(|candidate| std::ptr::eq(candidate, order))
        .expect("selected order comes from the input")
}

fn sum(amounts: &[U256]) -> U256 {
    amounts.iter().fold(U256::ZERO, |total, amount| total + *amount)
}

proptest! {
    #[test]
    fn remaining_is_shortfall_of_total_availability(
        (orders, available) in orders_with_available(),
        target in 0u64..10_000,
        slippage_buffer in 0u64..1_000,
    ) {
        let result = select_orders_covering_maker_asset(
            &orders,
            U256::from(target),
            &SelectionOptions {
                available_amounts: Some(&available),
                slippage_buffer: U256::from(slippage_buffer),
            },
        )
        .unwrap();

        let need = U256::from(target + slippage_buffer);
        let total = sum(&available);
        prop_assert_eq!(result.remaining_uncovered, need.saturating_sub(total));

        let selected = sum(&result.selected_available_amounts);
        prop_assert!(selected + result.remaining_uncovered >= need);
    }

    #[test]
    fn selection_is_shortest_ordered_prefix(
        (orders, available) in orders_with_available(),
        target in 0u64..10_000,
    ) {
        let result = select_orders_covering_maker_asset(
            &orders,
            U256::from(target),
            &SelectionOptions {
                available_amounts: Some(&available),
                ..Default::default()
            },
        )
        .unwrap();
        prop_assert_eq!(result.selected_orders.len(), result.selected_available_amounts.len());

        let indices: Vec<usize> = result
            .selected_orders
            .iter()
            .map(|order| position(&orders, order))
            .collect();
        // The selection is exactly the first orders with something to fill.
        let expected: Vec<usize> = (0..orders.len())
            .filter(|index| !available[*index].is_zero())
            .take(indices.len())
            .collect();
        prop_assert_eq!(&indices, &expected);
        for (index, amount) in indices.iter().zip(&result.selected_available_amounts) {
            prop_assert_eq!(*amount, available[*index]);
        }

        // Dropping the last selected order leaves the target uncovered.
        if let Some((_, rest)) = result.selected_available_amounts.split_last() {
            let without_last = sum(rest);
            prop_assert!(without_last < U256::from(target));
        }
    }

    #[test]
    fn missing_availability_means_full_orders(
        (orders, _) in orders_with_available(),
        target in 0u64..10_000,
    ) {
        let full: Vec<U256> = orders.iter().map(|order| order.maker_asset_amount).collect();
        let implicit = select_orders_covering_maker_asset(
            &orders,
            U256::from(target),
            &SelectionOptions::default(),
        )
        .unwrap();
        let explicit = select_orders_covering_maker_asset(
            &orders,
            U256::from(target),
            &SelectionOptions {
                available_amounts: Some(&full),
                ..Default::default()
            },
        )
        .unwrap();
        prop_assert_eq!(implicit, explicit);
    }

    #[test]
    fn zero_target_selects_nothing((orders, available) in orders_with_available()) {
        let result = select_orders_covering_maker_asset(
            &orders,
            U256::ZERO,
            &SelectionOptions {
                available_amounts: Some(&available),
                ..Default::default()
            },
        )
        .unwrap();
        prop_assert!(result.selected_orders.is_empty());
        prop_assert_eq!(result.remaining_uncovered, U256::ZERO);
    }

    #[test]
    fn fee_liability_is_sum_of_truncated_shares(
        (orders, available) in orders_with_available(),
        fee_order_amounts in prop::collection::vec(0u64..50, 0..10),
    ) {
        let result = total_fee_for_orders(&orders, Some(&available));
        if let Some(index) = orders.iter().position(|order| order.maker_asset_amount.is_zero()) {
            prop_assert_eq!(
                result,
                Err(order_coverage::ValidationError::ZeroMakerAssetAmount { index })
            );
            return Ok(());
        }

        let expected: u64 = orders
            .iter()
            .zip(&available)
            .map(|(order, available)| {
                let maker_asset_amount = order.maker_asset_amount.to::<u64>();
                let taker_fee = order.taker_fee.to::<u64>();
                available.to::<u64>() * taker_fee / maker_asset_amount
            })
            .sum();
        prop_assert_eq!(result, Ok(U256::from(expected)));

        let fee_orders: Vec<Order> = fee_order_amounts
            .iter()
            .map(|amount| Order {
                maker_asset_amount: U256::from(*amount),
                ..Default::default()
            })
            .collect();
        let selection = select_fee_orders_covering_fees(
            &orders,
            &fee_orders,
            &FeeSelectionOptions {
                available_for_orders: Some(&available),
                ..Default::default()
            },
        )
        .unwrap();
        let supply: u64 = fee_order_amounts.iter().sum();
        prop_assert_eq!(
            selection.remaining_fee_amount,
            U256::from(expected.saturating_sub(supply))
        );
    }
}
