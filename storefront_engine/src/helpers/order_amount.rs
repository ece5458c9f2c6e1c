use storefront_common::{AmountOverflowError, MinorUnits};

use crate::storefront_types::CartItem;

/// Sums the unit prices of the items in a cart. The result is exact; there is no rounding and no currency conversion.
///
/// An empty cart totals to zero. A total that does not fit into 64 bits is an error.
pub fn calculate_order_amount(items: &[CartItem]) -> Result<MinorUnits, AmountOverflowError> {
    MinorUnits::try_sum(items.iter().map(|item| item.unit_price))
}
