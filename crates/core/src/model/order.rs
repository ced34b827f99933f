use std::collections::HashSet;

use crate::error::{EntityKind, OrderError};

/// Checks that every order is positive and unique among its siblings.
///
/// Returns the highest order seen, or 0 for an empty container.
pub(crate) fn validate_orders<I>(orders: I, kind: EntityKind) -> Result<u32, OrderError>
where
    I: IntoIterator<Item = u32>,
{
    let mut seen = HashSet::new();
    let mut max = 0;
    for order in orders {
        if order == 0 {
            return Err(OrderError::Zero { kind });
        }
        if !seen.insert(order) {
            return Err(OrderError::Duplicate { kind, order });
        }
        max = max.max(order);
    }
    Ok(max)
}
