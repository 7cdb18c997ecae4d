//! Delivery orders.

use dd_core::{GridPoint, OrderId};

/// One customer order, read-only once accepted into a dispatch run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id:       OrderId,
    pub customer: String,
    pub location: GridPoint,
    /// Item descriptors.  Only the count feeds the unit-capacity math; the
    /// descriptors themselves pass through to output untouched.
    pub items:    Vec<String>,
}

impl Order {
    pub fn new(id: OrderId, customer: impl Into<String>, location: GridPoint, items: Vec<String>) -> Self {
        Self { id, customer: customer.into(), location, items }
    }

    /// An order's size is its item count.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Delivery units consumed by this order: `ceil(size / capacity)`.
    ///
    /// `capacity` must be non-zero — the dispatch config validates that
    /// before any order is touched.
    #[inline]
    pub fn units_required(&self, capacity: u32) -> u64 {
        (self.items.len() as u64).div_ceil(capacity as u64)
    }
}
