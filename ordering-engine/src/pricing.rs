//! Price resolution
//!
//! Thin wrapper over [`Prices::resolve`]: picks the per-channel unit
//! price with fallback to the other channel, because not every item is
//! sold on every channel but the UI still needs a representative price
//! while browsing. All arithmetic downstream is integer cents.

use shared::models::Prices;
use shared::order::OrderMode;

/// Unit price in cents for the given mode, `None` if the item has no
/// resolvable price on either channel. Callers must treat `None` as
/// unorderable, never as zero.
pub fn unit_price(prices: &Prices, mode: Option<OrderMode>) -> Option<i64> {
    prices.resolve(mode)
}

/// Line total in cents. Plain multiplication; quantity bounds are
/// enforced at translation time.
pub fn line_total(unit_price_cents: i64, quantity: u32) -> i64 {
    unit_price_cents * i64::from(quantity)
}
