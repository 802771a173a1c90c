//! Order storage contract
//!
//! The engine requires exactly two things from the backend: one atomic
//! multi-field write per order (header + all lines, or nothing) with a
//! server-assigned creation timestamp, and an owner-scoped query ordered
//! by creation time descending. No storage engine is prescribed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use shared::order::{NewOrder, OrderSummary};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Storage/transport failures
///
/// Deliberately generic: after a failed write no partial order exists,
/// so the caller may retry with the same translated payload. Retry
/// policy belongs to the caller, never to this core.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("order write failed: {0}")]
    Write(String),

    #[error("order query failed: {0}")]
    Query(String),
}

/// Write/read contract for submitted orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order as one atomic write and return its ID.
    ///
    /// The backend assigns the creation timestamp; either the entire
    /// record is durably written or nothing is. Cancellation before the
    /// write is acknowledged must leave no partial record; after
    /// acknowledgement it has no effect.
    async fn create_order(&self, order: NewOrder) -> Result<String, StoreError>;

    /// The owner's most recent orders, newest first, at most `limit`.
    /// Read-only projection with no side effects.
    async fn orders_for_owner(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<OrderSummary>, StoreError>;
}

struct StoredOrder {
    id: String,
    created_at: DateTime<Utc>,
    order: NewOrder,
}

/// In-memory order store
///
/// Appends under a single lock, so the atomicity guarantee holds
/// trivially: a failed write (see [`MemoryOrderStore::fail_writes`])
/// leaves nothing behind. Used by tests and in-process embeddings.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<Vec<StoredOrder>>,
    fail_writes: AtomicBool,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail, for exercising the no-partial-order
    /// guarantee in tests.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

fn summarize(stored: &StoredOrder) -> OrderSummary {
    let order = &stored.order;
    OrderSummary {
        id: stored.id.clone(),
        created_at: Some(stored.created_at),
        status: order.status.clone(),
        total_cents: order.total_cents,
        mode: order.mode,
        address_id: order.address_id.clone(),
        items_count: order.items_count,
        items: order.items.clone(),
        reorder_lines: order.reorder_lines.clone(),
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create_order(&self, order: NewOrder) -> Result<String, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("injected write failure".to_string()));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let stored = StoredOrder {
            id: id.clone(),
            created_at: Utc::now(),
            order,
        };
        self.orders.write().push(stored);
        tracing::debug!(order_id = %id, "order persisted");
        Ok(id)
    }

    async fn orders_for_owner(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<OrderSummary>, StoreError> {
        let orders = self.orders.read();
        let mut mine: Vec<&StoredOrder> = orders
            .iter()
            .filter(|o| o.order.owner_id == owner_id)
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine.into_iter().take(limit).map(summarize).collect())
    }
}
