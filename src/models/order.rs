//! Delivery orders and their status lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Deliver when convenient.
    Low,
    /// Default urgency.
    Medium,
    /// Pack first.
    High,
}

impl Priority {
    /// Sort weight: high = 3, medium = 2, low = 1.
    pub fn weight(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Waiting to be planned.
    Pending,
    /// Placed on a tour.
    Assigned,
    /// Delivered by a completed tour.
    Completed,
}

/// An order to deliver a number of containers to one customer on one date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_tourplan::models::{Order, OrderStatus, Priority};
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
/// let o = Order::new("o1", "c1", 4, date).with_priority(Priority::High);
/// assert_eq!(o.container_count(), 4);
/// assert_eq!(o.priority(), Priority::High);
/// assert_eq!(o.status(), OrderStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: String,
    customer_id: String,
    container_count: u32,
    #[serde(default = "default_priority")]
    priority: Priority,
    delivery_date: NaiveDate,
    #[serde(default = "default_status")]
    status: OrderStatus,
}

fn default_priority() -> Priority {
    Priority::Medium
}

fn default_status() -> OrderStatus {
    OrderStatus::Pending
}

impl Order {
    /// Creates a pending, medium-priority order.
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        container_count: u32,
        delivery_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            container_count,
            priority: Priority::Medium,
            delivery_date,
            status: OrderStatus::Pending,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Order ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Customer this order is delivered to.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Containers to deliver (unit of capacity consumption).
    pub fn container_count(&self) -> u32 {
        self.container_count
    }

    /// Delivery urgency.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Date the order must be delivered on.
    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    /// Current lifecycle status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

/// A status change the caller should apply to one of its orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    /// Order to update.
    pub order_id: String,
    /// New status.
    pub status: OrderStatus,
}

impl OrderStatusUpdate {
    /// Creates an update.
    pub fn new(order_id: impl Into<String>, status: OrderStatus) -> Self {
        Self {
            order_id: order_id.into(),
            status,
        }
    }
}

/// Applies status updates to the caller's orders.
///
/// Updates for unknown ids are ignored. Returns the number of orders changed.
pub fn apply_status_updates(orders: &mut [Order], updates: &[OrderStatusUpdate]) -> usize {
    let mut changed = 0;
    for update in updates {
        for order in orders.iter_mut().filter(|o| o.id == update.order_id) {
            if order.status != update.status {
                order.status = update.status;
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date")
    }

    #[test]
    fn test_priority_weight() {
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);
    }

    #[test]
    fn test_order_defaults_from_json() {
        let o: Order = serde_json::from_str(
            r#"{"id":"o1","customerId":"c1","containerCount":3,"deliveryDate":"2024-05-06"}"#,
        )
        .expect("valid");
        assert_eq!(o.priority(), Priority::Medium);
        assert_eq!(o.status(), OrderStatus::Pending);
        assert_eq!(o.delivery_date(), date());
    }

    #[test]
    fn test_order_rejects_negative_containers() {
        let r: Result<Order, _> = serde_json::from_str(
            r#"{"id":"o1","customerId":"c1","containerCount":-3,"deliveryDate":"2024-05-06"}"#,
        );
        assert!(r.is_err());
    }

    #[test]
    fn test_apply_status_updates() {
        let mut orders = vec![
            Order::new("o1", "c1", 1, date()),
            Order::new("o2", "c1", 1, date()),
        ];
        let updates = vec![
            OrderStatusUpdate::new("o1", OrderStatus::Assigned),
            OrderStatusUpdate::new("missing", OrderStatus::Assigned),
        ];
        assert_eq!(apply_status_updates(&mut orders, &updates), 1);
        assert_eq!(orders[0].status(), OrderStatus::Assigned);
        assert_eq!(orders[1].status(), OrderStatus::Pending);
        // Reapplying is a no-op.
        assert_eq!(apply_status_updates(&mut orders, &updates), 0);
    }
}
