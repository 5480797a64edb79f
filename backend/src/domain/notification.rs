//! Outbound notification content.

use super::order::NewOrder;

/// Subject line used for new order notifications.
pub const ORDER_RECEIVED_SUBJECT: &str = "New Order Received";

/// Plain-text message handed to a notification sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    subject: String,
    body: String,
}

impl Notification {
    /// Build a notification from a subject and plain-text body.
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Notification announcing a freshly placed order.
    ///
    /// # Examples
    /// ```
    /// use campus_food::domain::{NewOrder, Notification};
    ///
    /// let foods = vec!["rice".to_owned(), "beans".to_owned()];
    /// let order = NewOrder::try_from_parts("MAT001", foods).unwrap();
    /// let note = Notification::order_received(&order);
    /// assert_eq!(note.subject(), "New Order Received");
    /// assert!(note.body().ends_with("Foods: rice, beans"));
    /// ```
    #[must_use]
    pub fn order_received(order: &NewOrder) -> Self {
        let body = format!(
            "Order Details:\n\nMatric Number: {}\nFoods: {}",
            order.matric_number,
            order.foods.summary()
        );
        Self::new(ORDER_RECEIVED_SUBJECT, body)
    }

    /// Subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Plain-text body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
