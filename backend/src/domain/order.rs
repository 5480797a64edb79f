//! Food order data model.

use std::fmt;

use super::account::{AccountValidationError, MatricNumber};

/// Validation errors raised while building an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    /// The ordering account key was invalid.
    Account(AccountValidationError),
    /// No food items were supplied.
    EmptyFoods,
    /// A food item was blank once trimmed.
    BlankFood { index: usize },
}

impl fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(err) => err.fmt(f),
            Self::EmptyFoods => write!(f, "foods must contain at least one item"),
            Self::BlankFood { index } => write!(f, "foods[{index}] must not be empty"),
        }
    }
}

impl std::error::Error for OrderValidationError {}

impl From<AccountValidationError> for OrderValidationError {
    fn from(value: AccountValidationError) -> Self {
        Self::Account(value)
    }
}

/// Ordered, non-empty list of food item names.
///
/// ## Invariants
/// - At least one item; no item is blank. Order and spelling are preserved.
///
/// # Examples
/// ```
/// use campus_food::domain::FoodList;
///
/// let foods = FoodList::new(vec!["rice".into(), "beans".into()]).unwrap();
/// assert_eq!(foods.summary(), "rice, beans");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodList(Vec<String>);

impl FoodList {
    /// Validate a raw list of item names.
    pub fn new(items: Vec<String>) -> Result<Self, OrderValidationError> {
        if items.is_empty() {
            return Err(OrderValidationError::EmptyFoods);
        }
        if let Some(index) = items.iter().position(|item| item.trim().is_empty()) {
            return Err(OrderValidationError::BlankFood { index });
        }
        Ok(Self(items))
    }

    /// Items in the order they were placed.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// Human-readable summary joining the items with `", "`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.0.join(", ")
    }

    /// Consume the list, returning the raw item names.
    #[must_use]
    pub fn into_items(self) -> Vec<String> {
        self.0
    }
}

/// Validated order placement input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub matric_number: MatricNumber,
    pub foods: FoodList,
}

impl NewOrder {
    /// Validate raw order fields.
    pub fn try_from_parts(
        matric_number: &str,
        foods: Vec<String>,
    ) -> Result<Self, OrderValidationError> {
        Ok(Self {
            matric_number: MatricNumber::new(matric_number)?,
            foods: FoodList::new(foods)?,
        })
    }
}

/// Store-assigned sequential order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(i64);

impl OrderId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw store identifier.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

/// Persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub matric_number: MatricNumber,
    pub foods: FoodList,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn items(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|item| (*item).to_owned()).collect()
    }

    #[rstest]
    #[case(&[], OrderValidationError::EmptyFoods)]
    #[case(&["rice", "  "], OrderValidationError::BlankFood { index: 1 })]
    #[case(&["", "beans"], OrderValidationError::BlankFood { index: 0 })]
    fn food_list_rejects_invalid_items(
        #[case] raw: &[&str],
        #[case] expected: OrderValidationError,
    ) {
        assert_eq!(FoodList::new(items(raw)), Err(expected));
    }

    #[rstest]
    fn food_list_preserves_order() {
        let foods = FoodList::new(items(&["jollof rice", "plantain", "jollof rice"]))
            .expect("valid foods");
        assert_eq!(foods.items(), items(&["jollof rice", "plantain", "jollof rice"]).as_slice());
        assert_eq!(foods.summary(), "jollof rice, plantain, jollof rice");
    }

    #[rstest]
    fn new_order_reports_account_errors() {
        let err = NewOrder::try_from_parts(" ", items(&["rice"])).expect_err("blank key");
        assert_eq!(
            err,
            OrderValidationError::Account(AccountValidationError::EmptyMatricNumber)
        );
        assert_eq!(err.to_string(), "matricNumber must not be empty");
    }

    #[rstest]
    fn blank_food_message_names_index() {
        let err = FoodList::new(items(&["rice", "", "beans"])).expect_err("blank item");
        assert_eq!(err.to_string(), "foods[1] must not be empty");
    }
}
