//! JSON text encoding for the `orders.foods` column.
//!
//! Foods are stored as a JSON array of strings so the list keeps its order
//! and any item may contain commas.

use crate::domain::FoodList;

/// Encode a food list as a JSON array string.
pub(super) fn foods_to_json(foods: &FoodList) -> Result<String, serde_json::Error> {
    serde_json::to_string(foods.items())
}

/// Decode a stored JSON array back into a validated food list.
pub(super) fn foods_from_json(raw: &str) -> Result<FoodList, String> {
    let items: Vec<String> =
        serde_json::from_str(raw).map_err(|err| format!("malformed foods column: {err}"))?;
    FoodList::new(items).map_err(|err| format!("invalid stored foods: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn foods_keep_order_and_commas() {
        let foods = FoodList::new(vec![
            "rice, extra pepper".to_owned(),
            "beans".to_owned(),
        ])
        .expect("valid foods");

        let encoded = foods_to_json(&foods).expect("encode");
        assert_eq!(encoded, r#"["rice, extra pepper","beans"]"#);
        assert_eq!(foods_from_json(&encoded), Ok(foods));
    }

    #[rstest]
    #[case("rice, beans", "malformed foods column")]
    #[case("[]", "invalid stored foods")]
    #[case(r#"{"foods":["rice"]}"#, "malformed foods column")]
    fn bad_stored_values_are_reported(#[case] raw: &str, #[case] prefix: &str) {
        let err = foods_from_json(raw).expect_err("invalid column");
        assert!(err.starts_with(prefix), "unexpected message: {err}");
    }
}
