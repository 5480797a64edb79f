//! Diesel table definitions for the SQLite record store.
//!
//! Kept in sync by hand with `schema_bootstrap::SCHEMA_SQL`.

diesel::table! {
    users (matric_number) {
        matric_number -> Text,
        name -> Text,
        department -> Text,
        college -> Text,
        level -> Text,
        hostel -> Text,
        password -> Text,
    }
}

diesel::table! {
    orders (id) {
        id -> BigInt,
        matric_number -> Text,
        foods -> Text,
    }
}

diesel::joinable!(orders -> users (matric_number));

diesel::allow_tables_to_appear_in_same_query!(orders, users);
