//! Diesel table definitions.
//!
//! Keep in sync with `migrations/`; regenerate with `diesel print-schema`
//! when the table changes.

diesel::table! {
    products (id) {
        id -> Uuid,
        name -> Text,
        description -> Nullable<Text>,
        price -> Float8,
        image -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
