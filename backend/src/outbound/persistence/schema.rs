//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the DDL in `diesel_schema_repository.rs`, which creates
//! the tables at startup.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key: `SERIAL`.
        id -> Int4,
        /// Free-form name.
        name -> Text,
        /// Free-form email; not unique.
        email -> Text,
    }
}

diesel::table! {
    /// Notes sent from one user to another.
    mannah (id) {
        /// Primary key: `SERIAL`.
        id -> Int4,
        /// Note content.
        description -> Text,
        /// Sender; constrained by `fk_from`.
        from_user -> Int4,
        /// Recipient; constrained by `fk_to`.
        to_user -> Int4,
    }
}

diesel::allow_tables_to_appear_in_same_query!(mannah, users);
