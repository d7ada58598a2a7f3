//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses
//! them for compile-time query validation. Schema management itself lives
//! with the database owner, not this service.

diesel::table! {
    /// User records.
    ///
    /// `id` is a serial primary key; `email` carries a unique constraint,
    /// which is what makes create and update conflict detection atomic.
    users (id) {
        /// Primary key, assigned by the store.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Unique contact email.
        email -> Varchar,
        /// Free-text profession label.
        profession -> Varchar,
    }
}
