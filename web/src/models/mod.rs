//! Row models for the SQLite tables, and their conversions to and from the
//! core domain types.

/// Project rows.
pub mod projects;

/// Action rows.
pub mod actions;
