//! Pure helpers shared across dashboard panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is free of Leptos and browser types so table inference,
//! range handling and form parsing can be unit-tested natively.

pub mod form;
pub mod range_math;
pub mod table_schema;
