//! Dashboard state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold these in `RwSignal`s. `bootstrap` is app-wide and provided
//! via context; `panel` slots are owned by individual panels; `tabs` tracks
//! which panel is mounted.

pub mod bootstrap;
pub mod panel;
pub mod tabs;
