//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and result surfaces. Panels own all
//! state and pass it down as signals and callbacks.

pub mod fields;
pub mod genre_select;
pub mod json_readout;
pub mod panel_status;
pub mod range_selector;
pub mod result_table;
pub mod status_header;
pub mod tab_bar;
