//! Form rendering module
//!
//! - `field_renderer`: labeled input rendering
//! - `contact_form`: inputs, submit control and error list
//! - `summary`: submitted-values panel

mod contact_form;
mod field_renderer;
mod summary;

pub use contact_form::draw_form;
pub use summary::draw_summary;
