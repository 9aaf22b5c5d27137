//! Feed module
//!
//! HTML rendering of the widget and relative-age labels for donor cards.

pub mod relative_time;
pub mod renderer;

pub use renderer::{
    render_feed, render_page, render_progress, render_supplies, render_thoughts, Page,
};
