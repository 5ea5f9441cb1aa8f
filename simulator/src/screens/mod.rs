//! Pages other than the face itself.

mod logs;

pub use logs::draw_log_page;
