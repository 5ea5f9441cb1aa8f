//! Embassy tasks running next to the render loop.

pub mod link;

pub use link::{LINK_CHANNEL, link_task};
