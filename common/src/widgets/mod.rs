//! Widget components for the watch face.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so the same code
//! draws into the simulator window, the firmware display and test canvases.

mod icon_art;
mod primitives;
mod readout;

pub use icon_art::{ICON_HEIGHT, ICON_WIDTH, draw_baked_icon};
pub use primitives::{
    MAX_POLYGON_POINTS,
    diameter,
    fill_circle,
    fill_polygon,
    outline_circle,
    outline_polygon,
    stroke_line,
};
pub use readout::{draw_temperature, draw_weather_ring};
