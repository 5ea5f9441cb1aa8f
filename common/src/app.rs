//! Watch face application state.
//!
//! [`WatchFace`] owns everything the face needs: cached dial geometry, hand
//! paths, weather state, the icon slot, the hands-visibility timer, the event
//! log and the dirty flags. Platforms feed it events one at a time and call
//! [`WatchFace::draw`] when [`WatchFace::needs_redraw`] says so.
//!
//! # Events
//!
//! | Handler | Source |
//! |---------|--------|
//! | [`on_minute_tick`](WatchFace::on_minute_tick) | Wall clock changed minute |
//! | [`on_select_click`](WatchFace::on_select_click) | Select button |
//! | [`poll_timers`](WatchFace::poll_timers) | Every loop iteration |
//! | [`on_link_event`](WatchFace::on_link_event) | Frame decoder |
//! | [`on_outbox_sent`](WatchFace::on_outbox_sent) / [`on_outbox_failed`](WatchFace::on_outbox_failed) | Ack write result |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::clock::ClockTime;
use crate::colors::BLACK;
use crate::config::ICON_BOX;
use crate::dial::Dial;
use crate::hands::Hands;
use crate::icons::{IconSlot, IconStore};
use crate::link::{DropReason, LinkEvent};
use crate::log::{EventLog, LogLevel};
use crate::message::{Dictionary, WeatherReport};
use crate::render::{Layer, RenderState};
use crate::visibility::{HandsVisibility, VisibilityChange};
use crate::weather::{ResourceId, WeatherState};
use crate::widgets::{draw_temperature, draw_weather_ring};

/// The whole face.
pub struct WatchFace<S: IconStore> {
    dial: Dial,
    hands: Hands,
    time: ClockTime,
    weather: WeatherState,
    icon: IconSlot<S>,
    visibility: HandsVisibility,
    log: EventLog,
    render: RenderState,
}

impl<S: IconStore> WatchFace<S> {
    /// Lay the face out in `bounds`. Shows midnight until the first tick.
    pub fn new(
        bounds: &Rectangle,
        store: S,
    ) -> Self {
        let dial = Dial::new(bounds);
        let hands = Hands::new(dial.center());
        let mut log = EventLog::new();
        log.push(LogLevel::Debug, "Clock started");

        Self {
            dial,
            hands,
            time: ClockTime::MIDNIGHT,
            weather: WeatherState::new(),
            icon: IconSlot::new(store),
            visibility: HandsVisibility::new(),
            log,
            render: RenderState::new(),
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// New wall-clock minute.
    pub fn on_minute_tick(
        &mut self,
        time: ClockTime,
    ) {
        self.time = time;
        if !self.visibility.is_hidden() {
            self.render.mark(Layer::Hands);
        }
    }

    /// Select pressed: hide the hands and (re)arm the reveal timer.
    pub fn on_select_click(
        &mut self,
        now_ms: u64,
    ) {
        if self.visibility.on_select(now_ms) == VisibilityChange::Hidden {
            self.log.push(LogLevel::Debug, "Hands hidden");
            self.render.mark(Layer::Hands);
        }
    }

    /// Fire due timers. Call every loop iteration.
    pub fn poll_timers(
        &mut self,
        now_ms: u64,
    ) {
        if self.visibility.poll(now_ms) == VisibilityChange::Shown {
            self.log.push(LogLevel::Debug, "Hands shown");
            self.render.mark(Layer::Hands);
        }
    }

    /// Inbound dictionary. Applied only when it carries both fields.
    ///
    /// Returns true when the weather changed.
    pub fn on_inbox_received(
        &mut self,
        dict: &Dictionary<'_>,
    ) -> bool {
        self.log.info("inbox_received");

        let Some(report) = WeatherReport::from_dictionary(dict) else {
            return false;
        };
        let update = self.weather.apply(report.temperature, report.icon_category);
        // Unknown categories leave the current icon up
        if let Some(id) = update.icon {
            self.icon.show(id);
        }
        self.render.mark(Layer::Weather);
        true
    }

    /// Transport dropped an inbound message.
    pub fn on_inbox_dropped(
        &mut self,
        reason: DropReason,
    ) {
        self.log.push_fmt(LogLevel::Error, format_args!("Message dropped! {reason}"));
    }

    /// Route a decoded frame. Returns the acknowledgement byte to send.
    pub fn on_link_event(
        &mut self,
        event: &LinkEvent<'_>,
    ) -> u8 {
        match event {
            LinkEvent::Delivered(dict) => {
                self.on_inbox_received(dict);
            }
            LinkEvent::Dropped(reason) => self.on_inbox_dropped(*reason),
        }
        event.reply()
    }

    pub fn on_outbox_sent(&mut self) { self.log.info("Outbox send success!"); }

    pub fn on_outbox_failed(&mut self) { self.log.error("Outbox send failed!"); }

    /// The display was cleared by someone else; repaint everything next frame.
    pub fn invalidate(&mut self) { self.render.mark_display_cleared(); }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.render.needs_redraw() }

    /// Compose the face bottom to top: background, dial, readout, hands.
    ///
    /// The dial disc covers everything drawn above it, so the background is
    /// only wiped when the dial layer itself is dirty.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.render.is_dirty(Layer::Dial) {
            display.clear(BLACK).ok();
        }
        self.dial.draw(display);

        draw_weather_ring(display);
        draw_temperature(display, self.weather.temperature_text());
        self.icon.draw(display, ICON_BOX.top_left);

        if !self.visibility.is_hidden() {
            self.hands.draw(display, self.time);
        }

        self.render.end_frame();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn time(&self) -> ClockTime { self.time }

    #[inline]
    pub const fn weather(&self) -> &WeatherState { &self.weather }

    #[inline]
    pub fn icon(&self) -> Option<ResourceId> { self.icon.current_id() }

    #[inline]
    pub const fn hands_hidden(&self) -> bool { self.visibility.is_hidden() }

    #[inline]
    pub const fn dial(&self) -> &Dial { &self.dial }

    #[inline]
    pub const fn icon_store(&self) -> &S { self.icon.store() }

    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }

    #[inline]
    pub fn log_mut(&mut self) -> &mut EventLog { &mut self.log }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::config::{INBOX_SIZE, KEY_ICON, KEY_TEMPERATURE, SCREEN_BOUNDS, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::icons::BakedIcons;
    use crate::icons::tests::CountingStore;
    use crate::link::{FrameDecoder, encode_frame};
    use crate::message::DictionaryBuilder;
    use crate::testing::Canvas;

    fn face() -> WatchFace<CountingStore> { WatchFace::new(&SCREEN_BOUNDS, CountingStore::default()) }

    fn deliver<S: IconStore>(
        face: &mut WatchFace<S>,
        dict: &DictionaryBuilder<INBOX_SIZE>,
    ) -> bool {
        let parsed = Dictionary::parse(dict.as_bytes()).unwrap();
        face.on_inbox_received(&parsed)
    }

    fn report(
        temp: i32,
        icon: &str,
    ) -> DictionaryBuilder<INBOX_SIZE> {
        let mut b = DictionaryBuilder::new();
        b.write_int(KEY_TEMPERATURE, temp).unwrap();
        b.write_cstring(KEY_ICON, icon).unwrap();
        b
    }

    fn messages<S: IconStore>(face: &WatchFace<S>) -> std::vec::Vec<std::string::String> {
        face.log().iter().map(|e| e.message.as_str().to_owned()).collect()
    }

    #[test]
    fn test_initial_state() {
        let face = face();
        assert_eq!(face.weather().temperature_text(), "100");
        assert_eq!(face.icon(), None);
        assert!(!face.hands_hidden());
        assert!(face.needs_redraw());
        assert_eq!(messages(&face), ["Clock started"]);
    }

    #[test]
    fn test_complete_report_updates_text_and_icon() {
        let mut face = face();
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), BLACK);
        face.draw(&mut canvas);
        assert!(!face.needs_redraw());

        assert!(deliver(&mut face, &report(72, "rain")));
        assert_eq!(face.weather().temperature_text(), "72");
        assert_eq!(face.icon(), Some(ResourceId::RainBlack));
        assert!(face.needs_redraw());
    }

    #[test]
    fn test_temperature_only_changes_nothing() {
        let mut face = face();
        deliver(&mut face, &report(72, "rain"));
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), BLACK);
        face.draw(&mut canvas);

        let mut partial: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        partial.write_int(KEY_TEMPERATURE, 10).unwrap();
        assert!(!deliver(&mut face, &partial));

        assert_eq!(face.weather().temperature_text(), "72");
        assert_eq!(face.icon(), Some(ResourceId::RainBlack));
        assert!(!face.needs_redraw());
        assert_eq!(messages(&face).last().map(|s| s.as_str()), Some("inbox_received"));
    }

    #[test]
    fn test_unknown_category_keeps_icon() {
        let mut face = face();
        deliver(&mut face, &report(60, "snow"));
        assert!(deliver(&mut face, &report(61, "tornado")));

        assert_eq!(face.weather().temperature_text(), "61");
        assert_eq!(face.weather().icon_category(), "tornado");
        assert_eq!(face.icon(), Some(ResourceId::SnowBlack));
        assert_eq!(face.icon_store().live, 1);
    }

    #[test]
    fn test_unknown_category_before_any_icon() {
        let mut face = face();
        assert!(deliver(&mut face, &report(5, "tornado")));
        assert_eq!(face.icon(), None);
        assert!(face.icon_store().events.is_empty());
    }

    #[test]
    fn test_icon_swaps_release_previous() {
        let mut face = face();
        deliver(&mut face, &report(1, "clear-day"));
        deliver(&mut face, &report(2, "clear-night"));
        deliver(&mut face, &report(3, "clear-night"));

        assert_eq!(
            face.icon_store().events,
            [
                ("load", ResourceId::ClearSkyDayBlack),
                ("release", ResourceId::ClearSkyDayBlack),
                ("load", ResourceId::ClearSkyNightBlack),
            ]
        );
        assert_eq!(face.weather().temperature_text(), "3");
    }

    #[test]
    fn test_full_inbox_frame_truncates_category_on_char_boundary() {
        let mut face = face();
        let mut b: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        b.write_int(KEY_TEMPERATURE, 9).unwrap();
        b.write_cstring(KEY_ICON, &"é".repeat(22)).unwrap();
        let frame = encode_frame(b.as_bytes()).unwrap();

        let mut decoder = FrameDecoder::new();
        let mut acks = std::vec::Vec::new();
        for &byte in frame.iter() {
            if let Some(event) = decoder.push(byte) {
                acks.push(face.on_link_event(&event));
            }
        }

        assert_eq!(acks, [crate::link::ACK]);
        assert_eq!(face.weather().temperature_text(), "9");
        // 31-byte buffer, 2-byte characters: 15 fit
        assert_eq!(face.weather().icon_category(), "é".repeat(15));
        assert_eq!(face.icon(), None);
    }

    #[test]
    fn test_string_temperature_uses_integer_part() {
        let mut face = face();
        let mut b: DictionaryBuilder<INBOX_SIZE> = DictionaryBuilder::new();
        b.write_cstring(KEY_TEMPERATURE, "72.6").unwrap();
        b.write_cstring(KEY_ICON, "fog").unwrap();
        assert!(deliver(&mut face, &b));
        assert_eq!(face.weather().temperature_text(), "72");
    }

    #[test]
    fn test_select_hides_and_timer_shows() {
        let mut face = face();
        face.on_select_click(0);
        assert!(face.hands_hidden());

        face.poll_timers(1999);
        assert!(face.hands_hidden());
        face.poll_timers(2000);
        assert!(!face.hands_hidden());

        let log = messages(&face);
        assert!(log.iter().any(|m| m == "Hands hidden"));
        assert_eq!(log.last().map(|s| s.as_str()), Some("Hands shown"));
    }

    #[test]
    fn test_second_press_extends_hidden_time() {
        let mut face = face();
        face.on_select_click(0);
        face.poll_timers(500);
        face.on_select_click(1000);

        face.poll_timers(2000);
        assert!(face.hands_hidden());
        face.poll_timers(3000);
        assert!(!face.hands_hidden());
    }

    #[test]
    fn test_hidden_hands_are_not_drawn() {
        let mut face = WatchFace::new(&SCREEN_BOUNDS, BakedIcons);
        face.on_minute_tick(ClockTime::new(3, 0).unwrap());

        // 30 px up the minute hand at 12 o'clock, inside the black filler
        let filler = Point::new(72, 54);
        let pivot = Point::new(72, 84);

        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), BLACK);
        face.draw(&mut canvas);
        assert_eq!(canvas.pixel(filler), Some(BLACK));
        assert_eq!(canvas.pixel(pivot), Some(BLACK));

        face.on_select_click(0);
        assert!(face.needs_redraw());
        face.draw(&mut canvas);
        assert_eq!(canvas.pixel(filler), Some(WHITE));
        assert_eq!(canvas.pixel(pivot), Some(WHITE));
    }

    #[test]
    fn test_minute_tick_marks_hands_dirty() {
        let mut face = face();
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), BLACK);
        face.draw(&mut canvas);

        face.on_minute_tick(ClockTime::new(12, 1).unwrap());
        assert!(face.needs_redraw());
        assert_eq!(face.time(), ClockTime::new(12, 1).unwrap());
    }

    #[test]
    fn test_link_events_are_routed_and_acked() {
        let mut face = face();
        let payload = report(-4, "wind");
        let mut frame = encode_frame(payload.as_bytes()).unwrap();

        let mut decoder = FrameDecoder::new();
        let mut acks = std::vec::Vec::new();
        for &b in frame.iter() {
            if let Some(event) = decoder.push(b) {
                acks.push(face.on_link_event(&event));
            }
        }
        assert_eq!(face.weather().temperature_text(), "-4");
        assert_eq!(face.icon(), Some(ResourceId::WindBlack));

        let last = frame.len() - 1;
        frame[last] ^= 0xFF;
        for &b in frame.iter() {
            if let Some(event) = decoder.push(b) {
                acks.push(face.on_link_event(&event));
            }
        }
        assert_eq!(acks, [crate::link::ACK, crate::link::NACK]);
        assert_eq!(messages(&face).last().map(|s| s.as_str()), Some("Message dropped! bad checksum"));
        // Dropped frame leaves the readout alone
        assert_eq!(face.weather().temperature_text(), "-4");
    }

    #[test]
    fn test_outbox_results_are_logged() {
        let mut face = face();
        face.on_outbox_sent();
        face.on_outbox_failed();
        let levels: std::vec::Vec<_> = face.log().iter().map(|e| e.level).collect();
        assert_eq!(levels, [LogLevel::Debug, LogLevel::Info, LogLevel::Error]);
        assert_eq!(messages(&face)[1..], ["Outbox send success!", "Outbox send failed!"]);
    }

    #[test]
    fn test_draw_composes_layers() {
        let mut face = WatchFace::new(&SCREEN_BOUNDS, BakedIcons);
        deliver(&mut face, &report(72, "rain"));
        face.on_minute_tick(ClockTime::new(6, 0).unwrap());

        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), WHITE);
        face.draw(&mut canvas);

        // Window background outside the disc
        assert_eq!(canvas.pixel(Point::new(0, 0)), Some(BLACK));
        // Pivot dot
        assert_eq!(canvas.pixel(Point::new(72, 84)), Some(BLACK));
        // Some ink landed in the temperature and icon boxes
        let ink_in = |area: &Rectangle| area.points().filter(|p| canvas.pixel(*p) == Some(BLACK)).count();
        assert!(ink_in(&crate::config::TEMPERATURE_BOX) > 0);
        assert!(ink_in(&ICON_BOX) > 0);
        assert!(!face.needs_redraw());
    }

    #[test]
    fn test_background_wiped_only_with_dial() {
        let mut face = WatchFace::new(&SCREEN_BOUNDS, BakedIcons);
        let corner = Point::new(0, 0);
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), WHITE);
        face.draw(&mut canvas);
        assert_eq!(canvas.pixel(corner), Some(BLACK));

        // Something else scribbles outside the disc
        Pixel(corner, WHITE).draw(&mut canvas).ok();

        // Hands-only frame leaves the corner alone
        face.on_minute_tick(ClockTime::new(1, 5).unwrap());
        face.draw(&mut canvas);
        assert_eq!(canvas.pixel(corner), Some(WHITE));

        face.invalidate();
        face.draw(&mut canvas);
        assert_eq!(canvas.pixel(corner), Some(BLACK));
    }

    #[test]
    fn test_invalidate_forces_redraw() {
        let mut face = face();
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), BLACK);
        face.draw(&mut canvas);
        face.invalidate();
        assert!(face.needs_redraw());
    }
}
