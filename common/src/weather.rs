//! Weather readout state and the icon category mapping.
//!
//! The phone sends a temperature and a category code such as `"rain"`. The
//! code maps onto one of the baked icons; anything unrecognized leaves the
//! current icon as it is.

use core::fmt::Write;

use heapless::String;

use crate::config::{ICON_CATEGORY_LEN, PLACEHOLDER_TEMPERATURE, TEMPERATURE_TEXT_LEN};

// =============================================================================
// Icon Categories
// =============================================================================

/// Weather condition codes understood by the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconCategory {
    ClearDay,
    ClearNight,
    Rain,
    Snow,
    Sleet,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
}

impl IconCategory {
    pub const ALL: [Self; 10] = [
        Self::ClearDay,
        Self::ClearNight,
        Self::Rain,
        Self::Snow,
        Self::Sleet,
        Self::Wind,
        Self::Fog,
        Self::Cloudy,
        Self::PartlyCloudyDay,
        Self::PartlyCloudyNight,
    ];

    /// Exact, case-sensitive match on the wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::ClearNight => "clear-night",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Sleet => "sleet",
            Self::Wind => "wind",
            Self::Fog => "fog",
            Self::Cloudy => "cloudy",
            Self::PartlyCloudyDay => "partly-cloudy-day",
            Self::PartlyCloudyNight => "partly-cloudy-night",
        }
    }

    /// Icon resource baked for this category.
    pub const fn resource(self) -> ResourceId {
        match self {
            Self::ClearDay => ResourceId::ClearSkyDayBlack,
            Self::ClearNight => ResourceId::ClearSkyNightBlack,
            Self::Rain => ResourceId::RainBlack,
            Self::Snow => ResourceId::SnowBlack,
            Self::Sleet => ResourceId::SleetBlack,
            Self::Wind => ResourceId::WindBlack,
            Self::Fog => ResourceId::FogBlack,
            Self::Cloudy => ResourceId::CloudyBlack,
            Self::PartlyCloudyDay => ResourceId::PartlyCloudyDayBlack,
            Self::PartlyCloudyNight => ResourceId::PartlyCloudyNightBlack,
        }
    }
}

/// Baked icon resources, one per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceId {
    ClearSkyDayBlack,
    ClearSkyNightBlack,
    RainBlack,
    SnowBlack,
    SleetBlack,
    WindBlack,
    FogBlack,
    CloudyBlack,
    PartlyCloudyDayBlack,
    PartlyCloudyNightBlack,
}

/// Icon for a wire code, or `None` when the code is unknown.
#[inline]
pub fn select_icon(code: &str) -> Option<ResourceId> { IconCategory::from_code(code).map(IconCategory::resource) }

// =============================================================================
// Weather State
// =============================================================================

/// What changed after applying a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherUpdate {
    /// Icon to show, `None` when the category was not recognized.
    pub icon: Option<ResourceId>,
}

/// Last temperature and icon category received from the phone.
#[derive(Clone, Debug)]
pub struct WeatherState {
    temperature: String<TEMPERATURE_TEXT_LEN>,
    icon_category: String<ICON_CATEGORY_LEN>,
    received: bool,
}

impl WeatherState {
    /// Placeholder temperature, no category.
    pub fn new() -> Self {
        let mut temperature = String::new();
        temperature.push_str(PLACEHOLDER_TEMPERATURE).ok();
        Self {
            temperature,
            icon_category: String::new(),
            received: false,
        }
    }

    /// Store a complete report and resolve its icon.
    pub fn apply(
        &mut self,
        temperature: i32,
        icon_category: &str,
    ) -> WeatherUpdate {
        self.temperature.clear();
        let _ = write!(self.temperature, "{temperature}");

        self.icon_category.clear();
        push_truncated(&mut self.icon_category, icon_category);

        self.received = true;
        WeatherUpdate {
            icon: select_icon(&self.icon_category),
        }
    }

    /// Text shown in the temperature box.
    #[inline]
    pub fn temperature_text(&self) -> &str { &self.temperature }

    /// Category code as received (possibly truncated), empty before the first report.
    #[inline]
    pub fn icon_category(&self) -> &str { &self.icon_category }

    /// True until a complete report has arrived.
    #[inline]
    pub const fn is_degraded(&self) -> bool { !self.received }
}

impl Default for WeatherState {
    fn default() -> Self { Self::new() }
}

/// Copy as much of `src` as fits, never splitting a character.
pub fn push_truncated<const N: usize>(
    dst: &mut String<N>,
    src: &str,
) {
    for c in src.chars() {
        if dst.push(c).is_err() {
            break;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
