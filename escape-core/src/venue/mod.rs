//! Venue descriptors.
//!
//! Each escape-room operator is described by one [`VenueDescriptor`] value:
//! field defaults, theme resolution, endpoint, notices and the wire shape of
//! its booking request. The form controller is written once against this
//! descriptor.

mod earth_escape;
mod zero_world;

pub use earth_escape::{
    EARTH_ESCAPE_BRANCHES, EARTH_ESCAPE_THEMES, EarthEscapeRequest, EarthEscapeTheme,
};
pub use zero_world::{WEEKDAY_THEMES, WEEKEND_THEMES, ZeroWorldRequest, day_kind, is_weekend};

use crate::form::ReservationForm;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Venue {
    ZeroWorld,
    EarthEscape,
}

impl Venue {
    pub const ALL: [Self; 2] = [Self::ZeroWorld, Self::EarthEscape];

    /// URL segment shared by the page route and the API endpoint.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ZeroWorld => "zero-world",
            Self::EarthEscape => "earth-escape",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }

    #[must_use]
    pub fn descriptor(self) -> &'static VenueDescriptor {
        match self {
            Self::ZeroWorld => &zero_world::DESCRIPTOR,
            Self::EarthEscape => &earth_escape::DESCRIPTOR,
        }
    }
}

/// A selectable theme in a reservation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// A selectable branch in a reservation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Weekday => "reservation.weekday",
            Self::Weekend => "reservation.weekend",
        }
    }
}

/// Theme options derived from the current form values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeChoices {
    pub options: Vec<ThemeOption>,
    /// Whether the theme selector accepts input yet.
    pub enabled: bool,
    /// Weekday/weekend table in use, for venues that price by day kind.
    pub day_kind: Option<DayKind>,
}

impl ThemeChoices {
    #[must_use]
    pub fn find(&self, id: &str) -> Option<ThemeOption> {
        self.options.iter().copied().find(|o| o.id == id)
    }
}

/// Venue-specific booking payload, serialised as the endpoint expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReservationRequest {
    ZeroWorld(ZeroWorldRequest),
    EarthEscape(EarthEscapeRequest),
}

impl ReservationRequest {
    #[must_use]
    pub const fn venue(&self) -> Venue {
        match self {
            Self::ZeroWorld(_) => Venue::ZeroWorld,
            Self::EarthEscape(_) => Venue::EarthEscape,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        self.venue().descriptor().endpoint
    }
}

/// Everything the shared form controller needs to know about one venue.
pub struct VenueDescriptor {
    pub venue: Venue,
    pub title_key: &'static str,
    pub endpoint: &'static str,
    pub branches: &'static [Branch],
    /// Offered slots as sent on the wire.
    pub time_slots: &'static [&'static str],
    pub payment_key: &'static str,
    pub notice_keys: &'static [&'static str],
    defaults: fn() -> ReservationForm,
    themes: fn(&ReservationForm) -> ThemeChoices,
    request: fn(&ReservationForm) -> ReservationRequest,
}

impl VenueDescriptor {
    #[must_use]
    pub fn defaults(&self) -> ReservationForm {
        (self.defaults)()
    }

    /// Themes selectable for the given form values. Never cached.
    #[must_use]
    pub fn theme_choices(&self, form: &ReservationForm) -> ThemeChoices {
        (self.themes)(form)
    }

    #[must_use]
    pub fn build_request(&self, form: &ReservationForm) -> ReservationRequest {
        (self.request)(form)
    }

    #[must_use]
    pub fn requires_branch(&self) -> bool {
        !self.branches.is_empty()
    }

    #[must_use]
    pub fn offers_time(&self, time: &str) -> bool {
        self.time_slots.contains(&time)
    }
}

/// Display label for a time slot (`HH:MM`).
#[must_use]
pub fn time_label(slot: &str) -> &str {
    slot.get(..5).unwrap_or(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for venue in Venue::ALL {
            assert_eq!(Venue::from_slug(venue.slug()), Some(venue));
            assert_eq!(venue.descriptor().venue, venue);
        }
        assert_eq!(Venue::from_slug("nowhere"), None);
    }

    #[test]
    fn endpoints_follow_the_slug() {
        assert_eq!(
            Venue::ZeroWorld.descriptor().endpoint,
            "/api/reservations/zero-world"
        );
        assert_eq!(
            Venue::EarthEscape.descriptor().endpoint,
            "/api/reservations/earth-escape"
        );
    }

    #[test]
    fn time_labels_drop_seconds() {
        assert_eq!(time_label("11:00:00"), "11:00");
        assert_eq!(time_label("10:00"), "10:00");
        assert_eq!(time_label("9"), "9");
    }
}
