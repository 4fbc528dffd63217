use escape_core::Venue;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/users/alerts")]
    Alerts,
    #[at("/reservations/zero-world")]
    ZeroWorld,
    #[at("/reservations/earth-escape")]
    EarthEscape,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn for_venue(venue: Venue) -> Self {
        match venue {
            Venue::ZeroWorld => Self::ZeroWorld,
            Venue::EarthEscape => Self::EarthEscape,
        }
    }

    /// Venue whose reservation form this route shows.
    #[must_use]
    pub const fn venue(&self) -> Option<Venue> {
        match self {
            Self::ZeroWorld => Some(Venue::ZeroWorld),
            Self::EarthEscape => Some(Venue::EarthEscape),
            Self::Home | Self::Alerts | Self::NotFound => None,
        }
    }

    /// Translation key of the navigation label, for routes shown in the nav bar.
    #[must_use]
    pub const fn nav_key(&self) -> Option<&'static str> {
        match self {
            Self::Alerts => Some("nav.alerts"),
            Self::ZeroWorld => Some("nav.zero_world"),
            Self::EarthEscape => Some("nav.earth_escape"),
            Self::Home | Self::NotFound => None,
        }
    }
}

/// Routes listed in the navigation bar, in display order.
pub const NAV_ROUTES: [Route; 3] = [Route::Alerts, Route::ZeroWorld, Route::EarthEscape];
