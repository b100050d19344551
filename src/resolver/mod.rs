//! Destination resolver for the landing page.
//!
//! View state is the explicit record [`ResolverState`]. [`ResolverState::apply`]
//! is a pure transition over [`ResolverEvent`]s and returns the [`Effect`]
//! the caller must carry out. [`DestinationResolver`] runs the only async chain:
//! geolocate, reverse-geocode, build the route query, navigate.
//!
//! ```text
//! idle --Submit--> locating --LocationResolved--> navigate (done)
//!                      \------LocationFailed----> idle (error shown)
//! ```

pub mod geocode;
pub mod geolocation;
pub mod query;

use thiserror::Error;
use tracing::{error, info};

pub use geocode::{GeocodeError, NominatimClient, ReverseGeocode, ReverseGeocoder};
pub use geolocation::{BrowserGeolocator, Coordinates, GeolocationError, Geolocator};
pub use query::{RouteQuery, ROUTE_PATH};

/// The one message shown for every location failure.
pub const LOCATION_ERROR_MESSAGE: &str =
    "Unable to get your location. Please allow location access and try again.";

/// Width (px) below which the landing page uses its mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Failure of the geolocate + reverse-geocode chain.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

/// A device position together with its address.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOrigin {
    pub coords: Coordinates,
    pub place: ReverseGeocode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolverEvent {
    InputChanged(String),
    Resize { width: f64 },
    Submit,
    LocationResolved {
        destination: String,
        origin: ResolvedOrigin,
    },
    LocationFailed,
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start resolving the origin for this destination.
    Locate { destination: String },
    /// Go to the route view.
    Navigate(RouteQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverState {
    pub destination: String,
    pub is_locating: bool,
    pub error: Option<String>,
    pub is_mobile: bool,
    pub mobile_breakpoint: f64,
}

impl Default for ResolverState {
    fn default() -> Self {
        Self::with_breakpoint(DEFAULT_MOBILE_BREAKPOINT)
    }
}

impl ResolverState {
    pub fn with_breakpoint(mobile_breakpoint: f64) -> Self {
        Self {
            destination: String::new(),
            is_locating: false,
            error: None,
            is_mobile: false,
            mobile_breakpoint,
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.destination.is_empty() && !self.is_locating
    }

    pub fn apply(&mut self, event: ResolverEvent) -> Effect {
        match event {
            ResolverEvent::InputChanged(text) => {
                self.destination = text;
                Effect::None
            }
            ResolverEvent::Resize { width } => {
                self.is_mobile = width < self.mobile_breakpoint;
                Effect::None
            }
            ResolverEvent::Submit => {
                if !self.can_submit() {
                    return Effect::None;
                }
                self.is_locating = true;
                self.error = None;
                Effect::Locate {
                    destination: self.destination.clone(),
                }
            }
            ResolverEvent::LocationResolved {
                destination,
                origin,
            } => {
                self.is_locating = false;
                if destination.is_empty() {
                    return Effect::None;
                }
                Effect::Navigate(RouteQuery::new(origin.coords, &origin.place, &destination))
            }
            ResolverEvent::LocationFailed => {
                self.is_locating = false;
                self.error = Some(LOCATION_ERROR_MESSAGE.to_string());
                Effect::None
            }
        }
    }
}

/// Somewhere the resolver state lives between suspension points.
///
/// Implemented for a plain [`ResolverState`] and for the landing page's signal.
pub trait StateCell {
    fn update<T>(&mut self, f: impl FnOnce(&mut ResolverState) -> T) -> T;
}

impl StateCell for ResolverState {
    fn update<T>(&mut self, f: impl FnOnce(&mut ResolverState) -> T) -> T {
        f(self)
    }
}

/// Client-side navigation to the route view.
pub trait RouteNavigator {
    fn navigate(&self, query: &RouteQuery);
}

/// Drives submit: geolocate, reverse-geocode, navigate.
#[derive(Clone)]
pub struct DestinationResolver<G, R, N> {
    geolocator: G,
    geocoder: R,
    navigator: N,
}

impl<G, R, N> DestinationResolver<G, R, N>
where
    G: Geolocator,
    R: ReverseGeocoder,
    N: RouteNavigator,
{
    pub fn new(geolocator: G, geocoder: R, navigator: N) -> Self {
        Self {
            geolocator,
            geocoder,
            navigator,
        }
    }

    /// Steps 1 and 2, strictly in sequence.
    pub async fn resolve_origin(&self) -> Result<ResolvedOrigin, ResolveError> {
        let coords = self.geolocator.current_position().await?;
        let place = self.geocoder.reverse(coords).await?;
        Ok(ResolvedOrigin { coords, place })
    }

    /// Handle a submit against `cell`. Does nothing when the destination is
    /// empty or a lookup is already in flight.
    pub async fn submit(&self, cell: &mut impl StateCell) {
        let destination = match cell.update(|s| s.apply(ResolverEvent::Submit)) {
            Effect::Locate { destination } => destination,
            _ => return,
        };

        let event = match self.resolve_origin().await {
            Ok(origin) => {
                info!(
                    lat = origin.coords.latitude,
                    lon = origin.coords.longitude,
                    origin = %origin.place.display_name,
                    "Resolved origin"
                );
                ResolverEvent::LocationResolved {
                    destination,
                    origin,
                }
            }
            Err(e) => {
                error!(error = %e, "Error getting location");
                ResolverEvent::LocationFailed
            }
        };

        if let Effect::Navigate(query) = cell.update(|s| s.apply(event)) {
            self.navigator.navigate(&query);
        }
    }
}
