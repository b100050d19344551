//! End-to-end landing flow against a local reverse-geocoding service.

#![cfg(feature = "server")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use para_po::resolver::{
    Coordinates, DestinationResolver, GeolocationError, Geolocator, NominatimClient,
    ResolverEvent, ResolverState, RouteNavigator, RouteQuery, LOCATION_ERROR_MESSAGE,
};

/// How the fake geocoder answers.
#[derive(Clone, Copy)]
enum Reply {
    Address,
    ServerError,
    NoAddress,
}

#[derive(Clone)]
struct Geocoder {
    reply: Reply,
    hits: Arc<AtomicUsize>,
}

async fn reverse(
    State(geocoder): State<Geocoder>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    geocoder.hits.fetch_add(1, Ordering::SeqCst);
    assert_eq!(params.get("format").map(String::as_str), Some("json"));
    match geocoder.reply {
        Reply::Address => Json(json!({
            "lat": params["lat"],
            "lon": params["lon"],
            "display_name": "BGC, Manila",
        }))
        .into_response(),
        Reply::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Reply::NoAddress => Json(json!({"error": "Unable to geocode"})).into_response(),
    }
}

/// Start a geocoder; returns its base URL and hit counter.
async fn start_geocoder(reply: Reply) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/reverse", get(reverse))
        .with_state(Geocoder {
            reply,
            hits: hits.clone(),
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), hits)
}

struct FixedPosition(Result<Coordinates, GeolocationError>);

#[async_trait(?Send)]
impl Geolocator for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.0.clone()
    }
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<RouteQuery>>>);

impl RouteNavigator for Recorder {
    fn navigate(&self, query: &RouteQuery) {
        self.0.borrow_mut().push(query.clone());
    }
}

const MANILA: Coordinates = Coordinates {
    latitude: 14.5,
    longitude: 120.9,
};

fn typed(destination: &str) -> ResolverState {
    let mut state = ResolverState::default();
    state.apply(ResolverEvent::InputChanged(destination.to_string()));
    state
}

#[tokio::test]
async fn test_mall_of_asia_scenario() {
    let (base, hits) = start_geocoder(Reply::Address).await;
    let recorder = Recorder::default();
    let resolver = DestinationResolver::new(
        FixedPosition(Ok(MANILA)),
        NominatimClient::new(base),
        recorder.clone(),
    );
    let mut state = typed("Mall of Asia");

    resolver.submit(&mut state).await;

    let pushed = recorder.0.borrow();
    assert_eq!(pushed.len(), 1, "exactly one navigation");
    assert_eq!(
        pushed[0].href(),
        "/route?originLat=14.5&originLon=120.9&originName=BGC%2C+Manila&destination=Mall+of+Asia"
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!state.is_locating);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_empty_destination_is_noop() {
    let (base, hits) = start_geocoder(Reply::Address).await;
    let recorder = Recorder::default();
    let resolver = DestinationResolver::new(
        FixedPosition(Ok(MANILA)),
        NominatimClient::new(base),
        recorder.clone(),
    );
    let mut state = typed("");

    resolver.submit(&mut state).await;

    assert!(recorder.0.borrow().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_permission_denied_skips_geocoder() {
    let (base, hits) = start_geocoder(Reply::Address).await;
    let recorder = Recorder::default();
    let resolver = DestinationResolver::new(
        FixedPosition(Err(GeolocationError::PermissionDenied)),
        NominatimClient::new(base),
        recorder.clone(),
    );
    let mut state = typed("Mall of Asia");

    resolver.submit(&mut state).await;

    assert!(recorder.0.borrow().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(state.error.as_deref(), Some(LOCATION_ERROR_MESSAGE));
    assert!(!state.is_locating);
}

#[tokio::test]
async fn test_geocoder_failures_surface_location_error() {
    for reply in [Reply::ServerError, Reply::NoAddress] {
        let (base, hits) = start_geocoder(reply).await;
        let recorder = Recorder::default();
        let resolver = DestinationResolver::new(
            FixedPosition(Ok(MANILA)),
            NominatimClient::new(base),
            recorder.clone(),
        );
        let mut state = typed("Mall of Asia");

        resolver.submit(&mut state).await;

        assert!(recorder.0.borrow().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(state.error.as_deref(), Some(LOCATION_ERROR_MESSAGE));
        assert!(!state.is_locating);
        assert!(state.can_submit(), "user can retry");
    }
}
