//! Request fixtures written to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use fuelstop_core::test_support::equator_longitude;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Length of the fixture route along the equator, in miles.
pub(super) const ROUTE_MILES: f64 = 800.0;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding `request.json`.
#[derive(Debug)]
pub(super) struct RequestDir {
    _dir: TempDir,
    pub(super) request_path: Utf8PathBuf,
}

impl RequestDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            _dir: dir,
            request_path: root.join("request.json"),
        }
    }

    pub(super) fn write_json(&self, value: &Value) {
        let payload = serde_json::to_vec_pretty(value).expect("serialise request");
        write_utf8(&self.request_path, &payload);
    }
}

fn station(id: &str, mile: f64, lat: f64, price: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Station {id}"),
        "lat": lat,
        "lng": equator_longitude(mile),
        "price": price,
    })
}

/// An 800-mile equator route with a dear station at mile 150, a cheap one
/// at mile 400, and one a degree north of the route.
pub(super) fn two_station_request() -> Value {
    json!({
        "route": {
            "points": [
                { "lat": 0.0, "lng": 0.0 },
                { "lat": 0.0, "lng": equator_longitude(400.0) },
                { "lat": 0.0, "lng": equator_longitude(ROUTE_MILES) },
            ],
        },
        "candidates": [
            station("dear", 150.0, 0.0, 3.0),
            station("cheap", 400.0, 0.0, 2.5),
            station("north", 300.0, 1.0, 1.0),
        ],
    })
}
