//! Temporary workspaces and fixture payloads for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Readings for two spots: clean offshore at Strandhill, blown out at Easkey.
pub(super) const READINGS_JSON: &str = r#"{
    "strandhill": {
        "swell_height": 1.5, "swell_period": 12.0, "swell_direction": 290.0,
        "wave_height": 1.5, "wave_period": 11.0,
        "wind_speed_10m": 8.0, "wind_direction": 100.0
    },
    "easkey": {
        "swell_height": 1.5, "swell_period": 12.0, "swell_direction": 320.0,
        "wave_height": 2.4, "wave_period": 7.0,
        "wind_speed_10m": 35.0, "wind_direction": 0.0
    }
}"#;

pub(super) const MARINE_JSON: &str = r#"{"hourly": {
    "swell_wave_height": [1.62, 1.71],
    "swell_wave_period": [12.2, 12.6],
    "swell_wave_direction": [284.6, 286.1],
    "wave_height": [1.74, 1.8],
    "wave_period": [11.0, 11.2]
}}"#;

pub(super) const FORECAST_JSON: &str = r#"{"hourly": {
    "wind_speed_10m": [10.0, 12.5],
    "wind_direction_10m": [95.0, 101.0]
}}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory that lives as long as the test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
