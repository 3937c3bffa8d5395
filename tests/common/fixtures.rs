//! Fixture artifacts and a temporary project builder
//!
//! The default texts describe a project that satisfies every rule.

use std::fs;
use std::path::{Path, PathBuf};

use archcheck::adapters::memory::MemoryArtifactSource;
use archcheck::core::models::ArtifactName;
use tempfile::TempDir;

pub const SERVICE: &str = r#""""FastAPI service exposing latest signal snapshots."""

from __future__ import annotations

from typing import Any

from fastapi import FastAPI, HTTPException

from .snapshot import normalize_snapshot
from .store import SnapshotStore, build_snapshot_store


def create_app(store: SnapshotStore | None = None) -> FastAPI:
    app = FastAPI(title="cryptoinvest-signal-service", version="0.1.0")
    app.state.store = store or build_snapshot_store()

    def _read_snapshot() -> dict[str, Any] | None:
        snapshot = app.state.store.read()
        return normalize_snapshot(snapshot) if snapshot else None

    @app.get("/health")
    def health() -> dict[str, Any]:
        return {"status": "ok", "store_type": app.state.store.describe()}

    @app.get("/signal")
    def signal() -> dict[str, Any]:
        snapshot = _read_snapshot()
        if snapshot is None:
            raise HTTPException(status_code=503, detail="No signal snapshot available yet.")
        return snapshot

    @app.get('/engine/status')
    def engine_status() -> dict[str, Any]:
        snapshot = _read_snapshot() or {}
        return {"stale": snapshot.get("stale"), "store_type": app.state.store.describe()}

    return app
"#;

pub const WORKER: &str = r#""""Signal worker loop for periodic snapshot generation."""

import time


class SignalWorker:
    def __init__(self, store, settings, fetch_fn):
        self.store = store
        self.settings = settings
        self.fetch_fn = fetch_fn

    def run_once(self):
        raw = self.fetch_fn(symbol=self.settings.symbol, timeframe=self.settings.timeframe)
        closed = raw.iloc[:-1] if len(raw) > 1 else raw
        if closed.empty:
            raise ValueError("No closed candles available")
        self.store.write({"candle_time": closed.index[-1].isoformat()})

    def run_forever(self, interval):
        while True:
            self.run_once()
            time.sleep(interval)
"#;

pub const STORE: &str = r#""""Snapshot store implementations."""

import json
from pathlib import Path


class FileSnapshotStore:
    def __init__(self, path="data/latest_signal.json"):
        self.path = Path(path)

    def read(self):
        if not self.path.exists():
            return None
        return json.loads(self.path.read_text(encoding="utf-8"))
"#;

pub const SNAPSHOT: &str = r#""""Snapshot normalization helpers."""

SNAPSHOT_KEYS = (
    "symbol",
    "timeframe",
    "timestamp",
    "candle_time",
    "signal",
    "stale",
    "error",
    "last_fetch_status",
    "last_success_at",
    "source",
)


def normalize_snapshot(snapshot=None):
    payload = dict(snapshot or {})
    return {key: payload.get(key) for key in SNAPSHOT_KEYS}
"#;

pub const COMPOSE: &str = "services:
  redis:
    image: redis:7-alpine
    ports:
      - \"6379:6379\"
  api:
    build: .
    command: python scripts/run_api.py
    depends_on:
      - redis
  worker:
    build: .
    command: python scripts/run_worker.py
    depends_on:
      - redis
";

/// A startup hook that starts background work
pub const STARTUP_HOOK: &str = "
    @app.on_event(\"startup\")
    def launch_background() -> None:
        scheduler.start()
";

/// Number of pass lines printed by a compliant run, summary excluded
pub const GROUP_COUNT: usize = 6;

/// Default text of an artifact
pub fn text(name: ArtifactName) -> &'static str {
    match name {
        ArtifactName::Service => SERVICE,
        ArtifactName::Worker => WORKER,
        ArtifactName::Store => STORE,
        ArtifactName::Snapshot => SNAPSHOT,
        ArtifactName::Compose => COMPOSE,
    }
}

/// In-memory source holding every compliant artifact
pub fn compliant_source() -> MemoryArtifactSource {
    ArtifactName::ALL
        .into_iter()
        .fold(MemoryArtifactSource::new(), |source, name| source.with(name, text(name)))
}

/// A compliant project on disk
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create a project whose artifacts satisfy every rule
    ///
    /// A `pyproject.toml` marks the root so discovery never walks past it.
    pub fn compliant() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"cryptoinvest\"\n")
            .unwrap();
        let project = Self { dir };
        for name in ArtifactName::ALL {
            project.write(name, text(name));
        }
        project
    }

    /// Get the root path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of an artifact under the default layout
    pub fn artifact_path(&self, name: ArtifactName) -> PathBuf {
        self.path().join(name.default_path())
    }

    /// Overwrite an artifact
    pub fn write(&self, name: ArtifactName, content: &str) {
        let path = self.artifact_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Delete an artifact
    pub fn remove(&self, name: ArtifactName) {
        fs::remove_file(self.artifact_path(name)).unwrap();
    }
}
