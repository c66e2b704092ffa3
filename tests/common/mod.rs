//! Shared test host: a headless map that records camera writes and can be
//! told to fail or to emit extra move events.

#![allow(dead_code)]

use spyglass::{
    input::EventListener, Camera, CameraOptions, ChromeKind, ElementHandle, LatLng, Map, MapError,
    MapEvent, MapEventType, MapView, Point, Result,
};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

pub struct RecordingView {
    pub map: Map,
    set_camera_calls: AtomicUsize,
    fail_set_camera: AtomicBool,
    move_on_resize: AtomicBool,
}

impl RecordingView {
    pub fn new(center: LatLng, zoom: f64) -> Arc<Self> {
        Arc::new(Self {
            map: Map::new(center, zoom, Point::new(800.0, 600.0)),
            set_camera_calls: AtomicUsize::new(0),
            fail_set_camera: AtomicBool::new(false),
            move_on_resize: AtomicBool::new(false),
        })
    }

    pub fn set_camera_calls(&self) -> usize {
        self.set_camera_calls.load(Ordering::SeqCst)
    }

    pub fn reset_calls(&self) {
        self.set_camera_calls.store(0, Ordering::SeqCst);
    }

    pub fn fail_set_camera(&self, fail: bool) {
        self.fail_set_camera.store(fail, Ordering::SeqCst);
    }

    /// Makes `resize` emit a move event, like engines that re-fit on resize
    pub fn move_on_resize(&self, enabled: bool) {
        self.move_on_resize.store(enabled, Ordering::SeqCst);
    }

    /// Simulates a user gesture: camera change on the underlying map
    pub fn user_move(&self, camera: Camera) -> Result<()> {
        self.map.set_camera(CameraOptions::jump(camera))
    }
}

impl MapView for RecordingView {
    fn camera(&self) -> Result<Camera> {
        self.map.camera()
    }

    fn set_camera(&self, options: CameraOptions) -> Result<()> {
        self.set_camera_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set_camera.load(Ordering::SeqCst) {
            return Err(MapError::Camera("host rejected camera".to_string()).into());
        }
        self.map.set_camera(options)
    }

    fn resize(&self, width: f64, height: f64) -> Result<()> {
        self.map.resize(width, height)?;
        if self.move_on_resize.load(Ordering::SeqCst) {
            let camera = self.map.camera()?;
            self.map.emit(MapEvent::Move { camera })?;
        }
        Ok(())
    }

    fn container(&self) -> Result<Arc<dyn ElementHandle>> {
        self.map.container()
    }

    fn render_surface(&self) -> Result<Arc<dyn ElementHandle>> {
        self.map.render_surface()
    }

    fn chrome(&self, kind: ChromeKind) -> Option<Arc<dyn ElementHandle>> {
        self.map.chrome(kind)
    }

    fn on(&self, event_type: MapEventType, listener: EventListener) {
        self.map.on(event_type, listener)
    }

    fn off(&self, event_type: MapEventType, listener: &EventListener) {
        self.map.off(event_type, listener)
    }
}

pub fn camera(lat: f64, lng: f64, zoom: f64, bearing: f64, pitch: f64) -> Camera {
    Camera::new(LatLng::new(lat, lng), zoom, bearing, pitch)
}
