//! Camera synchronizer
//!
//! Keeps every registered view at the same camera pose. Each view gets one
//! move listener, built once and kept for the synchronizer's lifetime, which
//! treats that view as the source of truth when it fires.
//!
//! A propagation pass detaches every listener before writing cameras and
//! re-attaches them afterwards, so the move events raised by those writes
//! never re-enter the synchronizer.

use crate::{
    core::viewport::CameraOptions,
    input::{handler::listener, EventListener, MapEventType},
    prelude::{Arc, Weak},
    traits::MapView,
    MapError, Result,
};
use std::sync::atomic::{AtomicBool, Ordering};

struct SyncInner {
    views: Vec<Arc<dyn MapView>>,
    /// `bindings[i]` is attached to `views[i]` and syncs from it
    bindings: Vec<EventListener>,
    attached: AtomicBool,
}

impl SyncInner {
    fn attach_all(&self) {
        for (view, binding) in self.views.iter().zip(&self.bindings) {
            view.on(MapEventType::Move, binding.clone());
        }
        self.attached.store(true, Ordering::SeqCst);
        log::trace!("attached {} move listener(s)", self.bindings.len());
    }

    fn detach_all(&self) {
        for (view, binding) in self.views.iter().zip(&self.bindings) {
            view.off(MapEventType::Move, binding);
        }
        self.attached.store(false, Ordering::SeqCst);
        log::trace!("detached {} move listener(s)", self.bindings.len());
    }

    fn with_listeners_detached<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let was_attached = self.attached.load(Ordering::SeqCst);
        if was_attached {
            self.detach_all();
        }
        let result = f();
        if was_attached {
            self.attach_all();
        }
        result
    }

    fn synchronize(&self, source: usize) -> Result<()> {
        if self.views.len() < 2 {
            return Ok(());
        }
        let source_view = self.views.get(source).ok_or_else(|| {
            MapError::InvalidView(format!(
                "source index {} out of range for {} view(s)",
                source,
                self.views.len()
            ))
        })?;

        self.with_listeners_detached(|| {
            let camera = source_view.camera()?;
            log::debug!(
                "sync from view {}: center=({:.6}, {:.6}) zoom={:.2} bearing={:.1} pitch={:.1}",
                source,
                camera.center.lat,
                camera.center.lng,
                camera.zoom,
                camera.bearing,
                camera.pitch
            );
            for (index, target) in self.views.iter().enumerate() {
                if index != source {
                    target.set_camera(CameraOptions::jump(camera))?;
                }
            }
            Ok(())
        })
    }
}

/// Registry of synchronized map views and their move listeners
pub struct CameraSync {
    inner: Arc<SyncInner>,
}

impl CameraSync {
    /// Registers `views` and builds one binding per view. Nothing is attached yet.
    pub fn new(views: Vec<Arc<dyn MapView>>) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<SyncInner>| {
            let bindings = (0..views.len())
                .map(|index| {
                    let weak = weak.clone();
                    listener(move |_| match weak.upgrade() {
                        Some(inner) => inner.synchronize(index),
                        None => Ok(()),
                    })
                })
                .collect();
            SyncInner {
                views,
                bindings,
                attached: AtomicBool::new(false),
            }
        });
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.views.is_empty()
    }

    pub fn views(&self) -> &[Arc<dyn MapView>] {
        &self.inner.views
    }

    /// The move listener bound to view `index`
    pub fn binding(&self, index: usize) -> Option<&EventListener> {
        self.inner.bindings.get(index)
    }

    pub fn is_attached(&self) -> bool {
        self.inner.attached.load(Ordering::SeqCst)
    }

    /// Attach every view's move listener
    pub fn attach_all(&self) {
        self.inner.attach_all();
    }

    /// Detach every view's move listener
    pub fn detach_all(&self) {
        self.inner.detach_all();
    }

    /// Copy the camera of view `source` onto every other view with a jump.
    ///
    /// A no-op with fewer than two views. Host errors are returned as-is
    /// after listeners have been restored; remaining targets are not written.
    pub fn synchronize(&self, source: usize) -> Result<()> {
        self.inner.synchronize(source)
    }

    /// Runs `f` with every move listener detached, restoring them afterwards
    /// if they were attached on entry.
    pub fn with_listeners_detached<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        self.inner.with_listeners_detached(f)
    }
}

impl std::fmt::Debug for CameraSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSync")
            .field("views", &self.len())
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        geo::{LatLng, Point},
        map::Map,
        viewport::{Camera, Viewport},
    };

    fn maps(count: usize) -> (Vec<Arc<Map>>, CameraSync) {
        let maps: Vec<Arc<Map>> = (0..count)
            .map(|i| Arc::new(Map::new(LatLng::new(i as f64, i as f64), 1.0, Point::new(400.0, 300.0))))
            .collect();
        let views = maps
            .iter()
            .map(|m| m.clone() as Arc<dyn MapView>)
            .collect();
        (maps, CameraSync::new(views))
    }

    #[test]
    fn test_synchronize_converges() {
        let (maps, sync) = maps(3);
        let camera = Camera::new(LatLng::new(48.85, 2.35), 11.0, 20.0, 40.0);
        maps[1].set_camera(CameraOptions::jump(camera)).unwrap();

        sync.synchronize(1).unwrap();
        for map in &maps {
            assert_eq!(map.camera().unwrap(), camera);
        }
    }

    #[test]
    fn test_single_view_is_noop() {
        let (maps, sync) = maps(1);
        let before = maps[0].camera().unwrap();
        sync.synchronize(0).unwrap();
        assert_eq!(maps[0].camera().unwrap(), before);
    }

    #[test]
    fn test_out_of_range_source() {
        let (_maps, sync) = maps(2);
        assert!(sync.synchronize(5).is_err());
    }

    #[test]
    fn test_attach_detach_is_idempotent() {
        let (maps, sync) = maps(2);
        sync.attach_all();
        sync.attach_all();
        assert!(sync.is_attached());
        for map in &maps {
            assert_eq!(map.listener_count(MapEventType::Move), 1);
        }

        sync.detach_all();
        sync.detach_all();
        assert!(!sync.is_attached());
        for map in &maps {
            assert_eq!(map.listener_count(MapEventType::Move), 0);
        }
    }

    #[test]
    fn test_bindings_are_stable() {
        let (_maps, sync) = maps(2);
        let before = sync.binding(0).unwrap().clone();
        sync.attach_all();
        sync.synchronize(0).unwrap();
        sync.detach_all();
        assert!(Arc::ptr_eq(&before, sync.binding(0).unwrap()));
        assert!(sync.binding(2).is_none());
    }

    #[test]
    fn test_move_on_any_view_propagates() {
        let (maps, sync) = maps(2);
        sync.attach_all();

        maps[1].set_view(LatLng::new(-33.86, 151.2), 9.0).unwrap();
        assert_eq!(maps[0].camera().unwrap(), maps[1].camera().unwrap());

        maps[0].rotate_to(90.0).unwrap();
        assert_eq!(maps[1].camera().unwrap().bearing, 90.0);
        assert!(sync.is_attached());
    }

    #[test]
    fn test_guard_nests() {
        let (maps, sync) = maps(2);
        sync.attach_all();
        sync.with_listeners_detached(|| {
            assert_eq!(maps[0].listener_count(MapEventType::Move), 0);
            sync.with_listeners_detached(|| Ok(()))?;
            assert_eq!(maps[0].listener_count(MapEventType::Move), 0);
            Ok(())
        })
        .unwrap();
        assert_eq!(maps[0].listener_count(MapEventType::Move), 1);
    }

    #[test]
    fn test_inverted_zoom_limits_do_not_break_sync() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 4.0, Point::new(400.0, 300.0));
        viewport.set_zoom_limits(12.0, 3.0);
        let bounded = Arc::new(Map::with_viewport(viewport));
        let free = Arc::new(Map::new(LatLng::new(1.0, 1.0), 1.0, Point::new(400.0, 300.0)));
        let sync = CameraSync::new(vec![free.clone(), bounded.clone()]);

        free.set_view(LatLng::new(20.0, 30.0), 18.0).unwrap();
        sync.synchronize(0).unwrap();
        assert_eq!(bounded.camera().unwrap().zoom, 12.0);
        assert_eq!(bounded.camera().unwrap().center, LatLng::new(20.0, 30.0));
    }

    #[test]
    fn test_dropped_sync_binding_is_inert() {
        let (maps, sync) = maps(2);
        sync.attach_all();
        let binding = sync.binding(0).unwrap().clone();
        drop(sync);

        maps[0].set_view(LatLng::new(5.0, 5.0), 4.0).unwrap();
        assert_ne!(maps[0].camera().unwrap(), maps[1].camera().unwrap());
        assert!(binding(&crate::input::MapEvent::Ready).is_ok());
    }
}
