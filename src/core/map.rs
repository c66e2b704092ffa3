use crate::{
    core::{
        geo::{LatLng, Point},
        viewport::{Camera, CameraOptions, TransitionKind, Viewport},
    },
    input::{EventListener, EventManager, MapEvent, MapEventType},
    traits::{ElementHandle, MapView},
    ui::elements::{ChromeKind, Element},
    Result,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Headless map view.
///
/// Holds a camera, a set of styleable elements and an event stream, and
/// implements [`MapView`] without any rendering backend. Camera writes are
/// applied instantly; easing is not simulated.
pub struct Map {
    viewport: Mutex<Viewport>,
    event_manager: Mutex<EventManager>,
    container: Arc<Element>,
    render_surface: Arc<Element>,
    logo: Arc<Element>,
    attribution: Arc<Element>,
    ready: AtomicBool,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self::with_viewport(Viewport::new(center, zoom, size))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport: Mutex::new(viewport),
            event_manager: Mutex::new(EventManager::new()),
            container: Arc::new(Element::new("map-container")),
            render_surface: Arc::new(Element::new("map-canvas-container")),
            logo: Arc::new(Element::new("map-logo")),
            attribution: Arc::new(Element::new("map-copyright")),
            ready: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current viewport
    pub fn viewport(&self) -> Viewport {
        lock(&self.viewport).clone()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Signals the first successful render. Ready listeners run once and are dropped.
    pub fn mark_ready(&self) -> Result<()> {
        if self.ready.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        let listeners = {
            let mut events = lock(&self.event_manager);
            let listeners = events.listeners(MapEventType::Ready);
            events.clear(MapEventType::Ready);
            listeners
        };
        log::debug!("map ready, notifying {} listener(s)", listeners.len());
        EventManager::dispatch(&listeners, &MapEvent::Ready)
    }

    /// Emits an event to the current listeners without touching the camera
    pub fn emit(&self, event: MapEvent) -> Result<()> {
        let listeners = lock(&self.event_manager).listeners(event.event_type());
        EventManager::dispatch(&listeners, &event)
    }

    pub fn listener_count(&self, event_type: MapEventType) -> usize {
        lock(&self.event_manager).listener_count(event_type)
    }

    pub fn set_view(&self, center: LatLng, zoom: f64) -> Result<()> {
        let camera = Camera {
            center,
            zoom,
            ..self.camera()?
        };
        self.set_camera(CameraOptions::jump(camera))
    }

    pub fn rotate_to(&self, bearing: f64) -> Result<()> {
        let camera = Camera {
            bearing,
            ..self.camera()?
        };
        self.set_camera(CameraOptions::jump(camera))
    }

    pub fn pitch_to(&self, pitch: f64) -> Result<()> {
        let camera = Camera {
            pitch,
            ..self.camera()?
        };
        self.set_camera(CameraOptions::jump(camera))
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::with_viewport(Viewport::default())
    }
}

impl MapView for Map {
    fn camera(&self) -> Result<Camera> {
        Ok(lock(&self.viewport).camera())
    }

    fn set_camera(&self, options: CameraOptions) -> Result<()> {
        if let TransitionKind::Ease { duration_ms } = options.transition {
            log::trace!("ease of {}ms applied as jump", duration_ms);
        }

        let moved = {
            let mut viewport = lock(&self.viewport);
            viewport
                .apply_camera(&options.camera)
                .then(|| viewport.camera())
        };

        match moved {
            Some(camera) => self.emit(MapEvent::Move { camera }),
            None => Ok(()),
        }
    }

    fn resize(&self, width: f64, height: f64) -> Result<()> {
        let size = Point::new(width, height);
        lock(&self.viewport).set_size(size);
        self.emit(MapEvent::Resize { size })
    }

    fn container(&self) -> Result<Arc<dyn ElementHandle>> {
        Ok(self.container.clone())
    }

    fn render_surface(&self) -> Result<Arc<dyn ElementHandle>> {
        Ok(self.render_surface.clone())
    }

    fn chrome(&self, kind: ChromeKind) -> Option<Arc<dyn ElementHandle>> {
        let element: Arc<dyn ElementHandle> = match kind {
            ChromeKind::Logo => self.logo.clone(),
            ChromeKind::Attribution => self.attribution.clone(),
        };
        Some(element)
    }

    /// A `Ready` listener added after [`Map::mark_ready`] runs immediately and
    /// is not stored. Its error is logged at warn level.
    fn on(&self, event_type: MapEventType, listener: EventListener) {
        if event_type == MapEventType::Ready && self.is_ready() {
            if let Err(e) = listener(&MapEvent::Ready) {
                log::warn!("ready listener failed: {}", e);
            }
            return;
        }
        lock(&self.event_manager).on(event_type, listener);
    }

    fn off(&self, event_type: MapEventType, listener: &EventListener) {
        lock(&self.event_manager).off(event_type, listener);
    }
}
