//! Spyglass control
//!
//! Overlays a secondary map (the spyglass) on a primary map and keeps their
//! cameras locked together. Options style the spyglass container and render
//! surface; each option touches exactly one visual facet.

use crate::{
    core::{
        config::{SpyglassOptions, SpyglassOptionsPatch, SpyglassShape},
        sync::CameraSync,
    },
    input::{handler::listener, MapEventType},
    prelude::Arc,
    traits::{ElementHandle, MapView},
    ui::{
        elements::ChromeKind,
        style::{BorderStyle, Display, Length, Positioning, StyleProperty},
    },
    MapError, Result,
};
use serde_json::Value;

/// Builder for a [`SpyglassControl`]
pub struct SpyglassControlBuilder {
    primary: Arc<dyn MapView>,
    spy: Arc<dyn MapView>,
    extra_views: Vec<Arc<dyn MapView>>,
    options: Option<SpyglassOptionsPatch>,
    alignment_source: usize,
}

impl SpyglassControlBuilder {
    /// Caller-supplied option overrides, applied after the defaults
    pub fn options(mut self, options: SpyglassOptionsPatch) -> Self {
        self.options = Some(options);
        self
    }

    /// Register a further view kept in lock-step with the primary and spyglass
    pub fn with_view(mut self, view: Arc<dyn MapView>) -> Self {
        self.extra_views.push(view);
        self
    }

    /// Registry index whose camera seeds the initial alignment.
    /// 0 is the primary map, 1 the spyglass, then views added with `with_view`.
    pub fn alignment_source(mut self, index: usize) -> Self {
        self.alignment_source = index;
        self
    }

    pub fn build(self) -> Result<SpyglassControl> {
        let view_count = 2 + self.extra_views.len();
        if self.alignment_source >= view_count {
            return Err(MapError::InvalidView(format!(
                "alignment source {} out of range for {} view(s)",
                self.alignment_source, view_count
            ))
            .into());
        }

        let container = self.spy.container()?;
        container.apply_style(StyleProperty::Position(Positioning::Absolute));

        let mut control = SpyglassControl {
            primary: self.primary.clone(),
            spy: self.spy.clone(),
            options: SpyglassOptions::default(),
            sync: None,
        };
        control.set_options(SpyglassOptions::default().to_patch())?;
        if let Some(options) = &self.options {
            control.set_options(options.clone())?;
        }

        let mut views = vec![self.primary, self.spy.clone()];
        views.extend(self.extra_views);
        let sync = CameraSync::new(views);
        sync.synchronize(self.alignment_source)?;
        sync.attach_all();
        hide_chrome_when_ready(&self.spy);
        log::debug!(
            "spyglass active: {} view(s) synchronized from view {}",
            sync.len(),
            self.alignment_source
        );
        control.sync = Some(sync);

        Ok(control)
    }
}

/// Hides the spyglass view's logo and attribution once it has rendered.
fn hide_chrome_when_ready(spy: &Arc<dyn MapView>) {
    let weak = Arc::downgrade(spy);
    spy.on(
        MapEventType::Ready,
        listener(move |_| {
            let Some(spy) = weak.upgrade() else {
                return Ok(());
            };
            for kind in [ChromeKind::Logo, ChromeKind::Attribution] {
                let element = spy.chrome(kind).ok_or_else(|| {
                    MapError::ElementMissing(format!("{:?} chrome on spyglass view", kind))
                })?;
                element.apply_style(StyleProperty::Display(Display::None));
            }
            Ok(())
        }),
    );
}

/// A window into an alternate data set, drawn as a lens over the primary map
pub struct SpyglassControl {
    primary: Arc<dyn MapView>,
    spy: Arc<dyn MapView>,
    options: SpyglassOptions,
    /// `None` only while the control is being built
    sync: Option<CameraSync>,
}

impl SpyglassControl {
    /// Creates the control, aligns the spyglass to the primary map and starts syncing.
    pub fn new(
        primary: Arc<dyn MapView>,
        spy: Arc<dyn MapView>,
        options: Option<SpyglassOptionsPatch>,
    ) -> Result<Self> {
        let builder = Self::builder(primary, spy);
        match options {
            Some(options) => builder.options(options).build(),
            None => builder.build(),
        }
    }

    pub fn builder(primary: Arc<dyn MapView>, spy: Arc<dyn MapView>) -> SpyglassControlBuilder {
        SpyglassControlBuilder {
            primary,
            spy,
            extra_views: Vec::new(),
            options: None,
            alignment_source: 0,
        }
    }

    /// Current options. The returned record is a copy.
    pub fn options(&self) -> SpyglassOptions {
        self.options.clone()
    }

    pub fn primary(&self) -> &Arc<dyn MapView> {
        &self.primary
    }

    pub fn spy(&self) -> &Arc<dyn MapView> {
        &self.spy
    }

    /// The synchronizer driving all registered views
    pub fn camera_sync(&self) -> Option<&CameraSync> {
        self.sync.as_ref()
    }

    /// Applies a merge-patch of options.
    ///
    /// Fields are processed in a fixed order (shape, border width, border
    /// color, opacity, size) so the size offset sees a border width from the
    /// same patch. Out-of-range numbers are clamped. Each field is committed
    /// right after its effect is applied.
    pub fn set_options(&mut self, patch: SpyglassOptionsPatch) -> Result<()> {
        let patch = patch.clamped();
        let container = self.spy.container()?;

        if let Some(shape) = patch.shape {
            let radius = match shape {
                SpyglassShape::Circle => Length::Percent(50.0),
                SpyglassShape::Square => Length::ZERO,
            };
            container.apply_style(StyleProperty::BorderRadius(radius));
            self.spy
                .render_surface()?
                .apply_style(StyleProperty::BorderRadius(radius));
            self.options.shape = shape;
        }

        if let Some(width) = patch.border_width {
            container.apply_style(StyleProperty::BorderStyle(BorderStyle::Solid));
            container.apply_style(StyleProperty::BorderWidth(width));
            self.options.border_width = width;
        }

        if let Some(color) = patch.border_color {
            container.apply_style(StyleProperty::BorderColor(color.clone()));
            self.options.border_color = color;
        }

        if let Some(opacity) = patch.opacity {
            self.spy
                .render_surface()?
                .apply_style(StyleProperty::Opacity(opacity));
            self.options.opacity = opacity;
        }

        if let Some(size) = patch.size {
            let offset = size / 2.0 + self.options.border_width;
            container.apply_style(StyleProperty::Width(Length::Px(size)));
            container.apply_style(StyleProperty::Height(Length::Px(size)));
            container.apply_style(StyleProperty::Left(Length::CenterOffset(offset)));
            container.apply_style(StyleProperty::Top(Length::CenterOffset(offset)));

            let spy = self.spy.clone();
            match &self.sync {
                Some(sync) => sync.with_listeners_detached(|| spy.resize(size, size))?,
                None => spy.resize(size, size)?,
            }
            self.options.size = size;
        }

        log::debug!("spyglass options: {:?}", self.options);
        Ok(())
    }

    /// Applies a loosely typed JSON patch; unknown or wrong-typed keys are ignored.
    pub fn set_options_json(&mut self, value: &Value) -> Result<()> {
        self.set_options(SpyglassOptionsPatch::from_json(value))
    }

    /// Detaches every listener and releases the views.
    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for SpyglassControl {
    fn drop(&mut self) {
        if let Some(sync) = self.sync.take() {
            sync.detach_all();
            log::debug!("spyglass disposed, {} view(s) released", sync.len());
        }
    }
}

impl std::fmt::Debug for SpyglassControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpyglassControl")
            .field("options", &self.options)
            .field("sync", &self.sync)
            .finish()
    }
}
