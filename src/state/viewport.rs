// Zoom/pan state for the image modal.
use std::ops::Sub;

use crate::config::ViewportConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Transient transform, alive only while the overlay is open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f64,
    pub offset: Point,
    pub drag_active: bool,
    /// Pointer position minus offset at drag start.
    pub drag_anchor: Point,
}

impl ViewportTransform {
    pub fn new(default_scale: f64) -> Self {
        Self {
            scale: default_scale,
            offset: Point::ORIGIN,
            drag_active: false,
            drag_anchor: Point::ORIGIN,
        }
    }
}

/// Snapshot of what the modal needs to render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportView {
    pub open: bool,
    pub scale: f64,
    pub offset: Point,
    pub drag_active: bool,
}

impl ViewportView {
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Translation is pre-divided by scale so panning tracks the pointer 1:1 at any zoom.
    pub fn transform_css(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale,
            self.offset.x / self.scale,
            self.offset.y / self.scale
        )
    }

    pub fn transition_css<'a>(&self, easing: &'a str) -> &'a str {
        if self.drag_active { "none" } else { easing }
    }

    pub fn cursor(&self) -> &'static str {
        if self.drag_active { "grabbing" } else { "grab" }
    }
}

/// Open/close, wheel zoom and drag pan for an overlay holding content `C`.
///
/// Every input method is a no-op while closed, so stray events delivered
/// after a close cannot mutate the transform.
#[derive(Debug)]
pub struct ViewportController<C = ()> {
    config: ViewportConfig,
    content: Option<C>,
    transform: ViewportTransform,
}

impl<C> ViewportController<C> {
    pub fn new(config: ViewportConfig) -> Self {
        let transform = ViewportTransform::new(config.default_scale);
        Self {
            config,
            content: None,
            transform,
        }
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn drag_active(&self) -> bool {
        self.transform.drag_active
    }

    pub fn view(&self) -> ViewportView {
        ViewportView {
            open: self.is_open(),
            scale: self.transform.scale,
            offset: self.transform.offset,
            drag_active: self.transform.drag_active,
        }
    }

    /// Shows `content`. Opening while already open replaces the content and resets.
    pub fn open(&mut self, content: C) {
        self.content = Some(content);
        self.reset();
    }

    /// Returns true only on an open -> closed transition.
    pub fn close(&mut self) -> bool {
        let was_open = self.content.take().is_some();
        self.reset();
        was_open
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    pub fn backdrop_click(&mut self) -> bool {
        self.close()
    }

    /// Applies a wheel step. Returns whether the page scroll should be suppressed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if !self.is_open() {
            return false;
        }
        let delta = if delta_y.is_finite() {
            delta_y * -self.config.wheel_sensitivity
        } else {
            0.0
        };
        self.transform.scale = self.clamp_scale(self.transform.scale + delta);
        true
    }

    /// Starts a drag if the press landed on the content. Returns whether it did.
    pub fn pointer_down(&mut self, pos: Point, inside_content: bool) -> bool {
        if !self.is_open() || !inside_content || !pos.is_finite() {
            return false;
        }
        self.transform.drag_active = true;
        self.transform.drag_anchor = pos - self.transform.offset;
        true
    }

    /// Returns whether the offset changed.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        if !self.transform.drag_active || !pos.is_finite() {
            return false;
        }
        let offset = pos - self.transform.drag_anchor;
        let changed = offset != self.transform.offset;
        self.transform.offset = offset;
        changed
    }

    /// Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        std::mem::replace(&mut self.transform.drag_active, false)
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    fn reset(&mut self) {
        self.transform = ViewportTransform::new(self.config.default_scale);
    }
}

impl<C> Default for ViewportController<C> {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}
