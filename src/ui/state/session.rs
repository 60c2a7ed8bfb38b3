// SPDX-License-Identifier: MPL-2.0
//! Viewer session state
//!
//! Owns the current [`ViewportTransformState`] together with the image and
//! viewport geometry that fit-to-window needs, and the measurement being
//! drawn on the image. Input handlers translate key, wheel and click events
//! into [`ViewerAction`]s and hand them to [`ViewerSession::apply`].

use crate::config::Config;
use crate::domain::measurement::{Measurement, MeasurementMode, Point};
use crate::domain::ui::ViewportTransformState;

/// User intents that change the viewport transform or the measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerAction {
    ZoomIn,
    ZoomOut,
    Reset,
    FitToWindow,
    /// Mouse wheel; positive `delta_y` zooms in.
    Wheel { delta_y: f64 },
    SetMeasurementMode(MeasurementMode),
    /// Click on the image, in image pixel coordinates.
    AddMeasurementPoint(Point),
    RemoveLastMeasurementPoint,
    ClearMeasurement,
    /// Ground units per image pixel.
    SetPixelScale(f64),
}

/// Transform state of the image currently on screen.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    state: ViewportTransformState,
    image_size: (u32, u32),
    viewport_size: (u32, u32),
    fit_margin: f64,
    fit_on_load: bool,
    measurement: Measurement,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ViewerSession {
    /// Creates an empty session using the preferences in `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            state: ViewportTransformState::default(),
            image_size: (0, 0),
            viewport_size: config.default_viewport(),
            fit_margin: config.fit_margin(),
            fit_on_load: config.fit_on_load(),
            measurement: Measurement::default(),
        }
    }

    /// Switches to a new image. The transform starts over from the default
    /// state and is fitted to the viewport when `fit_on_load` is enabled.
    /// Measurement points are dropped; the mode and pixel scale are kept.
    pub fn open_image(&mut self, width: u32, height: u32) {
        self.image_size = (width, height);
        self.state = ViewportTransformState::default();
        self.measurement = std::mem::take(&mut self.measurement).clear();
        if self.fit_on_load {
            self.apply(ViewerAction::FitToWindow);
        }
    }

    /// Records the new viewport size. The transform is left untouched.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        self.viewport_size = (width, height);
    }

    /// Replaces the transform or the measurement with the result of `action`.
    pub fn apply(&mut self, action: ViewerAction) {
        let (image_w, image_h) = self.image_size;
        let (view_w, view_h) = self.viewport_size;
        let measurement = std::mem::take(&mut self.measurement);
        self.measurement = match action {
            ViewerAction::SetMeasurementMode(mode) => measurement.with_mode(mode),
            ViewerAction::AddMeasurementPoint(point) => measurement.add_point(point),
            ViewerAction::RemoveLastMeasurementPoint => measurement.remove_last_point(),
            ViewerAction::ClearMeasurement => measurement.clear(),
            ViewerAction::SetPixelScale(scale) => measurement.with_pixel_scale(scale),
            _ => measurement,
        };
        self.state = match action {
            ViewerAction::ZoomIn => self.state.zoom_in(),
            ViewerAction::ZoomOut => self.state.zoom_out(),
            ViewerAction::Reset => self.state.reset(),
            ViewerAction::FitToWindow => {
                self.state
                    .fit_to_window(image_w, image_h, view_w, view_h, self.fit_margin)
            }
            ViewerAction::Wheel { delta_y } => self.state.wheel(delta_y),
            _ => self.state,
        };
    }

    #[must_use]
    pub fn state(&self) -> ViewportTransformState {
        self.state
    }

    #[must_use]
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    #[must_use]
    pub fn image_size(&self) -> (u32, u32) {
        self.image_size
    }

    #[must_use]
    pub fn viewport_size(&self) -> (u32, u32) {
        self.viewport_size
    }

    /// Status bar text, e.g. `Zoom: 47% | Rotation: 0°`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn status_line(&self) -> String {
        format!(
            "Zoom: {}% | Rotation: {}°",
            self.state.zoom_percent(),
            self.state.rotation() as i64
        )
    }
}
