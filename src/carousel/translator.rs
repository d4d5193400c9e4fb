use crate::carousel::geometry::{CarouselConfig, CarouselGeometry, CarouselMeasurements};
use crate::foundation::core::clamp_unit;

/// Maps progress to a horizontal offset for scroll-jacked content.
///
/// The first `buffer_ratio` of progress holds the track still; the remainder covers
/// `travel_distance` linearly.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselTranslator {
    config: CarouselConfig,
    geometry: CarouselGeometry,
}

impl CarouselTranslator {
    /// Translator for freshly measured content.
    pub fn new(config: CarouselConfig, measurements: &CarouselMeasurements) -> Self {
        Self {
            config,
            geometry: CarouselGeometry::measure(measurements, &config),
        }
    }

    /// Translator over precomputed geometry.
    pub fn from_geometry(config: CarouselConfig, geometry: CarouselGeometry) -> Self {
        Self { config, geometry }
    }

    /// Current geometry.
    pub fn geometry(&self) -> &CarouselGeometry {
        &self.geometry
    }

    /// Replace the geometry from new measurements.
    ///
    /// The displayed offset may jump; a given progress keeps its meaning under the new geometry.
    pub fn rebuild(&mut self, measurements: &CarouselMeasurements) -> &CarouselGeometry {
        self.geometry = CarouselGeometry::measure(measurements, &self.config);
        tracing::debug!(
            travel = self.geometry.travel_distance,
            total = self.geometry.total_scroll_distance,
            "carousel geometry rebuilt"
        );
        &self.geometry
    }

    /// Horizontal offset in pixels (`<= 0`) at `progress`.
    pub fn offset(&self, progress: f64) -> f64 {
        let g = &self.geometry;
        if g.is_degenerate() {
            return 0.0;
        }
        let p = clamp_unit(progress);
        if p >= 1.0 {
            return -g.travel_distance;
        }
        let r = g.buffer_ratio();
        if p <= r {
            return 0.0;
        }
        -g.travel_distance * ((p - r) / (1.0 - r))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/translator.rs"]
mod tests;
