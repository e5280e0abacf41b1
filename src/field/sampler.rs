//! Per-cell force sampling
//!
//! The sampler turns one grid cell plus the live pointer position into a draw
//! descriptor: where to draw the dot, how big, and in which color tier.

use glam::Vec2;

use crate::consts::*;
use crate::error::BackgroundError;

/// Design constants for the dot field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Distance between dots (CSS pixels)
    pub spacing: f32,
    /// Dot radius outside the influence disc
    pub base_radius: f32,
    /// Maximum pointer-to-cell distance at which the pointer perturbs a cell
    pub influence_radius: f32,
    /// Displacement at full force; reduced-motion mode sets this to zero
    pub displacement: f32,
    /// Pointer position used before any pointer event arrives
    pub sentinel: Vec2,
    /// Resting color
    pub color_normal: &'static str,
    /// Mid-force transition color
    pub color_secondary: &'static str,
    /// Color for dots closest to the pointer
    pub color_active: &'static str,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING,
            base_radius: BASE_RADIUS,
            influence_radius: INFLUENCE_RADIUS,
            displacement: MAX_DISPLACEMENT,
            sentinel: Vec2::new(POINTER_SENTINEL.0, POINTER_SENTINEL.1),
            color_normal: COLOR_NORMAL,
            color_secondary: COLOR_SECONDARY,
            color_active: COLOR_ACTIVE,
        }
    }
}

impl FieldConfig {
    /// Check the configuration invariants.
    ///
    /// Grid cells all have non-negative coordinates, so requiring both
    /// sentinel components to be negative makes the origin the closest any
    /// cell can get. The sentinel must then sit strictly farther than
    /// `influence_radius` from the origin, or an untouched page would render
    /// a phantom hover in its top-left corner.
    pub fn validate(&self) -> Result<(), BackgroundError> {
        for (name, value) in [
            ("spacing", self.spacing),
            ("base_radius", self.base_radius),
            ("influence_radius", self.influence_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BackgroundError::InvalidConfig { name, value });
            }
        }
        if !(self.displacement.is_finite() && self.displacement >= 0.0) {
            return Err(BackgroundError::InvalidConfig {
                name: "displacement",
                value: self.displacement,
            });
        }
        if self.sentinel.x >= 0.0
            || self.sentinel.y >= 0.0
            || self.sentinel.length() <= self.influence_radius
        {
            return Err(BackgroundError::SentinelTooClose {
                x: self.sentinel.x,
                y: self.sentinel.y,
                radius: self.influence_radius,
            });
        }
        Ok(())
    }
}

/// Draw descriptor for a single dot: final (offset) position, radius, color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: &'static str,
}

/// Normalized proximity measure in [0, 1].
///
/// 1 with the pointer exactly on the cell, falling off linearly to 0 at the
/// influence radius. Callers only evaluate this for `distance` inside the
/// radius, but it is total for any non-negative distance.
#[inline]
pub fn force(distance: f32, influence_radius: f32) -> f32 {
    ((influence_radius - distance) / influence_radius).max(0.0)
}

/// Sample one grid cell against the current pointer position.
///
/// Pure function of its inputs; cells never interact, so the caller may
/// evaluate them in any order (or concurrently) without changing the output.
pub fn sample_cell(cell: Vec2, pointer: Vec2, config: &FieldConfig) -> Dot {
    let delta = cell - pointer;
    let distance = delta.length();

    if distance >= config.influence_radius {
        return Dot {
            pos: cell,
            radius: config.base_radius,
            color: config.color_normal,
        };
    }

    let force = force(distance, config.influence_radius);

    // atan2(0, 0) is 0, so a cell exactly under the pointer is pushed along +x
    // with full magnitude rather than staying put.
    let angle = delta.y.atan2(delta.x);
    let offset = Vec2::new(angle.cos(), angle.sin()) * force * config.displacement;

    let color = if force > 0.6 {
        config.color_active
    } else if force > 0.3 {
        config.color_secondary
    } else {
        COLOR_LOW
    };

    Dot {
        pos: cell + offset,
        radius: config.base_radius + force * RADIUS_GAIN,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn default_dot(cell: Vec2, config: &FieldConfig) -> Dot {
        Dot {
            pos: cell,
            radius: config.base_radius,
            color: config.color_normal,
        }
    }

    // -- Out-of-influence cells --

    #[test]
    fn cell_outside_influence_gets_default_state() {
        let config = FieldConfig::default();
        let cell = Vec2::new(450.0, 450.0);
        let dot = sample_cell(cell, Vec2::new(100.0, 100.0), &config);
        assert_eq!(dot, default_dot(cell, &config));
    }

    #[test]
    fn cell_exactly_at_influence_radius_gets_default_state() {
        let config = FieldConfig::default();
        // Distance is exactly influence_radius; the >= comparison excludes it.
        let cell = Vec2::new(200.0, 0.0);
        let dot = sample_cell(cell, Vec2::ZERO, &config);
        assert_eq!(dot, default_dot(cell, &config));
    }

    #[test]
    fn sentinel_pointer_leaves_every_cell_at_rest() {
        let config = FieldConfig::default();
        for &(x, y) in &[(0.0, 0.0), (45.0, 90.0), (900.0, 0.0), (0.0, 600.0)] {
            let cell = Vec2::new(x, y);
            let dot = sample_cell(cell, config.sentinel, &config);
            assert_eq!(dot, default_dot(cell, &config), "cell ({x}, {y})");
        }
    }

    // -- Pointer exactly on a cell --

    #[test]
    fn pointer_on_cell_yields_full_force() {
        let config = FieldConfig::default();
        let cell = Vec2::new(90.0, 90.0);
        let dot = sample_cell(cell, cell, &config);
        assert_eq!(dot.color, config.color_active);
        assert!((dot.radius - (config.base_radius + 1.5)).abs() < EPS);
        // atan2(0, 0) == 0: offset is (displacement, 0).
        let offset = dot.pos - cell;
        assert!((offset.x - config.displacement).abs() < EPS);
        assert!(offset.y.abs() < EPS);
    }

    // -- Color tier boundaries --

    #[test]
    fn force_exactly_point_six_selects_secondary() {
        let config = FieldConfig::default();
        // distance 80 -> force (200 - 80) / 200 = 0.6; 0.6 > 0.6 is false.
        let dot = sample_cell(Vec2::new(80.0, 0.0), Vec2::ZERO, &config);
        assert_eq!(dot.color, config.color_secondary);
    }

    #[test]
    fn force_just_above_point_six_selects_active() {
        let config = FieldConfig::default();
        let dot = sample_cell(Vec2::new(79.0, 0.0), Vec2::ZERO, &config);
        assert_eq!(dot.color, config.color_active);
    }

    #[test]
    fn force_exactly_point_three_selects_low_alpha() {
        let config = FieldConfig::default();
        // distance 140 -> force (200 - 140) / 200 = 0.3; 0.3 > 0.3 is false.
        let dot = sample_cell(Vec2::new(140.0, 0.0), Vec2::ZERO, &config);
        assert_eq!(dot.color, crate::consts::COLOR_LOW);
    }

    #[test]
    fn force_just_above_point_three_selects_secondary() {
        let config = FieldConfig::default();
        let dot = sample_cell(Vec2::new(139.0, 0.0), Vec2::ZERO, &config);
        assert_eq!(dot.color, config.color_secondary);
    }

    // -- End-to-end scenario --

    #[test]
    fn pointer_near_cell_scenario() {
        let config = FieldConfig::default();
        let cell = Vec2::new(90.0, 90.0);
        let pointer = Vec2::new(100.0, 100.0);

        // distance = sqrt(200) ~= 14.142, force ~= 0.9293
        let dot = sample_cell(cell, pointer, &config);
        assert_eq!(dot.color, config.color_active);
        assert!((dot.radius - 2.3939).abs() < EPS, "radius {}", dot.radius);

        let offset = dot.pos - cell;
        assert!(
            (offset.length() - 9.2929).abs() < EPS,
            "offset magnitude {}",
            offset.length()
        );
        // Offset points away from the pointer.
        assert!(offset.dot(cell - pointer) > 0.0);
    }

    // -- Reduced motion --

    #[test]
    fn zero_displacement_keeps_color_and_radius_response() {
        let config = FieldConfig {
            displacement: 0.0,
            ..FieldConfig::default()
        };
        let cell = Vec2::new(90.0, 90.0);
        let dot = sample_cell(cell, Vec2::new(100.0, 100.0), &config);
        assert_eq!(dot.pos, cell);
        assert_eq!(dot.color, config.color_active);
        assert!(dot.radius > config.base_radius);
    }

    // -- force helper --

    #[test]
    fn force_is_one_at_zero_distance() {
        assert!((force(0.0, 200.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn force_is_zero_at_influence_radius() {
        assert!(force(200.0, 200.0).abs() < EPS);
    }

    // -- Config validation --

    #[test]
    fn default_config_validates() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let config = FieldConfig {
            spacing: 0.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BackgroundError::InvalidConfig { name: "spacing", .. })
        ));
    }

    #[test]
    fn non_finite_influence_radius_is_rejected() {
        let config = FieldConfig {
            influence_radius: f32::NAN,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_displacement_is_rejected() {
        let config = FieldConfig {
            displacement: -1.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BackgroundError::InvalidConfig {
                name: "displacement",
                ..
            })
        ));
    }

    #[test]
    fn sentinel_inside_influence_radius_is_rejected() {
        let config = FieldConfig {
            sentinel: Vec2::new(-100.0, -100.0),
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BackgroundError::SentinelTooClose { .. })
        ));
    }

    #[test]
    fn sentinel_with_positive_component_is_rejected() {
        let config = FieldConfig {
            sentinel: Vec2::new(5000.0, -1000.0),
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BackgroundError::SentinelTooClose { .. })
        ));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn coord() -> impl Strategy<Value = f32> {
            0.0_f32..=2000.0
        }

        proptest! {
            #[test]
            fn out_of_range_cells_are_always_at_rest(
                cx in coord(),
                cy in coord(),
                px in -2000.0_f32..=4000.0,
                py in -2000.0_f32..=4000.0,
            ) {
                let config = FieldConfig::default();
                let cell = Vec2::new(cx, cy);
                let pointer = Vec2::new(px, py);
                prop_assume!(cell.distance(pointer) >= config.influence_radius);

                let dot = sample_cell(cell, pointer, &config);
                prop_assert_eq!(dot.pos, cell);
                prop_assert_eq!(dot.radius, config.base_radius);
                prop_assert_eq!(dot.color, config.color_normal);
            }

            #[test]
            fn force_is_monotonically_non_increasing_in_distance(
                d1 in 0.0_f32..200.0,
                d2 in 0.0_f32..200.0,
            ) {
                let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
                prop_assert!(force(near, 200.0) >= force(far, 200.0));
            }

            #[test]
            fn offset_magnitude_never_exceeds_displacement(
                cx in coord(),
                cy in coord(),
                px in coord(),
                py in coord(),
            ) {
                let config = FieldConfig::default();
                let cell = Vec2::new(cx, cy);
                let dot = sample_cell(cell, Vec2::new(px, py), &config);
                let offset = (dot.pos - cell).length();
                prop_assert!(offset <= config.displacement + 1e-3, "offset {offset}");
            }

            #[test]
            fn radius_stays_within_gain_band(
                cx in coord(),
                cy in coord(),
                px in coord(),
                py in coord(),
            ) {
                let config = FieldConfig::default();
                let dot = sample_cell(Vec2::new(cx, cy), Vec2::new(px, py), &config);
                prop_assert!(dot.radius >= config.base_radius);
                prop_assert!(dot.radius <= config.base_radius + crate::consts::RADIUS_GAIN + 1e-3);
            }
        }
    }
}
