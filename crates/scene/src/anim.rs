//! Animation rules evaluated once per tick.
//!
//! Every rule is a closed-form function of elapsed time and its own
//! parameters; there is no per-frame integration or hidden state, so
//! re-evaluating at the same time always yields the same transform and the
//! scene can seek or restart freely.

use std::sync::Arc;

use glam::{Mat4, Vec3};

use brew_resources::PathConfig;

use crate::node::UpdateContext;

/// Fixed slow-down factor applied to path time.
const PATH_TIME_DIVISOR: f64 = 3.0;

/// Per-node animation rule selecting how the local transform is computed.
///
/// One enum dispatched by `match` replaces a hierarchy of node subclasses;
/// each variant owns exactly the parameters it needs.
#[derive(Debug, Clone)]
pub enum AnimationRule {
    /// The node keeps the local transform configured at build time.
    Static,

    /// Unbounded rotation about a unit axis.
    ///
    /// The angle is `speed * time`; zero speed freezes the node and a
    /// negative speed reverses it.
    AxisRotation {
        /// Unit rotation axis.
        axis: Vec3,
        /// Angular speed in radians per second.
        speed: f32,
    },

    /// Elliptical orbit in the plane of two orthogonal unit axes, with the
    /// node turned to face its direction of travel.
    EllipticalOrbit {
        /// Semi-axis along `major_axis`.
        a: f32,
        /// Semi-axis along `minor_axis`.
        b: f32,
        /// Angular speed in radians per second.
        speed: f32,
        /// Unit vector of the ellipse's major direction.
        major_axis: Vec3,
        /// Unit vector of the ellipse's minor direction.
        minor_axis: Vec3,
    },

    /// Closed-loop Hermite path through the configured control points,
    /// with a per-instance phase offset measured in segments.
    PathSpline {
        /// Phase offset; 1.0 is one full segment.
        offset: f32,
        /// Shared control-point table.
        path: Arc<PathConfig>,
    },
}

impl AnimationRule {
    /// Evaluate the rule at the context time.
    ///
    /// Returns `None` for [`AnimationRule::Static`] (the node keeps its
    /// configured local transform), otherwise the freshly computed local
    /// matrix.
    pub fn evaluate(&self, ctx: &UpdateContext) -> Option<Mat4> {
        match self {
            Self::Static => None,
            Self::AxisRotation { axis, speed } => Some(axis_rotation(*axis, *speed, ctx.time)),
            Self::EllipticalOrbit {
                a,
                b,
                speed,
                major_axis,
                minor_axis,
            } => Some(elliptical_orbit(
                *a,
                *b,
                *speed,
                *major_axis,
                *minor_axis,
                ctx.time,
            )),
            Self::PathSpline { offset, path } => Some(path_spline(path, *offset, ctx)),
        }
    }
}

fn axis_rotation(axis: Vec3, speed: f32, time: f64) -> Mat4 {
    let angle = speed * time as f32;
    Mat4::from_axis_angle(axis, angle)
}

fn elliptical_orbit(a: f32, b: f32, speed: f32, major: Vec3, minor: Vec3, time: f64) -> Mat4 {
    let orbit_angle = speed * time as f32;
    let x = a * orbit_angle.cos();
    let y = b * orbit_angle.sin();
    let position = x * major + y * minor;

    // Facing comes from the implicit ellipse derivative. atan is two-valued,
    // so add a half turn once the wrapped orbit angle passes pi to keep the
    // node facing its direction of travel.
    let mut facing = (-(b * b * x) / (a * a * y)).atan();
    if orbit_angle.rem_euclid(std::f32::consts::TAU) > std::f32::consts::PI {
        facing += std::f32::consts::PI;
    }

    let normal = major.cross(minor);
    Mat4::from_translation(position) * Mat4::from_axis_angle(normal, facing)
}

/// The four cubic Hermite basis weights at `f` in `[0, 1)`.
fn hermite_weights(f: f32) -> [f32; 4] {
    let f2 = f * f;
    let f3 = f2 * f;
    [
        2.0 * f3 - 3.0 * f2 + 1.0,
        -2.0 * f3 + 3.0 * f2,
        f3 - 2.0 * f2 + f,
        f3 - f2,
    ]
}

fn path_spline(path: &PathConfig, offset: f32, ctx: &UpdateContext) -> Mat4 {
    // Freezing time (rather than skipping the update) parks a disabled
    // scene at its offset position instead of wherever it happened to stop.
    let scaled = if ctx.animation {
        (ctx.time / PATH_TIME_DIVISOR) as f32
    } else {
        0.0
    };
    let t = scaled + offset;

    let frac = t - t.floor();
    let segment = t.floor() as i64;

    let fragments = path.fragments() as i64;
    let from = segment.rem_euclid(fragments) as usize;
    let to = (segment + 1).rem_euclid(fragments) as usize;

    let start = path.points()[from];
    let end = path.points()[to];
    let start_tangent = path.tangents()[from];
    // flipped so the curve leaves each point the way the next segment enters it
    let end_tangent = -path.tangents()[to];

    let [h00, h01, h10, h11] = hermite_weights(frac);
    // the path lives in the XZ plane; Y stays zero
    let x = start.x * h00 + end.x * h01 + start_tangent.x * h10 + end_tangent.x * h11;
    let z = start.z * h00 + end.z * h01 + start_tangent.z * h10 + end_tangent.z * h11;

    Mat4::from_translation(Vec3::new(x, 0.0, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPSILON: f32 = 1e-4;

    fn ctx(time: f64) -> UpdateContext {
        UpdateContext::new(time)
    }

    fn approx_eq_mat4(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, EPSILON)
    }

    fn translation_of(m: Mat4) -> Vec3 {
        m.w_axis.truncate()
    }

    fn square_path() -> Arc<PathConfig> {
        let text = "1 4\n0 0 0 -50\n20 30 50 -10\n-30 0 0 50\n15 -30 -50 0";
        Arc::new(text.parse().expect("valid path text"))
    }

    // --- Static ---

    #[test]
    fn test_static_keeps_configured_local() {
        assert!(AnimationRule::Static.evaluate(&ctx(42.0)).is_none());
    }

    // --- AxisRotation ---

    #[test]
    fn test_axis_rotation_angle_is_speed_times_time() {
        let rule = AnimationRule::AxisRotation {
            axis: Vec3::Y,
            speed: 0.5,
        };
        let local = rule.evaluate(&ctx(3.0)).unwrap();
        assert!(approx_eq_mat4(local, Mat4::from_axis_angle(Vec3::Y, 1.5)));
    }

    #[test]
    fn test_axis_rotation_identity_at_time_zero() {
        let rule = AnimationRule::AxisRotation {
            axis: Vec3::X,
            speed: 2.0,
        };
        let local = rule.evaluate(&ctx(0.0)).unwrap();
        assert!(approx_eq_mat4(local, Mat4::IDENTITY));
    }

    #[test]
    fn test_axis_rotation_zero_speed_is_frozen() {
        let rule = AnimationRule::AxisRotation {
            axis: Vec3::Y,
            speed: 0.0,
        };
        let local = rule.evaluate(&ctx(1000.0)).unwrap();
        assert!(approx_eq_mat4(local, Mat4::IDENTITY));
    }

    #[test]
    fn test_axis_rotation_negative_speed_reverses() {
        let forward = AnimationRule::AxisRotation {
            axis: Vec3::Z,
            speed: 1.0,
        };
        let backward = AnimationRule::AxisRotation {
            axis: Vec3::Z,
            speed: -1.0,
        };
        let a = forward.evaluate(&ctx(0.75)).unwrap();
        let b = backward.evaluate(&ctx(0.75)).unwrap();
        assert!(approx_eq_mat4(a * b, Mat4::IDENTITY));
    }

    // --- EllipticalOrbit ---

    fn orbit(a: f32, b: f32) -> AnimationRule {
        AnimationRule::EllipticalOrbit {
            a,
            b,
            speed: 1.0,
            major_axis: Vec3::X,
            minor_axis: Vec3::Z,
        }
    }

    #[test]
    fn test_orbit_position_stays_on_ellipse() {
        let rule = orbit(25.0, 15.0);
        for i in 0..200 {
            let time = i as f64 * 0.37;
            let position = translation_of(rule.evaluate(&ctx(time)).unwrap());
            let u = position.dot(Vec3::X) / 25.0;
            let v = position.dot(Vec3::Z) / 15.0;
            assert!(
                (u * u + v * v - 1.0).abs() < EPSILON,
                "left the ellipse at t={time}"
            );
            assert_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn test_orbit_is_periodic() {
        let rule = orbit(25.0, 15.0);
        let a = translation_of(rule.evaluate(&ctx(1.0)).unwrap());
        let b = translation_of(rule.evaluate(&ctx(1.0 + TAU as f64)).unwrap());
        assert!((a - b).length() < 1e-3);
    }

    #[test]
    fn test_orbit_facing_on_circle_tracks_travel_direction() {
        // On a circle the tangent angle collapses to orbit_angle - pi/2,
        // which makes the expected matrix independent of the atan branch.
        let rule = orbit(10.0, 10.0);
        let normal = Vec3::X.cross(Vec3::Z);
        for orbit_angle in [0.25, 1.0, PI - 0.1, PI + 0.1, 4.0, TAU - 0.25] {
            let local = rule.evaluate(&ctx(orbit_angle as f64)).unwrap();
            let position = Vec3::new(10.0 * orbit_angle.cos(), 0.0, 10.0 * orbit_angle.sin());
            let expected = Mat4::from_translation(position)
                * Mat4::from_axis_angle(normal, orbit_angle - FRAC_PI_2);
            assert!(
                approx_eq_mat4(local, expected),
                "facing diverged at orbit angle {orbit_angle}"
            );
        }
    }

    #[test]
    fn test_orbit_facing_at_half_turn_boundary() {
        // The half-turn correction applies strictly past pi, so at the
        // boundary itself the facing lands a half turn behind the travel
        // direction. This pins the arctangent branch choice.
        let rule = orbit(10.0, 10.0);
        let normal = Vec3::X.cross(Vec3::Z);
        let local = rule.evaluate(&ctx(PI as f64)).unwrap();
        let position = translation_of(local);
        let expected =
            Mat4::from_translation(position) * Mat4::from_axis_angle(normal, -FRAC_PI_2);
        assert!(approx_eq_mat4(local, expected));
    }

    // --- PathSpline ---

    fn spline(offset: f32) -> AnimationRule {
        AnimationRule::PathSpline {
            offset,
            path: square_path(),
        }
    }

    #[test]
    fn test_spline_starts_at_first_point() {
        let position = translation_of(spline(0.0).evaluate(&ctx(0.0)).unwrap());
        assert_eq!(position, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_spline_integer_offsets_land_on_control_points() {
        let path = square_path();
        for k in 0..8 {
            let position = translation_of(spline(k as f32).evaluate(&ctx(0.0)).unwrap());
            let expected = path.points()[k % 4];
            assert!(
                (position - expected).length() < EPSILON,
                "offset {k} missed its control point"
            );
        }
    }

    #[test]
    fn test_spline_approaches_segment_end() {
        let path = square_path();
        let position = translation_of(spline(1.0 - 1e-3).evaluate(&ctx(0.0)).unwrap());
        // h10/h11 are O(eps) near 1, so the tangent contribution is tiny
        assert!((position - path.points()[1]).length() < 0.1);
    }

    #[test]
    fn test_spline_offset_equals_time_shift() {
        // offset 1.0 is one segment, which is PATH_TIME_DIVISOR seconds
        let a = translation_of(spline(1.0).evaluate(&ctx(0.0)).unwrap());
        let b = translation_of(spline(0.0).evaluate(&ctx(3.0)).unwrap());
        assert!((a - b).length() < EPSILON);
    }

    #[test]
    fn test_spline_wraps_for_large_times() {
        // 4 segments of 3 seconds each: one full loop every 12 seconds
        let a = translation_of(spline(0.0).evaluate(&ctx(1.7)).unwrap());
        let b = translation_of(spline(0.0).evaluate(&ctx(1.7 + 1200.0)).unwrap());
        assert!((a - b).length() < 1e-2);
    }

    #[test]
    fn test_spline_negative_offset_wraps_into_range() {
        let path = square_path();
        let position = translation_of(spline(-1.0).evaluate(&ctx(0.0)).unwrap());
        assert!((position - path.points()[3]).length() < EPSILON);
    }

    #[test]
    fn test_spline_stays_in_plane() {
        let rule = spline(0.3);
        for i in 0..50 {
            let position = translation_of(rule.evaluate(&ctx(i as f64 * 0.7)).unwrap());
            assert_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn test_spline_frozen_when_animation_disabled() {
        let path = square_path();
        let frozen = UpdateContext {
            time: 123.456,
            animation: false,
        };
        let position = translation_of(spline(2.0).evaluate(&frozen).unwrap());
        assert!((position - path.points()[2]).length() < EPSILON);
    }

    // --- Hermite basis ---

    #[test]
    fn test_hermite_boundary_conditions() {
        assert_eq!(hermite_weights(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(hermite_weights(1.0), [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hermite_endpoint_weights_partition_unity() {
        for i in 0..=10 {
            let [h00, h01, _, _] = hermite_weights(i as f32 / 10.0);
            assert!((h00 + h01 - 1.0).abs() < EPSILON);
        }
    }
}
