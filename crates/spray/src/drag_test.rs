//! Tests for drag correlations and dimensionless groups.

use approx::assert_relative_eq;
use nalgebra::Vector3;
use units::{Density, DynamicViscosity, Length, SurfaceTension, Velocity};

use crate::drag::{
    deformation_drag_factor, distortion, drag_acceleration, drag_coefficient, ohnesorge_number,
    response_time, reynolds_number, weber_number, DragRegime, DISTORTION_DRAG_INCREASE,
    NEWTON_DRAG_COEFFICIENT, NEWTON_LIMIT, STOKES_LIMIT,
};

// =============================================================================
// Drag curve
// =============================================================================

#[test]
fn regimes_follow_reynolds_number() {
    assert_eq!(DragRegime::from_reynolds(0.5), DragRegime::Stokes);
    assert_eq!(DragRegime::from_reynolds(1.0), DragRegime::Intermediate);
    assert_eq!(DragRegime::from_reynolds(999.9), DragRegime::Intermediate);
    assert_eq!(DragRegime::from_reynolds(1000.0), DragRegime::Newton);
    assert_eq!(DragRegime::from_reynolds(f64::INFINITY), DragRegime::Newton);
}

#[test]
fn stokes_drag_coefficient() {
    assert_relative_eq!(drag_coefficient(0.5), 48.0);
    assert_relative_eq!(drag_coefficient(0.01), 2400.0);
}

#[test]
fn newton_drag_coefficient() {
    assert_eq!(drag_coefficient(2000.0), 0.44);
    assert_eq!(drag_coefficient(1.0e6), NEWTON_DRAG_COEFFICIENT);
    assert_eq!(drag_coefficient(f64::INFINITY), NEWTON_DRAG_COEFFICIENT);
}

#[test]
fn intermediate_drag_coefficient() {
    let re: f64 = 100.0;
    let expected = 24.0 / re * (1.0 + 0.15 * re.powf(0.687));

    assert_relative_eq!(drag_coefficient(re), expected);
    assert_relative_eq!(drag_coefficient(re), 1.0917, epsilon = 1e-3);
}

#[test]
fn drag_curve_continuous_at_newton_limit() {
    let below = drag_coefficient(NEWTON_LIMIT * (1.0 - 1e-9));
    let above = drag_coefficient(NEWTON_LIMIT);

    assert_relative_eq!(below, above, max_relative = 0.01);
}

#[test]
fn drag_curve_step_at_stokes_limit_is_schiller_naumann_factor() {
    let below = drag_coefficient(STOKES_LIMIT * (1.0 - 1e-12));
    let above = drag_coefficient(STOKES_LIMIT);

    assert_relative_eq!(above / below, 1.15, epsilon = 1e-9);
}

#[test]
fn drag_coefficient_decreases_within_each_regime() {
    let samples = [0.1, 0.5, 0.9, 1.0, 10.0, 100.0, 500.0, 999.0];
    for pair in samples.windows(2) {
        if DragRegime::from_reynolds(pair[0]) == DragRegime::from_reynolds(pair[1]) {
            assert!(
                drag_coefficient(pair[1]) < drag_coefficient(pair[0]),
                "C_D not decreasing between Re={} and Re={}",
                pair[0],
                pair[1]
            );
        }
    }
}

// =============================================================================
// Dimensionless groups
// =============================================================================

fn air_density() -> Density {
    Density::from_kg_per_m3(1.2)
}

#[test]
fn reynolds_number_definition() {
    let re = reynolds_number(
        air_density(),
        Velocity::from_meters_per_sec(10.0),
        Length::from_microns(100.0),
        DynamicViscosity::from_pascal_seconds(1.8e-5),
    );

    assert_relative_eq!(re, 1.2 * 10.0 * 1e-4 / 1.8e-5, max_relative = 1e-12);
}

#[test]
fn reynolds_number_saturates_for_inviscid_gas() {
    let re = reynolds_number(
        air_density(),
        Velocity::from_meters_per_sec(10.0),
        Length::from_microns(100.0),
        DynamicViscosity::zero(),
    );

    assert!(re.is_infinite());
    assert_eq!(drag_coefficient(re), NEWTON_DRAG_COEFFICIENT);
}

#[test]
fn reynolds_number_zero_without_slip() {
    let re = reynolds_number(
        air_density(),
        Velocity::zero(),
        Length::from_microns(100.0),
        DynamicViscosity::zero(),
    );

    assert_eq!(re, 0.0);
}

#[test]
fn weber_number_scenario() {
    let we = weber_number(
        air_density(),
        Velocity::from_meters_per_sec(50.0),
        Length::from_meters(1e-4),
        SurfaceTension::from_newtons_per_meter(0.03),
    );

    assert_relative_eq!(we, 10.0, max_relative = 1e-12);
}

#[test]
fn weber_number_strictly_increases_with_slip() {
    let mut previous = 0.0;
    for speed in [0.5, 1.0, 5.0, 20.0, 50.0, 120.0] {
        let we = weber_number(
            air_density(),
            Velocity::from_meters_per_sec(speed),
            Length::from_microns(80.0),
            SurfaceTension::from_newtons_per_meter(0.03),
        );
        assert!(we > previous, "We({speed}) = {we} not above {previous}");
        previous = we;
    }
}

#[test]
fn ohnesorge_number_definition() {
    let oh = ohnesorge_number(
        DynamicViscosity::from_pascal_seconds(1e-3),
        Density::from_kg_per_m3(1000.0),
        SurfaceTension::from_newtons_per_meter(0.072),
        Length::from_microns(100.0),
    );

    assert_relative_eq!(oh, 1e-3 / (1000.0_f64 * 0.072 * 1e-4).sqrt(), max_relative = 1e-12);
}

// =============================================================================
// Deformation correction
// =============================================================================

#[test]
fn deformation_factor_is_one_for_spheres() {
    assert_eq!(distortion(0.0), 0.0);
    assert_eq!(deformation_drag_factor(0.0), 1.0);
}

#[test]
fn deformation_factor_is_monotonic_and_bounded() {
    let mut previous = deformation_drag_factor(0.0);
    for we in [0.1, 1.0, 6.0, 12.0, 50.0, 200.0] {
        let factor = deformation_drag_factor(we);
        assert!(factor > previous);
        assert!(factor < 1.0 + DISTORTION_DRAG_INCREASE);
        previous = factor;
    }

    assert_relative_eq!(
        deformation_drag_factor(f64::INFINITY),
        1.0 + DISTORTION_DRAG_INCREASE
    );
}

#[test]
fn deformation_factor_is_continuous() {
    let we = 12.0;
    let h = 1e-6;
    let jump = (deformation_drag_factor(we + h) - deformation_drag_factor(we - h)).abs();

    assert!(jump < 1e-5);
}

// =============================================================================
// Acceleration and response time
// =============================================================================

#[test]
fn drag_acceleration_points_along_relative_velocity() {
    let u_rel = Vector3::new(0.0, 3.0, -4.0);
    let a = drag_acceleration(
        &u_rel,
        1.0,
        air_density(),
        Density::from_kg_per_m3(1000.0),
        Length::from_microns(100.0),
    );

    let expected = 0.75 * (1.2 / 1000.0) * 1.0 * 5.0 / 1e-4;
    assert_relative_eq!(a.norm(), expected * 5.0, max_relative = 1e-12);
    assert_relative_eq!(a.normalize(), u_rel.normalize(), epsilon = 1e-12);
}

#[test]
fn drag_acceleration_zero_without_slip() {
    let a = drag_acceleration(
        &Vector3::zeros(),
        f64::INFINITY,
        air_density(),
        Density::from_kg_per_m3(1000.0),
        Length::from_microns(100.0),
    );

    assert_eq!(a, Vector3::zeros());
}

#[test]
fn response_time_reduces_to_stokes_at_zero_slip() {
    let tau = response_time(
        Density::from_kg_per_m3(1000.0),
        air_density(),
        0.0,
        Velocity::zero(),
        Length::from_microns(10.0),
        DynamicViscosity::from_pascal_seconds(1.8e-5),
    );

    assert_relative_eq!(
        tau.to_seconds(),
        1000.0 * 1e-10 / (18.0 * 1.8e-5),
        max_relative = 1e-12
    );
}

#[test]
fn response_time_matches_stokes_limit_at_low_reynolds() {
    // In the Stokes branch 4 ρ_p d / (3 ρ_f C_D u) = ρ_p d² / (18 μ)
    let mu = 1.8e-5;
    let d = Length::from_microns(10.0);
    let slip = Velocity::from_meters_per_sec(0.01);
    let re = reynolds_number(air_density(), slip, d, DynamicViscosity::from_pascal_seconds(mu));
    assert!(re < STOKES_LIMIT);

    let tau = response_time(
        Density::from_kg_per_m3(1000.0),
        air_density(),
        drag_coefficient(re),
        slip,
        d,
        DynamicViscosity::from_pascal_seconds(mu),
    );

    assert_relative_eq!(
        tau.to_seconds(),
        1000.0 * 1e-10 / (18.0 * mu),
        max_relative = 1e-9
    );
}
