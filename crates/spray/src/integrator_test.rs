use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use units::{DynamicViscosity, Temperature};

use crate::drag;
use crate::integrator::{CliftGauvin, CliftGauvinDroplet, MomentumIntegrator};
use crate::material::{DensityFunction, PropertyModel};
use crate::test_support::{air, fuel_tension, parcel, water_density, AIR_DENSITY, AIR_VISCOSITY};

fn gravity() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -9.81)
}

fn sphere() -> CliftGauvin {
    CliftGauvin::new(water_density())
}

fn droplet() -> CliftGauvinDroplet {
    CliftGauvinDroplet::new(water_density(), fuel_tension())
}

#[test]
fn test_zero_slip_only_feels_external_acceleration() {
    let gas_velocity = Vector3::new(12.0, -3.0, 1.0);
    let gas = air(gas_velocity);

    for integrator in [&sphere() as &dyn MomentumIntegrator, &droplet()] {
        let mut p = parcel(1e-4, 1.0);
        p.velocity = gas_velocity;
        let dt = 1e-4;

        let re = integrator.integrate_momentum(&mut p, dt, &gas, &gravity());

        assert_eq!(re, 0.0);
        assert_relative_eq!(p.velocity, gas_velocity + gravity() * dt, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_slip_without_acceleration_is_unchanged() {
    let gas_velocity = Vector3::new(5.0, 0.0, 0.0);
    let mut p = parcel(1e-4, 1.0);
    p.velocity = gas_velocity;

    sphere().integrate_momentum(&mut p, 1e-3, &air(gas_velocity), &Vector3::zeros());

    assert_eq!(p.velocity, gas_velocity);
    assert_relative_eq!(p.position.x, 5.0e-3, epsilon = 1e-15);
}

#[test]
fn test_returns_reynolds_number() {
    let mut p = parcel(1e-4, 1.0);
    let gas = air(Vector3::new(10.0, 0.0, 0.0));

    let re = sphere().integrate_momentum(&mut p, 1e-6, &gas, &Vector3::zeros());

    assert_relative_eq!(re, AIR_DENSITY * 10.0 * 1e-4 / AIR_VISCOSITY, max_relative = 1e-12);
}

#[test]
fn test_explicit_euler_update() {
    let mut p = parcel(1e-4, 1.0);
    let gas = air(Vector3::new(10.0, 0.0, 0.0));
    let dt = 1e-5;

    sphere().integrate_momentum(&mut p, dt, &gas, &gravity());

    let re = AIR_DENSITY * 10.0 * 1e-4 / AIR_VISCOSITY;
    let cd = drag::drag_coefficient(re);
    let a_drag = 0.75 * (AIR_DENSITY / 1000.0) * cd * 10.0 / 1e-4 * 10.0;

    assert_relative_eq!(p.velocity.x, dt * a_drag, max_relative = 1e-12);
    assert_relative_eq!(p.velocity.z, -9.81 * dt, max_relative = 1e-12);
    // Position uses the updated velocity
    assert_relative_eq!(p.position.x, dt * p.velocity.x, max_relative = 1e-12);
    assert_relative_eq!(p.position.z, dt * p.velocity.z, max_relative = 1e-12);
}

#[test]
fn test_drag_relaxes_slip() {
    let gas = air(Vector3::new(0.0, 20.0, 0.0));
    let integrator = sphere();
    let mut p = parcel(5e-5, 1.0);

    let mut slip = p.slip_speed(&gas).to_meters_per_sec();
    for _ in 0..30 {
        let dt = 0.5 * integrator.response_time(&p, &gas).to_seconds();
        integrator.integrate_momentum(&mut p, dt, &gas, &Vector3::zeros());

        let new_slip = p.slip_speed(&gas).to_meters_per_sec();
        assert!(new_slip < slip, "slip grew from {slip} to {new_slip}");
        slip = new_slip;
    }

    assert!(slip < 1e-3 * 20.0);
}

#[test]
fn test_inviscid_gas_uses_newton_drag() {
    let mut gas = air(Vector3::new(10.0, 0.0, 0.0));
    gas.viscosity = DynamicViscosity::zero();
    let mut p = parcel(1e-4, 1.0);
    let dt = 1e-6;

    let re = sphere().integrate_momentum(&mut p, dt, &gas, &Vector3::zeros());

    assert!(re.is_infinite());
    let a_drag = 0.75 * (AIR_DENSITY / 1000.0) * drag::NEWTON_DRAG_COEFFICIENT * 10.0 / 1e-4 * 10.0;
    assert!(p.velocity.x.is_finite());
    assert_relative_eq!(p.velocity.x, dt * a_drag, max_relative = 1e-12);
}

#[test]
fn test_temperature_dependent_density() {
    // Lighter droplets accelerate faster
    let density = DensityFunction::new(PropertyModel::Linear {
        value: 1000.0,
        slope: -2.0,
        reference_temperature: 300.0,
    });
    let integrator = CliftGauvin::new(density);
    let gas = air(Vector3::new(10.0, 0.0, 0.0));

    let mut cold = parcel(1e-4, 1.0);
    let mut hot = parcel(1e-4, 1.0);
    hot.temperature = Temperature::from_kelvin(400.0);

    integrator.integrate_momentum(&mut cold, 1e-6, &gas, &Vector3::zeros());
    integrator.integrate_momentum(&mut hot, 1e-6, &gas, &Vector3::zeros());

    assert_relative_eq!(hot.velocity.x / cold.velocity.x, 1000.0 / 800.0, max_relative = 1e-12);
}

#[test]
fn test_droplet_drag_exceeds_sphere_drag() {
    let gas = air(Vector3::new(60.0, 0.0, 0.0));
    let mut rigid = parcel(2e-4, 1.0);
    let mut deforming = rigid;

    sphere().integrate_momentum(&mut rigid, 1e-6, &gas, &Vector3::zeros());
    droplet().integrate_momentum(&mut deforming, 1e-6, &gas, &Vector3::zeros());

    let we = AIR_DENSITY * 60.0 * 60.0 * 2e-4 / 0.03;
    assert_relative_eq!(
        deforming.velocity.x / rigid.velocity.x,
        drag::deformation_drag_factor(we),
        max_relative = 1e-12
    );
    assert!(deforming.velocity.x > rigid.velocity.x);
}

#[test]
fn test_droplet_matches_sphere_at_small_weber() {
    let gas = air(Vector3::new(0.01, 0.0, 0.0));
    let mut rigid = parcel(1e-5, 1.0);
    let mut deforming = rigid;

    sphere().integrate_momentum(&mut rigid, 1e-6, &gas, &Vector3::zeros());
    droplet().integrate_momentum(&mut deforming, 1e-6, &gas, &Vector3::zeros());

    assert_relative_eq!(deforming.velocity.x, rigid.velocity.x, max_relative = 1e-6);
}

#[test]
fn test_position_advances_from_start_point() {
    let mut p = parcel(1e-4, 1.0);
    p.position = Point3::new(1.0, 2.0, 3.0);
    p.velocity = Vector3::new(1.0, 0.0, 0.0);
    let gas = air(Vector3::new(1.0, 0.0, 0.0));

    sphere().integrate_momentum(&mut p, 0.5, &gas, &Vector3::zeros());

    assert_eq!(p.position, Point3::new(1.5, 2.0, 3.0));
}

#[test]
#[should_panic(expected = "integration step must be positive")]
fn test_non_positive_step_panics() {
    let mut p = parcel(1e-4, 1.0);
    sphere().integrate_momentum(&mut p, 0.0, &air(Vector3::zeros()), &Vector3::zeros());
}

#[test]
#[should_panic(expected = "parcel diameter must be positive")]
fn test_non_positive_diameter_panics() {
    let mut p = parcel(0.0, 1.0);
    droplet().integrate_momentum(&mut p, 1e-6, &air(Vector3::zeros()), &Vector3::zeros());
}

#[test]
#[should_panic(expected = "particle density must be positive")]
fn test_non_positive_density_panics() {
    let integrator = CliftGauvin::new(DensityFunction::new(PropertyModel::Constant { value: 0.0 }));
    let mut p = parcel(1e-4, 1.0);
    integrator.integrate_momentum(&mut p, 1e-6, &air(Vector3::zeros()), &Vector3::zeros());
}

#[test]
fn test_integrators_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CliftGauvin>();
    assert_send_sync::<CliftGauvinDroplet>();
    assert_send_sync::<std::sync::Arc<dyn MomentumIntegrator>>();
}
