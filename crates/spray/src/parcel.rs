use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use units::{Length, Temperature, Velocity};

use crate::fluid::FluidSample;
use crate::material::DensityFunction;

/// Index of the bin governing a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinId(pub u32);

impl BinId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A statistical parcel: `count` identical droplets of one diameter moving
/// together.
///
/// `count` is fractional on purpose. Breakup rescales it so that
/// `count × d³` (and therefore the parcel mass) is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub position: Point3<f64>,  // m
    pub velocity: Vector3<f64>, // m/s
    pub diameter: f64,          // m
    pub count: f64,             // droplets represented
    pub temperature: Temperature,
    pub bin: BinId,
}

impl Parcel {
    /// Creates a parcel of `count` droplets of diameter `diameter`.
    ///
    /// # Example
    /// ```
    /// use nalgebra::{Point3, Vector3};
    /// use spray::parcel::{BinId, Parcel};
    /// use units::{Length, Temperature};
    ///
    /// let parcel = Parcel::new(
    ///     BinId(0),
    ///     Point3::origin(),
    ///     Vector3::new(80.0, 0.0, 0.0),
    ///     Length::from_microns(50.0),
    ///     1.0e4,
    ///     Temperature::from_kelvin(300.0),
    /// );
    /// assert!((parcel.diameter - 5e-5).abs() < 1e-18);
    /// ```
    pub fn new(
        bin: BinId,
        position: Point3<f64>,
        velocity: Vector3<f64>,
        diameter: Length,
        count: f64,
        temperature: Temperature,
    ) -> Self {
        Self {
            position,
            velocity,
            diameter: diameter.to_meters(),
            count,
            temperature,
            bin,
        }
    }

    pub fn diameter(&self) -> Length {
        Length::from_meters(self.diameter)
    }

    /// Volume of a single droplet, π d³ / 6 (m³).
    pub fn droplet_volume(&self) -> f64 {
        self.diameter().sphere_volume()
    }

    /// Total liquid mass carried by the parcel (kg).
    pub fn mass(&self, density: &DensityFunction) -> f64 {
        let rho = density.density(self.temperature).to_kg_per_m3();
        self.count * rho * self.droplet_volume()
    }

    /// count × d³, the quantity breakup must preserve.
    pub fn size_moment(&self) -> f64 {
        self.count * self.diameter.powi(3)
    }

    /// u_fluid − u_parcel
    pub fn relative_velocity(&self, fluid: &FluidSample) -> Vector3<f64> {
        fluid.velocity - self.velocity
    }

    /// Magnitude of the relative velocity.
    pub fn slip_speed(&self, fluid: &FluidSample) -> Velocity {
        Velocity::from_meters_per_sec(self.relative_velocity(fluid).norm())
    }

    pub fn momentum(&self, density: &DensityFunction) -> Vector3<f64> {
        self.velocity * self.mass(density)
    }
}
