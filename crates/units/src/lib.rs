pub mod density;
pub mod length;
pub mod surface_tension;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod viscosity;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod time_test;

pub use density::Density;
pub use length::Length;
pub use surface_tension::SurfaceTension;
pub use temperature::Temperature;
pub use time::Time;
pub use velocity::Velocity;
pub use viscosity::DynamicViscosity;
