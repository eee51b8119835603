mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, MICRON_TO_M};

    #[test]
    fn test_length_conversions() {
        let droplet = Length::from_microns(1.0);
        assert_relative_eq!(droplet.to_meters(), MICRON_TO_M);

        let mm = Length::from_mm(2.5);
        assert_relative_eq!(mm.to_microns(), 2500.0, epsilon = 1e-9);
        assert_relative_eq!(mm.to_cm(), 0.25, epsilon = 1e-12);

        let original = 37.0;
        let round_trip = Length::from_microns(Length::from_microns(original).to_microns());
        assert_relative_eq!(round_trip.to_microns(), original, epsilon = 1e-9);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let a = Length::from_microns(60.0);
        let b = Length::from_microns(40.0);

        assert_relative_eq!((a + b).to_microns(), 100.0, epsilon = 1e-9);
        assert_relative_eq!((a - b).to_microns(), 20.0, epsilon = 1e-9);
        assert_relative_eq!((a * 2.0).to_microns(), 120.0, epsilon = 1e-9);
        assert_relative_eq!((a / 3.0).to_microns(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(a / b, 1.5);
    }

    #[test]
    fn test_sphere_volume() {
        let d = Length::from_meters(2.0);
        assert_relative_eq!(d.sphere_volume(), 4.0 * std::f64::consts::PI / 3.0);
        assert_eq!(Length::zero().sphere_volume(), 0.0);
    }
}
