mod tests {
    use approx::assert_relative_eq;

    use crate::time::Time;

    #[test]
    fn test_time_conversions() {
        let t = Time::from_milliseconds(1.5);
        assert_relative_eq!(t.to_seconds(), 1.5e-3);
        assert_relative_eq!(t.to_microseconds(), 1500.0, epsilon = 1e-9);

        let us = Time::from_microseconds(250.0);
        assert_relative_eq!(us.to_milliseconds(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_time_arithmetic() {
        let a = Time::from_seconds(2.0);
        let b = Time::from_seconds(0.5);

        assert_relative_eq!((a + b).to_seconds(), 2.5);
        assert_relative_eq!((a - b).to_seconds(), 1.5);
        assert_relative_eq!((a * 3.0).to_seconds(), 6.0);
        assert_relative_eq!((3.0 * b).to_seconds(), 1.5);
        assert_relative_eq!(a / b, 4.0);
    }

    #[test]
    fn test_time_min_max() {
        let a = Time::from_seconds(1.0);
        let b = Time::from_seconds(2.0);

        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(Time::zero().to_seconds(), 0.0);
    }
}
