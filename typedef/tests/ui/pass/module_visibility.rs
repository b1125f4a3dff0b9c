mod geo {
    strong_typedef::strong_typedef! {
        /// Degrees north of the equator.
        pub struct Latitude(f64);

        /// Degrees east of the prime meridian.
        pub struct Longitude(f64);
    }
}

strong_typedef::strong_typedef_hashable!(geo::Latitude);
strong_typedef::strong_typedef_hashable!(f64 => geo::Longitude);

fn main() {
    let lat = geo::Latitude::new(52.52);
    let lon = geo::Longitude::from(13.40);
    assert_eq!(lat.get(), 52.52);
    assert_eq!(f64::from(lon), 13.40);

    let mut seen = std::collections::HashSet::new();
    seen.insert(lat);
    assert!(seen.contains(&geo::Latitude::new(52.52)));
}
