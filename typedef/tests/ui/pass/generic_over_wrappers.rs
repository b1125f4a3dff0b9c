use strong_typedef::{StrongTypedef, strong_typedef};

strong_typedef! {
    pub struct Meters(f64);

    #[derive(Eq, Ord)]
    pub struct Hops(u16);
}

fn total<T: StrongTypedef>(parts: &[T]) -> T {
    parts.iter().copied().sum()
}

fn parse_all<T: StrongTypedef>(inputs: &[&str]) -> Vec<T> {
    inputs
        .iter()
        .filter_map(|text| text.parse().ok())
        .collect()
}

fn main() {
    let legs = [Meters::new(1.0), Meters::new(2.5)];
    assert_eq!(total(&legs).into_inner(), 3.5);

    let hops: Vec<Hops> = parse_all(&["1", "x", "3"]);
    assert_eq!(hops, [Hops::new(1), Hops::new(3)]);
    assert_eq!(<Hops as StrongTypedef>::NAME, "Hops");
}
