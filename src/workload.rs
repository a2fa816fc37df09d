//! Reproducible input data for sessions.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Shape of a generated input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Uniform values in `-10_000..10_000`
    Random,
    Sorted,
    Reversed,
    /// Ascending, then `len / 10` random swaps
    NearlySorted,
    /// Values drawn from `0..8`
    FewUnique,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Random,
        Shape::Sorted,
        Shape::Reversed,
        Shape::NearlySorted,
        Shape::FewUnique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Random => "random",
            Shape::Sorted => "sorted",
            Shape::Reversed => "reversed",
            Shape::NearlySorted => "nearly_sorted",
            Shape::FewUnique => "few_unique",
        }
    }
}

/// Generate `len` values of the given shape. Same arguments, same output.
pub fn generate(shape: Shape, len: usize, seed: u64) -> Vec<i64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    match shape {
        Shape::Random => (0..len).map(|_| rng.gen_range(-10_000..10_000)).collect(),
        Shape::Sorted => (0..len as i64).collect(),
        Shape::Reversed => (0..len as i64).rev().collect(),
        Shape::NearlySorted => {
            let mut data: Vec<i64> = (0..len as i64).collect();
            for _ in 0..len / 10 {
                let i = rng.gen_range(0..len);
                let j = rng.gen_range(0..len);
                data.swap(i, j);
            }
            data
        }
        Shape::FewUnique => (0..len).map(|_| rng.gen_range(0..8)).collect(),
    }
}

pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_data() {
        for shape in Shape::ALL {
            assert_eq!(generate(shape, 300, 42), generate(shape, 300, 42), "{}", shape.name());
        }
        assert_ne!(
            generate(Shape::Random, 300, 1),
            generate(Shape::Random, 300, 2)
        );
    }

    #[test]
    fn zero_length_is_empty() {
        for shape in Shape::ALL {
            assert!(generate(shape, 0, 9).is_empty());
        }
    }

    #[test]
    fn shapes_hold_their_contract() {
        let n = 1000;

        let random = generate(Shape::Random, n, 3);
        assert_eq!(random.len(), n);
        assert!(random.iter().all(|v| (-10_000..10_000).contains(v)));

        assert!(is_sorted(&generate(Shape::Sorted, n, 3)));

        let reversed = generate(Shape::Reversed, n, 3);
        assert!(reversed.windows(2).all(|w| w[0] > w[1]));

        let nearly = generate(Shape::NearlySorted, n, 3);
        let mut restored = nearly.clone();
        restored.sort();
        assert_eq!(restored, (0..n as i64).collect::<Vec<_>>());
        let displaced = nearly.iter().enumerate().filter(|&(i, &v)| i as i64 != v).count();
        assert!(displaced <= 2 * (n / 10));

        let few = generate(Shape::FewUnique, n, 3);
        assert!(few.iter().all(|v| (0..8).contains(v)));
    }

    #[test]
    fn is_sorted_edges() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
