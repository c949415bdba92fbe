//! Seeded Fisher–Yates shuffle.
use crate::random::Derivation;

const SHUFFLE_TAG: &str = "shuffle";

/// Returns `items` in a seed-dependent order. Draws `len - 1` values.
pub fn shuffle<T>(derivation: &mut Derivation, mut items: Vec<T>) -> Vec<T> {
    shuffle_in_place(derivation, &mut items);
    items
}

pub fn shuffle_in_place<T>(derivation: &mut Derivation, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = derivation.next_below(SHUFFLE_TAG, (i + 1) as u64) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::random::Seed;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut d = Derivation::new(Seed::from_u64(4));
        let input: Vec<u32> = (0..50).collect();
        let mut out = shuffle(&mut d, input.clone());
        assert_ne!(out, input);
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffle(&mut Derivation::new(Seed::from_u64(99)), input.clone());
        let b = shuffle(&mut Derivation::new(Seed::from_u64(99)), input.clone());
        let c = shuffle(&mut Derivation::new(Seed::from_u64(100)), input);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn distinct_seeds_give_distinct_orderings() {
        let input: Vec<u8> = (0..20).collect();
        let orderings: HashSet<Vec<u8>> = (0..1000u64)
            .map(|s| shuffle(&mut Derivation::new(Seed::from_u64(s)), input.clone()))
            .collect();
        assert!(orderings.len() >= 900, "only {} orderings", orderings.len());
    }

    #[test]
    fn short_inputs_draw_nothing() {
        let mut d = Derivation::new(Seed::from_u64(1));
        assert!(shuffle(&mut d, Vec::<u8>::new()).is_empty());
        assert_eq!(shuffle(&mut d, vec![7]), vec![7]);
        assert_eq!(d.nonce().value(), 0);
    }

    #[test]
    fn positions_are_roughly_uniform() {
        // Element 0 should land in each of 4 slots about a quarter of the time.
        let mut counts = [0u32; 4];
        for s in 0..4000u64 {
            let out = shuffle(&mut Derivation::new(Seed::from_u64(s)), vec![0u8, 1, 2, 3]);
            let slot = out.iter().position(|&v| v == 0).unwrap();
            counts[slot] += 1;
        }
        for c in counts {
            assert!((850..=1150).contains(&c), "slot count {c}");
        }
    }
}
