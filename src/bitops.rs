//! Bit manipulation tricks on 32-bit integers.
//!
//! Every function here is pure and total over its input type. The only
//! mutating operations are the XOR swaps, which write through the references
//! they are given.

/// Returns `true` if `x` is a positive power of two.
///
/// A power of two has exactly one set bit, so clearing its lowest set bit
/// with `x & (x - 1)` leaves zero. Zero and negative values are never powers
/// of two, including `i32::MIN` whose only set bit is the sign bit.
#[inline]
#[must_use]
pub const fn is_power_of_two(x: i32) -> bool {
    x > 0 && (x & (x - 1)) == 0
}

/// Swaps the values behind `a` and `b` using XOR accumulation.
#[inline]
pub fn swap_numbers(a: &mut i32, b: &mut i32) {
    *a ^= *b;
    *b ^= *a;
    *a ^= *b;
}

/// Swaps `values[i]` and `values[j]` using XOR accumulation.
///
/// When `i == j` both operands refer to the same element, the first XOR
/// clears it, and the element ends up as `0`.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
#[inline]
pub fn swap_in_slice(values: &mut [i32], i: usize, j: usize) {
    values[i] ^= values[j];
    values[j] ^= values[i];
    values[i] ^= values[j];
}

/// Returns `true` if the bits of `n` alternate between 0 and 1.
///
/// `n ^ (n >> 1)` turns an alternating run into a run of ones, and a run of
/// ones that starts at bit 0 shares no bit with its successor. Leading zeros
/// are not part of the pattern: `0`, `0b1`, `0b10` and `0b101` all qualify,
/// `u32::MAX` does not.
#[inline]
#[must_use]
pub const fn bits_are_in_alt_order(n: u32) -> bool {
    let num = n ^ (n >> 1);
    (num.wrapping_add(1) & num) == 0
}

/// Returns `true` if `a == b`, computed as `(a ^ b) == 0`.
#[inline]
#[must_use]
pub const fn compare_integers(a: i32, b: i32) -> bool {
    (a ^ b) == 0
}

/// Generates a pseudo-random number from `seed` with one xorshift32 step.
///
/// The shifts run on an unsigned working value, so the right shift is
/// logical and the output for a given seed is the same on every platform.
/// A seed of `0` is a fixed point and produces `0`. Not suitable for
/// cryptographic use.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn generate_pseudo_random_number(seed: u32) -> i32 {
    let mut x = seed;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x as i32
}

/// Returns `true` if `x` is even.
#[inline]
#[must_use]
pub const fn is_number_even(x: i32) -> bool {
    (x & 1) == 0
}

/// Returns `true` if at least one bit of `x` is set.
///
/// The classic formulation `x | 0` yields `x` itself and leans on integer
/// truthiness to act as a predicate. It is written here as the comparison it
/// stands for.
#[inline]
#[must_use]
pub const fn is_at_least_one_bit_set(x: i32) -> bool {
    x != 0
}

/// Counts the set bits in `x` with Brian Kernighan's algorithm.
///
/// Each iteration clears the lowest set bit, so the loop runs once per set
/// bit.
#[inline]
#[must_use]
pub const fn get_bit_count(x: u32) -> u32 {
    let mut count = 0;
    let mut rest = x;
    while rest != 0 {
        count += 1;
        rest &= rest - 1;
    }
    count
}

/// An endless xorshift32 stream.
///
/// Each item is [`generate_pseudo_random_number`] applied to the previous
/// item's bits, starting from the seed. A zero seed yields zeros forever.
#[derive(Debug, Clone)]
pub struct PseudoRandom {
    state: u32,
}

impl PseudoRandom {
    /// Starts a stream whose first item is generated from `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl Iterator for PseudoRandom {
    type Item = i32;

    #[allow(clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        let value = generate_pseudo_random_number(self.state);
        self.state = value as u32;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SAMPLES: usize = 10_000;

    fn signed_edges() -> Vec<i32> {
        vec![i32::MIN, i32::MIN + 1, -2, -1, 0, 1, 2, 3, i32::MAX - 1, i32::MAX]
    }

    fn naive_bit_count(x: u32) -> u32 {
        (0..32).filter(|&i| (x >> i) & 1 == 1).count() as u32
    }

    #[test]
    fn test_is_power_of_two() {
        for shift in 0..31 {
            assert!(is_power_of_two(1 << shift), "1 << {shift}");
        }
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(3));
        assert!(!is_power_of_two(6));
        assert!(!is_power_of_two(i32::MAX));
        assert!(!is_power_of_two(-1));
        assert!(!is_power_of_two(-2));
        assert!(!is_power_of_two(i32::MIN));
    }

    #[test]
    #[allow(clippy::cast_sign_loss)]
    fn test_is_power_of_two_matches_single_set_bit() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let samples = (0..SAMPLES)
            .map(|_| rng.r#gen::<i32>())
            .chain(signed_edges())
            .chain((0..31).map(|s| 1 << s));
        for x in samples {
            let expected = x > 0 && get_bit_count(x as u32) == 1;
            assert_eq!(is_power_of_two(x), expected, "x = {x}");
        }
    }

    #[test]
    fn test_swap_numbers() {
        let mut a = 5;
        let mut b = -17;
        swap_numbers(&mut a, &mut b);
        assert_eq!((a, b), (-17, 5));

        let mut a = i32::MIN;
        let mut b = i32::MAX;
        swap_numbers(&mut a, &mut b);
        assert_eq!((a, b), (i32::MAX, i32::MIN));

        let mut a = 42;
        let mut b = 42;
        swap_numbers(&mut a, &mut b);
        assert_eq!((a, b), (42, 42));
    }

    #[test]
    fn test_swap_in_slice() {
        let mut values = [1, 2, 3];
        swap_in_slice(&mut values, 0, 2);
        assert_eq!(values, [3, 2, 1]);

        // Aliased operands cancel out.
        let mut values = [7, -9];
        swap_in_slice(&mut values, 1, 1);
        assert_eq!(values, [7, 0]);
    }

    #[test]
    #[should_panic]
    fn test_swap_in_slice_out_of_bounds() {
        let mut values = [1, 2];
        swap_in_slice(&mut values, 0, 2);
    }

    #[test]
    fn test_bits_are_in_alt_order_boundaries() {
        assert!(bits_are_in_alt_order(0));
        assert!(!bits_are_in_alt_order(u32::MAX));
        assert!(bits_are_in_alt_order(0x5555_5555));
        assert!(bits_are_in_alt_order(0xAAAA_AAAA));
        assert!(!bits_are_in_alt_order(0x8000_0000));
    }

    #[test]
    fn test_bits_are_in_alt_order_small_values() {
        assert!(bits_are_in_alt_order(0b1));
        assert!(bits_are_in_alt_order(0b10));
        assert!(bits_are_in_alt_order(0b101));
        assert!(bits_are_in_alt_order(0b1010));
        assert!(bits_are_in_alt_order(0b10101));
        assert!(!bits_are_in_alt_order(0b11));
        assert!(!bits_are_in_alt_order(0b100));
        assert!(!bits_are_in_alt_order(0b110));
        assert!(!bits_are_in_alt_order(0b1011));
    }

    #[test]
    fn test_bits_are_in_alt_order_every_width() {
        let mut pattern = 0u32;
        for width in 1..=32 {
            let bit = u32::from(width % 2 == 1);
            pattern = (pattern << 1) | bit;
            let mask = u32::MAX >> (32 - width);
            assert!(bits_are_in_alt_order(pattern), "pattern = {pattern:#b}");
            assert!(bits_are_in_alt_order(!pattern & mask), "pattern = {:#b}", !pattern & mask);
        }
    }

    #[test]
    fn test_bits_are_in_alt_order_adjacent_equal_bits() {
        // Definition used by the formula: bits from the highest set bit down
        // to bit 0 alternate.
        fn reference(n: u32) -> bool {
            let width = 32 - n.leading_zeros();
            (1..width).all(|i| ((n >> i) & 1) != ((n >> (i - 1)) & 1))
        }

        let mut rng = StdRng::seed_from_u64(0xa17);
        for _ in 0..SAMPLES {
            let n = rng.r#gen::<u32>();
            assert_eq!(bits_are_in_alt_order(n), reference(n), "n = {n:#034b}");
        }
        for n in 0..=0xFFFF {
            assert_eq!(bits_are_in_alt_order(n), reference(n), "n = {n:#b}");
        }
    }

    #[test]
    fn test_compare_integers() {
        let edges = signed_edges();
        for &a in &edges {
            for &b in &edges {
                assert_eq!(compare_integers(a, b), a == b, "{a} vs {b}");
            }
        }

        let mut rng = StdRng::seed_from_u64(0xc0);
        for _ in 0..SAMPLES {
            let a = rng.r#gen::<i32>();
            let b = if rng.gen_bool(0.5) { a } else { rng.r#gen::<i32>() };
            assert_eq!(compare_integers(a, b), a == b);
        }
    }

    #[test]
    fn test_generate_pseudo_random_number() {
        assert_eq!(generate_pseudo_random_number(0), 0);
        assert_eq!(generate_pseudo_random_number(1), 270_369);
        assert_eq!(generate_pseudo_random_number(1), 0x0004_2021);
        assert_eq!(
            generate_pseudo_random_number(42),
            generate_pseudo_random_number(42)
        );
        assert_ne!(
            generate_pseudo_random_number(1),
            generate_pseudo_random_number(2)
        );
    }

    #[test]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn test_generate_pseudo_random_number_uses_logical_shift() {
        fn arithmetic(seed: u32) -> i32 {
            let mut x = seed as i32;
            x ^= x.wrapping_shl(13);
            x ^= x >> 17;
            x ^= x.wrapping_shl(5);
            x
        }

        fn logical(seed: u32) -> i32 {
            let mut x = u64::from(seed);
            x = (x ^ (x << 13)) & 0xFFFF_FFFF;
            x ^= x >> 17;
            x = (x ^ (x << 5)) & 0xFFFF_FFFF;
            x as u32 as i32
        }

        let seed = 0x8000_0000;
        assert_eq!(generate_pseudo_random_number(seed), logical(seed));
        assert_ne!(generate_pseudo_random_number(seed), arithmetic(seed));

        let mut rng = StdRng::seed_from_u64(0x5417);
        for _ in 0..SAMPLES {
            let seed = rng.r#gen::<u32>();
            assert_eq!(generate_pseudo_random_number(seed), logical(seed));
        }
    }

    #[test]
    #[allow(clippy::cast_sign_loss)]
    fn test_pseudo_random_stream() {
        let stream: Vec<i32> = PseudoRandom::new(1).take(3).collect();
        assert_eq!(stream[0], generate_pseudo_random_number(1));
        assert_eq!(stream[1], generate_pseudo_random_number(stream[0] as u32));
        assert_eq!(stream[2], generate_pseudo_random_number(stream[1] as u32));
        assert_eq!(stream, vec![270_369, 67_634_689, -1_647_531_835]);

        assert!(PseudoRandom::new(0).take(10).all(|x| x == 0));
        assert!(PseudoRandom::new(7).take(1000).all(|x| x != 0));
    }

    #[test]
    fn test_is_number_even() {
        for x in signed_edges() {
            assert_eq!(is_number_even(x), x % 2 == 0, "x = {x}");
        }
        assert!(is_number_even(-4));
        assert!(!is_number_even(-3));

        let mut rng = StdRng::seed_from_u64(0xe7e7);
        for _ in 0..SAMPLES {
            let x = rng.r#gen::<i32>();
            assert_eq!(is_number_even(x), x % 2 == 0);
        }
    }

    #[test]
    fn test_is_at_least_one_bit_set() {
        assert!(!is_at_least_one_bit_set(0));
        for x in signed_edges().into_iter().filter(|&x| x != 0) {
            assert!(is_at_least_one_bit_set(x), "x = {x}");
        }
        for shift in 0..32 {
            assert!(is_at_least_one_bit_set(1i32.wrapping_shl(shift)));
        }
    }

    #[test]
    fn test_get_bit_count() {
        assert_eq!(get_bit_count(0), 0);
        assert_eq!(get_bit_count(1), 1);
        assert_eq!(get_bit_count(0b1011), 3);
        assert_eq!(get_bit_count(0x8000_0000), 1);
        assert_eq!(get_bit_count(0x5555_5555), 16);
        assert_eq!(get_bit_count(u32::MAX), 32);
    }

    #[test]
    fn test_get_bit_count_matches_naive_scan() {
        let mut rng = StdRng::seed_from_u64(0xb17c);
        for _ in 0..SAMPLES {
            let x = rng.r#gen::<u32>();
            assert_eq!(get_bit_count(x), naive_bit_count(x), "x = {x:#x}");
        }
    }
}
