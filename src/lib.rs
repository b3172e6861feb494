//! Classic bit-manipulation tricks on 32-bit integers.
//!
//! The tricks live in [`bitops`]. The remaining modules back the `bittricks`
//! command-line evaluator, which applies one trick to a list of integers.

pub mod bitops;
pub mod error;
pub mod operation;
pub mod output;
pub mod report;
pub mod values;

pub use bitops::{
    PseudoRandom, bits_are_in_alt_order, compare_integers, generate_pseudo_random_number,
    get_bit_count, is_at_least_one_bit_set, is_number_even, is_power_of_two, swap_in_slice,
    swap_numbers,
};
