//! Selection and evaluation of a single bit trick over a list of operands.

use crate::bitops::{
    PseudoRandom, bits_are_in_alt_order, compare_integers, get_bit_count, is_at_least_one_bit_set,
    is_number_even, is_power_of_two, swap_numbers,
};
use crate::error::{Error, Result};
use itertools::Itertools;
use log::debug;

/// The 32-bit type an operation reads its operands as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Signed,
    Unsigned,
}

/// The bit trick to apply to the input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    PowerOfTwo,
    Swap,
    AltOrder,
    Compare,
    Random,
    Even,
    AnyBitSet,
    BitCount,
}

impl Operation {
    pub const ALL: [Self; 8] = [
        Self::PowerOfTwo,
        Self::Swap,
        Self::AltOrder,
        Self::Compare,
        Self::Random,
        Self::Even,
        Self::AnyBitSet,
        Self::BitCount,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PowerOfTwo => "power-of-two",
            Self::Swap => "swap",
            Self::AltOrder => "alt-order",
            Self::Compare => "compare",
            Self::Random => "random",
            Self::Even => "even",
            Self::AnyBitSet => "any-bit-set",
            Self::BitCount => "bit-count",
        }
    }

    /// Number of operands consumed per evaluation.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Swap | Self::Compare => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub const fn operand(self) -> Operand {
        match self {
            Self::AltOrder | Self::Random | Self::BitCount => Operand::Unsigned,
            _ => Operand::Signed,
        }
    }

    /// Whether the operation answers yes or no.
    #[must_use]
    pub const fn is_predicate(self) -> bool {
        !matches!(self, Self::Swap | Self::Random | Self::BitCount)
    }

    /// Applies the operation to one group of exactly `arity()` operands.
    ///
    /// Operands must already lie in the domain of `operand()`; the values are
    /// narrowed to 32 bits without further checks. For `Random`, `count` is
    /// the number of stream items to produce from the seed, and a `count` of
    /// zero produces none.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn evaluate(self, operands: &[i64], count: usize) -> Result<Evaluation> {
        if operands.len() != self.arity() {
            return Err(Error::OperandCount {
                operation: self,
                expected: self.arity(),
                found: operands.len(),
            });
        }

        let signed = |i: usize| operands[i] as i32;
        let unsigned = |i: usize| operands[i] as u32;

        let truth = match self {
            Self::PowerOfTwo => Some(is_power_of_two(signed(0))),
            Self::AltOrder => Some(bits_are_in_alt_order(unsigned(0))),
            Self::Compare => Some(compare_integers(signed(0), signed(1))),
            Self::Even => Some(is_number_even(signed(0))),
            Self::AnyBitSet => Some(is_at_least_one_bit_set(signed(0))),
            Self::Swap | Self::Random | Self::BitCount => None,
        };

        let result = match (self, truth) {
            (_, Some(truth)) => truth.to_string(),
            (Self::Swap, None) => {
                let (mut a, mut b) = (signed(0), signed(1));
                swap_numbers(&mut a, &mut b);
                format!("{a} {b}")
            }
            (Self::Random, None) => PseudoRandom::new(unsigned(0)).take(count).join(" "),
            (_, None) => get_bit_count(unsigned(0)).to_string(),
        };

        let operands = match self.operand() {
            Operand::Signed => operands.iter().map(|&v| v as i32).join(" "),
            Operand::Unsigned => operands.iter().map(|&v| v as u32).join(" "),
        };
        debug!("{} {} -> {}", self, operands, result);

        Ok(Evaluation {
            operands,
            result,
            truth,
        })
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| {
                format!(
                    "invalid operation '{s}': must be one of {}",
                    Self::ALL.iter().join(", ")
                )
            })
    }
}

/// One application of an operation, rendered for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub operands: String,
    pub result: String,
    /// The answer of a predicate operation, `None` for the others.
    pub truth: Option<bool>,
}

/// Evaluates `operation` over `values`, grouped by the operation's arity.
pub fn evaluate_all(operation: Operation, values: &[i64], count: usize) -> Result<Vec<Evaluation>> {
    let arity = operation.arity();
    if values.len() % arity != 0 {
        return Err(Error::UnpairedValue { operation });
    }

    values
        .chunks_exact(arity)
        .map(|group| operation.evaluate(group, count))
        .collect()
}
