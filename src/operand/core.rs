use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// An exact rational value paired with the expression text that derives it
///
/// Operands are immutable once created. Arithmetic is performed on
/// arbitrary-precision rationals so that equality against the target is
/// exact; a floating-point representation would drift across repeated
/// division and multiplication.
#[derive(Debug, Clone)]
pub struct Operand {
    value: BigRational,
    text: String,
}

impl Operand {
    /// Create an operand from a raw card value; the text is the decimal literal
    pub fn from_integer(value: i64) -> Self {
        Self {
            value: BigRational::from_integer(BigInt::from(value)),
            text: value.to_string(),
        }
    }

    pub fn value(&self) -> &BigRational {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Produce every operand derivable from this pair with one binary operator
    ///
    /// Candidates are emitted in a fixed order so that the search has a
    /// reproducible tie-break among equally valid solutions:
    ///
    /// 1. `(A+B)`
    /// 2. `(A-B)`
    /// 3. `(B-A)`
    /// 4. `(A*B)`
    /// 5. `(A/B)`, only when B is nonzero
    /// 6. `(B/A)`, only when A is nonzero
    ///
    /// Subtraction and division are not commutative, so both orderings are
    /// generated. When `positive_only` is set, any candidate whose value is
    /// not strictly greater than zero is discarded.
    pub fn combine(&self, other: &Operand, positive_only: bool) -> Vec<Operand> {
        let mut merged = Vec::with_capacity(6);
        let mut push = |value: BigRational, text: String| {
            if positive_only && !value.is_positive() {
                return;
            }
            merged.push(Operand { value, text });
        };

        push(
            &self.value + &other.value,
            format!("({}+{})", self.text, other.text),
        );
        push(
            &self.value - &other.value,
            format!("({}-{})", self.text, other.text),
        );
        push(
            &other.value - &self.value,
            format!("({}-{})", other.text, self.text),
        );
        push(
            &self.value * &other.value,
            format!("({}*{})", self.text, other.text),
        );
        if !other.value.is_zero() {
            push(
                &self.value / &other.value,
                format!("({}/{})", self.text, other.text),
            );
        }
        if !self.value.is_zero() {
            push(
                &other.value / &self.value,
                format!("({}/{})", other.text, self.text),
            );
        }

        merged
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
