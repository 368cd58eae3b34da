use log::info;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::format::trim_outer_parens;
use crate::operand::Operand;
use crate::solver::constants::TARGET;

/// A solved hand: the expression text and how it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Expression reaching the target, with the outermost wrapper trimmed
    pub expression: String,
    /// Whether every intermediate result stayed strictly positive
    pub all_positive: bool,
}

/// Main solver for finding an expression that reaches the target value
pub struct Solver {
    target: BigRational,
}

impl Solver {
    /// Create a solver targeting 24
    pub fn new() -> Self {
        Self::with_target(BigRational::from_integer(BigInt::from(TARGET)))
    }

    /// Create a solver for an arbitrary exact target
    pub fn with_target(target: BigRational) -> Self {
        Self { target }
    }

    /// Find an expression combining all of `values` into the target
    ///
    /// Runs two passes: first admitting only strictly positive intermediate
    /// results, then, only if that fails, admitting any intermediate. A
    /// pass-1 solution is always preferred; both passes enumerate pairs and
    /// operators in a fixed order and return the first success, so repeated
    /// solves of the same hand yield the same expression.
    pub fn solve(&self, values: &[i64]) -> Option<Solution> {
        let items: Vec<Operand> = values
            .iter()
            .map(|&value| Operand::from_integer(value))
            .collect();

        info!("Searching with the positivity filter");
        if let Some(found) = search(&items, true, &self.target) {
            info!("Found all-positive solution: {}", found);
            return Some(Solution {
                expression: trim_outer_parens(found.text()).to_string(),
                all_positive: true,
            });
        }

        info!("Retrying without the positivity filter");
        if let Some(found) = search(&items, false, &self.target) {
            info!("Found solution with non-positive intermediates: {}", found);
            return Some(Solution {
                expression: trim_outer_parens(found.text()).to_string(),
                all_positive: false,
            });
        }

        info!("No expression reaches the target for {:?}", values);
        None
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first reduction of the operand set down to a single value
///
/// Each step picks an unordered pair (i, j), i < j, replaces it with every
/// combined operand in turn, and recurses on the shortened set; the first
/// branch whose final value equals `target` exactly wins and short-circuits
/// the remaining enumeration.
pub(crate) fn search(
    items: &[Operand],
    positive_only: bool,
    target: &BigRational,
) -> Option<Operand> {
    if let [only] = items {
        return (only.value() == target).then(|| only.clone());
    }

    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let mut rest: Vec<Operand> = Vec::with_capacity(items.len() - 1);
            for (k, operand) in items.iter().enumerate() {
                if k != i && k != j {
                    rest.push(operand.clone());
                }
            }

            for merged in items[i].combine(&items[j], positive_only) {
                rest.push(merged);
                if let Some(found) = search(&rest, positive_only, target) {
                    return Some(found);
                }
                rest.pop();
            }
        }
    }

    None
}
