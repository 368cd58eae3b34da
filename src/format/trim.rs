use log::debug;

/// Strip redundant enclosing parentheses from an expression
///
/// A pair is removed only when the leading `(` closes exactly at the final
/// character, repeating while such a wrapper remains, so `(1+2)*(3+4)` is
/// left untouched while `((1+2))` becomes `1+2`. Only whole-string wrappers
/// are considered; redundant layers inside sub-expressions are kept. Purely
/// cosmetic.
pub fn trim_outer_parens(expr: &str) -> &str {
    let mut trimmed = expr;
    while trimmed.starts_with('(') && trimmed.ends_with(')') {
        if !wraps_entire_string(trimmed) {
            break;
        }
        trimmed = &trimmed[1..trimmed.len() - 1];
    }

    if trimmed.len() != expr.len() {
        debug!("Trimmed '{}' to '{}'", expr, trimmed);
    }
    trimmed
}

/// True when the leading parenthesis matches the final character
fn wraps_entire_string(expr: &str) -> bool {
    let last = expr.len() - 1;
    let mut depth = 0i32;
    for (idx, byte) in expr.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && idx < last {
            return false;
        }
    }
    depth == 0
}
