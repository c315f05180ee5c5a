//! Math shorthand translation.
//!
//! # Responsibility
//! - Expand ASCII shorthand (`<=`, `->`, `||`, ...) into display macros.
//!
//! # Invariants
//! - Replacements are literal, global and applied in table order.
//! - Longer tokens precede their prefixes (`<->` before `->`/`<-`,
//!   `||` before `|`).
//! - One pass only. Every expansion starts with `\` and ends with a space or
//!   `}`, so no trigger survives in the output and a second pass is a no-op.

/// Ordered literal replacement table.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\\[", "\\begin{bmatrix}"),
    ("\\]", "\\end{bmatrix}"),
    ("<=", "\\leq "),
    (">=", "\\geq "),
    ("!=", "\\neq "),
    ("<->", "\\leftrightarrow "),
    ("->", "\\rightarrow "),
    ("<-", "\\leftarrow "),
    ("||", "\\lVert "),
    ("|", "\\lvert "),
];

/// Expands math shorthand in `input`.
pub fn translate(input: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(input.to_string(), |acc, (from, to)| {
            if acc.contains(from) {
                acc.replace(from, to)
            } else {
                acc
            }
        })
}
