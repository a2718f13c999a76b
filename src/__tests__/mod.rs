mod lexer;
mod node;
mod numeric;

/// Relative comparison for values which are not exactly representable.
pub(crate) fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

pub(crate) fn hash_of<H: std::hash::Hash>(value: &H) -> u64 {
    use std::hash::Hasher;
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
