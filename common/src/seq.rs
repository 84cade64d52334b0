/// Interleave `separator` between adjacent items: `[a, b, c]` becomes
/// `[a, sep, b, sep, c]`. Never emits a trailing separator.
pub fn array_join<T: Clone>(items: &[T], separator: &T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len().saturating_mul(2).saturating_sub(1));
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(separator.clone());
        }
        out.push(item.clone());
    }
    out
}

/// True when the value is absent. Mirrors the JS `undefined`/`null` check for
/// Rust callers holding an `Option`.
pub fn is_undef<T>(value: &Option<T>) -> bool {
    value.is_none()
}
