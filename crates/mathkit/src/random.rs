//! Thin helpers over `rand` used to initialise network parameters and pick
//! samples. Every function takes the generator explicitly so callers can
//! seed it.
use rand::Rng;

/// Random integer in `[min, max]` (inclusive). Bounds may be given in either order.
pub fn randint<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Random float in `[min, max)`. Bounds may be given in either order; equal
/// bounds return that value.
pub fn randfloat<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if lo == hi {
        return lo;
    }
    rng.gen_range(lo..hi)
}

/// Random element of `items`, or `None` when it is empty.
pub fn choice<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}
