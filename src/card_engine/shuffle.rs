use rand::Rng;

/// Return a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// The source slice is left untouched; randomness comes only from `rng`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
