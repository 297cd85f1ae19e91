use rand::Rng;

/// Gift numbers 1..=n in label order, before any shuffling.
pub fn sequence(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

/// Fisher–Yates shuffle. Every permutation of the input is equally likely.
pub fn fisher_yates<R: Rng>(values: &mut [u32], rng: &mut R) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}
