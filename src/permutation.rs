//! Output order of the split-radix network.
//!
//! The recursive network leaves its results in "natural" order: the even-frequency half of the
//! spectrum lands in the first half of the buffer (recursively), and the odd frequencies
//! `4k + 1` and `4k - 1` land in the third and fourth quarters. [`frequency_map`] follows that
//! recursion for a single index, and [`generate`] inverts it into a lookup table.

/// Frequency (in the network's own `exp(+2πi nk/N)` convention) that ends up at natural
/// position `i` of a size-`n` transform.
pub fn frequency_map(i: usize, n: usize) -> usize {
    if n <= 2 {
        return i;
    }

    let mut m = n >> 1;
    if i < m {
        return frequency_map(i, m) << 1;
    }

    let i = i - m;
    m >>= 1;
    if i < m {
        return (frequency_map(i, m) << 2) + 1;
    }

    let i = i - m;
    // `4f - 1` wraps to `n - 1` when `f == 0`
    ((frequency_map(i, m) << 2).wrapping_sub(1)) & (n - 1)
}

/// Build the size-`n` lookup table: entry `k` is the natural position that holds bin `k` of the
/// standard `exp(-2πi nk/N)` DFT.
///
/// Negating the network's frequency turns its `exp(+...)` bins into `exp(-...)` bins, which is
/// why the table is filled at `n - j`.
///
/// # Panics
///
/// Panics if `n` is not a power of two of at least 2.
pub fn generate(n: usize) -> Vec<usize> {
    assert!(
        n.is_power_of_two() && n >= 2,
        "permutation size must be a power of two >= 2, got {n}"
    );

    let mut table = vec![0; n];
    for i in 1..n {
        let j = frequency_map(i, n);
        table[n - j] = i;
    }
    table
}
