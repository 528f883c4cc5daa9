//! Initial board dimensions.

/// Side length of the square board a word list starts on.
///
/// Lengths are sorted longest first; the longest `ceil(n / 2)` are dropped and
/// the rest are summed and doubled. Depends only on the multiset of lengths.
pub fn calculate_board_size<S: AsRef<str>>(words: &[S]) -> usize {
    let mut lengths: Vec<usize> = words.iter().map(|w| w.as_ref().chars().count()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));

    let skip = words.len().div_ceil(2);
    2 * lengths.iter().skip(skip).sum::<usize>()
}

/// Smallest square on which the longest word fits when started at the centre
pub fn minimum_board_size<S: AsRef<str>>(words: &[S]) -> usize {
    let longest = words.iter().map(|w| w.as_ref().chars().count()).max().unwrap_or(0);
    (2 * longest).saturating_sub(1)
}
