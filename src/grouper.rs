/// Lines per FASTQ record: header, sequence, separator, quality.
pub const BLOCK_LINES: usize = 4;

/// Iterator adapter that partitions its input into fixed-size blocks of
/// `N` items. The final block is right-padded with `None` when the input
/// runs out mid-block; an empty input yields no blocks at all.
///
/// Purely structural: it raises no errors of its own and never inspects
/// the items. Finite and not restartable; once exhausted the inner
/// iterator is not polled again.
pub struct Blocks<I: Iterator, const N: usize> {
    inner: I,
    done: bool,
}

impl<I: Iterator, const N: usize> Blocks<I, N> {
    pub fn new(inner: I) -> Self {
        assert!(N > 0, "block size must be positive");
        Self { inner, done: false }
    }
}

impl<I: Iterator, const N: usize> Iterator for Blocks<I, N> {
    type Item = [Option<I::Item>; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut block: [Option<I::Item>; N] = std::array::from_fn(|_| None);
        for slot in block.iter_mut() {
            match self.inner.next() {
                Some(item) => *slot = Some(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if block[0].is_none() {
            return None;
        }
        Some(block)
    }
}
