use rand::Rng;

/// Range of the swap partner drawn at step `l` of the shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    /// `[0, l)`, the historical draw. Every result is a single cycle, so
    /// no index ever keeps its own value.
    #[default]
    Exclusive,
    /// `[0, l]`, the unbiased Fisher-Yates draw.
    Inclusive,
}

/// A shuffled `[0, n)`; original index `i` is kept when `perm[i] < keep`.
#[derive(Debug, Clone)]
pub struct Permutation {
    perm: Vec<usize>,
    keep: usize,
}

impl Permutation {
    /// Shuffles `[0, n)` taking partners from `below(bound)`, which must
    /// return a value in `[0, bound)`.
    pub fn shuffle<F>(n: usize, keep: usize, mode: ShuffleMode, mut below: F) -> Self
    where
        F: FnMut(usize) -> usize,
    {
        let mut perm: Vec<usize> = (0..n).collect();
        for l in (1..n).rev() {
            let bound = match mode {
                ShuffleMode::Exclusive => l,
                ShuffleMode::Inclusive => l + 1,
            };
            let r = below(bound);
            perm.swap(l, r);
        }
        Permutation { perm, keep }
    }

    pub fn with_rng<R: Rng>(n: usize, keep: usize, mode: ShuffleMode, rng: &mut R) -> Self {
        Self::shuffle(n, keep, mode, |bound| rng.gen_range(0..bound))
    }

    /// Number of indices covered, i.e. `n`.
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    /// Indices past `n` are never selected.
    #[inline]
    pub fn is_selected(&self, i: usize) -> bool {
        self.perm.get(i).map_or(false, |&v| v < self.keep)
    }

    pub fn values(&self) -> &[usize] {
        &self.perm
    }

    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| self.is_selected(i))
    }
}
