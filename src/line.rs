//! Guard-cell line buffers and symmetric signal extension.

/// Which phase the first sample of a full-resolution line belongs to.
///
/// A line whose origin sits at an even coordinate of the reference grid
/// starts with a low-pass sample; an odd origin starts with a high-pass
/// sample. The parity decides which neighbor offsets every lifting step
/// uses, so one value is threaded through an entire transform call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parity {
    /// The first sample belongs to the low-pass phase.
    Even,
    /// The first sample belongs to the high-pass phase.
    Odd,
}

impl Parity {
    /// The parity of a line whose first sample sits at `origin`.
    pub fn of(origin: usize) -> Self {
        if origin.is_multiple_of(2) {
            Self::Even
        } else {
            Self::Odd
        }
    }

    /// Number of low-pass coefficients produced for a line of `width` samples.
    pub fn low_len(self, width: usize) -> usize {
        match self {
            Self::Even => width.div_ceil(2),
            Self::Odd => width / 2,
        }
    }

    /// Number of high-pass coefficients produced for a line of `width` samples.
    pub fn high_len(self, width: usize) -> usize {
        width - self.low_len(width)
    }

    /// Full-resolution indices of the first low-phase and high-phase sample.
    pub(crate) fn offsets(self) -> (usize, usize) {
        match self {
            Self::Even => (0, 1),
            Self::Odd => (1, 0),
        }
    }
}

/// A 1-D sample buffer with one guard cell on each side.
///
/// Logical indices run from `-1` to `len`, where `-1` and `len` address the
/// guard cells. Only the extension methods write the guards; the lifting
/// steps read them immediately afterwards and treat them like any other
/// neighbor, which is what keeps the edge iterations free of special cases.
#[derive(Debug, Clone)]
pub struct LineBuf {
    data: Vec<f32>,
}

impl LineBuf {
    /// A zeroed buffer holding `len` samples plus the two guard cells.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0.0; len + 2],
        }
    }

    /// A buffer initialized from `samples`, with zeroed guard cells.
    pub fn from_samples(samples: &[f32]) -> Self {
        let mut buf = Self::new(samples.len());
        buf.samples_mut().copy_from_slice(samples);
        buf
    }

    /// The number of logical samples (excluding the guard cells).
    pub fn len(&self) -> usize {
        self.data.len() - 2
    }

    /// Whether the buffer holds no logical samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The logical samples, without the guard cells.
    pub fn samples(&self) -> &[f32] {
        let len = self.len();
        &self.data[1..1 + len]
    }

    /// Mutable access to the logical samples.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        let len = self.len();
        &mut self.data[1..1 + len]
    }

    /// The full storage including both guard cells, for vectorized passes.
    /// Logical index `i` lives at raw index `i + 1`.
    pub(crate) fn raw(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Read at a logical index; `-1` and `self.len()` reach the guards.
    #[inline]
    pub(crate) fn at(&self, i: isize) -> f32 {
        self.data[(i + 1) as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: isize, value: f32) {
        self.data[(i + 1) as usize] = value;
    }

    /// Whole-sample symmetric extension of a full-resolution line: reflects
    /// about the edge samples, excluding the edges themselves
    /// (`buf[-1] = buf[1]`, `buf[len] = buf[len - 2]`).
    pub fn extend_mirror(&mut self, len: usize) {
        debug_assert!(len >= 1 && len <= self.len());

        if len == 1 {
            let only = self.at(0);
            self.set(-1, only);
            self.set(1, only);
            return;
        }

        self.set(-1, self.at(1));
        self.set(len as isize, self.at(len as isize - 2));
    }

    /// Whole-sample symmetric extension expressed in subband coordinates,
    /// where the mirrored neighbor of each edge coefficient is the edge
    /// coefficient itself (`buf[-1] = buf[0]`, `buf[len] = buf[len - 1]`).
    pub fn extend_edge(&mut self, len: usize) {
        debug_assert!(len >= 1 && len <= self.len());

        self.set(-1, self.at(0));
        self.set(len as isize, self.at(len as isize - 1));
    }
}
