/// Options to tune to improve performance depending on the hardware and input size.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size.
///
/// You only need to tune these options if you are trying to squeeze maximum performance
/// out of a known hardware platform that you can benchmark at varying input sizes.
/// The choice never changes the result beyond rounding.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub pass_layout: PassLayout,
}

impl Options {
    /// Defaults for a transform of `input_size`.
    ///
    /// The layout is picked per pass, so every size gets [`PassLayout::Auto`] for now.
    pub(crate) fn guess_options(_input_size: usize) -> Options {
        Options::default()
    }

    /// Options that pin `layout` for every pass
    pub fn with_pass_layout(layout: PassLayout) -> Self {
        Self {
            pass_layout: layout,
        }
    }
}

/// How a pass walks its twiddle table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PassLayout {
    #[default]
    /// [`PassLayout::Linear`] up to size 512, [`PassLayout::Mirrored`] above
    Auto,
    /// One twiddle factor per butterfly, read in order.
    ///
    /// Fastest while the full-quarter tables stay in cache.
    Linear,
    /// Walk the first eighth of the circle forwards and then backwards with the real and
    /// imaginary parts swapped, which halves the table footprint.
    Mirrored,
}

impl PassLayout {
    /// Whether the pass over a size-`size` block uses the mirrored walk
    #[inline]
    pub(crate) fn mirrors(self, size: usize) -> bool {
        match self {
            PassLayout::Auto => size > crate::twiddles::FULL_QUARTER_MAX,
            PassLayout::Linear => false,
            PassLayout::Mirrored => true,
        }
    }
}
