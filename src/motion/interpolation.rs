//! Piecewise-linear interpolation
//!
//! Maps an input value through a list of input stops onto matching output
//! stops. Inputs outside the first/last stop either keep following the edge
//! segment's slope (`Extend`) or stick to the edge output (`Clamp`).

/// Behavior for inputs outside the interpolation domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the edge segment linearly
    #[default]
    Extend,
    /// Hold the edge output value
    Clamp,
}

/// Piecewise-linear mapping over `N` input stops
///
/// Input stops must be increasing. Mappings are built in `const` context, so
/// this is not checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation<const N: usize> {
    input: [f64; N],
    output: [f64; N],
    extrapolate: Extrapolate,
}

impl<const N: usize> Interpolation<N> {
    /// Create a mapping that extends linearly outside the domain
    pub const fn new(input: [f64; N], output: [f64; N]) -> Self {
        assert!(N >= 2, "interpolation needs at least two stops");
        Self {
            input,
            output,
            extrapolate: Extrapolate::Extend,
        }
    }

    /// Same mapping, clamped to the edge outputs outside the domain
    pub const fn clamped(self) -> Self {
        Self {
            extrapolate: Extrapolate::Clamp,
            ..self
        }
    }

    /// Input stops
    pub const fn input(&self) -> &[f64; N] {
        &self.input
    }

    /// Extrapolation mode of this mapping
    pub const fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Evaluate the mapping at `x`
    pub fn apply(&self, x: f64) -> f64 {
        let segment = self.find_segment(x);
        let (in_min, in_max) = (self.input[segment], self.input[segment + 1]);
        let (out_min, out_max) = (self.output[segment], self.output[segment + 1]);

        let mut x = x;
        if self.extrapolate == Extrapolate::Clamp {
            x = x.clamp(self.input[0], self.input[N - 1]);
        }

        if (in_max - in_min).abs() < f64::EPSILON {
            return out_min;
        }

        let t = (x - in_min) / (in_max - in_min);
        out_min + t * (out_max - out_min)
    }

    /// Index of the segment `[input[i], input[i + 1]]` used for `x`
    ///
    /// Picks the first interior stop that is `>= x`; anything past the last
    /// interior stop falls into the final segment.
    fn find_segment(&self, x: f64) -> usize {
        let mut i = 1;
        while i < N - 1 {
            if self.input[i] >= x {
                break;
            }
            i += 1;
        }
        i - 1
    }
}
