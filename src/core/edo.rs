//! core/edo.rs — integer EDO pitch space and register window.
//!
//! All engine arithmetic happens in steps of an N-tone equal division of
//! the octave. Example: N=12, step 7 → 700 cents (the tempered fifth).

/// Equal division of the octave into `steps_per_oct` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdoSpace {
    pub steps_per_oct: u32,
}

impl EdoSpace {
    pub fn new(steps_per_oct: u32) -> Self {
        assert!(steps_per_oct > 0);
        Self { steps_per_oct }
    }

    /// Step distance → cents (1200·d/N).
    #[inline]
    pub fn steps_to_cents(&self, d: u32) -> f32 {
        1200.0 * d as f32 / self.steps_per_oct as f32
    }

    /// Octave-reduce a step distance.
    #[inline]
    pub fn reduce(&self, d: u32) -> u32 {
        d % self.steps_per_oct
    }

    /// Interval class of a step distance: min(d mod N, N - d mod N).
    #[inline]
    pub fn interval_class(&self, d: u32) -> u32 {
        let r = d % self.steps_per_oct;
        r.min(self.steps_per_oct - r)
    }

    /// Pitch → pitch class.
    #[inline]
    pub fn pitch_class(&self, p: u32) -> u32 {
        p % self.steps_per_oct
    }
}

/// Closed register window `[0, len]` in steps, `len = octaves × N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub octaves: u32,
    pub len: u32,
}

impl Window {
    pub fn new(octaves: u32, space: &EdoSpace) -> Self {
        assert!(octaves > 0);
        Self {
            octaves,
            len: octaves * space.steps_per_oct,
        }
    }

    /// True when a pitch lies inside the window.
    #[inline]
    pub fn contains(&self, p: i64) -> bool {
        p >= 0 && p <= self.len as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_per_step() {
        let s = EdoSpace::new(12);
        assert!((s.steps_to_cents(7) - 700.0).abs() < 1e-4);
        assert!((s.steps_to_cents(12) - 1200.0).abs() < 1e-4);
        let s19 = EdoSpace::new(19);
        assert!((s19.steps_to_cents(19) - 1200.0).abs() < 1e-4);
    }

    #[test]
    fn interval_class_folds_both_ways() {
        let s = EdoSpace::new(12);
        assert_eq!(s.interval_class(7), 5);
        assert_eq!(s.interval_class(5), 5);
        assert_eq!(s.interval_class(6), 6);
        assert_eq!(s.interval_class(12), 0);
        assert_eq!(s.interval_class(13), 1);
    }

    #[test]
    fn window_bounds() {
        let s = EdoSpace::new(12);
        let w = Window::new(3, &s);
        assert_eq!(w.len, 36);
        assert!(w.contains(0));
        assert!(w.contains(36));
        assert!(!w.contains(37));
        assert!(!w.contains(-1));
    }
}
