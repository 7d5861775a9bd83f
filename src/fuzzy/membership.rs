use super::EngineBuildError;

/// Triangular membership function with breakpoints `a <= b <= c`.
///
/// Zero outside `[a, c]`, rising linearly from `a` to a peak of 1 at `b`,
/// falling linearly back to 0 at `c`. Coinciding breakpoints give shoulders,
/// and `a == b == c` is an indicator of the single point `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularMembership {
    a: f64,
    b: f64,
    c: f64,
}

impl TriangularMembership {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, EngineBuildError> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite();
        if !finite || a > b || b > c {
            return Err(EngineBuildError::InvalidBreakpoints { a, b, c });
        }
        Ok(TriangularMembership { a, b, c })
    }

    pub fn breakpoints(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Membership degree of `x`, in `[0, 1]`.
    pub fn degree(&self, x: f64) -> f64 {
        let TriangularMembership { a, b, c } = *self;
        if x < a || x > c {
            return 0.0;
        }
        if x < b {
            (x - a) / (b - a)
        } else if x == b {
            1.0
        } else {
            (c - x) / (c - b)
        }
    }
}
