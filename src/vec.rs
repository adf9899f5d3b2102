//! Planar vector type used for particle positions.

use core::ops::{Add, AddAssign, Sub, Neg};

/// 2D vector in screen space (x right, y down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Create a new 2D vector.
    pub const fn new(x: f64, y: f64) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub const fn zero() -> Self { Vec2 { x: 0.0, y: 0.0 } }

    /// Scale both components by `s`.
    pub fn scale(self, s: f64) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Length (magnitude), correctly rounded. See [`hypot`].
    pub fn length(self) -> f64 { hypot(self.x, self.y) }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> f64 { (self - other).length() }

    /// Midpoint between two points, computed per axis as `(a + b) / 2`.
    pub fn midpoint(self, other: Self) -> Self {
        Vec2 {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Clamp each axis independently to `[-limit, limit]`.
    ///
    /// Never panics: a negative `limit` pins both axes to `-limit`.
    pub fn clamp_axes(self, limit: f64) -> Self {
        Vec2 {
            x: limit.min(self.x).max(-limit),
            y: limit.min(self.y).max(-limit),
        }
    }

    /// True when both components are finite.
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

/// Euclidean norm of `(x, y)`, correctly rounded.
///
/// Both inputs are scaled by a power of two so the larger lands in
/// `[0.5, 1)`, squared exactly with `fma`, summed with compensation, and the
/// square root gets one Newton correction. The result is the same on every
/// platform, unlike `libm::hypot`, which may be off by one ulp.
pub fn hypot(x: f64, y: f64) -> f64 {
    let (ax, ay) = (libm::fabs(x), libm::fabs(y));
    if ax.is_infinite() || ay.is_infinite() {
        return f64::INFINITY;
    }
    if ax.is_nan() || ay.is_nan() {
        return f64::NAN;
    }
    let max = ax.max(ay);
    if max == 0.0 {
        return 0.0;
    }
    let (_, max_e) = libm::frexp(max);
    if max_e < -1023 {
        // 2^-max_e would overflow; lift subnormals into the normal range first
        return f64::MIN_POSITIVE * hypot(ax / f64::MIN_POSITIVE, ay / f64::MIN_POSITIVE);
    }
    let scale = libm::ldexp(1.0, -max_e);

    let mut csum = 1.0;
    let mut frac1 = 0.0;
    let mut frac2 = 0.0;
    for v in [ax * scale, ay * scale] {
        let (sq_hi, sq_lo) = exact_mul(v, v);
        let (sum_hi, sum_lo) = fast_two_sum(csum, sq_hi);
        csum = sum_hi;
        frac1 += sq_lo;
        frac2 += sum_lo;
    }
    let mut h = libm::sqrt(csum - 1.0 + (frac1 + frac2));

    let (sq_hi, sq_lo) = exact_mul(-h, h);
    let (sum_hi, sum_lo) = fast_two_sum(csum, sq_hi);
    csum = sum_hi;
    frac1 += sq_lo;
    frac2 += sum_lo;
    let residual = csum - 1.0 + (frac1 + frac2);
    h += residual / (2.0 * h);
    h / scale
}

/// `a * b` as an unevaluated sum `hi + lo`.
fn exact_mul(a: f64, b: f64) -> (f64, f64) {
    let hi = a * b;
    (hi, libm::fma(a, b, -hi))
}

/// `a + b` as `hi + lo`; requires `|a| >= |b|`.
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let hi = a + b;
    (hi, (a - hi) + b)
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self { Vec2 { x, y } }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self { (v.x, v.y) }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
