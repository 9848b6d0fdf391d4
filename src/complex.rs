/// A complex number `re + im·i` with `f64` parts.
///
/// Arithmetic follows plain IEEE-754 semantics: dividing by zero gives
/// infinities or NaN and nothing is ever rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// The imaginary unit.
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }
    pub const fn real(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
    pub const fn imag(im: f64) -> Self {
        Complex::new(0.0, im)
    }

    pub fn re(self) -> f64 {
        self.re
    }
    pub fn im(self) -> f64 {
        self.im
    }

    /// Overwrites both parts.
    pub fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }
    pub fn set_re(&mut self, re: f64) {
        self.re = re;
    }
    pub fn set_im(&mut self, im: f64) {
        self.im = im;
    }

    /// Replaces `self` with `value` and hands the receiver back.
    ///
    /// A bare `f64` assigns the real part and clears the imaginary part.
    pub fn assign(&mut self, value: impl Into<Complex>) -> &mut Self {
        *self = value.into();
        self
    }

    /// The magnitude `sqrt(re² + im²)`.
    pub fn abs(self) -> f64 {
        self.norm_sqr().sqrt()
    }
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
    pub fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }

    // Chaining forms of the compound operators. `c.add_mut(x)` is `c += x`
    // but returns the updated receiver.

    pub fn add_mut<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: std::ops::AddAssign<R>,
    {
        *self += rhs;
        self
    }
    pub fn sub_mut<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: std::ops::SubAssign<R>,
    {
        *self -= rhs;
        self
    }
    pub fn mul_mut<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: std::ops::MulAssign<R>,
    {
        *self *= rhs;
        self
    }
    pub fn div_mut<R>(&mut self, rhs: R) -> &mut Self
    where
        Self: std::ops::DivAssign<R>,
    {
        *self /= rhs;
        self
    }
}

impl std::ops::Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}
impl std::ops::Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}
impl std::ops::Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}
impl std::ops::Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Self) -> Self {
        let norm_sqr = rhs.norm_sqr();
        Complex {
            re: (self.re * rhs.re + self.im * rhs.im) / norm_sqr,
            im: (self.im * rhs.re - self.re * rhs.im) / norm_sqr,
        }
    }
}
impl std::ops::Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self {
        Complex::new(-self.re, -self.im)
    }
}

// A real scalar only touches the real part under + and -.
impl std::ops::Add<f64> for Complex {
    type Output = Complex;

    fn add(self, rhs: f64) -> Self {
        Complex::new(self.re + rhs, self.im)
    }
}
impl std::ops::Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, rhs: f64) -> Self {
        Complex::new(self.re - rhs, self.im)
    }
}
impl std::ops::Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Self {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}
impl std::ops::Div<f64> for Complex {
    type Output = Complex;

    fn div(self, rhs: f64) -> Self {
        Complex::new(self.re / rhs, self.im / rhs)
    }
}

impl std::ops::Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self + rhs.re, rhs.im)
    }
}
impl std::ops::Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self - rhs.re, -rhs.im)
    }
}
impl std::ops::Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(self * rhs.re, self * rhs.im)
    }
}

macro_rules! forward_assign {
    ($($Assign:ident, $assign:ident, $op:tt;)+) => {
        $(impl std::ops::$Assign for Complex {
            fn $assign(&mut self, rhs: Complex) {
                *self = *self $op rhs;
            }
        }
        impl std::ops::$Assign<f64> for Complex {
            fn $assign(&mut self, rhs: f64) {
                *self = *self $op rhs;
            }
        })+
    };
}
forward_assign!(
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
);

impl std::iter::Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, c| acc + c)
    }
}
impl<'a> std::iter::Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
impl std::iter::Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, c| acc * c)
    }
}
impl<'a> std::iter::Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}
impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

/// Collapses to the magnitude. The phase is lost.
impl From<Complex> for f64 {
    fn from(z: Complex) -> f64 {
        z.abs()
    }
}

impl From<num_complex::Complex64> for Complex {
    fn from(z: num_complex::Complex64) -> Self {
        Complex::new(z.re, z.im)
    }
}
impl From<Complex> for num_complex::Complex64 {
    fn from(z: Complex) -> Self {
        num_complex::Complex64::new(z.re, z.im)
    }
}
