use std::{fmt, io, ops};

/// A position or displacement on the plotting surface, in millimeters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0., y: 0. };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean norm. Large components may overflow to infinity; NaN
    /// propagates.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Display adapter for the full debug line,
    /// `Vector <label> = { x=<x>, y=<y> }`.
    pub fn labeled(self, label: &str) -> Labeled<'_> {
        Labeled {
            vector: self,
            label,
        }
    }

    /// Write the debug line, newline terminated, to `out`.
    pub fn write_labeled(
        &self,
        out: &mut impl io::Write,
        label: &str,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.labeled(label))
    }

    /// Emit the debug line as a `debug` event on the `plotty::vector`
    /// target.
    ///
    /// Use [`vector_print!`](crate::vector_print) to take the label from the
    /// source expression.
    pub fn print_labeled(&self, label: &str) {
        tracing::debug!("{}", self.labeled(label));
    }
}

//===================================================================
// Free Functions
//===================================================================

pub fn length(v: Vector) -> f32 {
    v.length()
}

pub fn add(v1: Vector, v2: Vector) -> Vector {
    v1 + v2
}

pub fn subtract(v1: Vector, v2: Vector) -> Vector {
    v1 - v2
}

pub fn scale(v: Vector, scalar: f32) -> Vector {
    v.scale(scalar)
}

//===================================================================
// Operators
//===================================================================

impl ops::Add<Vector> for Vector {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::AddAssign<Vector> for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl ops::Sub<Vector> for Vector {
    type Output = Self;

    fn sub(self, rhs: Vector) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::SubAssign<Vector> for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl ops::Mul<f32> for Vector {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl ops::Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs.scale(self)
    }
}

impl ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.)
    }
}

//===================================================================
// Formatting
//===================================================================

/// Two decimal places unless the caller asks for a precision.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        write!(f, "{{ x={:.*}, y={:.*} }}", p, self.x, p, self.y)
    }
}

pub struct Labeled<'a> {
    vector: Vector,
    label: &'a str,
}

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => {
                write!(f, "Vector {} = {:.*}", self.label, p, self.vector)
            }
            None => write!(f, "Vector {} = {}", self.label, self.vector),
        }
    }
}
