//! Control-point tone curves.
//!
//! A curve is four `(input, output)` pairs. It is fitted with the cubic that
//! passes through all four points and sampled once per 8-bit level into a
//! [`LookupTable`].
//!
//! The control inputs end at 256 while the table is sampled at 0..=255, so
//! index 255 sits just inside the last segment rather than on a control
//! point.

pub mod lut;

pub use lut::{LookupTable, TABLE_SIZE};

use crate::error::{FilterError, FilterResult};

/// Number of control points a curve is fitted through.
pub const CURVE_POINTS: usize = 4;

/// Input levels shared by both presets.
pub const CONTROL_INPUTS: [f64; CURVE_POINTS] = [0.0, 64.0, 128.0, 256.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlCurve {
    pub x: [f64; CURVE_POINTS],
    pub y: [f64; CURVE_POINTS],
}

/// Lifts the midtones: `(64, 80)`, `(128, 160)`.
pub const BOOST: ControlCurve = ControlCurve {
    x: CONTROL_INPUTS,
    y: [0.0, 80.0, 160.0, 256.0],
};

/// Pulls the midtones down: `(64, 50)`, `(128, 100)`.
pub const CUT: ControlCurve = ControlCurve {
    x: CONTROL_INPUTS,
    y: [0.0, 50.0, 100.0, 256.0],
};

impl ControlCurve {
    pub fn name(&self) -> &'static str {
        if *self == BOOST {
            "Boost"
        } else if *self == CUT {
            "Cut"
        } else {
            "Custom"
        }
    }

    pub fn table(&self) -> FilterResult<LookupTable> {
        build_table(&self.x, &self.y)
    }
}

/// Fit a cubic through the control points and sample it at every 8-bit level.
pub fn build_table(x_points: &[f64], y_points: &[f64]) -> FilterResult<LookupTable> {
    let cubic = Cubic::fit(x_points, y_points)?;
    let mut entries = [0.0f64; TABLE_SIZE];
    for (level, entry) in entries.iter_mut().enumerate() {
        *entry = cubic.eval(level as f64);
    }
    Ok(LookupTable::from_entries(entries))
}

/// Interpolating cubic in Lagrange form.
///
/// A cubic has four coefficients, so the least-squares cubic through four
/// points has zero residual. This is also what a cubic smoothing spline
/// without interior knots produces.
struct Cubic {
    x: [f64; CURVE_POINTS],
    // y_i / prod_{j != i}(x_i - x_j)
    weights: [f64; CURVE_POINTS],
}

impl Cubic {
    fn fit(x_points: &[f64], y_points: &[f64]) -> FilterResult<Self> {
        if x_points.len() != CURVE_POINTS || y_points.len() != CURVE_POINTS {
            return Err(FilterError::InvalidCurve(format!(
                "expected {CURVE_POINTS} control points, got {} inputs and {} outputs",
                x_points.len(),
                y_points.len()
            )));
        }
        if x_points.iter().chain(y_points).any(|v| !v.is_finite()) {
            return Err(FilterError::InvalidCurve(
                "control points must be finite".to_string(),
            ));
        }
        if x_points.windows(2).any(|w| w[1] <= w[0]) {
            return Err(FilterError::InvalidCurve(format!(
                "control inputs must be strictly increasing: {x_points:?}"
            )));
        }

        let mut x = [0.0f64; CURVE_POINTS];
        x.copy_from_slice(x_points);

        let mut weights = [0.0f64; CURVE_POINTS];
        for i in 0..CURVE_POINTS {
            let denom: f64 = (0..CURVE_POINTS)
                .filter(|&j| j != i)
                .map(|j| x[i] - x[j])
                .product();
            weights[i] = y_points[i] / denom;
        }

        Ok(Self { x, weights })
    }

    fn eval(&self, t: f64) -> f64 {
        let mut sum = 0.0;
        for i in 0..CURVE_POINTS {
            let basis: f64 = (0..CURVE_POINTS)
                .filter(|&j| j != i)
                .map(|j| t - self.x[j])
                .product();
            sum += self.weights[i] * basis;
        }
        sum
    }
}
