use crate::{core::PsoError, traits::CostFunction, DVector, Float};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// Describes a point in parameter space along with the value of the objective at that point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: DVector<Float>,
    /// the point's evaluation (`+inf` if the point has not yet been evaluated)
    pub fx: Float,
}
impl Default for Point {
    fn default() -> Self {
        Self {
            x: DVector::zeros(0),
            fx: Float::INFINITY,
        }
    }
}
impl Point {
    /// Convert the [`Point`] into a position-value tuple.
    pub fn destructure(self) -> (DVector<Float>, Float) {
        (self.x, self.fx)
    }
    /// The dimension of the point's position.
    pub fn dimension(&self) -> usize {
        self.x.len()
    }
    /// Compare two points by their `fx` value.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.fx.total_cmp(&other.fx)
    }
    /// Move the point to a new position, resetting the evaluation of the point.
    pub fn set_position(&mut self, x: DVector<Float>) {
        self.x = x;
        self.fx = Float::INFINITY;
    }
    /// Evaluate the given function at the point's coordinate and set the `fx` value to the result.
    ///
    /// # Errors
    ///
    /// Returns [`PsoError::Evaluation`] if the function returns an error and
    /// [`PsoError::NonFinite`] if it returns `NaN` or an infinite value.
    pub fn evaluate<F, U, E>(&mut self, func: &F, args: &U) -> Result<(), PsoError<E>>
    where
        F: CostFunction<U, E> + ?Sized,
    {
        let fx = func
            .evaluate(&self.x, args)
            .map_err(|source| PsoError::Evaluation {
                position: self.x.iter().copied().collect(),
                source,
            })?;
        if !fx.is_finite() {
            return Err(PsoError::NonFinite {
                position: self.x.iter().copied().collect(),
                value: fx,
            });
        }
        self.fx = fx;
        Ok(())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {:?}, f(x): {}", self.x.as_slice(), self.fx)
    }
}

impl From<&[Float]> for Point {
    fn from(value: &[Float]) -> Self {
        DVector::from_column_slice(value).into()
    }
}
impl From<Vec<Float>> for Point {
    fn from(value: Vec<Float>) -> Self {
        DVector::from_vec(value).into()
    }
}
impl From<DVector<Float>> for Point {
    fn from(value: DVector<Float>) -> Self {
        Self {
            x: value,
            fx: Float::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::{Rosenbrock, Sphere};
    use nalgebra::dvector;
    use std::convert::Infallible;

    struct Broken;
    impl CostFunction<(), &'static str> for Broken {
        fn evaluate(&self, _x: &DVector<Float>, _args: &()) -> Result<Float, &'static str> {
            Err("broken")
        }
    }

    struct NotANumber;
    impl CostFunction for NotANumber {
        fn evaluate(&self, _x: &DVector<Float>, _args: &()) -> Result<Float, Infallible> {
            Ok(Float::NAN)
        }
    }

    #[test]
    fn test_destructure() {
        let p = Point {
            x: dvector![1.0, 2.0],
            fx: 5.0,
        };
        let (x, fx) = p.destructure();
        assert_eq!(x, dvector![1.0, 2.0]);
        assert_eq!(fx, 5.0);
    }

    #[test]
    fn test_evaluate_sets_fx() {
        let mut p = Point::from(vec![1.0, 1.0]);
        assert_eq!(p.fx, Float::INFINITY);
        p.evaluate(&Rosenbrock, &()).unwrap();
        assert_eq!(p.fx, 0.0);
    }

    #[test]
    fn test_evaluate_errors() {
        let mut p = Point::from(vec![1.0, 2.0]);
        match p.evaluate(&Broken, &()) {
            Err(PsoError::Evaluation { position, source }) => {
                assert_eq!(position, vec![1.0, 2.0]);
                assert_eq!(source, "broken");
            }
            _ => panic!("expected an evaluation error"),
        }
        match p.evaluate(&NotANumber, &()) {
            Err(PsoError::NonFinite { value, .. }) => assert!(value.is_nan()),
            _ => panic!("expected a non-finite error"),
        }
        assert_eq!(p.fx, Float::INFINITY);
    }

    #[test]
    fn test_total_cmp() {
        let mut p1 = Point::from(vec![1.0]);
        let mut p2 = Point::from(vec![2.0]);
        p1.evaluate(&Sphere, &()).unwrap();
        p2.evaluate(&Sphere, &()).unwrap();
        assert_eq!(p1.total_cmp(&p2), Ordering::Less);
        assert_eq!(p2.total_cmp(&p1), Ordering::Greater);
    }

    #[test]
    fn test_set_position_resets_fx() {
        let mut p = Point {
            x: dvector![1.0],
            fx: 5.0,
        };
        p.set_position(dvector![2.0]);
        assert_eq!(p.x, dvector![2.0]);
        assert_eq!(p.fx, Float::INFINITY);
    }

    #[test]
    fn test_from_and_display() {
        let p = Point::from(vec![1.0, 2.0]);
        let s = format!("{}", p);
        assert!(s.contains("x:"));
        assert!(s.contains("f(x):"));
    }
}
