use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Thermal time constants use this marker so the first-order update never
/// divides by zero.
///
/// # Examples
///
/// ```
/// use indoor_temp_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(4.0).unwrap();
/// assert_eq!(x.into_inner(), 4.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Time, time::hour};

    #[test]
    fn integers() {
        let x = Constrained::<i32, StrictlyPositive>::new(1).unwrap();
        assert_eq!(x.into_inner(), 1);
        assert_eq!(StrictlyPositive::new(0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-2), Err(ConstraintError::Negative));
    }

    #[test]
    fn time_constants() {
        assert!(StrictlyPositive::new(Time::new::<hour>(8.0)).is_ok());
        assert!(StrictlyPositive::new(Time::new::<hour>(1e-6)).is_ok());

        assert_eq!(
            StrictlyPositive::new(Time::new::<hour>(0.0)).map(Constrained::into_inner),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Time::new::<hour>(-4.0)).map(Constrained::into_inner),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::new(Time::new::<hour>(f64::NAN)).map(Constrained::into_inner),
            Err(ConstraintError::NotANumber)
        );
    }
}
