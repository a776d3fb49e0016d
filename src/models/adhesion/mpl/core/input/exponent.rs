use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError};

/// An MPL power-law exponent, constrained to the open interval `(0, 2)`.
pub type Exponent = Constrained<f64, MplExponent>;

/// Marker type enforcing the MPL exponent domain: `0 < n < 2`.
///
/// The exponent characterizes the breadth of the material's relaxation
/// spectrum. The closed-form dissipation integral additionally has a pole at
/// `n = 1`; that value is inside the physical range and is accepted here,
/// with the evaluator rejecting it at computation time.
///
/// # Examples
///
/// ```
/// use mpl_adhesion::models::adhesion::mpl::MplExponent;
///
/// assert!(MplExponent::new(0.4).is_ok());
/// assert!(MplExponent::new(1.6).is_ok());
/// assert!(MplExponent::new(0.0).is_err());
/// assert!(MplExponent::new(2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MplExponent;

impl MplExponent {
    /// Constructs an [`Exponent`] if the value lies in `(0, 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] for values at or below zero,
    /// [`ConstraintError::AboveMaximum`] for values at or above two, and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new(value: f64) -> Result<Exponent, ConstraintError> {
        Constrained::<f64, MplExponent>::new(value)
    }
}

impl Constraint<f64> for MplExponent {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&2.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
