use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use phantoms_utils::SliceExt;
    /// # use phantoms_utils::Error;
    /// assert_eq!([1.0, -0.8, 0.2].try_min(), Ok(-0.8));
    /// assert_eq!([1.0, f64::NAN].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Floats do not implement `Ord`, so `total_cmp` is used to order the
    /// values once undefined entries have been ruled out.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Only provides the maximum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use phantoms_utils::SliceExt;
    /// # use phantoms_utils::Error;
    /// assert_eq!([1.0, -0.8, 0.2].try_max(), Ok(1.0));
    /// assert_eq!([1.0, f64::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_max(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_max(&self) -> Result<T>;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }
}
