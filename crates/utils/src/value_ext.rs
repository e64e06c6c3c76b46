use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Consistent scientific number formatting
    ///
    /// The default `{:e}` output drops the exponent sign and padding, which
    /// makes columns of voxel values and ellipsoid parameters hard to read.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use phantoms_utils::ValueExt;
    /// assert_eq!((-0.98).sci(5, 2), "-9.80000e-01".to_string());
    /// assert_eq!((1.0).sci(5, 2), "1.00000e+00".to_string());
    /// assert_eq!((128.0).sci(2, 3), "1.28e+002".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // `LowerExp` output always contains an 'e'
        let split = num.find('e').unwrap_or(num.len());
        let exp = num.split_off(split);
        let (sign, digits) = match exp.strip_prefix("e-") {
            Some(digits) => ('-', digits),
            None => ('+', exp.get(1..).unwrap_or("0")),
        };
        num.push_str(&f!("e{}{:0>pad$}", sign, digits, pad = exp_pad));
        num
    }
}
