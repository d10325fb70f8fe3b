use crate::f;

/// Extends floats with the formatting used in every text and XML output
pub trait ValueExt {
    /// Shortest round-trip representation of a float
    ///
    /// Decimal notation is used for magnitudes in `[1e-4, 1e16)`, and
    /// scientific notation otherwise. The exponent is always signed and padded
    /// to at least two digits so that existing data files keep their look.
    ///
    /// ```rust
    /// # use nrates_utils::ValueExt;
    /// assert_eq!(2.25.repr(), "2.25");
    /// assert_eq!(1.0.repr(), "1.0");
    /// assert_eq!(1.5e-7.repr(), "1.5e-07");
    /// assert_eq!(3.0e20.repr(), "3e+20");
    /// ```
    fn repr(&self) -> String;
}

impl ValueExt for f64 {
    fn repr(&self) -> String {
        if self.is_nan() {
            return "nan".to_string();
        }

        // `Debug` already gives the shortest round-trip digits, with an
        // unsigned and unpadded exponent when one is needed
        let mut num = f!("{self:?}");
        let Some(index) = num.find('e') else {
            return num;
        };

        let exp = num.split_off(index);
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        num.push_str(&f!("e{}{:0>2}", sign, exp));
        num
    }
}
