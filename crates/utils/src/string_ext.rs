/// Extends string types with useful functions
pub trait StringExt {
    /// Split a line into trimmed fields
    ///
    /// Splits on the `delimiter` if one is given, otherwise on any run of
    /// whitespace. Every field is trimmed, but empty fields between repeated
    /// delimiters are kept.
    ///
    /// ```rust
    /// # use nrates_utils::StringExt;
    /// assert_eq!("a  b c".split_fields(None), vec!["a", "b", "c"]);
    /// assert_eq!("a, b,,c ".split_fields(Some(",")), vec!["a", "b", "", "c"]);
    /// ```
    fn split_fields(&self, delimiter: Option<&str>) -> Vec<&str>;
}

impl<T: AsRef<str>> StringExt for T {
    fn split_fields(&self, delimiter: Option<&str>) -> Vec<&str> {
        match delimiter {
            Some(d) if !d.is_empty() => self.as_ref().split(d).map(str::trim).collect(),
            _ => self.as_ref().split_whitespace().collect(),
        }
    }
}
