// nom parser combinators
use nom::character::complete::{self, space0};
use nom::combinator::{all_consuming, map};
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::IResult;

/// A single float value, allowing surrounding whitespace but nothing else
pub(crate) fn float(i: &str) -> IResult<&str, f64> {
    all_consuming(delimited(space0, double, space0))(i)
}

/// A single unsigned count, allowing surrounding whitespace but nothing else
pub(crate) fn count(i: &str) -> IResult<&str, usize> {
    all_consuming(delimited(
        space0,
        map(complete::u64, |v| v as usize),
        space0,
    ))(i)
}

/// A single unsigned 32-bit integer, such as an atomic or mass number
pub(crate) fn uint32(i: &str) -> IResult<&str, u32> {
    all_consuming(delimited(space0, complete::u32, space0))(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_forms() {
        assert_eq!(float("2.5"), Ok(("", 2.5)));
        assert_eq!(float("  -1.0e-05 "), Ok(("", -1.0e-5)));
        assert_eq!(float("3"), Ok(("", 3.0)));
        assert_eq!(float("1.5E+3\t"), Ok(("", 1500.0)));
    }

    #[test]
    fn float_rejects_trailing_content() {
        assert!(float("2.5x").is_err());
        assert!(float("2.5 3.5").is_err());
        assert!(float("").is_err());
    }

    #[test]
    fn count_forms() {
        assert_eq!(count("3"), Ok(("", 3)));
        assert_eq!(count(" 12 "), Ok(("", 12)));
        assert!(count("-1").is_err());
        assert!(count("1.0").is_err());
        assert!(count("two").is_err());
    }

    #[test]
    fn uint32_forms() {
        assert_eq!(uint32("92"), Ok(("", 92)));
        assert!(uint32("9 2").is_err());
    }
}
