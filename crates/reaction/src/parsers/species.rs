// nom parser combinators
use nom::character::complete::{self, space0, space1};
use nom::combinator::all_consuming;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

/// Atomic and mass numbers as a whitespace separated pair, e.g. `92 235`
pub(crate) fn nuclide_pair(i: &str) -> IResult<&str, (u32, u32)> {
    all_consuming(delimited(
        space0,
        separated_pair(complete::u32, space1, complete::u32),
        space0,
    ))(i)
}
