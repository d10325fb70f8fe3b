//! Reaction text writer

use std::io::Write;

use nrates_utils::ValueExt;

use crate::core::{NonSmokerFit, RateData, Reaction, UserRate};
use crate::error::Result;

/// Write one reaction as a general reaction text block
///
/// The layout is the one read by
/// [general_block()](crate::reader::general::general_block), ending with a
/// blank line, so the output of one conversion can feed the next.
///
/// ```rust
/// # use nrates_reaction::{Reaction, RateData, write_reaction_text};
/// let reaction = Reaction {
///     source: "test".to_string(),
///     reactants: vec!["u235".to_string()],
///     products: vec!["u236".to_string(), "n".to_string()],
///     data: RateData::SingleRate(2.25),
/// };
///
/// let mut output = Vec::new();
/// write_reaction_text(&mut output, &reaction).unwrap();
///
/// let expected = "single_rate\ntest\n1\nu235\n2\nu236\nn\n2.25\n\n";
/// assert_eq!(String::from_utf8(output).unwrap(), expected);
/// ```
pub fn write_reaction_text<W: Write>(writer: &mut W, reaction: &Reaction) -> Result<()> {
    writeln!(writer, "{}", reaction.kind())?;
    if let RateData::UserSuppliedFit(user) = &reaction.data {
        writeln!(writer, "{}", user.key)?;
    }
    writeln!(writer, "{}", reaction.source)?;

    for species in [&reaction.reactants, &reaction.products] {
        writeln!(writer, "{}", species.len())?;
        for name in species {
            writeln!(writer, "{name}")?;
        }
    }

    match &reaction.data {
        RateData::SingleRate(rate) => {
            writeln!(writer, "{}", rate.repr())?;
            writeln!(writer)?;
        }
        RateData::RateTable(entries) => {
            writeln!(writer, "{}", entries.len())?;
            for entry in entries {
                writeln!(
                    writer,
                    "{} {} {}",
                    entry.t9.repr(),
                    entry.rate.repr(),
                    entry.sef.repr()
                )?;
            }
            writeln!(writer)?;
        }
        RateData::NonSmokerFit(fits) => {
            writeln!(writer, "{}", fits.len())?;
            for fit in fits {
                write_fit(writer, fit)?;
            }
        }
        RateData::UserSuppliedFit(user) => {
            write_user_rate(writer, user)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn write_fit<W: Write>(writer: &mut W, fit: &NonSmokerFit) -> Result<()> {
    // an empty note line is skipped on reading, so blank notes need two
    if fit.note.is_empty() {
        writeln!(writer)?;
    }
    writeln!(writer, "{}", fit.note)?;

    writeln!(
        writer,
        "{} {} {} {} {} {} {} {} {} {}",
        fit.zt,
        fit.at,
        fit.zf,
        fit.af,
        fit.q.repr(),
        fit.spin_target.repr(),
        fit.spin_final.repr(),
        fit.t_low_hf.repr(),
        fit.t_low_fit.repr(),
        fit.accuracy.repr()
    )?;

    for line in fit.coefficients.chunks(4) {
        let line = line.iter().map(|a| a.repr()).collect::<Vec<String>>();
        writeln!(writer, "{}", line.join(" "))?;
    }

    writeln!(writer)?;
    Ok(())
}

fn write_user_rate<W: Write>(writer: &mut W, user: &UserRate) -> Result<()> {
    writeln!(writer, "{}", user.properties.len())?;
    writeln!(writer, "{}", user.tag_arity)?;
    for (key, value) in &user.properties {
        let mut fields = vec![key.name.as_str()];
        fields.extend(key.tags.iter().map(String::as_str));
        if !value.is_empty() {
            fields.push(value);
        }
        writeln!(writer, "{}", fields.join(" "))?;
    }
    Ok(())
}
