//! Reaction-data XML writer

use std::io::Write;

use log::{debug, info};
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;

use nrates_utils::{f, ValueExt};

use crate::core::{NonSmokerFit, RateData, Reaction, ReactionSet, TableEntry, UserRate};
use crate::error::Result;

type XmlResult = quick_xml::Result<()>;

/// Write a set of reactions as a reaction-data XML document
///
/// Reactions are written in the order of the set. Every reaction holds its
/// source, each reactant and product in order, then exactly one rate
/// element:
///
/// | Rate data           | Element                                             |
/// | ------------------- | --------------------------------------------------- |
/// | `single_rate`       | `<single_rate>` with the rate as text               |
/// | `rate_table`        | `<rate_table>` of `<point>` with `t9`, `rate`, `sef` |
/// | `non_smoker_fit`    | `<non_smoker_fit>` of `<fit note="..">`             |
/// | `user_supplied_fit` | `<user_rate key="..">` of `<property name="..">`    |
///
/// ```rust
/// # use nrates_reaction::{Reaction, ReactionSet, RateData, write_reaction_xml};
/// let mut set = ReactionSet::new();
/// set.insert(Reaction {
///     source: "test".to_string(),
///     reactants: vec!["n".to_string(), "u235".to_string()],
///     products: vec!["u236".to_string()],
///     data: RateData::SingleRate(2.25),
/// });
///
/// let mut output = Vec::new();
/// write_reaction_xml(&set, &mut output).unwrap();
///
/// let xml = String::from_utf8(output).unwrap();
/// assert!(xml.contains("<reactant>u235</reactant>"));
/// assert!(xml.contains("<single_rate>2.25</single_rate>"));
/// ```
pub fn write_reaction_xml<W: Write>(set: &ReactionSet, writer: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element("reaction_data")
        .write_inner_content(|w| -> XmlResult {
            for reaction in set {
                write_reaction(w, reaction)?;
            }
            Ok(())
        })?;

    writer.get_mut().write_all(b"\n")?;
    info!("Written {} reactions to XML", set.len());
    Ok(())
}

fn write_reaction<W: Write>(writer: &mut Writer<W>, reaction: &Reaction) -> XmlResult {
    debug!("Writing {}: {reaction}", reaction.source);
    writer.create_element("reaction").write_inner_content(|w| -> XmlResult {
        text_element(w, "source", &reaction.source)?;
        for reactant in &reaction.reactants {
            text_element(w, "reactant", reactant)?;
        }
        for product in &reaction.products {
            text_element(w, "product", product)?;
        }
        write_rate_data(w, &reaction.data)
    })?;
    Ok(())
}

fn write_rate_data<W: Write>(writer: &mut Writer<W>, data: &RateData) -> XmlResult {
    match data {
        RateData::SingleRate(rate) => text_element(writer, "single_rate", &rate.repr()),
        RateData::RateTable(entries) => write_rate_table(writer, entries),
        RateData::NonSmokerFit(fits) => write_fits(writer, fits),
        RateData::UserSuppliedFit(user) => write_user_rate(writer, user),
    }
}

fn write_rate_table<W: Write>(writer: &mut Writer<W>, entries: &[TableEntry]) -> XmlResult {
    writer.create_element("rate_table").write_inner_content(|w| -> XmlResult {
        for entry in entries {
            w.create_element("point").write_inner_content(|w| -> XmlResult {
                text_element(w, "t9", &entry.t9.repr())?;
                text_element(w, "rate", &entry.rate.repr())?;
                text_element(w, "sef", &entry.sef.repr())
            })?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_fits<W: Write>(writer: &mut Writer<W>, fits: &[NonSmokerFit]) -> XmlResult {
    writer
        .create_element("non_smoker_fit")
        .write_inner_content(|w| -> XmlResult {
            for fit in fits {
                w.create_element("fit")
                    .with_attribute(("note", fit.note.as_str()))
                    .write_inner_content(|w| write_fit(w, fit))?;
            }
            Ok(())
        })?;
    Ok(())
}

fn write_fit<W: Write>(writer: &mut Writer<W>, fit: &NonSmokerFit) -> XmlResult {
    text_element(writer, "Zt", &fit.zt.to_string())?;
    text_element(writer, "At", &fit.at.to_string())?;
    text_element(writer, "Zf", &fit.zf.to_string())?;
    text_element(writer, "Af", &fit.af.to_string())?;
    text_element(writer, "Q", &fit.q.repr())?;
    text_element(writer, "spint", &fit.spin_target.repr())?;
    text_element(writer, "spinf", &fit.spin_final.repr())?;
    text_element(writer, "TlowHf", &fit.t_low_hf.repr())?;
    text_element(writer, "Tlowfit", &fit.t_low_fit.repr())?;
    text_element(writer, "Thighfit", &fit.t_high_fit.repr())?;
    text_element(writer, "acc", &fit.accuracy.repr())?;
    for (i, a) in fit.coefficients.iter().enumerate() {
        text_element(writer, &f!("a{}", i + 1), &a.repr())?;
    }
    Ok(())
}

fn write_user_rate<W: Write>(writer: &mut Writer<W>, user: &UserRate) -> XmlResult {
    writer
        .create_element("user_rate")
        .with_attribute(("key", user.key.as_str()))
        .write_inner_content(|w| -> XmlResult {
            for (key, value) in &user.properties {
                let mut element = w
                    .create_element("property")
                    .with_attribute(("name", key.name.as_str()));
                for (i, tag) in key.tags.iter().enumerate() {
                    let attribute = f!("tag{}", i + 1);
                    element = element.with_attribute((attribute.as_str(), tag.as_str()));
                }
                element.write_text_content(BytesText::new(value))?;
            }
            Ok(())
        })?;
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> XmlResult {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
