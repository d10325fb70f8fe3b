//! Structural validation of reaction-data XML documents
//!
//! Checks what a reader of the document relies on:
//!
//! - a single `<reaction_data>` root holding only `<reaction>` elements
//! - at most one `<source>` and at least one `<reactant>` per reaction
//! - exactly one rate element per reaction
//! - numeric content wherever a number is expected
//! - the attributes that identify fits, user rates, and properties

use std::borrow::Cow;
use std::collections::HashMap;

use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::parsers::{float, uint32};
use nrates_utils::f;

/// Elements of a `<fit>`, and whether each holds an integer
const FIT_FIELDS: [(&str, bool); 19] = [
    ("Zt", true),
    ("At", true),
    ("Zf", true),
    ("Af", true),
    ("Q", false),
    ("spint", false),
    ("spinf", false),
    ("TlowHf", false),
    ("Tlowfit", false),
    ("Thighfit", false),
    ("acc", false),
    ("a1", false),
    ("a2", false),
    ("a3", false),
    ("a4", false),
    ("a5", false),
    ("a6", false),
    ("a7", false),
    ("a8", false),
];

/// Rate elements, exactly one of which must appear in each reaction
const RATE_ELEMENTS: [&str; 4] = ["single_rate", "rate_table", "non_smoker_fit", "user_rate"];

type XmlReader<'i> = Reader<&'i [u8]>;

/// Check a reaction-data XML document, returning the number of reactions
///
/// Fails on the first problem found, with [Error::Xml] for malformed XML and
/// [Error::InvalidDocument] for anything that is not a valid reaction-data
/// document.
///
/// ```rust
/// # use nrates_reaction::validate_reaction_xml;
/// let xml = r#"
///     <reaction_data>
///       <reaction>
///         <source>test</source>
///         <reactant>u235</reactant>
///         <product>u236</product>
///         <single_rate>2.25</single_rate>
///       </reaction>
///     </reaction_data>"#;
///
/// assert_eq!(validate_reaction_xml(xml).unwrap(), 1);
/// assert!(validate_reaction_xml("<nuclear_data/>").is_err());
/// ```
pub fn validate_reaction_xml(xml: &str) -> Result<usize> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut root = Root::Missing;
    let mut n_reactions = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match (root, e.name().as_ref()) {
                (Root::Missing, b"reaction_data") => root = Root::Open,
                (Root::Open, b"reaction") => {
                    n_reactions += 1;
                    reaction(&mut reader, n_reactions)?;
                }
                (_, name) => return Err(unexpected(name)),
            },
            Event::Empty(e) => match (root, e.name().as_ref()) {
                (Root::Missing, b"reaction_data") => root = Root::Closed,
                (Root::Open, b"reaction") => {
                    return Err(invalid(f!("reaction {} is empty", n_reactions + 1)))
                }
                (_, name) => return Err(unexpected(name)),
            },
            Event::End(_) => root = Root::Closed,
            Event::Text(_) | Event::CData(_) => {
                return Err(invalid("text outside of a reaction".to_string()))
            }
            Event::Eof => break,
            _ => (),
        }
    }

    match root {
        Root::Missing => Err(invalid("missing <reaction_data> root".to_string())),
        Root::Open => Err(invalid("unclosed <reaction_data> root".to_string())),
        Root::Closed => {
            debug!("Valid reaction data with {n_reactions} reactions");
            Ok(n_reactions)
        }
    }
}

/// State of the document root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Missing,
    Open,
    Closed,
}

/// Check the children of one `<reaction>`, up to its closing tag
fn reaction(reader: &mut XmlReader, position: usize) -> Result<()> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();

    loop {
        let (e, empty) = match reader.read_event()? {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::End(_) => break,
            Event::Eof => return Err(invalid(f!("reaction {position} is not closed"))),
            Event::Text(_) | Event::CData(_) => {
                return Err(invalid(f!("reaction {position} has loose text")))
            }
            _ => continue,
        };

        let element = match e.name().as_ref() {
            b"source" => {
                leaf_text(reader, &e, empty)?;
                "source"
            }
            b"reactant" => {
                species(reader, &e, empty)?;
                "reactant"
            }
            b"product" => {
                species(reader, &e, empty)?;
                "product"
            }
            b"single_rate" => {
                number(reader, &e, empty, false)?;
                "rate"
            }
            b"rate_table" => {
                if !empty {
                    rate_table(reader)?;
                }
                "rate"
            }
            b"non_smoker_fit" => {
                if !empty {
                    non_smoker_fit(reader)?;
                }
                "rate"
            }
            b"user_rate" => {
                required_attribute(&e, "key")?;
                if !empty {
                    user_rate(reader)?;
                }
                "rate"
            }
            name => return Err(unexpected(name)),
        };
        *counts.entry(element).or_default() += 1;
    }

    let count = |element: &str| counts.get(element).copied().unwrap_or_default();
    trace!("Reaction {position}: {counts:?}");

    if count("source") > 1 {
        return Err(invalid(f!("reaction {position} has more than one <source>")));
    }
    if count("reactant") == 0 {
        return Err(invalid(f!("reaction {position} has no <reactant>")));
    }
    match count("rate") {
        1 => Ok(()),
        n => Err(invalid(f!(
            "reaction {position} has {n} rate elements, expected one of {}",
            RATE_ELEMENTS.join(", ")
        ))),
    }
}

/// Check each `<point>` of a `<rate_table>`
fn rate_table(reader: &mut XmlReader) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"point" => point(reader)?,
            Event::End(_) => return Ok(()),
            Event::Start(e) | Event::Empty(e) => return Err(unexpected(e.name().as_ref())),
            Event::Eof => return Err(invalid("unclosed <rate_table>".to_string())),
            Event::Text(_) | Event::CData(_) => {
                return Err(invalid("<rate_table> has loose text".to_string()))
            }
            _ => (),
        }
    }
}

/// Check a table `<point>` has numeric `t9` and `rate`, and optionally `sef`
fn point(reader: &mut XmlReader) -> Result<()> {
    let fields = [("t9", false), ("rate", false), ("sef", false)];
    let seen = numeric_children(reader, "point", &fields)?;
    for field in ["t9", "rate"] {
        if !seen.contains_key(field) {
            return Err(invalid(f!("<point> is missing <{field}>")));
        }
    }
    Ok(())
}

/// Check each `<fit>` of a `<non_smoker_fit>`
fn non_smoker_fit(reader: &mut XmlReader) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"fit" => {
                let seen = numeric_children(reader, "fit", &FIT_FIELDS)?;
                let missing = FIT_FIELDS.iter().find(|(name, _)| !seen.contains_key(name));
                if let Some((field, _)) = missing {
                    return Err(invalid(f!("<fit> is missing <{field}>")));
                }
            }
            Event::End(_) => return Ok(()),
            Event::Start(e) | Event::Empty(e) => return Err(unexpected(e.name().as_ref())),
            Event::Eof => return Err(invalid("unclosed <non_smoker_fit>".to_string())),
            Event::Text(_) | Event::CData(_) => {
                return Err(invalid("<non_smoker_fit> has loose text".to_string()))
            }
            _ => (),
        }
    }
}

/// Check each `<property>` of a `<user_rate>` is named
fn user_rate(reader: &mut XmlReader) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"property" => {
                required_attribute(&e, "name")?;
                leaf_text(reader, &e, false)?;
            }
            Event::Empty(e) if e.name().as_ref() == b"property" => {
                required_attribute(&e, "name")?;
            }
            Event::End(_) => return Ok(()),
            Event::Start(e) | Event::Empty(e) => return Err(unexpected(e.name().as_ref())),
            Event::Eof => return Err(invalid("unclosed <user_rate>".to_string())),
            Event::Text(_) | Event::CData(_) => {
                return Err(invalid("<user_rate> has loose text".to_string()))
            }
            _ => (),
        }
    }
}

/// Check the numeric leaf children of `parent`, each appearing at most once
///
/// Returns how often each allowed child was seen.
fn numeric_children<'f>(
    reader: &mut XmlReader,
    parent: &str,
    fields: &[(&'f str, bool)],
) -> Result<HashMap<&'f str, usize>> {
    let mut seen = HashMap::new();
    loop {
        let (e, empty) = match reader.read_event()? {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::End(_) => return Ok(seen),
            Event::Eof => return Err(invalid(f!("unclosed <{parent}>"))),
            Event::Text(_) | Event::CData(_) => {
                return Err(invalid(f!("<{parent}> has loose text")))
            }
            _ => continue,
        };

        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let Some(&(field, integer)) = fields.iter().find(|(field, _)| *field == name) else {
            return Err(invalid(f!("unexpected <{name}> in <{parent}>")));
        };

        number(reader, &e, empty, integer)?;
        let count = seen.entry(field).or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(invalid(f!("<{parent}> repeats <{field}>")));
        }
    }
}

/// Text content of an element with no children
fn leaf_text<'i>(reader: &mut XmlReader<'i>, e: &BytesStart, empty: bool) -> Result<Cow<'i, str>> {
    if empty {
        return Ok(Cow::Borrowed(""));
    }
    let text = reader.read_text(e.name())?;
    if text.contains('<') {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        return Err(invalid(f!("<{name}> should only hold text")));
    }
    Ok(text)
}

/// A species name must not be blank
fn species(reader: &mut XmlReader, e: &BytesStart, empty: bool) -> Result<()> {
    let text = leaf_text(reader, e, empty)?;
    if text.trim().is_empty() {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        return Err(invalid(f!("<{name}> is blank")));
    }
    Ok(())
}

/// Text content must be a float, or an unsigned integer if `integer`
fn number(reader: &mut XmlReader, e: &BytesStart, empty: bool, integer: bool) -> Result<()> {
    let text = leaf_text(reader, e, empty)?;
    let valid = if integer {
        uint32(&text).is_ok()
    } else {
        float(&text).is_ok()
    };
    if !valid {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        return Err(invalid(f!("<{name}> is not a number: {text:?}")));
    }
    Ok(())
}

/// Attribute that must be present, though it may be empty
fn required_attribute(e: &BytesStart, key: &str) -> Result<()> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(|err| Error::Xml(err.to_string()))?;
        if attribute.key.as_ref() == key.as_bytes() {
            return Ok(());
        }
    }
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    Err(invalid(f!("<{name}> is missing the {key:?} attribute")))
}

fn unexpected(name: &[u8]) -> Error {
    invalid(f!("unexpected <{}>", String::from_utf8_lossy(name)))
}

fn invalid(message: String) -> Error {
    Error::InvalidDocument(message)
}
