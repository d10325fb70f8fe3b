//! Reader for nuclear-data XML documents

// external crates
use log::{debug, trace};
use quick_xml::events::Event;
use quick_xml::Reader;

// internal modules
use crate::error::{Error, Result};
use crate::nuclide::Nuclide;
use nrates_utils::f;

/// Raw text collected from one `<nuclide>` element
#[derive(Debug, Default)]
struct NuclideFields {
    z: Option<String>,
    a: Option<String>,
    state: String,
}

impl NuclideFields {
    fn build(self) -> Result<Nuclide> {
        let z = Self::number(self.z, "z")?;
        let a = Self::number(self.a, "a")?;
        Ok(Nuclide {
            z,
            a,
            state: self.state,
        })
    }

    fn number(text: Option<String>, field: &str) -> Result<u32> {
        let text = text.ok_or_else(|| Error::InvalidNuclide(f!("missing <{field}>")))?;
        text.parse()
            .map_err(|_| Error::InvalidNuclide(f!("<{field}> is not an integer: {text:?}")))
    }
}

/// Read every nuclide from a nuclear-data XML document
///
/// Each `<nuclide>` element must contain `<z>` and `<a>`, and may contain a
/// `<state>`. Every other child (mass excess, spin, partition function
/// tables, etc...) is skipped.
///
/// ```rust
/// # use nrates_nuclide::{read_nuclear_data, Nuclide};
/// let xml = r#"
///     <nuclear_data>
///       <nuclide><z>92</z><a>235</a><mass_excess>40.9</mass_excess></nuclide>
///       <nuclide><z>0</z><a>1</a></nuclide>
///     </nuclear_data>"#;
///
/// let nuclides = read_nuclear_data(xml).unwrap();
/// assert_eq!(nuclides, vec![Nuclide::new(92, 235), Nuclide::new(0, 1)]);
/// ```
pub fn read_nuclear_data(xml: &str) -> Result<Vec<Nuclide>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut nuclides = Vec::new();
    let mut current: Option<NuclideFields> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                if name.as_ref() == b"nuclide" {
                    current = Some(NuclideFields::default());
                    continue;
                }

                // containers such as <nuclear_network> and <nuclear_data>
                let Some(fields) = current.as_mut() else {
                    continue;
                };

                match name.as_ref() {
                    b"z" => fields.z = Some(reader.read_text(name)?.trim().to_string()),
                    b"a" => fields.a = Some(reader.read_text(name)?.trim().to_string()),
                    b"state" => fields.state = reader.read_text(name)?.trim().to_string(),
                    _ => {
                        reader.read_to_end(name)?;
                    }
                }
            }
            Event::End(e) if e.name().as_ref() == b"nuclide" => {
                let fields = current.take().ok_or_else(|| {
                    Error::Xml("closing </nuclide> without an opening tag".to_string())
                })?;
                let nuclide = fields.build()?;
                trace!("Nuclide     = {nuclide:?}");
                nuclides.push(nuclide);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if current.is_some() {
        return Err(Error::Xml("unterminated <nuclide> element".to_string()));
    }

    debug!("Nuclides    = {}", nuclides.len());
    Ok(nuclides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_kept() {
        let xml = "<nuclear_data>\
            <nuclide><z>95</z><a>242</a><state>m</state></nuclide>\
            </nuclear_data>";
        let nuclides = read_nuclear_data(xml).unwrap();
        assert_eq!(nuclides[0].state, "m");
    }

    #[test]
    fn nested_children_are_skipped() {
        let xml = r#"
            <nuclear_network>
              <nuclear_data>
                <nuclide>
                  <source>test</source>
                  <z>26</z>
                  <a>56</a>
                  <partf_table>
                    <point><t9>0.1</t9><log10_partf>0</log10_partf></point>
                  </partf_table>
                </nuclide>
              </nuclear_data>
            </nuclear_network>"#;
        let nuclides = read_nuclear_data(xml).unwrap();
        assert_eq!(nuclides, vec![Nuclide::new(26, 56)]);
    }

    #[test]
    fn missing_mass_number() {
        let xml = "<nuclear_data><nuclide><z>26</z></nuclide></nuclear_data>";
        assert!(matches!(
            read_nuclear_data(xml),
            Err(Error::InvalidNuclide(_))
        ));
    }

    #[test]
    fn non_numeric_charge() {
        let xml = "<nuclear_data><nuclide><z>x</z><a>1</a></nuclide></nuclear_data>";
        assert!(matches!(
            read_nuclear_data(xml),
            Err(Error::InvalidNuclide(_))
        ));
    }
}
