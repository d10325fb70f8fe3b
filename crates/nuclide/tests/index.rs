//! Integration tests for building and querying the nuclide index

use nrates_nuclide::{Error, Nuclide, NuclideIndex};
use rstest::{fixture, rstest};

const NUCLEAR_DATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<nuclear_network>
  <nuclear_data>
    <nuclide>
      <source>reference</source>
      <z>0</z>
      <a>1</a>
      <mass_excess>8.071</mass_excess>
      <spin>0.5</spin>
    </nuclide>
    <nuclide>
      <z>92</z>
      <a>235</a>
      <spin>3.5</spin>
    </nuclide>
    <nuclide>
      <z>92</z>
      <a>236</a>
    </nuclide>
    <nuclide>
      <z>1</z>
      <a>1</a>
    </nuclide>
  </nuclear_data>
</nuclear_network>
"#;

#[fixture]
fn index() -> NuclideIndex {
    NuclideIndex::from_xml_str(NUCLEAR_DATA).unwrap()
}

#[rstest]
#[case(0, 1, "n")]
#[case(1, 1, "h1")]
#[case(92, 235, "u235")]
#[case(92, 236, "u236")]
fn lookup_known_pairs(index: NuclideIndex, #[case] z: u32, #[case] a: u32, #[case] name: &str) {
    assert_eq!(index.lookup(z, a).unwrap(), name);
}

#[rstest]
fn lookup_unknown_pair(index: NuclideIndex) {
    let err = index.lookup(999, 999).unwrap_err();
    assert!(matches!(err, Error::UnknownNuclide { z: 999, a: 999 }));
    assert_eq!(err.to_string(), "(999, 999) not present");
}

#[rstest]
fn index_size(index: NuclideIndex) {
    assert_eq!(index.len(), 4);
    assert!(index.contains(92, 235));
    assert!(!index.contains(92, 238));
}

#[test]
fn last_duplicate_wins() {
    let ground = Nuclide::new(95, 242);
    let isomer = Nuclide {
        z: 95,
        a: 242,
        state: "m".to_string(),
    };

    let index = NuclideIndex::from_nuclides([ground, isomer]).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.lookup(95, 242).unwrap(), "am242m");
}

#[test]
fn unnamed_element_is_rejected() {
    let result = NuclideIndex::from_nuclides([Nuclide::new(150, 400)]);
    assert!(matches!(result, Err(Error::UnknownElement(150))));
}
