//! Integration tests for reading general reaction text and writing XML

use nrates_nuclide::NuclideIndex;
use nrates_reaction::{
    read_reactions, validate_reaction_xml, write_reaction_text, write_reaction_xml, Error,
    GeneralOptions, NonSmokerFit, PropertyKey, RateData, RateKind, ReactionSet,
};
use rstest::{fixture, rstest};

const FIT_BLOCK: &str = "\
non_smoker_fit
non-smoker
2
he4
c12
1
o16
1
nacre
6 12 8 16 7.162 0.0 0.0 0.01 0.1 0.05
1.0 -2.0 3.5e-02 4.0
5.0 6.0 -7.0 8.0

";

#[fixture]
fn fit_set() -> ReactionSet {
    read(FIT_BLOCK, &GeneralOptions::default()).unwrap()
}

fn read(input: &str, options: &GeneralOptions) -> Result<ReactionSet, Error> {
    read_reactions(input.as_bytes(), options)
}

fn xml(set: &ReactionSet) -> String {
    let mut output = Vec::new();
    write_reaction_xml(set, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[rstest]
fn duplicate_keys_keep_last() {
    let input = "\
single_rate
test
1
n
1
h1
1.0

single_rate
test
1
n
1
h1
2.0

";
    let set = read(input, &GeneralOptions::default()).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().data, RateData::SingleRate(2.0));

    let xml = xml(&set);
    assert_eq!(xml.matches("<reaction>").count(), 1);
    assert!(xml.contains("<single_rate>2.0</single_rate>"));
    assert_eq!(validate_reaction_xml(&xml).unwrap(), 1);
}

#[rstest]
fn distinct_sources_are_kept() {
    let input = "\
single_rate
first
1
n
1
h1
1.0

single_rate
second
1
n
1
h1
2.0
";
    let set = read(input, &GeneralOptions::default()).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.get("first: n -> h1").is_some());
    assert!(set.get("second: n -> h1").is_some());
}

#[rstest]
fn user_fit_with_one_tag() {
    let input = "\
user_supplied_fit
decay_rate
test
1
X
1
Y
2
1
halflife X 3.2s
note some text

";
    let set = read(input, &GeneralOptions::default()).unwrap();
    let reaction = set.iter().next().unwrap();
    assert_eq!(reaction.kind(), RateKind::UserSuppliedFit);

    let RateData::UserSuppliedFit(user) = &reaction.data else {
        panic!("expected a user supplied fit, found {:?}", reaction.data);
    };
    assert_eq!(user.key, "decay_rate");
    assert_eq!(user.tag_arity, 1);
    assert_eq!(user.properties.len(), 2);
    assert_eq!(user.get(&PropertyKey::new("halflife").with_tag("X")), Some("3.2s"));
    assert_eq!(user.get(&PropertyKey::new("note")), Some("some text"));
}

#[rstest]
fn user_fit_with_two_tags() {
    let input = "\
user_supplied_fit
branching
test
1
X
1
Y
2
2
ratio X Y 0.75
note two tags
";
    let set = read(input, &GeneralOptions::default()).unwrap();
    let RateData::UserSuppliedFit(user) = &set.iter().next().unwrap().data else {
        panic!("expected a user supplied fit");
    };

    let key = PropertyKey::new("ratio").with_tag("X").with_tag("Y");
    assert_eq!(user.get(&key), Some("0.75"));
    assert_eq!(user.get(&PropertyKey::new("note")), Some("two tags"));
}

#[rstest]
fn user_fit_with_delimiter() {
    let input = "\
user_supplied_fit
decay_rate
test
1
X
1
Y
2
1
halflife; X ; 3.2 s
note;some;text
";
    let options = GeneralOptions {
        user_delimiter: Some(";"),
        ..Default::default()
    };
    let set = read(input, &options).unwrap();
    let RateData::UserSuppliedFit(user) = &set.iter().next().unwrap().data else {
        panic!("expected a user supplied fit");
    };

    assert_eq!(user.get(&PropertyKey::new("halflife").with_tag("X")), Some("3.2 s"));
    assert_eq!(user.get(&PropertyKey::new("note")), Some("some text"));
}

#[rstest]
fn user_fit_to_xml() {
    let input = "\
user_supplied_fit
decay_rate
test
1
X
1
Y
1
1
halflife X 3.2
";
    let set = read(input, &GeneralOptions::default()).unwrap();
    let xml = xml(&set);

    assert!(xml.contains(r#"<user_rate key="decay_rate">"#));
    assert!(xml.contains(r#"<property name="halflife" tag1="X">3.2</property>"#));
    assert_eq!(validate_reaction_xml(&xml).unwrap(), 1);
}

#[rstest]
fn non_smoker_fit_fields(fit_set: ReactionSet) {
    let reaction = fit_set.iter().next().unwrap();
    assert_eq!(reaction.to_string(), "he4 + c12 -> o16");

    let expected = NonSmokerFit {
        note: "nacre".to_string(),
        zt: 6,
        at: 12,
        zf: 8,
        af: 16,
        q: 7.162,
        spin_target: 0.0,
        spin_final: 0.0,
        t_low_hf: 0.01,
        t_low_fit: 0.1,
        t_high_fit: 10.0,
        accuracy: 0.05,
        coefficients: [1.0, -2.0, 3.5e-2, 4.0, 5.0, 6.0, -7.0, 8.0],
    };
    assert_eq!(reaction.data, RateData::NonSmokerFit(vec![expected]));
}

#[rstest]
fn non_smoker_fit_to_xml(fit_set: ReactionSet) {
    let xml = xml(&fit_set);

    assert!(xml.contains(r#"<fit note="nacre">"#));
    assert!(xml.contains("<Zt>6</Zt>"));
    assert!(xml.contains("<Thighfit>10.0</Thighfit>"));
    assert!(xml.contains("<a3>0.035</a3>"));
    assert!(xml.contains("<a8>8.0</a8>"));
    assert_eq!(validate_reaction_xml(&xml).unwrap(), 1);
}

#[rstest]
fn blank_fit_note_skipped() {
    // the first empty line is not the note, the line after it is
    let input = FIT_BLOCK.replace("nacre\n", "\nreplacement\n");
    let set = read(&input, &GeneralOptions::default()).unwrap();

    let RateData::NonSmokerFit(fits) = &set.iter().next().unwrap().data else {
        panic!("expected a fit");
    };
    assert_eq!(fits[0].note, "replacement");
}

#[rstest]
fn text_written_reads_back(fit_set: ReactionSet) {
    let mut reaction = fit_set.iter().next().unwrap().clone();
    if let RateData::NonSmokerFit(fits) = &mut reaction.data {
        fits[0].note.clear();
    }

    let mut text = Vec::new();
    write_reaction_text(&mut text, &reaction).unwrap();
    let text = String::from_utf8(text).unwrap();

    let set = read(&text, &GeneralOptions::default()).unwrap();
    assert_eq!(set.iter().next(), Some(&reaction));
}

#[rstest]
fn table_to_xml() {
    let input = "\
rate_table
test
2
h1
h1
1
h2
2
0.1 1.0e-20
0.2 2.0e-20 1.2

";
    let set = read(input, &GeneralOptions::default()).unwrap();
    let xml = xml(&set);

    assert!(xml.contains("<t9>0.1</t9>"));
    assert!(xml.contains("<rate>1e-20</rate>"));
    assert!(xml.contains("<sef>1.0</sef>"));
    assert!(xml.contains("<sef>1.2</sef>"));
    assert_eq!(xml.matches("<point>").count(), 2);
    assert_eq!(validate_reaction_xml(&xml).unwrap(), 1);
}

#[rstest]
fn species_pairs_resolved_with_index() {
    let mut index = NuclideIndex::new();
    index.insert(0, 1, "n");
    index.insert(1, 1, "h1");

    let input = "single_rate\ntest\n1\n0 1\n1\n1 1\n1.0\n";
    let options = GeneralOptions {
        index: Some(&index),
        ..Default::default()
    };

    let set = read(input, &options).unwrap();
    assert!(set.get("test: n -> h1").is_some());

    // without an index the pairs are taken as names
    let set = read(input, &GeneralOptions::default()).unwrap();
    assert!(set.get("test: 0 1 -> 1 1").is_some());

    let missing = "single_rate\ntest\n1\n999 999\n1\n1 1\n1.0\n";
    assert!(matches!(
        read(missing, &options),
        Err(Error::Nuclide(nrates_nuclide::Error::UnknownNuclide { z: 999, a: 999 }))
    ));
}

#[rstest]
#[case("fission_yield\n", "invalid rate type")]
#[case("single_rate\ntest\n1\n", "unexpected end of input")]
#[case("single_rate\ntest\none\n", "could not parse")]
#[case("single_rate\nt\n100000000000000\nn\n", "unexpected end of input after line 4")]
#[case("user_supplied_fit\nk\ntest\n1\nn\n1\nh1\n1\n3\n", "number of property tags")]
fn malformed_blocks(#[case] input: &str, #[case] message: &str) {
    let err = read(input, &GeneralOptions::default()).unwrap_err();
    assert!(err.to_string().contains(message), "{err}");
}

#[rstest]
fn empty_set_to_xml() {
    let set = read("", &GeneralOptions::default()).unwrap();
    assert!(set.is_empty());

    let xml = xml(&set);
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_eq!(validate_reaction_xml(&xml).unwrap(), 0);
}
