//! Integration tests for rewriting fission reaction text

use nrates_nuclide::NuclideIndex;
use nrates_reaction::{
    convert_fission_text, fission_block, read_reactions, Error, GeneralOptions, LineReader,
    RateData, TableEntry,
};
use rstest::{fixture, rstest};

#[fixture]
fn index() -> NuclideIndex {
    let mut index = NuclideIndex::new();
    index.insert(0, 1, "n");
    index.insert(92, 235, "u235");
    index.insert(92, 236, "u236");
    index.insert(55, 137, "cs137");
    index.insert(37, 97, "rb97");
    index
}

/// Run the conversion, returning the result and whatever was written
fn convert(index: &NuclideIndex, input: &str) -> (Result<usize, Error>, String) {
    let mut output = Vec::new();
    let result = convert_fission_text(index, input.as_bytes(), &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[rstest]
fn single_rate_scaled_by_factor(index: NuclideIndex) {
    let input = "single_rate\ntest\n2\n92 235\n0 1\n2.5\n92 236 0.9\n";
    let (result, output) = convert(&index, input);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(output, "single_rate\ntest\n2\nu235\nn\n1\nu236\n2.25\n\n");
}

#[rstest]
fn one_record_per_branch(index: NuclideIndex) {
    let input = "\
single_rate
fission yields
2
92 235
0 1
4.0
92 236 0.5
55 137 37 97 0 1 0 1 0.25

";
    let (result, output) = convert(&index, input);
    assert_eq!(result.unwrap(), 2);

    let expected = "\
single_rate
fission yields
2
u235
n
1
u236
2.0

single_rate
fission yields
2
u235
n
4
cs137
rb97
n
n
1.0

";
    assert_eq!(output, expected);
}

#[rstest]
#[case("2.5")]
#[case("1.2345e-07")]
#[case("3e+20")]
#[case("0.001")]
#[case("-4.5")]
fn unit_factor_reproduces_rate(index: NuclideIndex, #[case] rate: &str) {
    let input = format!("single_rate\ntest\n1\n92 235\n{rate}\n92 235 1.0\n");
    let (result, output) = convert(&index, &input);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(output.lines().nth(6), Some(rate));
}

#[rstest]
fn table_rates_scaled_only(index: NuclideIndex) {
    let input = "rate_table\ntest\n1\n92 235\n2\n0.1 2.0\n0.2 3.0 1.5\n92 235 0.5\n";
    let mut reader = LineReader::from_text(input);

    let block = fission_block(&mut reader, &index).unwrap().unwrap();
    assert_eq!(
        block.data,
        RateData::RateTable(vec![
            TableEntry::new(0.1, 2.0, 1.0),
            TableEntry::new(0.2, 3.0, 1.5)
        ])
    );

    let records = block.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].data,
        RateData::RateTable(vec![
            TableEntry::new(0.1, 1.0, 1.0),
            TableEntry::new(0.2, 1.5, 1.5)
        ])
    );

    let (_, output) = convert(&index, input);
    assert!(output.ends_with("2\n0.1 1.0 1.0\n0.2 1.5 1.5\n\n"));
}

#[rstest]
fn conservation_violation(index: NuclideIndex) {
    let input = "single_rate\ntest\n1\n92 235\n2.5\n92 236 1.0\n";
    let (result, output) = convert(&index, input);

    let err = result.unwrap_err();
    assert!(matches!(err, Error::ConservationViolation { .. }));
    assert_eq!(err.to_string(), "invalid reaction: u235 -> u236");
    assert!(output.is_empty());
}

#[rstest]
fn unknown_reactant(index: NuclideIndex) {
    let input = "single_rate\ntest\n1\n999 999\n2.5\n999 999 1.0\n";
    let (result, output) = convert(&index, input);

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        Error::Nuclide(nrates_nuclide::Error::UnknownNuclide { z: 999, a: 999 })
    ));
    assert_eq!(err.to_string(), "(999, 999) not present");
    assert!(output.is_empty());
}

#[rstest]
fn failed_block_writes_nothing(index: NuclideIndex) {
    // the second branch of the second block names an unknown product
    let input = "\
single_rate
first
1
92 235
1.0
92 235 1.0

single_rate
second
1
92 236
1.0
92 236 1.0
90 236 2 0 0.5
";
    let (result, output) = convert(&index, input);

    assert!(matches!(result, Err(Error::Nuclide(_))));
    assert_eq!(output, "single_rate\nfirst\n1\nu235\n1\nu235\n1.0\n\n");
}

#[rstest]
#[case("92 236")]
#[case("0.9")]
#[case("92 236 0 1")]
fn product_line_lengths(index: NuclideIndex, #[case] products: &str) {
    let input = format!("single_rate\ntest\n2\n92 235\n0 1\n2.5\n{products}\n");
    let (result, _) = convert(&index, &input);
    assert!(matches!(result, Err(Error::UnexpectedLength { line: 7, .. })));
}

#[rstest]
#[case("non_smoker_fit")]
#[case("user_supplied_fit")]
#[case("fast_rate")]
fn unsupported_types(index: NuclideIndex, #[case] tag: &str) {
    let input = format!("{tag}\ntest\n1\n92 235\n2.5\n92 235 1.0\n");
    let (result, _) = convert(&index, &input);
    assert!(matches!(result, Err(Error::InvalidRateType(t)) if t == tag));
}

#[rstest]
fn huge_reactant_count(index: NuclideIndex) {
    let input = "single_rate\ntest\n100000000000000\n92 235\n";
    let (result, output) = convert(&index, input);
    assert!(matches!(result, Err(Error::EndOfInput { line: 4 })));
    assert!(output.is_empty());
}

#[rstest]
fn empty_input(index: NuclideIndex) {
    let (result, output) = convert(&index, "");
    assert_eq!(result.unwrap(), 0);
    assert!(output.is_empty());
}

#[rstest]
fn output_reads_as_general_text(index: NuclideIndex) {
    let input = "rate_table\ntest\n2\n92 235\n0 1\n1\n0.1 2.0\n92 236 0.5\n";
    let (_, output) = convert(&index, input);

    let set = read_reactions(output.as_bytes(), &GeneralOptions::default()).unwrap();
    assert_eq!(set.len(), 1);

    let reaction = set.iter().next().unwrap();
    assert_eq!(reaction.reactants, vec!["u235", "n"]);
    assert_eq!(reaction.products, vec!["u236"]);
    assert_eq!(
        reaction.data,
        RateData::RateTable(vec![TableEntry::new(0.1, 1.0, 1.0)])
    );
}
