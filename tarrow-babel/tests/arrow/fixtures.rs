use crate::common::{convert, load_fixture};

#[test]
fn kitchensink_matches_expected_output() {
    let source = load_fixture("kitchensink.toml");
    let expected = load_fixture("kitchensink.arrow");
    assert_eq!(convert(&source), expected.trim_end_matches('\n'));
}

#[test]
fn kitchensink_is_deterministic() {
    let source = load_fixture("kitchensink.toml");
    assert_eq!(convert(&source), convert(&source));
}
