use freenachos_engine::parsing::{invariants, parse_paste};

#[test]
fn fixture_plain_article() {
    assert_fixture("plain_article", "txt");
}

#[test]
fn fixture_notion_export() {
    assert_fixture("notion_export", "html");
}

fn assert_fixture(name: &str, ext: &str) {
    let paste = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.{ext}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let blocks = parse_paste(&paste).unwrap();
    assert!(!blocks.is_empty(), "{name} produced no blocks");
    invariants::check(&blocks);

    insta::assert_yaml_snapshot!(name, blocks);
}

/// Parsing the same paste twice gives the same blocks
#[test]
fn parsing_is_deterministic() {
    let paste = "# A\n\n- x\n- y\n\n> q -- r";
    assert_eq!(parse_paste(paste).unwrap(), parse_paste(paste).unwrap());
}
