mod support;

use pretty_assertions::assert_eq;

use mocksweep::scrub::else_promoter::{promote_file, ElsePromoter};

const GUARD_WITH_ELSE: &str = "\
function loadDeviceStore() {
  if (useMock) {
    devices.value = mockDevices
    total.value = mockDevices.length
  }
  else {
    fetchDeviceStore().then((res) => {
      devices.value = res.items
    })
  }
}
";

const PROMOTED: &str = "\
function loadDeviceStore() {
  fetchDeviceStore().then((res) => {
    devices.value = res.items
  })
}
";

#[test]
fn else_body_replaces_the_guard_one_level_left() {
    let promoter = ElsePromoter::new();
    let output = promoter.promote(GUARD_WITH_ELSE);

    assert_eq!(output, PROMOTED);
    assert!(!output.contains("useMock"));
    assert!(!output.contains("if"));
    assert!(!output.contains("else"));
    assert!(!output.contains("mockDevices"));
}

#[test]
fn several_guards_in_one_file_are_all_promoted() {
    let promoter = ElsePromoter::new();
    let two = format!("{GUARD_WITH_ELSE}\n{GUARD_WITH_ELSE}");
    let output = promoter.promote(&two);

    assert!(!output.contains("useMock"));
    assert_eq!(output.matches("fetchDeviceStore").count(), 2);
}

#[test]
fn unguarded_code_passes_through_untouched() {
    let promoter = ElsePromoter::new();
    assert_eq!(promoter.promote(PROMOTED), PROMOTED);
}

#[test]
fn promote_file_rewrites_in_place_and_collapses_blanks() {
    let root = support::unique_temp_dir("mocksweep_promote");
    let input = format!("{GUARD_WITH_ELSE}\n\n\n{PROMOTED}");
    let path = support::write_file(&root, "devicestore.vue", &input);

    promote_file(&path).expect("promote should succeed");

    let rewritten = std::fs::read_to_string(&path).unwrap();
    assert_eq!(rewritten, format!("{PROMOTED}\n{PROMOTED}"));
}
