mod support;

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use mocksweep::scrub::import_stripper::{strip_files, ImportStripper, StripStatus};

const GUARD_BLOCK: &str = "\
export function getUsersApi(params?: GetUsersParams) {
  if (useMock) {
    return import('@test/index').then(({ users }) => {
      return users.mock.mockGetUsers(params)
    }
  })

  return defHttp.get({ url: Api.GetList, params })
}
";

// The guard's leading indent survives: the pattern starts matching at `if`.
const GUARD_STRIPPED: &str = "export function getUsersApi(params?: GetUsersParams) {\n  \n\n  return defHttp.get({ url: Api.GetList, params })\n}\n";

#[test]
fn guard_block_is_removed_and_counted() {
    let stripper = ImportStripper::new();
    let (stripped, blocks) = stripper.strip(GUARD_BLOCK);

    assert_eq!(blocks, 1);
    assert_eq!(stripped, GUARD_STRIPPED);
    assert!(!stripped.contains("useMock"));
    assert!(!stripped.contains("@test"));
}

#[test]
fn every_guard_block_in_a_file_is_counted() {
    let stripper = ImportStripper::new();
    let two = format!("{GUARD_BLOCK}\n{GUARD_BLOCK}");
    let (stripped, blocks) = stripper.strip(&two);

    assert_eq!(blocks, 2);
    assert!(!stripped.contains("useMock"));
}

#[test]
fn clean_files_round_trip_byte_for_byte() {
    let stripper = ImportStripper::new();
    // Blank lines are only collapsed when a block was removed.
    let clean = "export function a() {}\n\n\n\nexport function b() {}\n";
    let (stripped, blocks) = stripper.strip(clean);

    assert_eq!(blocks, 0);
    assert_eq!(stripped, clean);
}

#[test]
fn strip_files_reports_missing_entries_and_continues() {
    let root = support::unique_temp_dir("mocksweep_strip");
    let guarded = support::write_file(&root, "api/admin/user/user.ts", GUARD_BLOCK);
    let clean = support::write_file(&root, "api/resident/resident.ts", GUARD_STRIPPED);

    let files = vec![
        PathBuf::from("api/admin/user/user.ts"),
        PathBuf::from("api/admin/role/role.ts"),
        PathBuf::from("api/resident/resident.ts"),
    ];
    let outcomes = strip_files(&root, &files).expect("strip should succeed");

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].status, StripStatus::Fixed(1));
    assert_eq!(outcomes[1].status, StripStatus::Missing);
    assert_eq!(outcomes[1].path, PathBuf::from("api/admin/role/role.ts"));
    assert_eq!(outcomes[2].status, StripStatus::Clean);

    assert_eq!(std::fs::read_to_string(&guarded).unwrap(), GUARD_STRIPPED);
    assert_eq!(std::fs::read_to_string(&clean).unwrap(), GUARD_STRIPPED);
}
