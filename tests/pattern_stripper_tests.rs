mod support;

use pretty_assertions::assert_eq;

use mocksweep::scrub::pattern_stripper::{patch_tree, PatternStripper};

const LOG_RETURN_RESIDUE: &str = "\
export function getUserApi(params?: GetUserParams) {
  // In development with mock enabled, return mock data directly
    console.log('%c[Mock] Get User API Request', 'color: #1890ff'),
    {
      params,
    })
    return defHttp.mockGetUser(params)
    })
  }

  // Production: Call real API
  return defHttp.get({
    url: Api.GetUser,
    params,
  })
}
";

const THEN_CATCH_RESIDUE: &str = "\
export function deleteUserApi(params: DeleteUserParams) {
  // In development with mock enabled, return mock data directly
  console.log('[Mock] Delete User API Request', { params })
  return defHttp.mockDeleteUser(params).then((result) => { return result }).catch((error) => { throw error })
  })
  }

  // Production: Call real API
  return defHttp.delete({
    url: Api.DeleteUser,
    params,
  })
}
";

const LOG_RETURN_FIXED: &str = "\
export function getUserApi(params?: GetUserParams) {
  return defHttp.get({
    url: Api.GetUser,
    params,
  })
}
";

const THEN_CATCH_FIXED: &str = "\
export function deleteUserApi(params: DeleteUserParams) {
  return defHttp.delete({
    url: Api.DeleteUser,
    params,
  })
}
";

#[test]
fn orphaned_log_return_shape_is_removed() {
    let stripper = PatternStripper::new();
    assert_eq!(stripper.strip(LOG_RETURN_RESIDUE), LOG_RETURN_FIXED);
}

#[test]
fn orphaned_then_catch_shape_is_removed() {
    let stripper = PatternStripper::new();
    assert_eq!(stripper.strip(THEN_CATCH_RESIDUE), THEN_CATCH_FIXED);
}

#[test]
fn non_matching_text_passes_through_untouched() {
    let stripper = PatternStripper::new();
    assert_eq!(stripper.strip(LOG_RETURN_FIXED), LOG_RETURN_FIXED);
    // No blank-line collapsing in this pass.
    assert_eq!(stripper.strip("a\n\n\n\nb\n"), "a\n\n\n\nb\n");
}

#[test]
fn patch_tree_rewrites_changed_files_only() {
    let root = support::unique_temp_dir("mocksweep_patch");
    let residue = support::write_file(&root, "api/user/user.ts", LOG_RETURN_RESIDUE);
    let clean = support::write_file(&root, "api/units/unit.ts", THEN_CATCH_FIXED);
    support::write_file(&root, "api/user/user.test.ts", LOG_RETURN_RESIDUE);

    let fixed = patch_tree(&root).expect("patch should succeed");

    assert_eq!(fixed, vec![std::path::PathBuf::from("api/user/user.ts")]);
    assert_eq!(std::fs::read_to_string(&residue).unwrap(), LOG_RETURN_FIXED);
    assert_eq!(std::fs::read_to_string(&clean).unwrap(), THEN_CATCH_FIXED);
}
