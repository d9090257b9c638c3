#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_json_is_none_off_browser() {
    assert_eq!(load_json::<String>("club_admin_session"), None);
}

#[test]
fn save_and_remove_are_noops_but_callable() {
    save_json("club_admin_session", &"value");
    remove("club_admin_session");
    assert_eq!(load_json::<String>("club_admin_session"), None);
}
