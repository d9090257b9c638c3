use super::*;

#[test]
fn submit_requires_every_required_item() {
    assert!(!can_submit(TERMS_ITEMS, &[false, false, false]));
    assert!(!can_submit(TERMS_ITEMS, &[true, false, true]));
    assert!(can_submit(TERMS_ITEMS, &[true, true, false]));
    assert!(can_submit(TERMS_ITEMS, &[true, true, true]));
}

#[test]
fn missing_checkbox_state_counts_as_unchecked() {
    assert!(!can_submit(TERMS_ITEMS, &[true]));
}

#[test]
fn optional_only_list_is_always_submittable() {
    let items = [TermsItem { title: "Newsletter", summary: "", required: false }];
    assert!(can_submit(&items, &[]));
}

#[test]
fn terms_list_has_required_items() {
    assert!(TERMS_ITEMS.iter().any(|item| item.required));
}
