use super::*;

fn config_with_member_app() -> ClientConfig {
    ClientConfig { member_app_url: Some("https://clubs.example.org".to_owned()), ..ClientConfig::default() }
}

#[test]
fn role_mismatch_points_to_member_app() {
    assert_eq!(
        member_app_link(&AuthError::RoleMismatch, &config_with_member_app()),
        Some("https://clubs.example.org".to_owned())
    );
}

#[test]
fn role_mismatch_without_configured_app_has_no_link() {
    assert_eq!(member_app_link(&AuthError::RoleMismatch, &ClientConfig::default()), None);
}

#[test]
fn other_errors_have_no_member_link() {
    let config = config_with_member_app();
    assert_eq!(member_app_link(&AuthError::InvalidCredentials, &config), None);
    assert_eq!(member_app_link(&AuthError::MissingCredentials, &config), None);
}

#[test]
fn login_messages_are_user_facing() {
    assert_eq!(AuthError::MissingCredentials.to_string(), "Enter both your account and password.");
    assert_eq!(AuthError::InvalidCredentials.to_string(), "The account or password is incorrect.");
    assert!(AuthError::RoleMismatch.to_string().contains("member app"));
}

#[test]
fn replace_options_replace_history() {
    assert!(replace_options().replace);
}
