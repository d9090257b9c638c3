use super::*;
use futures::executor::block_on;

fn config(mode: ApiMode) -> ClientConfig {
    ClientConfig { api_mode: mode, ..ClientConfig::default() }
}

#[test]
fn http_mode_builds_http_client_with_base_url() {
    let backend = AuthBackend::from_config(&config(ApiMode::Http));
    let AuthBackend::Http(api) = backend else {
        panic!("expected http backend");
    };
    assert_eq!(api.base_url(), "/api");
}

#[test]
fn mock_mode_serves_demo_accounts() {
    let backend = AuthBackend::from_config(&config(ApiMode::Mock));
    let request = LoginRequest { account: "admin".to_owned(), password: "admin1234".to_owned() };
    let resp = block_on(backend.login(&request)).unwrap();
    assert_eq!(resp.role, crate::net::types::Role::Admin);
}
