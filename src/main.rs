//! Trunk binary target for the browser build.

fn main() {
    #[cfg(feature = "csr")]
    club_admin::mount();
}
