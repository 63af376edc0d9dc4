mod setup;

use notequeue::{Engine, Error};
use setup::{init, load_config};

/// Passes if the seed fixture file matches the built-in default configuration
#[test]
fn seed_file_matches_default() {
    init();

    assert_eq!(
        load_config("./tests/fixtures/seed.yml"),
        notequeue::Configuration::default()
    );
}

/// Passes if an engine refuses a configuration with a dangling recipient reference
#[test]
fn dangling_recipient_rejected() {
    init();

    let config = load_config("./tests/fixtures/dangling.yml");

    match Engine::new(config).build() {
        Err(Error::ConfigItemNotFound { user_id, name }) => {
            assert_eq!(user_id, "0");
            assert_eq!(name, "3");
        }
        _ => panic!("Expected ConfigItemNotFound"),
    }
}
