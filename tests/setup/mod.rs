use notequeue::{Client, Configuration, Engine};

#[allow(dead_code)]
pub(crate) fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn load_config(config: &str) -> Configuration {
    Configuration::from_file(config).expect("Could not load test config file.")
}

#[allow(dead_code)]
pub(crate) fn test_engine(config: &str) -> Engine {
    Engine::new(load_config(config))
        .with_version("1.0".to_string())
        .build()
        .expect("Could not create engine.")
}

#[allow(dead_code)]
pub(crate) fn local_test_client(config: &str) -> Client {
    Client::new_with_engine(test_engine(config), None)
}
