//! Settings Integration Tests
//!
//! Settings file + encrypted password file + context construction, using
//! temporary directories. No remote calls are made.

use scanbridge::storage::{read_password_file, write_password_file};
use scanbridge::{ClientContext, ConfigService, ErrorKind, LogLevel, PasswordSource, ServerSettings};

#[test]
fn test_settings_with_encrypted_password_connects() {
    let temp_dir = tempfile::tempdir().unwrap();
    let password_path = temp_dir.path().join("secrets").join("password.enc");
    let settings_path = temp_dir.path().join("settings.json");

    write_password_file(&password_path, "s3cret", "integration-passphrase").unwrap();
    assert_eq!(
        read_password_file(&password_path, "integration-passphrase").unwrap(),
        "s3cret"
    );

    let key_env = "SCANBRIDGE_INTEGRATION_TEST_KEY";
    std::env::set_var(key_env, "integration-passphrase");

    let mut settings = ServerSettings::new("https://scan.example.com/sdk", "scanner", "unused");
    settings.password = PasswordSource::EncryptedFile {
        path: password_path,
        key_env: key_env.to_string(),
    };
    settings.log_level = LogLevel::Debug;
    ConfigService::create(&settings_path, settings).unwrap();

    let loaded = ConfigService::load(&settings_path).unwrap();
    let ctx = ClientContext::connect(loaded.settings()).unwrap();
    assert_eq!(ctx.service().endpoint(), "https://scan.example.com/sdk/rpc");
    assert_eq!(ctx.log_gate().level(), LogLevel::Debug);
}

#[test]
fn test_wrong_passphrase_is_configuration_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let password_path = temp_dir.path().join("password.enc");
    write_password_file(&password_path, "s3cret", "right-passphrase").unwrap();

    let key_env = "SCANBRIDGE_INTEGRATION_WRONG_KEY";
    std::env::set_var(key_env, "wrong-passphrase");

    let mut settings = ServerSettings::new("https://scan.example.com", "scanner", "unused");
    settings.password = PasswordSource::EncryptedFile {
        path: password_path,
        key_env: key_env.to_string(),
    };

    let err = ClientContext::connect(&settings).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
