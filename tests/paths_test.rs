use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;
use view_secret::paths::{find_config_file, get_config_creation_path, load_env_file};

struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self { key, original }
    }

    fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

#[test]
#[serial]
fn test_find_config_file_returns_path() {
    let result = find_config_file();
    assert!(result.is_ok());
}

#[test]
#[serial]
fn test_find_config_file_with_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "namespace = \"ops\"\n").unwrap();

    let _guard = EnvGuard::set("VIEW_SECRET_CONFIG", config_path.to_str().unwrap());

    let found = find_config_file().unwrap();
    assert_eq!(found, config_path);
}

#[test]
#[serial]
fn test_find_config_file_env_override_missing_falls_through() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    let _guard = EnvGuard::set("VIEW_SECRET_CONFIG", missing.to_str().unwrap());

    let found = find_config_file().unwrap();
    assert_ne!(found, missing);
}

#[test]
#[serial]
fn test_find_config_file_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let original_dir = env::current_dir().unwrap();
    let _guard = EnvGuard::remove("VIEW_SECRET_CONFIG");

    fs::write(temp_dir.path().join("view-secret.toml"), "").unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();

    let found = find_config_file();
    env::set_current_dir(&original_dir).unwrap();

    let found = found.unwrap();
    assert_eq!(found.file_name().unwrap(), "view-secret.toml");
    assert_eq!(
        found.parent().unwrap().canonicalize().unwrap(),
        temp_dir.path().canonicalize().unwrap()
    );
}

#[test]
#[serial]
fn test_config_creation_path_prefers_xdg_config_home() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = EnvGuard::set("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());

    let path = get_config_creation_path();
    assert_eq!(path, temp_dir.path().join("view-secret").join("config.toml"));
}

#[test]
#[serial]
fn test_find_config_file_xdg_config_home() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    let original_dir = env::current_dir().unwrap();
    let _config = EnvGuard::remove("VIEW_SECRET_CONFIG");
    let _xdg = EnvGuard::set("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());

    let app_dir = temp_dir.path().join("view-secret");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "").unwrap();

    env::set_current_dir(cwd.path()).unwrap();
    let found = find_config_file();
    env::set_current_dir(&original_dir).unwrap();

    // ~/.config/view-secret/config.toml wins when it exists on this machine
    let found = found.unwrap();
    assert!(found.ends_with("view-secret/config.toml"));
}

#[test]
#[serial]
fn test_load_env_file_from_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let original_dir = env::current_dir().unwrap();
    let _guard = EnvGuard::remove("VIEW_SECRET_TEST_ENV_VALUE");

    fs::write(
        temp_dir.path().join(".env"),
        "VIEW_SECRET_TEST_ENV_VALUE=from-dotenv\n",
    )
    .unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    load_env_file();
    env::set_current_dir(&original_dir).unwrap();

    assert_eq!(
        env::var("VIEW_SECRET_TEST_ENV_VALUE").as_deref(),
        Ok("from-dotenv")
    );
}
