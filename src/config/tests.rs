use super::*;
use std::sync::{Mutex, OnceLock};
use tempfile::TempDir;

fn env_lock<'a>() -> std::sync::MutexGuard<'a, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

const ALL_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "STACKGENIUS_TIMEOUT_SECS",
    "STACKGENIUS_BASE_URL",
    "STACKGENIUS_MODEL",
    "STACKGENIUS_MAX_OUTPUT_TOKENS",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn new(vars: &[(&str, Option<&str>)]) -> Self {
        let saved = vars
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect::<Vec<_>>();
        for (key, value) in vars {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

fn cleared_vars_with(home: &str, overrides: &[(&str, &str)]) -> Vec<(String, Option<String>)> {
    let mut vars: Vec<(String, Option<String>)> =
        vec![("HOME".to_string(), Some(home.to_string()))];
    for key in ALL_VARS {
        let value = overrides
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string());
        vars.push((key.to_string(), value));
    }
    vars
}

fn guard(home: &str, overrides: &[(&str, &str)]) -> EnvGuard {
    let vars = cleared_vars_with(home, overrides);
    let borrowed: Vec<(&str, Option<&str>)> = vars
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_deref()))
        .collect();
    EnvGuard::new(&borrowed)
}

#[test]
fn load_from_env_only() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = guard(
        &home,
        &[
            ("GEMINI_API_KEY", "env-key"),
            ("STACKGENIUS_TIMEOUT_SECS", "45"),
            ("STACKGENIUS_BASE_URL", "https://example.test"),
            ("STACKGENIUS_MODEL", "env-model"),
            ("STACKGENIUS_MAX_OUTPUT_TOKENS", "4096"),
        ],
    );

    let config = Config::load().unwrap();
    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.llm.timeout_secs, 45);
    assert_eq!(config.llm.base_url, "https://example.test");
    assert_eq!(config.model.name, "env-model");
    assert_eq!(config.model.max_output_tokens, 4096);
}

#[test]
fn load_prefers_env_over_file() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();
    let config_dir = temp_home.path().join(".stackgenius");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config"),
        r#"{
            "llm": {
                "api_key": "file-key",
                "timeout_secs": 20
            },
            "model": {
                "name": "file-model",
                "max_output_tokens": 1024
            }
        }"#,
    )
    .unwrap();

    let _env = guard(
        &home,
        &[
            ("GEMINI_API_KEY", "env-key"),
            ("STACKGENIUS_TIMEOUT_SECS", "40"),
        ],
    );

    let config = Config::load().unwrap();
    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.llm.timeout_secs, 40);
    assert_eq!(config.model.name, "file-model");
    assert_eq!(config.model.max_output_tokens, 1024);
}

#[test]
fn load_succeeds_without_api_key() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = guard(&home, &[]);

    let config = Config::load().unwrap();
    assert_eq!(config.llm.api_key, "");
    assert_eq!(config.llm.timeout_secs, 30);
    assert_eq!(config.model.name, "gemini-2.0-flash");
}

#[test]
fn save_round_trips() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = guard(&home, &[]);

    let config = Config::builder()
        .with_llm(|llm| {
            llm.api_key = "saved-key".to_string();
            llm.timeout_secs = 60;
        })
        .with_model(|model| {
            model.name = "saved-model".to_string();
            model.max_output_tokens = 512;
        })
        .build()
        .unwrap();
    config.save().unwrap();

    let loaded = Config::load().unwrap();
    assert_eq!(loaded.llm.api_key, "saved-key");
    assert_eq!(loaded.llm.timeout_secs, 60);
    assert_eq!(loaded.model.name, "saved-model");
    assert_eq!(loaded.model.max_output_tokens, 512);
}

#[test]
fn validate_rejects_zero_timeout() {
    let config = Config::builder()
        .with_llm(|llm| llm.timeout_secs = 0)
        .build()
        .unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn validate_rejects_empty_model_name() {
    let config = Config::builder()
        .with_model(|model| model.name = "  ".to_string())
        .build()
        .unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Model name"));
}
