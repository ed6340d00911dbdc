// tests/language_config.rs
use polyglot_sentiment::config::{LanguageConfig, ENV_LANGUAGE_CONFIG_PATH};
use std::{env, fs};

const SMALL: &str = r#"
baseline = "en"

[[language]]
code = "en"
name = "English"

[[language]]
code = "te"
name = "Telugu"
positive = ["bagundi"]
negative = ["chetha"]
"#;

#[test]
fn from_path_reads_toml() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("languages.toml");
    fs::write(&p, SMALL).unwrap();

    let cfg = LanguageConfig::from_path(&p).unwrap();
    assert_eq!(cfg.languages.len(), 2);
    let r = cfg.into_resolver();
    assert_eq!(r.resolve("te").display_name, "Telugu");
    assert_eq!(r.resolve("fr").display_name, "English");
}

#[test]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LanguageConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("reading language config"));
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(LanguageConfig::from_toml_str("baseline = ").is_err());
    assert!(LanguageConfig::from_toml_str("baseline = \"en\"").is_err());
}

#[serial_test::serial]
#[test]
fn load_uses_env_then_local_file_then_embedded() {
    // Isolate CWD so the repo's own config/ is not picked up.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_LANGUAGE_CONFIG_PATH);

    // 1) Nothing on disk -> embedded table (13 languages)
    let cfg = LanguageConfig::load().unwrap();
    assert_eq!(cfg.languages.len(), 13);

    // 2) ./config/languages.toml wins over the embedded copy
    fs::create_dir_all(tmp.path().join("config")).unwrap();
    fs::write(tmp.path().join("config/languages.toml"), SMALL).unwrap();
    let cfg = LanguageConfig::load().unwrap();
    assert_eq!(cfg.languages.len(), 2);

    // 3) Env var has priority
    let p = tmp.path().join("other.toml");
    fs::write(
        &p,
        "baseline = \"xx\"\n[[language]]\ncode = \"xx\"\nname = \"X\"\n",
    )
    .unwrap();
    env::set_var(ENV_LANGUAGE_CONFIG_PATH, p.display().to_string());
    let cfg = LanguageConfig::load().unwrap();
    assert_eq!(cfg.baseline, "xx");

    // 4) Env var pointing nowhere is an error, not a silent fallback
    env::set_var(ENV_LANGUAGE_CONFIG_PATH, tmp.path().join("missing.toml"));
    assert!(LanguageConfig::load().is_err());

    env::remove_var(ENV_LANGUAGE_CONFIG_PATH);
    env::set_current_dir(&old).unwrap();
}
