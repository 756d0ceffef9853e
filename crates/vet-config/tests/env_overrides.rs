use figment::Jail;
use vet_config::{BackendMode, LOCAL_CONFIG_PATH, VetConfig};
use vet_core::enums::Locale;

#[test]
fn env_vars_map_to_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("VET_BACKEND__MODE", "mock");
        jail.set_env("VET_BACKEND__MOCK_LATENCY_MS", "25");
        jail.set_env("VET_DISPLAY__UTC_OFFSET_MINUTES", "-300");

        let config = VetConfig::load().expect("config loads");
        assert_eq!(config.backend.mode, BackendMode::Mock);
        assert_eq!(config.backend.mock_latency_ms, 25);
        assert_eq!(config.display.utc_offset_minutes, -300);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".vet")?;
        jail.create_file(
            LOCAL_CONFIG_PATH,
            r#"
[backend]
base_url = "http://from-file:3000"

[display]
locale = "en"
"#,
        )?;
        jail.set_env("VET_BACKEND__BASE_URL", "http://from-env:4000");

        let config = VetConfig::load().expect("config loads");
        assert_eq!(config.backend.base_url, "http://from-env:4000");
        assert_eq!(config.display.locale, Locale::En);
        Ok(())
    });
}
