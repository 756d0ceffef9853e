use anyhow::Context;
use vet_config::{BackendMode, VetConfig};
use vet_core::enums::Locale;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;

/// Load layered config, then apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VetConfig> {
    let mut config = VetConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut VetConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.mock {
        config.backend.mode = BackendMode::Mock;
    }
    if let Some(base_url) = &flags.base_url {
        config.backend.base_url.clone_from(base_url);
    }
    if let Some(raw) = &flags.locale {
        config.display.locale = parse_enum::<Locale>(raw, "locale")?;
    }
    config
        .backend
        .validate()
        .context("invalid backend settings after command-line overrides")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Table,
            quiet: false,
            verbose: false,
            color: ColorMode::Never,
            mock: false,
            locale: None,
            base_url: None,
        }
    }

    #[test]
    fn overrides_win_over_config() {
        let mut config = VetConfig::default();
        let flags = GlobalFlags {
            mock: true,
            locale: Some("en".into()),
            base_url: Some("https://api.example.com".into()),
            ..flags()
        };
        apply_overrides(&mut config, &flags).unwrap();
        assert_eq!(config.backend.mode, BackendMode::Mock);
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.display.locale, Locale::En);
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let mut config = VetConfig::default();
        apply_overrides(&mut config, &flags()).unwrap();
        assert_eq!(config.backend.mode, BackendMode::Http);
        assert_eq!(config.display.locale, Locale::Fr);
    }

    #[test]
    fn bad_locale_is_rejected() {
        let mut config = VetConfig::default();
        let flags = GlobalFlags {
            locale: Some("de".into()),
            ..flags()
        };
        let err = apply_overrides(&mut config, &flags).unwrap_err();
        assert!(err.to_string().contains("invalid locale 'de'"));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let mut config = VetConfig::default();
        let flags = GlobalFlags {
            base_url: Some("api.example.com".into()),
            ..flags()
        };
        assert!(apply_overrides(&mut config, &flags).is_err());
    }
}
