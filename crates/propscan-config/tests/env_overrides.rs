use figment::Jail;
use pretty_assertions::assert_eq;
use propscan_config::{PROJECT_CONFIG, PropscanConfig};

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
        jail.set_env("PROPSCAN_OUTPUT__PRETTY", "true");
        jail.set_env("PROPSCAN_LOG__LEVEL", "info");
        jail.set_env("PROPSCAN_LOG__SUBSYSTEMS", "[exports, statics]");

        let config = PropscanConfig::load().map_err(|e| e.to_string())?;
        assert!(config.output.pretty);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.subsystems, vec!["exports", "statics"]);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
        std::fs::create_dir_all(jail.directory().join(".propscan"))
            .map_err(|e| e.to_string())?;
        jail.create_file(PROJECT_CONFIG, "[output]\npretty = true\n")?;
        jail.set_env("PROPSCAN_OUTPUT__PRETTY", "false");

        let config = PropscanConfig::load().map_err(|e| e.to_string())?;
        assert!(!config.output.pretty);
        Ok(())
    });
}

#[test]
fn tracing_filter_variable_is_not_configuration() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().display().to_string());
        jail.set_env("PROPSCAN_LOG", "propscan=trace");

        let config = PropscanConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config, PropscanConfig::default());
        Ok(())
    });
}
