mod common;

#[cfg(test)]
mod config
{
    use std::time::Duration;

    use lookout::{config::{read_config, Config, PanelKind}, filesystem::file::write_file_bytes};
    use uuid::Uuid;

    use crate::common::BAD_UTF8;

    #[test]
    fn test_read_config()
    {
        let config_option = read_config("tests/config.json");

        assert!(config_option.is_some());

        let config = config_option.unwrap();

        assert_eq!(config.default_interval_millis, 3000);
        assert_eq!(config.request_timeout_millis, 5000);
        assert_eq!(config.status_port, 9090);
        assert_eq!(config.panels.len(), 2);

        let sessions = &config.panels[0];
        assert_eq!(sessions.name, "Active sessions");
        assert_eq!(sessions.endpoint, "http://127.0.0.1:9090/api/sessions");
        assert_eq!(sessions.kind, PanelKind::Sessions);
        assert_eq!(config.interval(sessions), Duration::from_millis(1000));
        assert_eq!(config.timeout(sessions), Duration::from_millis(5000));

        let health = &config.panels[1];
        assert_eq!(health.kind, PanelKind::Health);
        assert_eq!(config.interval(health), Duration::from_millis(3000));
        assert_eq!(config.timeout(health), Duration::from_millis(2500));
    }

    #[test]
    fn test_config_error()
    {
        let missing_config = read_config("not_a_config");

        assert!(missing_config.is_none());
    }

    #[test]
    fn test_defaults()
    {
        let config = Config::default();

        assert_eq!(config.default_interval_millis, 5000);
        assert_eq!(config.request_timeout_millis, 10000);
        assert_eq!(config.status_port, 8080);
        assert_eq!(config.panels.len(), 2);
        assert_eq!(config.panels[0].kind, PanelKind::Sessions);
        assert_eq!(config.panels[0].endpoint, "http://127.0.0.1:8080/api/sessions");
        assert_eq!(config.panels[1].kind, PanelKind::Health);
        assert_eq!(config.panels[1].endpoint, "http://127.0.0.1:8080/api/health");
        assert_eq!(config.interval(&config.panels[0]), Duration::from_millis(5000));
    }

    #[test]
    fn test_load_or_default()
    {
        let mut config = Config::load_or_default("not_a_config");

        assert_eq!(config.status_port, 8080);
        assert_eq!(config.panels.len(), 2);

        config = Config::load_or_default("tests/config.json");

        assert_eq!(config.status_port, 9090);
        assert_eq!(config.default_interval_millis, 3000);
    }

    #[test]
    fn test_bad_utf8()
    {
        let file_name = format!("tests/bad_utf8-{}", Uuid::new_v4());
        write_file_bytes(&file_name, &BAD_UTF8).unwrap();
        assert!(read_config(&file_name).is_none());
        std::fs::remove_file(file_name).unwrap();
    }

    #[test]
    fn test_not_json()
    {
        let file_name = format!("tests/not_json-{}", Uuid::new_v4());
        write_file_bytes(&file_name, "not_json{".as_bytes()).unwrap();
        assert!(read_config(&file_name).is_none());
        std::fs::remove_file(file_name).unwrap();
    }

    #[test]
    fn test_unknown_kind()
    {
        let file_name = format!("tests/unknown_kind-{}", Uuid::new_v4());
        let json = r#"{"panels":[{"name":"x","endpoint":"http://x","kind":"tickets","interval_millis":null,"timeout_millis":null}],
            "default_interval_millis":1,"request_timeout_millis":1,"status_port":1}"#;
        write_file_bytes(&file_name, json.as_bytes()).unwrap();
        assert!(read_config(&file_name).is_none());
        std::fs::remove_file(file_name).unwrap();
    }
}
