mod common;

#[cfg(test)]
mod render
{
    use lookout::{poll::PollState, render::{format_uptime, render_state, terminal::TerminalPanel, Panel, LOADING, NO_DATA}, status::{ServiceStatus, Session, SystemHealth}};

    fn health(api_running: bool) -> SystemHealth
    {
        SystemHealth
        {
            cpu_percent: 50.0,
            memory_used_bytes: 1,
            memory_total_bytes: 4,
            disk_used_bytes: 0,
            disk_total_bytes: 0,
            uptime_seconds: 3723,
            services: vec!
            [
                ServiceStatus { name: "api".to_string(), running: api_running },
                ServiceStatus { name: "backup".to_string(), running: true }
            ]
        }
    }

    #[test]
    fn test_empty_states()
    {
        let mut state: PollState<SystemHealth> = PollState::new();

        assert_eq!(render_state("System health", &state), format!("System health\n{}", NO_DATA));

        state.loading = true;
        assert_eq!(render_state("System health", &state), format!("System health\n{}", LOADING));

        state.loading = false;
        state.error = Some("Failed to fetch data".to_string());
        assert_eq!(render_state("System health", &state), format!("System health\n! Failed to fetch data\n{}", NO_DATA));
    }

    #[test]
    fn test_stale_data_with_error()
    {
        let mut state = PollState::new();
        state.data = Some(health(true));
        state.error = Some("connection refused".to_string());

        let text = render_state("System health", &state);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "System health");
        assert_eq!(lines[1], "! connection refused");
        assert_eq!(lines[2], "CPU 50.0% | Memory 25.0% | Disk 0.0% | Up 1h 02m 03s");
        assert_eq!(lines[3], "Services: api ok, backup ok");

        state.loading = true;
        state.error = None;
        assert!(render_state("System health", &state).starts_with("System health (refreshing)\nCPU"));
    }

    #[test]
    fn test_health()
    {
        let h = health(false);

        assert!(!h.healthy());
        assert_eq!(h.memory_percent(), 25.0);
        assert_eq!(h.disk_percent(), 0.0);
        assert!(h.render().ends_with("Services: api DOWN, backup ok"));
    }

    #[test]
    fn test_sessions()
    {
        let empty: Vec<Session> = vec![];
        assert_eq!(empty.render(), "No active sessions");

        let sessions = vec!
        [
            Session
            {
                user: "admin".to_string(),
                address: "10.0.0.2".to_string(),
                device: Some("Firefox on Linux".to_string()),
                since: (chrono::offset::Utc::now() - chrono::Duration::minutes(30)).to_rfc3339()
            },
            Session
            {
                user: "support".to_string(),
                address: "10.0.0.17".to_string(),
                device: None,
                since: "yesterday".to_string()
            }
        ];

        let text = sessions.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("admin @ 10.0.0.2, Firefox on Linux, "));
        assert!(lines[0].ends_with("m"));
        assert_eq!(lines[1], "support @ 10.0.0.17, unknown device");
    }

    #[test]
    fn test_format_uptime()
    {
        assert_eq!(format_uptime(0), "0h 00m 00s");
        assert_eq!(format_uptime(3723), "1h 02m 03s");
        assert_eq!(format_uptime(90061), "1d 1h 01m 01s");
    }

    #[test]
    fn test_terminal_panel()
    {
        let panel = TerminalPanel::hidden("System health");
        let mut state = PollState::new();
        state.data = Some(health(true));

        panel.update(&state);

        assert_eq!(panel.message(), render_state("System health", &state));
        panel.finish();
    }
}
