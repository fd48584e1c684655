#[cfg(test)]
mod tests {
    use super::super::scenario::*;

    #[test]
    fn test_scenario_creation() {
        let mut scenario = Scenario::new("test_scenario".to_string());
        scenario.description = "A test scenario".to_string();

        assert_eq!(scenario.name, "test_scenario");
        assert_eq!(scenario.config, SimulationConfig::default());
        assert!(scenario.random_seed.is_none());
    }

    #[test]
    fn test_scenario_validation() {
        let mut scenario = Scenario::new("invalid".to_string());

        scenario.config.days = 0;
        assert!(scenario.validate().is_err());
        scenario.config.days = 100;
        assert!(scenario.validate().is_ok());

        scenario.config.initial_players = 0.0;
        assert!(scenario.validate().is_err());
        scenario.config.initial_players = 100.0;

        scenario.config.carrying_capacity = 50.0;
        assert!(scenario.validate().is_err());
        scenario.config.carrying_capacity = 1_000.0;

        scenario.config.growth_rate = 0.0;
        assert!(scenario.validate().is_err());
        scenario.config.growth_rate = 0.01;

        scenario.config.active_fraction = -0.1;
        assert!(scenario.validate().is_err());
        scenario.config.active_fraction = 0.1;

        scenario.config.initial_small_units = -1.0;
        assert!(scenario.validate().is_err());
        scenario.config.initial_small_units = 100.0;

        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_scenario_serialization() {
        let scenario = create_standard_scenarios().get("default").unwrap().clone();

        let json = serde_json::to_string_pretty(&scenario).unwrap();
        let deserialized: Scenario = serde_json::from_str(&json).unwrap();

        assert_eq!(scenario.name, deserialized.name);
        assert_eq!(scenario.config, deserialized.config);
    }

    #[test]
    fn test_scenario_display() {
        let scenarios = create_standard_scenarios();
        let scenario = scenarios.get("default").unwrap();
        let display = format!("{}", scenario);

        assert!(display.contains("Scenario: two_year_default"));
        assert!(display.contains("Days to simulate: 730"));
        assert!(display.contains("10000 unlocked, 5000 locked"));
    }

    #[test]
    fn test_standard_scenarios() {
        let scenarios = create_standard_scenarios();

        for key in ["default", "smoke", "dormant", "adoption"] {
            let scenario = scenarios.get(key).unwrap();
            assert!(scenario.validate().is_ok(), "{} should validate", key);
        }

        let dormant = scenarios.get("dormant").unwrap();
        assert_eq!(dormant.config.active_fraction, 0.0);
        assert_eq!(dormant.config.complex_creation_fraction, 0.0);

        let smoke = scenarios.get("smoke").unwrap();
        assert_eq!(smoke.config.days, 30);
    }
}
