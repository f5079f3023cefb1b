//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sim::types::Tuning;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the standard game balance. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::standard`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Timing, seed, and scheduler parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Frequency target, failure thresholds, and sensitivity.
    #[serde(default)]
    pub frequency: FrequencyConfig,
    /// Solar array parameters.
    #[serde(default)]
    pub solar: SolarConfig,
    /// City demand parameters.
    #[serde(default)]
    pub demand: DemandConfig,
    /// Battery storage parameters.
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Backup generator parameters.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Timing, seed, and scheduler parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Physics tick length (ms, must be > 0).
    pub tick_ms: f64,
    /// Simulated hours advanced per tick (must be > 0).
    pub time_speed: f64,
    /// Master random seed.
    pub seed: u64,
    /// Maximum ticks executed per scheduler advance (must be > 0).
    pub max_catchup_ticks: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000.0 / 60.0,
            time_speed: 0.02,
            seed: 42,
            max_catchup_ticks: 5,
        }
    }
}

/// Frequency target, failure thresholds, and sensitivity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrequencyConfig {
    /// Nominal grid frequency (Hz).
    pub target_hz: f64,
    /// Blackout threshold, inclusive (Hz).
    pub failure_low_hz: f64,
    /// Explosion threshold, inclusive (Hz).
    pub failure_high_hz: f64,
    /// Frequency change per kW of imbalance per tick (Hz).
    pub sensitivity: f64,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            target_hz: 50.0,
            failure_low_hz: 45.0,
            failure_high_hz: 55.0,
            sensitivity: 0.005,
        }
    }
}

/// Solar array parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarConfig {
    /// Peak clear-sky output at noon (kW).
    pub max_kw: f64,
    /// Half-width of the uniform cloud noise band (kW).
    pub noise_kw: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            max_kw: 600.0,
            noise_kw: 25.0,
        }
    }
}

/// City demand parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemandConfig {
    /// Demand floor before peaks and noise (kW).
    pub base_kw: f64,
    /// Morning peak amplitude, centered at 09:00 (kW).
    pub morning_peak_kw: f64,
    /// Evening peak amplitude, centered at 19:00 (kW).
    pub evening_peak_kw: f64,
    /// Half-width of the uniform noise band (kW).
    pub noise_kw: f64,
    /// Demand multiplier growth per survived day.
    pub growth_per_day: f64,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            base_kw: 200.0,
            morning_peak_kw: 150.0,
            evening_peak_kw: 200.0,
            noise_kw: 20.0,
            growth_per_day: 0.05,
        }
    }
}

/// Battery storage parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Total energy capacity (kWh, must be > 0).
    pub capacity_kwh: f64,
    /// Power while charging or discharging (kW).
    pub rate_kw: f64,
    /// Level change per active tick (percentage points, in (0, 100]).
    pub step_pct: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_kwh: 2000.0,
            rate_kw: 150.0,
            step_pct: 0.15,
        }
    }
}

/// Backup generator parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Output while switched on (kW).
    pub output_kw: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { output_kw: 300.0 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"frequency.failure_low_hz"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the standard scenario (the default game balance).
    pub fn standard() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            frequency: FrequencyConfig::default(),
            solar: SolarConfig::default(),
            demand: DemandConfig::default(),
            battery: BatteryConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }

    /// Returns the calm preset: tamer noise, slower difficulty ramp, and a
    /// less twitchy frequency response.
    pub fn calm() -> Self {
        Self {
            frequency: FrequencyConfig {
                sensitivity: 0.003,
                ..FrequencyConfig::default()
            },
            solar: SolarConfig {
                noise_kw: 10.0,
                ..SolarConfig::default()
            },
            demand: DemandConfig {
                noise_kw: 8.0,
                growth_per_day: 0.02,
                ..DemandConfig::default()
            },
            ..Self::standard()
        }
    }

    /// Returns the brutal preset: heavier evening peak, louder noise, and a
    /// faster ramp against a weaker generator.
    pub fn brutal() -> Self {
        Self {
            solar: SolarConfig {
                noise_kw: 40.0,
                ..SolarConfig::default()
            },
            demand: DemandConfig {
                base_kw: 240.0,
                evening_peak_kw: 260.0,
                noise_kw: 35.0,
                growth_per_day: 0.08,
                ..DemandConfig::default()
            },
            generator: GeneratorConfig { output_kw: 250.0 },
            ..Self::standard()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["standard", "calm", "brutal"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "standard" => Ok(Self::standard()),
            "calm" => Ok(Self::calm()),
            "brutal" => Ok(Self::brutal()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.tick_ms <= 0.0 {
            errors.push(ConfigError {
                field: "simulation.tick_ms".into(),
                message: "must be > 0".into(),
            });
        }
        if s.time_speed <= 0.0 || s.time_speed >= 24.0 {
            errors.push(ConfigError {
                field: "simulation.time_speed".into(),
                message: "must be in (0, 24)".into(),
            });
        }
        if s.max_catchup_ticks == 0 {
            errors.push(ConfigError {
                field: "simulation.max_catchup_ticks".into(),
                message: "must be > 0".into(),
            });
        }

        let f = &self.frequency;
        if f.failure_low_hz >= f.target_hz {
            errors.push(ConfigError {
                field: "frequency.failure_low_hz".into(),
                message: "must be < frequency.target_hz".into(),
            });
        }
        if f.failure_high_hz <= f.target_hz {
            errors.push(ConfigError {
                field: "frequency.failure_high_hz".into(),
                message: "must be > frequency.target_hz".into(),
            });
        }
        if f.sensitivity <= 0.0 {
            errors.push(ConfigError {
                field: "frequency.sensitivity".into(),
                message: "must be > 0".into(),
            });
        }

        if self.solar.max_kw < 0.0 {
            errors.push(ConfigError {
                field: "solar.max_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if self.demand.base_kw < 0.0 {
            errors.push(ConfigError {
                field: "demand.base_kw".into(),
                message: "must be >= 0".into(),
            });
        }

        let b = &self.battery;
        if b.capacity_kwh <= 0.0 {
            errors.push(ConfigError {
                field: "battery.capacity_kwh".into(),
                message: "must be > 0".into(),
            });
        }
        if b.rate_kw < 0.0 {
            errors.push(ConfigError {
                field: "battery.rate_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if b.step_pct <= 0.0 || b.step_pct > 100.0 {
            errors.push(ConfigError {
                field: "battery.step_pct".into(),
                message: "must be in (0, 100]".into(),
            });
        }

        if self.generator.output_kw < 0.0 {
            errors.push(ConfigError {
                field: "generator.output_kw".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }

    /// Flattens the sectioned configuration into the engine's [`Tuning`].
    pub fn tuning(&self) -> Tuning {
        Tuning {
            tick_ms: self.simulation.tick_ms,
            target_hz: self.frequency.target_hz,
            failure_low_hz: self.frequency.failure_low_hz,
            failure_high_hz: self.frequency.failure_high_hz,
            battery_capacity_kwh: self.battery.capacity_kwh,
            battery_rate_kw: self.battery.rate_kw,
            battery_step_pct: self.battery.step_pct,
            generator_kw: self.generator.output_kw,
            base_demand_kw: self.demand.base_kw,
            max_solar_kw: self.solar.max_kw,
            frequency_sensitivity: self.frequency.sensitivity,
            time_speed: self.simulation.time_speed,
            solar_noise_kw: self.solar.noise_kw,
            demand_noise_kw: self.demand.noise_kw,
            demand_growth_per_day: self.demand.growth_per_day,
            morning_peak_kw: self.demand.morning_peak_kw,
            evening_peak_kw: self.demand.evening_peak_kw,
            seed: self.simulation.seed,
            max_catchup_ticks: self.simulation.max_catchup_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_preset_valid() {
        let cfg = ScenarioConfig::standard();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "standard should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_standard() {
        let cfg = ScenarioConfig::from_preset("standard");
        assert!(cfg.is_ok());
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[simulation]
tick_ms = 20.0
time_speed = 0.05
seed = 99
max_catchup_ticks = 3

[frequency]
target_hz = 60.0
failure_low_hz = 55.0
failure_high_hz = 65.0
sensitivity = 0.004

[solar]
max_kw = 800.0
noise_kw = 30.0

[demand]
base_kw = 250.0
morning_peak_kw = 100.0
evening_peak_kw = 180.0
noise_kw = 15.0
growth_per_day = 0.03

[battery]
capacity_kwh = 1500.0
rate_kw = 120.0
step_pct = 0.2

[generator]
output_kw = 350.0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.simulation.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| c.frequency.target_hz), Some(60.0));
        assert_eq!(cfg.as_ref().map(|c| c.generator.output_kw), Some(350.0));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[simulation]
tick_ms = 20.0
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[simulation]
seed = 7
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.simulation.seed), Some(7));
        assert_eq!(cfg.as_ref().map(|c| c.solar.max_kw), Some(600.0));
        assert_eq!(cfg.as_ref().map(|c| c.frequency.target_hz), Some(50.0));
    }

    #[test]
    fn validation_catches_inverted_thresholds() {
        let mut cfg = ScenarioConfig::standard();
        cfg.frequency.failure_low_hz = 52.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "frequency.failure_low_hz"));
    }

    #[test]
    fn validation_catches_zero_tick() {
        let mut cfg = ScenarioConfig::standard();
        cfg.simulation.tick_ms = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "simulation.tick_ms"));
    }

    #[test]
    fn validation_catches_bad_battery_step() {
        let mut cfg = ScenarioConfig::standard();
        cfg.battery.step_pct = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "battery.step_pct"));
    }

    #[test]
    fn brutal_is_harder_than_standard() {
        let std = ScenarioConfig::standard();
        let brutal = ScenarioConfig::brutal();
        assert!(brutal.demand.growth_per_day > std.demand.growth_per_day);
        assert!(brutal.generator.output_kw < std.generator.output_kw);
    }

    #[test]
    fn tuning_flattens_all_sections() {
        let cfg = ScenarioConfig::standard();
        let t = cfg.tuning();
        assert_eq!(t.target_hz, cfg.frequency.target_hz);
        assert_eq!(t.generator_kw, cfg.generator.output_kw);
        assert_eq!(t.battery_rate_kw, cfg.battery.rate_kw);
        assert_eq!(t.base_demand_kw, cfg.demand.base_kw);
        assert_eq!(t.max_solar_kw, cfg.solar.max_kw);
        assert_eq!(t.seed, cfg.simulation.seed);
    }
}
