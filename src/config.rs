use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::edo::EdoSpace;
use crate::core::evaluate::EvalParams;
use crate::core::placement::{PlacementMode, PlacementParams};
use crate::core::roughness::RoughnessParams;
use crate::core::tension::TensionParams;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TensionConfig {
    #[serde(default = "TensionConfig::default_edo_steps")]
    pub edo_steps: u32,
    #[serde(default = "TensionConfig::default_ji_sigma_cents")]
    pub ji_sigma_cents: f32,
    #[serde(default = "TensionConfig::default_ji_lambda")]
    pub ji_lambda: f32,
    #[serde(default = "TensionConfig::default_register_k")]
    pub register_k: f32,
    #[serde(default = "TensionConfig::default_register_damping")]
    pub register_damping: bool,
    #[serde(default = "TensionConfig::default_compound_m")]
    pub compound_m: f32,
}

impl TensionConfig {
    fn default_edo_steps() -> u32 {
        12
    }
    fn default_ji_sigma_cents() -> f32 {
        15.0
    }
    fn default_ji_lambda() -> f32 {
        0.05
    }
    fn default_register_k() -> f32 {
        1.0
    }
    fn default_register_damping() -> bool {
        true
    }
    fn default_compound_m() -> f32 {
        0.7
    }
}

impl Default for TensionConfig {
    fn default() -> Self {
        Self {
            edo_steps: Self::default_edo_steps(),
            ji_sigma_cents: Self::default_ji_sigma_cents(),
            ji_lambda: Self::default_ji_lambda(),
            register_k: Self::default_register_k(),
            register_damping: Self::default_register_damping(),
            compound_m: Self::default_compound_m(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoughnessConfig {
    #[serde(default = "RoughnessConfig::default_f0_hz")]
    pub f0_hz: f32,
    #[serde(default = "RoughnessConfig::default_partials")]
    pub partials: u32,
    #[serde(default = "RoughnessConfig::default_amp_rolloff")]
    pub amp_rolloff: f32,
    #[serde(default = "RoughnessConfig::default_shape_a")]
    pub shape_a: f32,
    #[serde(default = "RoughnessConfig::default_shape_b")]
    pub shape_b: f32,
}

impl RoughnessConfig {
    fn default_f0_hz() -> f32 {
        261.63
    }
    fn default_partials() -> u32 {
        7
    }
    fn default_amp_rolloff() -> f32 {
        0.8
    }
    fn default_shape_a() -> f32 {
        3.5
    }
    fn default_shape_b() -> f32 {
        5.75
    }
}

impl Default for RoughnessConfig {
    fn default() -> Self {
        Self {
            f0_hz: Self::default_f0_hz(),
            partials: Self::default_partials(),
            amp_rolloff: Self::default_amp_rolloff(),
            shape_a: Self::default_shape_a(),
            shape_b: Self::default_shape_b(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    #[serde(default)]
    pub mode: PlacementMode,
    #[serde(default = "PlacementConfig::default_rho")]
    pub rho: f32,
    #[serde(default = "PlacementConfig::default_beta")]
    pub beta: f32,
    #[serde(default = "PlacementConfig::default_blend")]
    pub blend: f32,
    #[serde(default = "PlacementConfig::default_kappa")]
    pub kappa: f32,
    #[serde(default = "PlacementConfig::default_gamma")]
    pub gamma: f32,
    #[serde(default = "PlacementConfig::default_spring")]
    pub spring: f32,
    #[serde(default = "PlacementConfig::default_iterations")]
    pub iterations: u32,
    #[serde(default = "PlacementConfig::default_repulse_blend")]
    pub repulse_blend: f32,
}

impl PlacementConfig {
    fn default_rho() -> f32 {
        0.5
    }
    fn default_beta() -> f32 {
        1.0
    }
    fn default_blend() -> f32 {
        0.65
    }
    fn default_kappa() -> f32 {
        4.0
    }
    fn default_gamma() -> f32 {
        0.5
    }
    fn default_spring() -> f32 {
        0.35
    }
    fn default_iterations() -> u32 {
        48
    }
    fn default_repulse_blend() -> f32 {
        1.0
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            mode: PlacementMode::default(),
            rho: Self::default_rho(),
            beta: Self::default_beta(),
            blend: Self::default_blend(),
            kappa: Self::default_kappa(),
            gamma: Self::default_gamma(),
            spring: Self::default_spring(),
            iterations: Self::default_iterations(),
            repulse_blend: Self::default_repulse_blend(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default = "CalibrationConfig::default_gamma")]
    pub gamma: f32,
}

impl CalibrationConfig {
    fn default_gamma() -> f32 {
        0.5
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            gamma: Self::default_gamma(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub tension: TensionConfig,
    #[serde(default)]
    pub roughness: RoughnessConfig,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub calibration: CalibrationConfig,
}

impl AppConfig {
    /// Flatten the config into the engine's parameter set.
    pub fn eval_params(&self) -> EvalParams {
        EvalParams {
            tension: TensionParams {
                edo: EdoSpace::new(self.tension.edo_steps.max(1)),
                ji_sigma_cents: self.tension.ji_sigma_cents,
                ji_lambda: self.tension.ji_lambda,
                roughness: RoughnessParams {
                    f0_hz: self.roughness.f0_hz,
                    partials: self.roughness.partials,
                    amp_rolloff: self.roughness.amp_rolloff,
                    shape_a: self.roughness.shape_a,
                    shape_b: self.roughness.shape_b,
                },
                alpha: 0.0, // set by calibration at run start
                register_k: self.tension.register_k,
                register_damping: self.tension.register_damping,
                compound_m: self.tension.compound_m,
            },
            placement: PlacementParams {
                rho: self.placement.rho,
                beta: self.placement.beta,
                blend: self.placement.blend,
                kappa: self.placement.kappa,
                gamma: self.placement.gamma,
                spring: self.placement.spring,
                iterations: self.placement.iterations,
                repulse_blend: self.placement.repulse_blend,
            },
            mode: self.placement.mode,
            roughness_gamma: self.calibration.gamma,
        }
    }

    fn round_f32(x: f32) -> f32 {
        (x * 1_000_000.0).round() / 1_000_000.0
    }

    fn format_f32_compact(x: f32) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    fn rounded(mut self) -> Self {
        self.tension.ji_sigma_cents = Self::round_f32(self.tension.ji_sigma_cents);
        self.tension.ji_lambda = Self::round_f32(self.tension.ji_lambda);
        self.tension.register_k = Self::round_f32(self.tension.register_k);
        self.tension.compound_m = Self::round_f32(self.tension.compound_m);
        self.roughness.f0_hz = Self::round_f32(self.roughness.f0_hz);
        self.roughness.amp_rolloff = Self::round_f32(self.roughness.amp_rolloff);
        self.roughness.shape_a = Self::round_f32(self.roughness.shape_a);
        self.roughness.shape_b = Self::round_f32(self.roughness.shape_b);
        self.placement.rho = Self::round_f32(self.placement.rho);
        self.placement.beta = Self::round_f32(self.placement.beta);
        self.placement.blend = Self::round_f32(self.placement.blend);
        self.calibration.gamma = Self::round_f32(self.calibration.gamma);
        self
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default().rounded();
        if let Ok(text) = toml::to_string_pretty(&default_cfg) {
            let mut commented = String::new();
            for line in text.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    commented.push('\n');
                } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    commented.push_str(line);
                    commented.push('\n');
                } else {
                    let mut out_line = line.to_string();
                    if let Some((lhs, rhs)) = line.split_once('=') {
                        let rhs_trim = rhs.trim();
                        let has_decimal = rhs_trim.contains('.');
                        if (has_decimal || rhs_trim.contains('e') || rhs_trim.contains('E'))
                            && !rhs_trim.contains('"')
                            && rhs_trim != "true"
                            && rhs_trim != "false"
                        {
                            if let Ok(val) = rhs_trim.parse::<f32>() {
                                let mut formatted = Self::format_f32_compact(val);
                                if has_decimal && !formatted.contains('.') {
                                    formatted.push_str(".0");
                                }
                                out_line = format!("{} = {}", lhs.trim(), formatted);
                            }
                        }
                    }
                    commented.push_str("# ");
                    commented.push_str(&out_line);
                    commented.push('\n');
                }
            }
            if let Err(err) = fs::write(path_obj, commented) {
                eprintln!("Failed to write default config to {path}: {err}");
            }
        } else {
            eprintln!("Failed to serialize default config; continuing with defaults");
        }
        default_cfg
    }
}
