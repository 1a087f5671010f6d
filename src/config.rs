pub const DEMO_CONFIG_FILE: &str = "akima.ini";
use ini::Ini;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;
use akima_spline::{AkimaOptions, SegmentLookup, consts::DEGENERACY_RATIO};
pub fn parse_f64_list(s: &str) -> Option<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f64>().ok())
        .collect()
}
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub queries: Vec<f64>,
    pub lookup: SegmentLookup,
    pub degeneracy_ratio: f64,
}
impl DemoConfig {
    pub fn options(&self) -> AkimaOptions {
        AkimaOptions {
            lookup: self.lookup,
            degeneracy_ratio: self.degeneracy_ratio,
        }
    }
}
pub static DEMO_CONFIG: Lazy<DemoConfig> = Lazy::new(|| load_demo_config(DEMO_CONFIG_FILE));
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> DemoConfig {
    let ini = match Ini::load_from_file(path.as_ref()) {
        Ok(ini) => ini,
        Err(_) => return DemoConfig::default(),
    };
    demo_config_from_ini(&ini)
}
pub fn demo_config_from_ini(ini: &Ini) -> DemoConfig {
    let default_section: HashMap<String, String> = ini
        .section(None::<String>)
        .map(|props| props.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
        .unwrap_or_default();
    let defaults = DemoConfig::default();
    let list = |key: &str, fallback: Vec<f64>| {
        default_section
            .get(key)
            .and_then(|s| parse_f64_list(s))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                if default_section.contains_key(key) {
                    warn!("Ignoring malformed '{}' in {}", key, DEMO_CONFIG_FILE);
                }
                fallback
            })
    };
    DemoConfig {
        x: list("x", defaults.x),
        y: list("y", defaults.y),
        queries: list("queries", defaults.queries),
        lookup: default_section
            .get("lookup")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.lookup),
        degeneracy_ratio: default_section
            .get("degeneracy_ratio")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|r| r.is_finite() && *r >= 0.0)
            .unwrap_or(defaults.degeneracy_ratio),
    }
}
impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            x: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            y: vec![0.1, 0.7, 0.6, 1.1, 0.9],
            queries: vec![1.5, 2.5, 3.5, 4.5],
            lookup: SegmentLookup::NearestKnot,
            degeneracy_ratio: DEGENERACY_RATIO,
        }
    }
}
