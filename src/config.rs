use serde::Deserialize;
use std::sync::OnceLock;

static CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

const CONFIG_FILE: &str = "life.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Integer pixels per cell; the window is grid size times this.
    pub scale: usize,
    /// The simulation advances once every N rendered frames.
    pub frames_per_step: u32,
    /// Probability a cell starts Alive when randomizing.
    pub fill_probability: f32,
    pub show_stats: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            scale: 6,
            frames_per_step: 10,
            fill_probability: 0.3,
            show_stats: true,
        }
    }
}

// Optional config file next to the binary. Missing file is not an error;
// a malformed one is reported and ignored.
fn load_config_file() -> Result<Option<SimulationConfig>, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match std::fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => {
                let config = serde_json::from_str::<SimulationConfig>(&contents)
                    .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE, e))?;
                Ok(Some(config))
            }
            Err(_) => Ok(None),
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        // Web builds configure through defaults and env-baked values only.
        Ok(None)
    }
}

fn env_usize(name: &str, fallback: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

fn env_u32(name: &str, fallback: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

fn apply_env_overrides(mut config: SimulationConfig) -> SimulationConfig {
    config.grid_width = env_usize("LIFE_GRID_WIDTH", config.grid_width);
    config.grid_height = env_usize("LIFE_GRID_HEIGHT", config.grid_height);
    config.scale = env_usize("LIFE_SCALE", config.scale);
    config.frames_per_step = env_u32("LIFE_FRAMES_PER_STEP", config.frames_per_step);
    if std::env::var("LIFE_HIDE_STATS").unwrap_or_default() == "true" {
        config.show_stats = false;
    }
    config
}

// Get the current configuration (cached after first call)
pub fn get_config() -> SimulationConfig {
    CONFIG
        .get_or_init(|| {
            let base = match load_config_file() {
                Ok(Some(config)) => {
                    println!("✓ Loaded {}", CONFIG_FILE);
                    config
                }
                Ok(None) => {
                    println!("ℹ No {} found, using defaults", CONFIG_FILE);
                    SimulationConfig::default()
                }
                Err(e) => {
                    println!("⚠ {}", e);
                    SimulationConfig::default()
                }
            };

            let config = apply_env_overrides(base);
            println!("Config initialized: {:?}", config);
            config
        })
        .clone()
}
