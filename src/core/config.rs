use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin used when building shareable report links
    pub public_base_url: String,
    /// User stamped on non-anonymous submissions
    pub current_user_id: u32,
    /// Number of reports shown on the home view
    pub recent_reports_limit: usize,
}

/// Simulated backend latency for the in-memory stores
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub simulate_latency: bool,
    /// Multiplier applied to every base delay
    pub latency_scale: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            store: StoreConfig::from_env()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    const DEFAULT_PUBLIC_BASE_URL: &'static str = "http://localhost:5173";
    const DEFAULT_CURRENT_USER_ID: u32 = 1;
    const DEFAULT_RECENT_REPORTS_LIMIT: usize = 6;

    pub fn from_env() -> Result<Self, String> {
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_PUBLIC_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let current_user_id = env::var("CURRENT_USER_ID")
            .unwrap_or_else(|_| Self::DEFAULT_CURRENT_USER_ID.to_string())
            .parse::<u32>()
            .map_err(|e| format!("Invalid CURRENT_USER_ID: {}", e))?;

        let recent_reports_limit = env::var("RECENT_REPORTS_LIMIT")
            .unwrap_or_else(|_| Self::DEFAULT_RECENT_REPORTS_LIMIT.to_string())
            .parse::<usize>()
            .map_err(|_| "RECENT_REPORTS_LIMIT must be a valid number".to_string())?;

        Ok(Self {
            public_base_url,
            current_user_id,
            recent_reports_limit,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_base_url: Self::DEFAULT_PUBLIC_BASE_URL.to_string(),
            current_user_id: Self::DEFAULT_CURRENT_USER_ID,
            recent_reports_limit: Self::DEFAULT_RECENT_REPORTS_LIMIT,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let simulate_latency = env::var("SIMULATE_LATENCY")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|e| format!("Invalid SIMULATE_LATENCY: {}", e))?;

        let latency_scale = env::var("LATENCY_SCALE")
            .unwrap_or_else(|_| "1.0".to_string())
            .parse::<f64>()
            .map_err(|e| format!("Invalid LATENCY_SCALE: {}", e))?;

        Ok(Self {
            simulate_latency,
            latency_scale: Self::check_scale(latency_scale)?,
        })
    }

    /// Largest accepted `LATENCY_SCALE`
    pub const MAX_LATENCY_SCALE: f64 = 100.0;

    fn check_scale(scale: f64) -> Result<f64, String> {
        if !scale.is_finite() || !(0.0..=Self::MAX_LATENCY_SCALE).contains(&scale) {
            return Err(format!(
                "LATENCY_SCALE must be a number between 0 and {}",
                Self::MAX_LATENCY_SCALE
            ));
        }
        Ok(scale)
    }

    /// Effective delay for an operation whose mock latency is `base`.
    /// Out-of-range scales are clamped; a non-finite one means no delay.
    pub fn delay_for(&self, base: Duration) -> Duration {
        if !self.simulate_latency || !self.latency_scale.is_finite() {
            return Duration::ZERO;
        }
        base.mul_f64(self.latency_scale.clamp(0.0, Self::MAX_LATENCY_SCALE))
    }

    /// Configuration without any simulated delay
    pub fn instant() -> Self {
        Self {
            simulate_latency: false,
            latency_scale: 0.0,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            latency_scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_for_scales_base() {
        let config = StoreConfig {
            simulate_latency: true,
            latency_scale: 0.5,
        };
        assert_eq!(
            config.delay_for(Duration::from_millis(400)),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn test_delay_for_disabled() {
        assert_eq!(
            StoreConfig::instant().delay_for(Duration::from_millis(500)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_latency_scale_bounds() {
        assert_eq!(StoreConfig::check_scale(0.0), Ok(0.0));
        assert_eq!(StoreConfig::check_scale(2.5), Ok(2.5));
        assert!(StoreConfig::check_scale(1e20).is_err());
        assert!(StoreConfig::check_scale(-1.0).is_err());
        assert!(StoreConfig::check_scale(f64::NAN).is_err());
    }

    #[test]
    fn test_delay_for_huge_scale_is_clamped() {
        let config = StoreConfig {
            simulate_latency: true,
            latency_scale: 1e20,
        };
        assert_eq!(
            config.delay_for(Duration::from_millis(500)),
            Duration::from_millis(50_000)
        );
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.public_base_url, "http://localhost:5173");
        assert_eq!(config.current_user_id, 1);
        assert_eq!(config.recent_reports_limit, 6);
    }
}
