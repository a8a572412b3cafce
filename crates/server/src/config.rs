//! Server configuration

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GEOCODER_BASE_URL: &str = "https://api.opencagedata.com";
const DEFAULT_LOCALITY_QUALIFIER: &str = ", Thane, India";

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub cors_origins: Vec<String>,
    pub groq_api_key: Option<String>,
    pub opencage_api_key: Option<String>,
    pub llm_model: String,
    pub llm_base_url: String,
    pub geocoder_base_url: String,
    /// Appended to every hospital name before geocoding
    pub locality_qualifier: String,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first if present
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup; blank values count as unset
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_opt = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let env_or = |key: &str, default: &str| env_opt(key).unwrap_or_else(|| default.to_string());

        Self {
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            cors_origins: env_or("CORS_ORIGINS", "*")
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            groq_api_key: env_opt("GROQ_API_KEY"),
            opencage_api_key: env_opt("OPENCAGE_API_KEY"),
            llm_model: env_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            llm_base_url: env_or("LLM_BASE_URL", DEFAULT_LLM_BASE_URL),
            geocoder_base_url: env_or("GEOCODER_BASE_URL", DEFAULT_GEOCODER_BASE_URL),
            locality_qualifier: env_or("LOCALITY_QUALIFIER", DEFAULT_LOCALITY_QUALIFIER),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            cors_origins: vec!["*".to_string()],
            groq_api_key: None,
            opencage_api_key: None,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            geocoder_base_url: DEFAULT_GEOCODER_BASE_URL.to_string(),
            locality_qualifier: DEFAULT_LOCALITY_QUALIFIER.to_string(),
        }
    }
}
