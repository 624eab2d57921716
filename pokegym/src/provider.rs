//! OpenAI-compatible providers the gym knows how to reach.
//!
//! Each provider has a default base URL, an environment variable that can
//! override it, and a credential rule: local servers accept a placeholder
//! key, hosted ones need a real one from the environment.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A known OpenAI-compatible backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Local Ollama server.
    Ollama,
    /// OpenAI hosted API.
    OpenAI,
    /// OpenRouter hosted API.
    OpenRouter,
    /// Local LM Studio server.
    LmStudio,
}

impl Provider {
    /// All providers, in display order.
    pub const ALL: [Self; 4] = [Self::Ollama, Self::OpenAI, Self::OpenRouter, Self::LmStudio];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OpenAI => "openai",
            Self::OpenRouter => "openrouter",
            Self::LmStudio => "lmstudio",
        }
    }

    /// Base URL used when no override is configured.
    #[must_use]
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::Ollama => "http://localhost:11434/v1",
            Self::OpenAI => "https://api.openai.com/v1",
            Self::OpenRouter => "https://openrouter.ai/api/v1",
            Self::LmStudio => "http://localhost:1234/v1",
        }
    }

    /// Environment variable that overrides the base URL.
    #[must_use]
    pub const fn base_url_env(&self) -> &'static str {
        match self {
            Self::Ollama => "OLLAMA_BASE_URL",
            Self::OpenAI => "OPENAI_BASE_URL",
            Self::OpenRouter => "OPENROUTER_BASE_URL",
            Self::LmStudio => "LMSTUDIO_BASE_URL",
        }
    }

    /// Environment variable holding the API key, for providers that check it.
    #[must_use]
    pub const fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::OpenRouter => Some("OPENROUTER_API_KEY"),
            Self::Ollama | Self::LmStudio => None,
        }
    }

    /// Key sent to servers that do not validate credentials.
    #[must_use]
    pub const fn placeholder_api_key(&self) -> Option<&'static str> {
        match self {
            Self::Ollama => Some("ollama"),
            Self::LmStudio => Some("lm-studio"),
            Self::OpenAI | Self::OpenRouter => None,
        }
    }

    /// Resolves the base URL through `lookup`.
    ///
    /// An unset or empty variable falls back to [`Self::default_base_url`].
    /// Any other value, whitespace included, is returned as-is.
    #[must_use]
    pub fn resolve_base_url<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        non_empty(lookup(self.base_url_env()))
            .unwrap_or_else(|| self.default_base_url().to_owned())
    }

    /// Resolves the API key through `lookup`, falling back to the placeholder.
    ///
    /// Returns `None` when the provider needs a real key and none is set.
    #[must_use]
    pub fn resolve_api_key<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key_env()
            .and_then(|name| non_empty(lookup(name)))
            .or_else(|| self.placeholder_api_key().map(str::to_owned))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAI),
            "openrouter" => Ok(Self::OpenRouter),
            "lmstudio" | "lm-studio" => Ok(Self::LmStudio),
            other => Err(Error::config(format!(
                "unknown provider '{other}' (expected one of: ollama, openai, openrouter, lmstudio)"
            ))),
        }
    }
}

/// Reads a variable from the process environment.
#[must_use]
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("ollama".parse::<Provider>().unwrap(), Provider::Ollama);
        assert_eq!(" OpenAI ".parse::<Provider>().unwrap(), Provider::OpenAI);
        assert_eq!("lm-studio".parse::<Provider>().unwrap(), Provider::LmStudio);
    }

    #[test]
    fn unknown_name_is_config_error() {
        let err = "gemini".parse::<Provider>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("unknown provider 'gemini'"));
    }

    #[test]
    fn round_trips_display() {
        for provider in Provider::ALL {
            assert_eq!(provider.to_string().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn base_url_defaults_when_unset_or_empty() {
        let unset = vars(&[]);
        assert_eq!(
            Provider::Ollama.resolve_base_url(&unset),
            "http://localhost:11434/v1"
        );

        let empty = vars(&[("OLLAMA_BASE_URL", "")]);
        assert_eq!(
            Provider::Ollama.resolve_base_url(&empty),
            "http://localhost:11434/v1"
        );
    }

    #[test]
    fn base_url_override_wins() {
        let custom = vars(&[("OLLAMA_BASE_URL", "http://gpu-box:11434/v1")]);
        assert_eq!(
            Provider::Ollama.resolve_base_url(&custom),
            "http://gpu-box:11434/v1"
        );
    }

    #[test]
    fn whitespace_base_url_is_not_treated_as_unset() {
        let blank = vars(&[("OLLAMA_BASE_URL", "   ")]);
        assert_eq!(Provider::Ollama.resolve_base_url(&blank), "   ");
    }

    #[test]
    fn local_providers_use_placeholder_key() {
        let unset = vars(&[]);
        assert_eq!(
            Provider::Ollama.resolve_api_key(&unset).as_deref(),
            Some("ollama")
        );
        assert_eq!(
            Provider::LmStudio.resolve_api_key(&unset).as_deref(),
            Some("lm-studio")
        );
    }

    #[test]
    fn hosted_providers_need_a_key() {
        assert!(Provider::OpenAI.resolve_api_key(vars(&[])).is_none());
        assert!(
            Provider::OpenAI
                .resolve_api_key(vars(&[("OPENAI_API_KEY", "")]))
                .is_none()
        );
        assert_eq!(
            Provider::OpenRouter
                .resolve_api_key(vars(&[("OPENROUTER_API_KEY", "sk-or-1")]))
                .as_deref(),
            Some("sk-or-1")
        );
    }
}
