//! Intro narrative and the flavor name of whoever tells it.
//!
//! The narrator's name comes from the randomuser.me API. Any failure, or a
//! build without the `intro-name` feature, falls back to the configured name.

use anyhow::{anyhow, Result};
use log::{debug, warn};
use serde::Deserialize;

use crate::config::IntroConfig;
use crate::errors::GameError;
use crate::game::console::Console;

/// randomuser.me response, reduced to the fields we read.
#[derive(Debug, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
pub struct RandomUser {
    pub name: RandomUserName,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserName {
    pub first: String,
}

/// Upper-case the first character, lower-case the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Extract and capitalize the first name from a randomuser.me JSON body.
pub fn parse_first_name(body: &str) -> Result<String> {
    let response: RandomUserResponse =
        serde_json::from_str(body).map_err(|e| anyhow!("Failed to parse JSON response: {}", e))?;
    let first = response
        .results
        .first()
        .map(|u| capitalize(&u.name.first))
        .ok_or_else(|| anyhow!("response contained no results"))?;
    if first.is_empty() {
        return Err(anyhow!("response contained an empty first name"));
    }
    Ok(first)
}

/// Fetch the narrator's name, falling back to `config.fallback_name` on any failure.
pub async fn narrator_name(config: &IntroConfig) -> String {
    if !config.enabled {
        debug!("intro name lookup disabled");
        return config.fallback_name.clone();
    }
    match fetch_name(config).await {
        Ok(name) => {
            debug!("intro narrator: {}", name);
            name
        }
        Err(e) => {
            warn!(
                "Failed to fetch intro name from {}: {} (using '{}')",
                config.api_url, e, config.fallback_name
            );
            config.fallback_name.clone()
        }
    }
}

#[cfg(feature = "intro-name")]
async fn fetch_name(config: &IntroConfig) -> Result<String> {
    use std::time::Duration;
    use tokio::time::timeout;

    let client = reqwest::Client::new();
    let timeout_duration = Duration::from_secs(config.timeout_seconds as u64);
    let response = timeout(timeout_duration, client.get(&config.api_url).send())
        .await
        .map_err(|_| anyhow!("Request timeout after {}s", config.timeout_seconds))?
        .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(anyhow!("API returned status: {}", response.status()));
    }

    let body = timeout(timeout_duration, response.text())
        .await
        .map_err(|_| anyhow!("Response body timeout after {}s", config.timeout_seconds))?
        .map_err(|e| anyhow!("Failed to read response body: {}", e))?;
    parse_first_name(&body)
}

#[cfg(not(feature = "intro-name"))]
async fn fetch_name(_config: &IntroConfig) -> Result<String> {
    Err(anyhow!("built without the intro-name feature"))
}

pub fn print_intro(console: &mut dyn Console, narrator: &str) -> Result<(), GameError> {
    let lines = [
        "Hello! Welcome to Victory Road!".to_string(),
        format!(
            "My name is, {}, and let me tell you about what you should expect from this game!",
            narrator
        ),
        "Your goal is to get through the maze with your 3 types: Dark, Psychic, and Fighting."
            .to_string(),
        "They're set up as a type triangle.".to_string(),
        "That means Dark is super-effective on Psychic, Psychic is super-effective on Fighting, and Fighting is super-effective on Dark.".to_string(),
        "You will end up fighting trainers, finding items, and answering fun Python Trivia! Are you Ready?".to_string(),
    ];
    for line in &lines {
        console.say(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::console::ScriptedConsole;

    #[test]
    fn parses_randomuser_payload() {
        let body = r#"{"results":[{"gender":"female","name":{"title":"Ms","first":"émilie","last":"Roux"}}],"info":{"seed":"x"}}"#;
        assert_eq!(parse_first_name(body).unwrap(), "Émilie");
    }

    #[test]
    fn rejects_empty_or_malformed_payloads() {
        assert!(parse_first_name(r#"{"results":[]}"#).is_err());
        assert!(parse_first_name(r#"{"results":[{"name":{"first":"  "}}]}"#).is_err());
        assert!(parse_first_name("<html>rate limited</html>").is_err());
    }

    #[test]
    fn capitalize_normalizes_case() {
        assert_eq!(capitalize("aLIcE"), "Alice");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn disabled_lookup_uses_fallback() {
        let config = IntroConfig {
            enabled: false,
            ..IntroConfig::default()
        };
        assert_eq!(narrator_name(&config).await, config.fallback_name);
    }

    #[tokio::test]
    async fn unreachable_api_uses_fallback() {
        let config = IntroConfig {
            enabled: true,
            api_url: "http://127.0.0.1:9/api/".to_string(),
            timeout_seconds: 1,
            fallback_name: "Oak".to_string(),
        };
        assert_eq!(narrator_name(&config).await, "Oak");
    }

    #[test]
    fn intro_names_the_narrator() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        print_intro(&mut console, "Oak").unwrap();
        assert!(console.printed("Hello! Welcome to Victory Road!"));
        assert!(console.printed("My name is, Oak,"));
    }
}
