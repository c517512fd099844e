//! Run configuration, assembled once in `main` and handed to every component.

use std::time::Duration;

pub const DEFAULT_LANGUAGES: &[&str] = &[
    "Python",
    "C++",
    "C#",
    "Java",
    "JavaScript",
    "C",
    "PHP",
    "Swift",
    "Go",
    "Kotlin",
];

#[derive(Debug, Clone)]
pub struct HeadHunterSettings {
    pub base_url: String,
    /// Ask the API to return only vacancies with a published salary.
    pub only_with_salary: bool,
    /// Fail the run when the location matches no area instead of searching everywhere.
    pub strict_area: bool,
}

#[derive(Debug, Clone)]
pub struct SuperJobSettings {
    pub base_url: String,
    pub api_key: String,
    /// Exclude "salary by agreement" vacancies server-side.
    pub no_agreement: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub languages: Vec<String>,
    /// Location name, already capitalized.
    pub area: Option<String>,
    /// Lookback period in days.
    pub period: Option<u32>,
    pub page_pause: Duration,
    pub language_pause: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    pub headhunter: HeadHunterSettings,
    pub superjob: SuperJobSettings,
}

impl Config {
}

/// Letters, spaces and hyphens only: "Moscow", "Nizhny Novgorod", "Санкт-Петербург".
pub fn is_place_name(value: &str) -> bool {
    value.chars().any(char::is_alphabetic)
        && value
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
}

/// "moSCOW" -> "Moscow"
pub fn capitalize(value: &str) -> String {
    let mut chars = value.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        languages: vec!["Rust".to_string()],
        area: None,
        period: None,
        page_pause: Duration::ZERO,
        language_pause: Duration::ZERO,
        timeout: Duration::from_secs(5),
        user_agent: "collector-tests/1.0".to_string(),
        headhunter: HeadHunterSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            only_with_salary: true,
            strict_area: false,
        },
        superjob: SuperJobSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
            no_agreement: true,
        },
    }
}
