use std::time::Duration;

use clap::Parser;

use crate::config::{
    capitalize, Config, HeadHunterSettings, SuperJobSettings, DEFAULT_LANGUAGES,
};
use crate::providers::{headhunter, superjob};

#[derive(Parser, Debug)]
#[command(name = "collector")]
#[command(about = "Average advertised salary per programming language on HeadHunter and SuperJob")]
pub struct Cli {
    /// City or region name (e.g. "Moscow"), or a numeric HeadHunter area id
    #[arg(long, short = 'a')]
    pub area: Option<String>,

    /// Only consider vacancies published within this many days
    #[arg(long, short = 'p')]
    pub period: Option<u32>,

    /// Do not ask HeadHunter for salaried vacancies only
    #[arg(long)]
    pub no_salary_filter: bool,

    /// Keep SuperJob vacancies whose salary is "by agreement"
    #[arg(long)]
    pub include_agreement: bool,

    /// Abort when the area matches no HeadHunter region
    #[arg(long)]
    pub strict_area: bool,

    /// Language to search for (can be specified multiple times)
    #[arg(long = "language", short = 'l')]
    pub languages: Vec<String>,

    /// Pause between requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub pause_ms: u64,

    /// HTTP timeout per request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent sent to the providers
    #[arg(long, default_value = concat!("collector/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// SuperJob application secret key
    #[arg(long, env = "SUPERJOB_SECRET_KEY", hide_env_values = true)]
    pub superjob_key: String,

    #[arg(long, default_value = headhunter::BASE_URL)]
    pub hh_url: String,

    #[arg(long, default_value = superjob::BASE_URL)]
    pub superjob_url: String,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let languages = if self.languages.is_empty() {
            DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
        } else {
            self.languages
        };
        let pause = Duration::from_millis(self.pause_ms);

        Config {
            languages,
            area: self.area.as_deref().map(capitalize).filter(|a| !a.is_empty()),
            period: self.period,
            page_pause: pause,
            language_pause: pause,
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent,
            headhunter: HeadHunterSettings {
                base_url: self.hh_url,
                only_with_salary: !self.no_salary_filter,
                strict_area: self.strict_area,
            },
            superjob: SuperJobSettings {
                base_url: self.superjob_url,
                api_key: self.superjob_key,
                no_agreement: !self.include_agreement,
            },
        }
    }
}
