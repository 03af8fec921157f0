use crate::identity::Role;
use anyhow::anyhow;
use std::str::FromStr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_base_url: String,
    pub push_url: String,

    ///
    /// Missing email means no live-update channel is joined,
    /// the feed runs poll-only
    ///
    pub user_email: Option<String>,
    pub user_role: Role,

    pub page_limit: u32,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("CREWDESK_NOTIFIER_FEED_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("CREWDESK_NOTIFIER_FEED_LOG_FILENAME")?;
        let api_base_url = Self::env_var("CREWDESK_NOTIFIER_FEED_API_BASE_URL")?;
        let push_url = Self::env_var("CREWDESK_NOTIFIER_FEED_PUSH_URL")?;
        let user_email = std::env::var("CREWDESK_NOTIFIER_FEED_USER_EMAIL").ok();
        let user_role = Self::env_var("CREWDESK_NOTIFIER_FEED_USER_ROLE")?;
        let user_role = Role::from_str(&user_role)
            .map_err(|_| anyhow!("CREWDESK_NOTIFIER_FEED_USER_ROLE is not a known role"))?;
        let page_limit = Self::env_var("CREWDESK_NOTIFIER_FEED_PAGE_LIMIT")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            api_base_url,
            push_url,
            user_email,
            user_role,
            page_limit,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
