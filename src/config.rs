use clap::Parser;

/// NatStat ELO vs moneyline value screener
#[derive(Parser, Debug, Clone)]
#[command(name = "natstat-value", version, about)]
pub struct Config {
    /// NatStat v3 API key
    #[arg(long, env = "NS_API_KEY")]
    pub api_key: Option<String>,

    /// NatStat API base URL
    #[arg(long, env = "NS_API_URL", default_value = "https://api3.natst.at")]
    pub api_base_url: String,

    /// Path of the persisted value-history CSV
    #[arg(long, env = "DATA_PATH", default_value = "ntst_value_data.csv")]
    pub data_path: String,

    /// Courtesy delay between successive league requests, in seconds
    #[arg(long, env = "REQUEST_DELAY_SECS", default_value = "3")]
    pub request_delay_secs: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value = "10")]
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.api_key.as_deref() {
            None | Some("") => {
                anyhow::bail!("NS_API_KEY is required to query the NatStat API")
            }
            Some(_) => {}
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("http_timeout_secs must be positive");
        }
        Ok(())
    }
}
