//! HTTP clients for the supported job-search APIs.

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config;
use crate::error::Result;

fn build_http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(config::user_agent())
        .build()?;
    Ok(client)
}
