pub mod azure_openai_client;
pub mod config;
pub mod search;
