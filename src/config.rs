use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub const DEFAULT_UPSTREAM_URL: &str =
    "http://apis.data.go.kr/1140100/minAnalsInfoView5/minSimilarInfo5";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        // The upstream expects serviceKey pre-encoded; encode the raw key once
        // here so the rest of the process only ever sees the encoded form.
        service_key: urlencoding::encode(&get_env("MINWON_SERVICE_KEY")).into_owned(),
        upstream_url: get_env_or_default("MINWON_UPSTREAM_URL", DEFAULT_UPSTREAM_URL),
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:8000"),
    }
});

pub struct Config {
    pub service_key: String,
    pub upstream_url: String,
    pub bind_addr: String,
}

fn get_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("Missing required environment variable: {key}"))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
