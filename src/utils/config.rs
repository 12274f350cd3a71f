use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub content_dir: PathBuf,
}

impl Config {
    pub fn init() -> Self {
        Config {
            host: "localhost".to_string(),
            port: 3000,
            db_path: PathBuf::from("db/news.db"),
            content_dir: PathBuf::from("public/images"),
        }
    }

    /// Base URL that uploaded images are served under.
    pub fn public_base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn bind_addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_uses_host_and_port() {
        let config = Config::init();
        assert_eq!(config.public_base_url(), "http://localhost:3000");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
