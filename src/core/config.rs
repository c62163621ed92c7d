use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub zoho: ZohoConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Value sent in `Access-Control-Allow-Origin` on every response
    pub cors_allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Credentials and endpoints for Zoho Accounts (OAuth) and Zoho Desk (tickets)
#[derive(Clone)]
pub struct ZohoConfig {
    pub accounts_host: String,
    pub desk_host: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub org_id: String,
    /// Desk department that receives every feedback ticket of this deployment
    pub department_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            zoho: ZohoConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "*".to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origin,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Feedback Desk API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Feedback intake forwarding to Zoho Desk".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl ZohoConfig {
    const DEFAULT_ACCOUNTS_HOST: &'static str = "accounts.zoho.in";
    const DEFAULT_DESK_HOST: &'static str = "desk.zoho.in";

    pub fn from_env() -> Result<Self, String> {
        let accounts_host = env::var("ZOHO_ACCOUNTS_HOST")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ACCOUNTS_HOST.to_string());

        let desk_host = env::var("ZOHO_DESK_HOST")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DESK_HOST.to_string());

        Ok(Self {
            accounts_host,
            desk_host,
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            refresh_token: required("REFRESH_TOKEN")?,
            org_id: required("ORG_ID")?,
            department_id: required("ZOHO_DEPARTMENT_ID")?,
        })
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth/v2/token", base_url(&self.accounts_host))
    }

    pub fn tickets_url(&self) -> String {
        format!("{}/api/v1/tickets", base_url(&self.desk_host))
    }
}

// Secrets stay out of logs even when the config is debug-printed.
impl std::fmt::Debug for ZohoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZohoConfig")
            .field("accounts_host", &self.accounts_host)
            .field("desk_host", &self.desk_host)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("refresh_token", &"***")
            .field("org_id", &self.org_id)
            .field("department_id", &self.department_id)
            .finish()
    }
}

fn required(name: &str) -> Result<String, String> {
    env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("{} environment variable is required", name))
}

/// Bare hosts are served over https; a host with an explicit scheme is used as is.
fn base_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoho(accounts_host: &str, desk_host: &str) -> ZohoConfig {
        ZohoConfig {
            accounts_host: accounts_host.to_string(),
            desk_host: desk_host.to_string(),
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            refresh_token: "refresh".to_string(),
            org_id: "org".to_string(),
            department_id: "dept".to_string(),
        }
    }

    #[test]
    fn test_urls_for_bare_hosts() {
        let config = zoho("accounts.zoho.in", "desk.zoho.in");
        assert_eq!(config.token_url(), "https://accounts.zoho.in/oauth/v2/token");
        assert_eq!(config.tickets_url(), "https://desk.zoho.in/api/v1/tickets");
    }

    #[test]
    fn test_urls_keep_explicit_scheme() {
        let config = zoho("http://127.0.0.1:8080/", "https://desk.example.com");
        assert_eq!(config.token_url(), "http://127.0.0.1:8080/oauth/v2/token");
        assert_eq!(config.tickets_url(), "https://desk.example.com/api/v1/tickets");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let printed = format!("{:?}", zoho("a", "b"));
        assert!(!printed.contains("secret\""));
        assert!(!printed.contains("refresh\""));
        assert!(printed.contains("***"));
    }
}
