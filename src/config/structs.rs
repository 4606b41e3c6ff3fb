use serde::{Deserialize, Serialize};

use crate::errors::VersoError;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - server: 监听地址、端口、worker 数量
/// - database: 连接串、数据库名、连接池与单次调用超时
/// - routes: API 路由前缀
/// - cors: 跨域策略
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV(VERSO__*) > 配置文件 > DATABASE_URL/DB_NAME > 默认值
    /// ENV 前缀：VERSO，分隔符：__
    /// 示例：VERSO__SERVER__PORT=9999
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 0. 兼容不带前缀的连接变量，优先级最低
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("database.database_url", url)?;
        }
        if let Ok(name) = std::env::var("DB_NAME") {
            builder = builder.set_default("database.database_name", name)?;
        }

        let settings = builder
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 VERSO，分隔符 __
            .add_source(
                Environment::with_prefix("VERSO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 校验必填项，缺失时拒绝启动
    pub fn validate(&self) -> Result<(), VersoError> {
        if self.database.database_url.trim().is_empty() {
            return Err(VersoError::database_config(
                "database.database_url is required (VERSO__DATABASE__DATABASE_URL)",
            ));
        }
        if self.database.database_name.trim().is_empty() {
            return Err(VersoError::database_config(
                "database.database_name is required (VERSO__DATABASE__DATABASE_NAME)",
            ));
        }
        if self.database.timeout == 0 {
            return Err(VersoError::database_config(
                "database.timeout must be greater than 0",
            ));
        }
        if !self.routes.api_prefix.is_empty() && !self.routes.api_prefix.starts_with('/') {
            return Err(VersoError::database_config(format!(
                "routes.api_prefix must start with '/': {}",
                self.routes.api_prefix
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let mut sample_config = Self::default();
        sample_config.database.database_url = "sqlite://verso.db".to_string();
        sample_config.database.database_name = "verso".to_string();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), VersoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VersoError::serialization(format!("TOML 序列化失败: {}", e)))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub database_url: String,
    #[serde(default)]
    pub database_name: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    /// 单次数据库调用超时（秒）
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
}

impl DatabaseConfig {
    /// 组合最终连接串
    ///
    /// MySQL/PostgreSQL 的 URL 未携带库名时，追加 `database_name`；
    /// SQLite 直接使用 `database_url`。
    pub fn connection_url(&self) -> Result<String, VersoError> {
        let raw = self.database_url.trim();
        if raw.is_empty() {
            return Err(VersoError::database_config("database_url 未设置"));
        }

        let is_server = ["mysql://", "mariadb://", "postgres://", "postgresql://"]
            .iter()
            .any(|scheme| raw.starts_with(scheme));
        if !is_server {
            return Ok(raw.to_string());
        }

        let mut url = url::Url::parse(raw)
            .map_err(|e| VersoError::database_config(format!("数据库 URL 解析失败: {}", e)))?;
        if url.path().trim_matches('/').is_empty() {
            if self.database_name.trim().is_empty() {
                return Err(VersoError::database_config("database_name 未设置"));
            }
            url.set_path(&format!("/{}", self.database_name.trim()));
        }
        Ok(url.to_string())
    }
}

/// 路由配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `["*"]` 表示允许任意来源
    #[serde(default = "default_cors_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_allow_credentials")]
    pub allow_credentials: bool,
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8001
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout() -> u64 {
    10
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_allow_credentials() -> bool {
    true
}

fn default_cors_max_age() -> usize {
    3600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            database_name: String::new(),
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            api_prefix: default_api_prefix(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_cors_allowed_origins(),
            allow_credentials: default_cors_allow_credentials(),
            max_age: default_cors_max_age(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
