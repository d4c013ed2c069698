// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::search_query::SearchQuery;
use crate::domain::parsers::{SiteSchema, SiteSchemaKind};
use crate::engines::http_engine::DEFAULT_USER_AGENT;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 应用程序配置设置
///
/// 包含站点、页面抓取和报告投递的所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 站点配置
    pub site: SiteSettings,
    /// 抓取配置
    pub fetcher: FetcherSettings,
    /// 通知配置
    pub notifier: NotifierSettings,
}

/// 站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// 站点标记类型
    pub schema: SiteSchemaKind,
    /// 拼接相对链接用的根地址，为空时使用站点类型的默认值
    pub base_url: Option<String>,
    /// 报告标题中的来源名称
    pub label: String,
    /// 按顺序排列的搜索URL
    pub queries: Vec<String>,
}

/// 抓取器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetcherKind {
    /// 无头浏览器
    Browser,
    /// 普通HTTP请求
    Http,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 抓取器类型
    pub kind: FetcherKind,
    /// 页面加载后的等待时间（毫秒）
    pub settle_delay_ms: u64,
    /// 远程Chrome调试地址
    pub remote_debugging_url: Option<String>,
    /// HTTP抓取器的User-Agent
    pub user_agent: String,
}

/// 通知器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierKind {
    /// 标准输出
    Console,
    /// SMTP邮件服务器
    Smtp,
    /// HTTP邮件中继
    MailRelay,
}

/// 通知配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierSettings {
    /// 通知器类型
    pub kind: NotifierKind,
    /// SMTP服务器地址
    pub smtp_host: String,
    /// SMTP服务器端口
    pub smtp_port: u16,
    /// SMTP是否使用STARTTLS
    pub starttls: bool,
    /// SMTP登录用户名，为空时使用发件人
    pub username: Option<String>,
    /// SMTP登录密码
    pub password: Option<String>,
    /// 邮件中继地址
    pub endpoint: Option<String>,
    /// 邮件中继令牌
    pub api_key: Option<String>,
    /// 请求体签名密钥
    pub signing_secret: Option<String>,
    /// 发件人
    pub sender: Option<String>,
    /// 收件人
    pub receiver: Option<String>,
    /// 邮件主题，为空时使用站点名称
    pub subject: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `JOBDIGEST__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::load_from(Path::new("config"), &env)
    }

    /// 从指定目录加载配置
    pub fn load_from(dir: &Path, env: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with default settings
            .set_default("site.schema", "grid_table")?
            .set_default("site.label", "Penn Government Jobs")?
            .set_default("site.queries", Vec::<String>::new())?
            // Default fetcher settings
            .set_default("fetcher.kind", "browser")?
            .set_default("fetcher.settle_delay_ms", 5000)?
            .set_default("fetcher.user_agent", DEFAULT_USER_AGENT)?
            // Default notifier settings
            .set_default("notifier.kind", "console")?
            .set_default("notifier.smtp_host", "smtp.gmail.com")?
            .set_default("notifier.smtp_port", 587)?
            .set_default("notifier.starttls", true)?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(env).to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix("JOBDIGEST")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("site.queries")
                    .try_parsing(true),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置
    ///
    /// 拒绝空的查询列表、无法推导分组键的查询、缺少收发件人或密码的SMTP，
    /// 以及缺少地址或收件人的邮件中继
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.queries.is_empty() {
            return Err(ConfigError::Message(
                "site.queries must contain at least one search URL".to_string(),
            ));
        }
        self.search_queries()?;

        if self.notifier.kind == NotifierKind::Smtp {
            if self.notifier.sender.is_none() || self.notifier.receiver.is_none() {
                return Err(ConfigError::Message(
                    "notifier.sender and notifier.receiver are required for smtp".to_string(),
                ));
            }
            if self.notifier.password.is_none() {
                return Err(ConfigError::Message(
                    "notifier.password is required for smtp".to_string(),
                ));
            }
        }

        if self.notifier.kind == NotifierKind::MailRelay {
            if self.notifier.endpoint.is_none() {
                return Err(ConfigError::Message(
                    "notifier.endpoint is required for mail_relay".to_string(),
                ));
            }
            if self.notifier.receiver.is_none() {
                return Err(ConfigError::Message(
                    "notifier.receiver is required for mail_relay".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// 按配置顺序构建搜索查询
    pub fn search_queries(&self) -> Result<Vec<SearchQuery>, ConfigError> {
        self.site
            .queries
            .iter()
            .map(|url| {
                SearchQuery::new(url.as_str()).ok_or_else(|| {
                    ConfigError::Message(format!(
                        "cannot derive a search key from query '{}' (expected '=')",
                        url
                    ))
                })
            })
            .collect()
    }

    /// 站点标记定义
    pub fn site_schema(&self) -> SiteSchema {
        match &self.site.base_url {
            Some(base_url) => SiteSchema::new(self.site.schema, base_url.clone()),
            None => SiteSchema::with_default_base(self.site.schema),
        }
    }

    /// 邮件主题
    pub fn subject(&self) -> &str {
        self.notifier.subject.as_deref().unwrap_or(&self.site.label)
    }
}
