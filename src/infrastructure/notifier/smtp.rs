// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use metrics::counter;
use std::time::{Duration, Instant};
use tracing::{error, info};

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// SMTP配置
#[derive(Debug, Clone)]
pub struct SmtpOptions {
    /// 服务器地址
    pub host: String,
    /// 服务器端口
    pub port: u16,
    /// 是否使用STARTTLS，关闭时以明文连接（仅用于本地测试服务器）
    pub starttls: bool,
    /// 登录用户名
    pub username: Option<String>,
    /// 登录密码（应用专用密码）
    pub password: Option<String>,
    /// 发件人
    pub sender: String,
    /// 收件人
    pub receiver: String,
}

/// SMTP通知器
///
/// 直接连接邮件服务器（默认 smtp.gmail.com:587，STARTTLS）投递纯文本邮件
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    receiver: Mailbox,
    host: String,
}

impl SmtpNotifier {
    /// 创建SMTP通知器
    ///
    /// # 返回值
    ///
    /// * `Ok(SmtpNotifier)` - 地址解析成功
    /// * `Err(NotifyError::Misconfigured)` - 发件人/收件人地址或服务器地址无效
    pub fn new(options: SmtpOptions) -> Result<Self, NotifyError> {
        let sender = parse_mailbox(&options.sender)?;
        let receiver = parse_mailbox(&options.receiver)?;

        let mut builder = if options.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&options.host).map_err(|e| {
                NotifyError::Misconfigured(format!("invalid smtp host {}: {}", options.host, e))
            })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&options.host)
        };
        builder = builder.port(options.port).timeout(Some(SMTP_TIMEOUT));

        if let Some(password) = options.password {
            let username = options.username.unwrap_or_else(|| options.sender.clone());
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            sender,
            receiver,
            host: options.host,
        })
    }

    /// 构建纯文本邮件
    pub fn message(&self, subject: &str, body: &str) -> Result<Message, NotifyError> {
        Message::builder()
            .from(self.sender.clone())
            .to(self.receiver.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Encode(e.to_string()))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse()
        .map_err(|e| NotifyError::Misconfigured(format!("invalid address '{}': {}", address, e)))
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = self.message(subject, body)?;

        info!("Delivering report to {} via {}", self.receiver, self.host);
        counter!("jobdigest_notify_total").increment(1);
        let start = Instant::now();

        self.transport.send(message).await.map_err(|e| {
            error!("SMTP delivery failed: {}", e);
            counter!("jobdigest_notify_failed_total", "reason" => "smtp_error").increment(1);
            e
        })?;

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Report delivered"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
