// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 通知模块
///
/// 把渲染好的报告投递到目标：
/// - 邮件中继（mail_relay）：以JSON形式提交给HTTP邮件中继
/// - SMTP（smtp）：直接连接邮件服务器投递
/// - 控制台（console）：直接输出到标准输出，用于试运行
pub mod console;
pub mod mail_relay;
pub mod smtp;

use crate::config::settings::{NotifierKind, NotifierSettings};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// 通知投递错误类型
#[derive(Error, Debug)]
pub enum NotifyError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 中继拒绝了消息
    #[error("Relay rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    /// SMTP投递失败
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    /// 消息编码失败
    #[error("Encode failed: {0}")]
    Encode(String),
    /// 签名失败
    #[error("Signing failed: {0}")]
    Signing(String),
    /// 输出失败
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
    /// 配置缺失
    #[error("Notifier misconfigured: {0}")]
    Misconfigured(String),
}

/// 通知器特质
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 投递一条消息
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError>;

    /// 通知器名称
    fn name(&self) -> &'static str;
}

/// 按配置构建通知器
pub fn build_notifier(settings: &NotifierSettings) -> Result<Arc<dyn Notifier>, NotifyError> {
    match settings.kind {
        NotifierKind::Console => Ok(Arc::new(console::ConsoleNotifier::stdout())),
        NotifierKind::Smtp => {
            let receiver = settings.receiver.clone().ok_or_else(|| {
                NotifyError::Misconfigured("notifier.receiver is required".to_string())
            })?;
            let sender = settings.sender.clone().ok_or_else(|| {
                NotifyError::Misconfigured("notifier.sender is required".to_string())
            })?;

            Ok(Arc::new(smtp::SmtpNotifier::new(smtp::SmtpOptions {
                host: settings.smtp_host.clone(),
                port: settings.smtp_port,
                starttls: settings.starttls,
                username: settings.username.clone(),
                password: settings.password.clone(),
                sender,
                receiver,
            })?))
        }
        NotifierKind::MailRelay => {
            let endpoint = settings.endpoint.clone().ok_or_else(|| {
                NotifyError::Misconfigured("notifier.endpoint is required".to_string())
            })?;
            let receiver = settings.receiver.clone().ok_or_else(|| {
                NotifyError::Misconfigured("notifier.receiver is required".to_string())
            })?;
            let sender = settings.sender.clone().unwrap_or_else(|| receiver.clone());

            Ok(Arc::new(mail_relay::MailRelayNotifier::new(
                mail_relay::MailRelayOptions {
                    endpoint,
                    api_key: settings.api_key.clone(),
                    signing_secret: settings.signing_secret.clone(),
                    sender,
                    receiver,
                },
            )))
        }
    }
}
