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

use crate::infrastructure::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use metrics::counter;
use reqwest::{header, Client};
use serde::Serialize;
use sha2::Sha256;
use std::time::Instant;
use tracing::{error, info};

pub const SIGNATURE_HEADER: &str = "X-Jobdigest-Signature";

type HmacSha256 = Hmac<Sha256>;

/// 邮件中继配置
#[derive(Debug, Clone)]
pub struct MailRelayOptions {
    /// 中继地址
    pub endpoint: String,
    /// Bearer令牌
    pub api_key: Option<String>,
    /// 请求体签名密钥
    pub signing_secret: Option<String>,
    /// 发件人
    pub sender: String,
    /// 收件人
    pub receiver: String,
}

#[derive(Debug, Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// 邮件中继通知器
///
/// 把消息以JSON形式POST到HTTP邮件中继，由中继负责SMTP投递
pub struct MailRelayNotifier {
    options: MailRelayOptions,
    client: Client,
}

impl MailRelayNotifier {
    pub fn new(options: MailRelayOptions) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("Jobdigest-Notifier/0.1.0"),
        );

        Self {
            options,
            client: Client::builder()
                .default_headers(headers)
                .build()
                .unwrap_or_default(),
        }
    }

    /// 计算请求体的HMAC-SHA256签名（十六进制）
    pub fn sign(secret: &str, payload: &[u8]) -> Result<String, NotifyError> {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| NotifyError::Signing(e.to_string()))?;
        mac.update(payload);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[async_trait]
impl Notifier for MailRelayNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let payload = serde_json::to_vec(&RelayMessage {
            from: &self.options.sender,
            to: &self.options.receiver,
            subject,
            text: body,
        })
        .map_err(|e| NotifyError::Encode(e.to_string()))?;

        info!(
            "Delivering report to {} via {}",
            self.options.receiver, self.options.endpoint
        );
        counter!("jobdigest_notify_total").increment(1);
        let start = Instant::now();

        let mut request = self
            .client
            .post(&self.options.endpoint)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(api_key) = &self.options.api_key {
            request = request.bearer_auth(api_key);
        }
        if let Some(secret) = &self.options.signing_secret {
            request = request.header(SIGNATURE_HEADER, Self::sign(secret, &payload)?);
        }

        let response = request.body(payload).send().await.map_err(|e| {
            error!("Mail relay request failed: {}", e);
            counter!("jobdigest_notify_failed_total", "reason" => "network_error").increment(1);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Mail relay rejected message with status: {}", status);
            counter!("jobdigest_notify_failed_total", "reason" => "http_error").increment(1);
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Report delivered"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mail_relay"
    }
}
