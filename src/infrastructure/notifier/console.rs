// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::Write;

/// 控制台通知器
///
/// 把消息写到标准输出（或任意写入端），用于试运行和本地调试
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let mut out = self.out.lock();
        writeln!(out, "Subject: {}", subject)?;
        writeln!(out)?;
        write!(out, "{}", body)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
