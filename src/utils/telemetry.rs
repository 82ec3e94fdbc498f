// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::LoggingSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 构建日志过滤器，`RUST_LOG` 优先于配置文件
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter))
}

/// 初始化全局 tracing 订阅者
///
/// 已经初始化过时（例如测试中重复调用）静默忽略
pub fn init_telemetry(settings: &LoggingSettings) {
    let registry = tracing_subscriber::registry().with(env_filter(settings));

    let result = if settings.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already set: {}", e);
    }
}
