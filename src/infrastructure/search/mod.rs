// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索索引模块
///
/// 提供搜索索引接口的具体实现
pub mod database_index;

pub use database_index::{DatabaseSearchIndex, IndexedField};
