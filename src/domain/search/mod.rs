// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义搜索索引接口、搜索错误以及多索引结果的合并规则
pub mod index;
pub mod merger;
