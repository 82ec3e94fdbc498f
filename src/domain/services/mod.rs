// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了
/// 业务规则，协调仓库与索引来完成业务操作。
///
/// 包含的服务：
/// - 文章服务（blog_service）：文章的发布、列表与详情
/// - 评论服务（comment_service）：评论的发表与列表
/// - 搜索服务（search_service）：标题与正文两个索引的合并搜索
pub mod blog_service;
pub mod comment_service;
pub mod search_service;
