// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 博客文章（blog）：用户发布的文章，也是搜索的文档
/// - 评论（comment）：文章下的用户评论
/// - 搜索结果（search_result）：文章面向调用方的只读投影
/// - 用户（user）：由会话令牌解析出的已认证用户
pub mod blog;
pub mod comment;
pub mod search_result;
pub mod user;
