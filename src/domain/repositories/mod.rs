// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 文章仓库（blog_repository）：管理博客文章的持久化
/// - 评论仓库（comment_repository）：管理文章评论的持久化
pub mod blog_repository;
pub mod comment_repository;
