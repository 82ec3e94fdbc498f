// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateBlogRequestDto {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Title must be between 3 and 100 characters long"
    ))]
    pub title: String,
    #[validate(length(min = 10, message = "Content must be at least 10 characters long"))]
    pub content: String,
    // Key of an already uploaded image in external storage
    pub image_storage_id: Option<String>,
}
