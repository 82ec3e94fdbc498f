// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateCommentRequestDto {
    #[validate(length(min = 3, message = "Comment must be at least 3 characters long"))]
    pub body: String,
}
