// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Builds the "all posts" summary page from a directory of HTML posts.
pub mod assemble;
pub mod config;
pub mod extract;
pub mod file_io;
pub mod post;
pub mod render;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
