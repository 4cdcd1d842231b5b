//! Output module
//!
//! Writes chunks of the filtered table to numbered CSV files.
//!
//! # Overview
//!
//! This module provides:
//! - `OutputConfig` - where files go and how they are named
//! - `ChunkWriter` - writes one chunk per file with the original columns
//! - `WrittenChunk` - what was written where

mod writer;

pub use writer::{ChunkWriter, OutputConfig, WrittenChunk, DEFAULT_FILE_PREFIX};
