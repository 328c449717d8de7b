// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod dom;
pub mod pagination;
pub mod scanner;

use thiserror::Error;

/// Markup parsing error type
#[derive(Error, Debug)]
pub enum ParseError {
    /// Pagination item carries no link with an `href` attribute
    #[error("pagination item has no link with an href attribute")]
    MissingPaginationLink,
    /// Pagination link does not encode a page number
    #[error("pagination link {0:?} does not encode a page number")]
    MissingPageNumber(String),
    /// Pagination link encodes a non-numeric page number
    #[error("pagination link {href:?} has a non-numeric page number: {source}")]
    InvalidPageNumber {
        href: String,
        source: std::num::ParseIntError,
    },
}
