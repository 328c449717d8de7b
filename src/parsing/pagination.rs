// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::parsing::dom;
use crate::parsing::ParseError;
use scraper::{ElementRef, Html};

/// List items counted backward from the end of the pagination control
/// before the page number is read; the trailing item is the "next" link.
const ITEMS_FROM_END: usize = 2;

/// Resolve the total listing page count from a parsed document
///
/// Looks for a `ul` element carrying the `paging` class and reads the page
/// number encoded in the link of its second-from-last list item.
///
/// # Returns
///
/// * `Ok(n)` - the highest page number referenced by the control
/// * `Ok(0)` - the document carries no pagination control
/// * `Err(ParseError)` - the control is present but its link is malformed
pub fn resolve_page_count(document: &Html) -> Result<u32, ParseError> {
    let paging = dom::find_element(document.tree.root(), &|el: ElementRef| {
        el.value().name() == "ul" && el.value().classes().any(|c| c == "paging")
    });

    match paging {
        Some(list) => extract_page_number(list),
        None => Ok(0),
    }
}

/// Read the page number out of the pagination list
///
/// Counts `li` children backward from the last so the trailing "next"
/// control is skipped; the second-from-last item links to the highest page.
fn extract_page_number(list: ElementRef) -> Result<u32, ParseError> {
    let mut remaining = ITEMS_FROM_END;
    let mut node = list.last_child();

    while let Some(current) = node {
        if let Some(item) = ElementRef::wrap(current) {
            if item.value().name() == "li" {
                remaining -= 1;
            }
            if remaining == 0 {
                let href = item
                    .first_child()
                    .and_then(ElementRef::wrap)
                    .and_then(|link| link.value().attr("href"))
                    .ok_or(ParseError::MissingPaginationLink)?;
                return parse_page_param(href);
            }
        }
        node = current.prev_sibling();
    }

    Ok(0)
}

/// Parse the `key=value` page encoding of a pagination link target
fn parse_page_param(href: &str) -> Result<u32, ParseError> {
    let value = href
        .split('=')
        .nth(1)
        .ok_or_else(|| ParseError::MissingPageNumber(href.to_string()))?;

    value
        .parse()
        .map_err(|source| ParseError::InvalidPageNumber {
            href: href.to_string(),
            source,
        })
}
