// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// Depth-first, pre-order search over a parsed markup tree
///
/// Tests the current node first, then recurses into each child in sibling
/// order; the first matching element wins. Non-element nodes (text,
/// comments) are descended through but never matched.
pub fn find_element<'a, P>(node: NodeRef<'a, Node>, predicate: &P) -> Option<ElementRef<'a>>
where
    P: Fn(ElementRef<'a>) -> bool,
{
    if let Some(element) = ElementRef::wrap(node) {
        if predicate(element) {
            return Some(element);
        }
    }

    for child in node.children() {
        if let Some(found) = find_element(child, predicate) {
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn has_class(element: ElementRef, class: &str) -> bool {
        element.value().classes().any(|c| c == class)
    }

    #[test]
    fn finds_element_by_tag_and_class() {
        let document = Html::parse_document(
            r#"<html><body><div><ul class="paging other"><li>1</li></ul></div></body></html>"#,
        );

        let found = find_element(document.tree.root(), &|el: ElementRef| {
            el.value().name() == "ul" && has_class(el, "paging")
        });

        assert_eq!(found.unwrap().value().name(), "ul");
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let document = Html::parse_document("<div></div>");

        let found = find_element(document.tree.root(), &|el: ElementRef| {
            el.value().name() == "ul" && has_class(el, "paging")
        });

        assert!(found.is_none());
    }

    #[test]
    fn returns_first_match_in_document_order() {
        let document = Html::parse_document(
            r#"<body><p id="first"></p><div><p id="second"></p></div></body>"#,
        );

        let found = find_element(document.tree.root(), &|el: ElementRef| {
            el.value().name() == "p"
        });

        assert_eq!(found.unwrap().value().attr("id"), Some("first"));
    }
}
