/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Helper functions for converting strings to properly formatted names.

use crate::oxidize::is_rust_keyword;

/// Suffix appended to wire names that would otherwise be Rust keywords.
const KEYWORD_SUFFIX: &str = "_escaped";

/// Given a potentially fully qualified OpenAPI name ("microsoft.graph.message"),
/// produce the simple name for use here ("message").
pub fn simple_name(full: &str) -> &str {
    let out = full.rsplit('.').next().unwrap_or(full);
    assert!(!out.is_empty(), "attempted to generate empty name: {full}");
    assert!(
        !is_rust_keyword(out),
        "attempted to use a rust keyword as a name: {full}"
    );
    out
}

/// Sanitize a string into a PascalCase Rust identifier.
pub fn pascalize(s: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if upper_next {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    assert!(
        !out.is_empty(),
        "attempted to pascalize into the empty string: {s}"
    );
    assert!(
        !is_rust_keyword(&out),
        "attempted to pascalize into a rust keyword: {s}"
    );
    out
}

/// Sanitize a string into a snake_case Rust identifier.
pub fn snakeify(s: &str) -> String {
    let out = snake_case(s);
    assert!(
        !is_rust_keyword(&out),
        "attempted to snakify into a rust keyword: {s}"
    );
    out
}

/// The accessor name for a wire property, so that `type` becomes
/// `type_escaped` and `@odata.type` becomes `odata_type`.
pub fn property_ident(wire_name: &str) -> String {
    let mut out = snake_case(wire_name);
    if is_rust_keyword(&out) {
        out.push_str(KEYWORD_SUFFIX);
    }
    out
}

/// The name of a flag constant, e.g. `MAILBOX_FULL_STATUS`.
pub fn constant_name(label: &str) -> String {
    snakeify(label).to_ascii_uppercase()
}

fn snake_case(s: &str) -> String {
    let mut out = String::new();
    let mut prev_is_underscore = false;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if ch.is_ascii_uppercase() {
                if !out.is_empty() && !prev_is_underscore {
                    out.push('_');
                }
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
            prev_is_underscore = false;
        } else if !prev_is_underscore && !out.is_empty() {
            out.push('_');
            prev_is_underscore = true;
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    assert!(
        !out.is_empty(),
        "attempted to snakify into the empty string: {s}"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_rust_conventions() {
        assert_eq!(simple_name("microsoft.graph.eventMessage"), "eventMessage");
        assert_eq!(pascalize("iosVppEBook"), "IosVppEBook");
        assert_eq!(snakeify("iosVppEBook"), "ios_vpp_e_book");
        assert_eq!(snakeify("fNumber"), "f_number");
        assert_eq!(constant_name("mailboxFullStatus"), "MAILBOX_FULL_STATUS");
    }

    #[test]
    fn property_idents_avoid_keywords() {
        assert_eq!(property_ident("type"), "type_escaped");
        assert_eq!(property_ident("@odata.type"), "odata_type");
        assert_eq!(property_ident("from"), "from");
        assert_eq!(property_ident("isAllDay"), "is_all_day");
    }

    #[test]
    #[should_panic(expected = "rust keyword")]
    fn type_names_must_not_be_keywords() {
        pascalize("self");
    }
}
