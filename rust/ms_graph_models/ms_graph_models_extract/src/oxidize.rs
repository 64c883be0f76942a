/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Modules for turning our representation of the Graph API into Rust code
//! (specifically, a [`proc_macro2::TokenStream`]).

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::BTreeSet;

use crate::extract::schema::Property;
use crate::naming::{pascalize, snakeify};

pub mod enums;
pub mod types;

/// `use` items for every generated type the given names refer to, minus the
/// type being generated.
fn imports<'a>(own_name: &str, referenced: impl IntoIterator<Item = &'a str>) -> TokenStream {
    let imports = referenced
        .into_iter()
        .filter(|name| *name != own_name)
        .map(snakeify)
        .collect::<BTreeSet<_>>();

    let imports = imports.iter().map(|s| format_ident!("{s}"));

    quote!(#( use crate::types::#imports::*; )*)
}

/// The generated types a list of properties refers to.
fn referenced_types(properties: &[Property]) -> impl Iterator<Item = &str> {
    properties.iter().filter_map(|p| match &p.rust_type {
        RustType::Enum(custom) | RustType::Model(custom) => Some(custom.original_name().as_str()),
        _ => None,
    })
}

/// Does some (very) basic clean up of descriptions to make them better
/// formatted as doc comments.
// This is dumb and buggy, and will eventually need proper regex, but is good
// enough for now to prevent major doc bugs/warnings.
fn markup_doc_comment(mut doc_comment: String) -> String {
    fn escape(s: &str) -> String {
        format!("`{s}`")
    }

    fn escape_in_place(s: &mut String, start_idx: usize, end_idx: usize) {
        s.reserve(2);
        // Make sure the end ` gets inserted first, so the index doesn't change
        s.insert(end_idx, '`');
        s.insert(start_idx, '`');
    }

    /// Escape members of a string of the form "Foo, Bar, and Baz" into
    /// "`Foo`, `Bar`, and `Baz`."
    fn escape_list(list: &str) -> String {
        let list = list.split(", ");
        let list = list
            .map(|item| {
                if item.starts_with("and ") {
                    let word = item
                        .split_ascii_whitespace()
                        .nth(1)
                        .expect("and is followed by a word");
                    let replacement = escape(word);
                    item.replace(word, &replacement)
                } else {
                    escape(item.trim_ascii())
                }
            })
            .collect::<Vec<_>>();
        list.join(", ")
    }

    // find all instances of " [Ff]or example: ", which are always followed by
    // something that can or should be escaped as code.
    let example_str = "for example: ";
    let lowered_comment = doc_comment.to_ascii_lowercase();
    let mut search_idx = 0;
    while let Some(match_idx) = lowered_comment[search_idx..].find(example_str) {
        let example_start = match_idx + example_str.len();

        // Examples always seem to have *some* text after them, so this match
        // always works in practice, but this is fragile.
        if let Some(example_len) = doc_comment[example_start..].find(". ") {
            let example_end = example_start + example_len;
            escape_in_place(&mut doc_comment, example_start, example_end);
            search_idx = example_end;
        } else {
            search_idx = example_start;
        }
    }

    // match against known lists of escaped words and escape them
    let list_wrappers = [("$filter (", ")"), ("Allowed values: ", ". ")];
    for (left, right) in list_wrappers {
        if let Some(match_idx) = doc_comment.find(left) {
            let start_idx = match_idx + left.len();
            if let Some(match_len) = doc_comment[start_idx..].find(right) {
                let before_list = &doc_comment[start_idx..start_idx + match_len];
                let after_list = escape_list(before_list);
                doc_comment = doc_comment.replace(before_list, &after_list);
            }
        }
    }

    // escape all keywords known to always benefit from escaping
    for word in [
        "$expand", "$filter", "$orderby", "$OrderBy", "$search", "$select", "$top",
    ] {
        let replacement = escape(word);
        doc_comment = doc_comment.replace(word, &replacement);
    }

    // if the doc comment doesn't have a summary line, turn the first sentence
    // into one
    if !doc_comment.contains("\n\n")
        && let Some(idx) = doc_comment.find(". ")
    {
        doc_comment.insert_str(idx + 1, "\n\n");
    }

    doc_comment
}

/// Our representation of a Rust type.
#[derive(Clone, Debug)]
pub enum RustType {
    Bool,
    I32,
    I64,
    F32,
    F64,
    String,
    Bytes,
    DateTime,
    Uuid,
    Enum(CustomRustType),
    Model(CustomRustType),
}

impl RustType {
    /// The owned type a getter hands out for a single value.
    fn value_token(&self) -> TokenStream {
        match self {
            Self::Bool => quote!(bool),
            Self::I32 => quote!(i32),
            Self::I64 => quote!(i64),
            Self::F32 => quote!(f32),
            Self::F64 => quote!(f64),
            Self::String => quote!(String),
            Self::Bytes => quote!(Vec<u8>),
            Self::DateTime => quote!(OffsetDateTime),
            Self::Uuid => quote!(Uuid),
            Self::Enum(custom) => {
                let ident = format_ident!("{}", custom.as_pascal_case());
                quote!(#ident)
            }
            Self::Model(custom) => {
                let ident = format_ident!("{}", custom.value_type_name());
                quote!(#ident)
            }
        }
    }

    /// Whether collections of this type can be read and written.
    pub fn collectable(&self) -> bool {
        matches!(self, Self::String | Self::Enum(_) | Self::Model(_))
    }

    /// An expression reading this type from the parse node `n`, evaluating to
    /// an `Option`.
    fn read_expr(&self, is_collection: bool) -> TokenStream {
        if is_collection {
            return match self {
                Self::String => quote!(n.collection_of_string_values()?),
                Self::Enum(custom) => {
                    let ident = format_ident!("{}", custom.as_pascal_case());
                    quote!(n.collection_of_enum_values::<#ident>()?)
                }
                Self::Model(custom) => {
                    let factory = custom.factory_ident();
                    quote!(n.collection_of_object_values(#factory)?)
                }
                _ => panic!("unsupported collection of {self:?}"),
            };
        }

        match self {
            Self::Bool => quote!(n.bool_value()?),
            Self::I32 => quote!(n.i32_value()?),
            Self::I64 => quote!(n.i64_value()?),
            Self::F32 => quote!(n.f32_value()?),
            Self::F64 => quote!(n.f64_value()?),
            Self::String => quote!(n.string_value()?),
            Self::Bytes => quote!(n.byte_array_value()?),
            Self::DateTime => quote!(n.date_time_value()?),
            Self::Uuid => quote!(n.uuid_value()?),
            Self::Enum(custom) => {
                let ident = format_ident!("{}", custom.as_pascal_case());
                quote!(n.enum_value::<#ident>()?)
            }
            Self::Model(custom) => {
                let factory = custom.factory_ident();
                quote!(n.object_value(#factory)?)
            }
        }
    }

    /// A statement writing `value` (an `Option` of the getter's type) under
    /// `key`.
    fn write_stmt(&self, key: &str, value: TokenStream, is_collection: bool) -> TokenStream {
        if is_collection {
            return match self {
                Self::String => {
                    quote!(writer.write_collection_of_string_values(#key, #value.as_deref())?;)
                }
                Self::Enum(_) => {
                    quote!(writer.write_collection_of_enum_values(#key, #value.as_deref())?;)
                }
                Self::Model(_) => {
                    quote!(writer.write_collection_of_objects(#key, #value.as_deref())?;)
                }
                _ => panic!("unsupported collection of {self:?}"),
            };
        }

        match self {
            Self::Bool => quote!(writer.write_bool_value(#key, #value)?;),
            Self::I32 => quote!(writer.write_i32_value(#key, #value)?;),
            Self::I64 => quote!(writer.write_i64_value(#key, #value)?;),
            Self::F32 => quote!(writer.write_f32_value(#key, #value)?;),
            Self::F64 => quote!(writer.write_f64_value(#key, #value)?;),
            Self::String => quote!(writer.write_string_value(#key, #value.as_deref())?;),
            Self::Bytes => quote!(writer.write_byte_array_value(#key, #value.as_deref())?;),
            Self::DateTime => quote!(writer.write_date_time_value(#key, #value)?;),
            Self::Uuid => quote!(writer.write_uuid_value(#key, #value)?;),
            Self::Enum(_) => quote!(writer.write_enum_value(#key, #value)?;),
            Self::Model(_) => quote!(writer.write_object(#key, #value.as_ref())?;),
        }
    }
}

/// A generated type that doesn't fit in any of the primitive [`RustType`]
/// variants.
///
/// This struct holds both the PascalCase and original versions of the type's
/// name. Ideally we'd generate the PascalCase version upon request (e.g. when
/// `as_pascal_case` is called), but this causes ownership issues further down
/// the line.
#[derive(Debug, Clone)]
pub struct CustomRustType {
    pascal_case: String,
    original_name: String,
    polymorphic: bool,
}

impl From<&str> for CustomRustType {
    fn from(value: &str) -> Self {
        Self::new(value, false)
    }
}

impl CustomRustType {
    /// `polymorphic` types are handed out as their `Kind` enum, since the
    /// payload may hold any type derived from them.
    pub fn new(name: &str, polymorphic: bool) -> Self {
        CustomRustType {
            pascal_case: pascalize(name),
            original_name: name.to_string(),
            polymorphic,
        }
    }

    /// Returns the type's name in PascalCase.
    pub fn as_pascal_case(&self) -> &String {
        &self.pascal_case
    }

    /// Returns the type's name as it was written in the OpenAPI spec.
    pub fn original_name(&self) -> &String {
        &self.original_name
    }

    fn value_type_name(&self) -> String {
        if self.polymorphic {
            format!("{}Kind", self.pascal_case)
        } else {
            self.pascal_case.clone()
        }
    }

    fn factory_ident(&self) -> proc_macro2::Ident {
        factory_ident(&self.original_name)
    }
}

/// The discriminator based factory generated for a type.
fn factory_ident(name: &str) -> proc_macro2::Ident {
    format_ident!("create_{}_from_discriminator_value", snakeify(name))
}

/// Returns true if the given string is a reserved Rust keyword.
pub fn is_rust_keyword(s: &str) -> bool {
    // https://doc.rust-lang.org/reference/keywords.html
    let keywords = [
        // strong
        "as",
        "break",
        "const",
        "continue",
        "crate",
        "else",
        "enum",
        "extern",
        "false",
        "fn",
        "for",
        "if",
        "impl",
        "in",
        "let",
        "loop",
        "match",
        "mod",
        "move",
        "mut",
        "pub",
        "ref",
        "return",
        "self",
        "Self",
        "static",
        "struct",
        "super",
        "trait",
        "true",
        "type",
        "unsafe",
        "use",
        "where",
        "while",
        // strong 2018
        "async",
        "await",
        "dyn",
        // reserved
        "abstract",
        "become",
        "box",
        "do",
        "final",
        "macro",
        "override",
        "priv",
        "try",
        "typeof",
        "unsized",
        "virtual",
        "yield",
        // weak
        "'static",
        "macro_rules",
        "raw",
        "safe",
        "union",
    ];

    keywords.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that lists of escaped values don't escape the word "and" at the end
    /// of the list.
    #[test]
    fn markup_list_with_and() {
        let input = r"The name of the company that the user is associated with. This property can be useful for describing the company that a guest comes from. The maximum length is 64 characters.Returned only on $select. Supports $filter (eq, ne, not, ge, le, in, startsWith, and eq on null values).".to_string();
        let expected = "The name of the company that the user is associated with.\n\n This property can be useful for describing the company that a guest comes from. The maximum length is 64 characters.Returned only on `$select`. Supports `$filter` (`eq`, `ne`, `not`, `ge`, `le`, `in`, `startsWith`, and `eq` on null values).";

        assert_eq!(markup_doc_comment(input), expected);
    }

    /// Test that "for example:" followed by an example escapes the example.
    #[test]
    fn markup_doc_with_examples() {
        let input = r"A list of other email addresses for the user; for example: ['bob@contoso.com', 'Robert@fabrikam.com']. Can store up to 250 values, each with a limit of 250 characters. NOTE: This property can't contain accent characters. Returned only on $select. Supports $filter (eq, not, ge, le, in, startsWith, endsWith, /$count eq 0, /$count ne 0).".to_string();
        let expected = "A list of other email addresses for the user; for example: `['bob@contoso.com', 'Robert@fabrikam.com']`.\n\n Can store up to 250 values, each with a limit of 250 characters. NOTE: This property can't contain accent characters. Returned only on `$select`. Supports `$filter` (`eq`, `not`, `ge`, `le`, `in`, `startsWith`, `endsWith`, `/$count eq 0`, `/$count ne 0`).";

        assert_eq!(markup_doc_comment(input), expected);
    }

    /// Test that a description without a summary line gets one, and that query
    /// options are escaped.
    #[test]
    fn markup_summary_and_query_options() {
        let input = "A collection of message headers defined by RFC5322. The set includes message headers indicating the network path taken by a message from the sender to the recipient. Returned only on applying a $select query option. Read-only.".to_string();
        let expected = "A collection of message headers defined by RFC5322.\n\n The set includes message headers indicating the network path taken by a message from the sender to the recipient. Returned only on applying a `$select` query option. Read-only.";

        assert_eq!(markup_doc_comment(input), expected);
    }

    #[test]
    fn factories_are_named_after_the_type() {
        assert_eq!(
            factory_ident("eventMessage").to_string(),
            "create_event_message_from_discriminator_value"
        );
        let recipient = CustomRustType::new("recipient", true);
        assert_eq!(recipient.value_type_name(), "RecipientKind");
        assert_eq!(CustomRustType::from("itemBody").value_type_name(), "ItemBody");
    }
}
