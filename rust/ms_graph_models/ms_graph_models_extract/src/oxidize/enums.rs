/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, TokenStreamExt, format_ident, quote};

use crate::GENERATION_DISCLOSURE;
use crate::extract::schema::EnumSchema;
use crate::naming::{constant_name, pascalize};

/// A Graph API enumeration, ready for converting to a stream of tokens via
/// [`quote!`].
///
/// Plain enumerations become strum enums, `x-ms-enum-flags` ones become
/// bitflags whose wire form is a comma separated list of labels.
pub struct GraphEnum {
    schema: EnumSchema,
}

impl GraphEnum {
    pub fn new(schema: EnumSchema) -> Self {
        Self { schema }
    }
}

impl ToTokens for GraphEnum {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = format_ident!("{}", pascalize(&self.schema.name));

        let module_doc = format!("Types related to {name}. {GENERATION_DISCLOSURE}");
        let module_doc = quote!(#![doc = #module_doc]);

        let definition = if self.schema.is_flags {
            flags_definition(&self.schema)
        } else {
            enum_definition(&self.schema)
        };

        tokens.append_all(quote!(
            #module_doc

            use crate::Error;
            use crate::serialization::EnumValue;
            use crate::store::StoreValue;

            #definition

            impl StoreValue for #name {
                fn into_store(self) -> Result<Value, Error> {
                    Ok(Value::String(self.to_string()))
                }

                fn from_store(value: &Value) -> Option<Self> {
                    value.as_str().and_then(Self::parse)
                }
            }
        ))
    }
}

fn enum_definition(schema: &EnumSchema) -> TokenStream {
    let name = format_ident!("{}", pascalize(&schema.name));
    let variants = schema.labels.iter().map(|label| format_ident!("{}", pascalize(label)));

    quote! {
        use serde_json::Value;
        use strum::{Display, EnumIter, EnumString};

        #[derive(Copy, Clone, Debug, Display, EnumIter, EnumString, PartialEq, Eq, Hash)]
        #[strum(serialize_all = "camelCase")]
        pub enum #name {
            #(#variants),*
        }

        impl EnumValue for #name {
            fn parse(label: &str) -> Option<Self> {
                label.parse().ok()
            }
        }
    }
}

fn flags_definition(schema: &EnumSchema) -> TokenStream {
    assert!(
        schema.labels.len() <= 32,
        "too many flags for a u32: {}",
        schema.name
    );

    let name = format_ident!("{}", pascalize(&schema.name));
    let constants = schema
        .labels
        .iter()
        .map(|label| format_ident!("{}", constant_name(label)))
        .collect::<Vec<_>>();
    let bits = (0..schema.labels.len()).map(|i| Literal::u32_unsuffixed(1 << i));
    let labels = &schema.labels;
    let label_count = Literal::usize_unsuffixed(labels.len());

    quote! {
        use bitflags::bitflags;
        use serde_json::Value;
        use std::fmt;

        bitflags! {
            #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
            pub struct #name: u32 {
                #( const #constants = #bits; )*
            }
        }

        const LABELS: [(#name, &str); #label_count] = [
            #( (#name::#constants, #labels), )*
        ];

        impl fmt::Display for #name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let labels = LABELS
                    .iter()
                    .filter(|(flag, _)| self.contains(*flag))
                    .map(|(_, label)| *label)
                    .collect::<Vec<_>>();
                f.write_str(&labels.join(","))
            }
        }

        impl EnumValue for #name {
            fn parse(label: &str) -> Option<Self> {
                label.split(',').try_fold(Self::empty(), |flags, part| {
                    LABELS
                        .iter()
                        .find(|(_, known)| *known == part)
                        .map(|(flag, _)| flags | *flag)
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(name: &str, labels: &[&str], is_flags: bool) -> String {
        GraphEnum::new(EnumSchema {
            name: name.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            is_flags,
        })
        .to_token_stream()
        .to_string()
    }

    #[test]
    fn plain_enums_use_strum() {
        let generated = generate("importance", &["low", "normal", "high"], false);
        assert!(generated.contains("pub enum Importance { Low , Normal , High }"));
        assert!(generated.contains("serialize_all = \"camelCase\""));
        assert!(!generated.contains("bitflags"));
    }

    #[test]
    fn flag_enums_use_bitflags() {
        let generated = generate(
            "mailTipsType",
            &["automaticReplies", "mailboxFullStatus", "customMailTip"],
            true,
        );
        assert!(generated.contains("pub struct MailTipsType : u32"));
        assert!(generated.contains("const MAILBOX_FULL_STATUS = 2 ;"));
        assert!(generated.contains("const CUSTOM_MAIL_TIP = 4 ;"));
        assert!(generated.contains(
            "(MailTipsType :: AUTOMATIC_REPLIES , \"automaticReplies\") ,"
        ));
        assert!(generated.contains("[(MailTipsType , & str) ; 3]"));
    }
}
