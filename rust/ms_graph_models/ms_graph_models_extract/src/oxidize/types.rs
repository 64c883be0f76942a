/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, TokenStreamExt, format_ident, quote};
use std::collections::HashMap;

use super::{RustType, factory_ident, imports, markup_doc_comment, referenced_types};
use crate::GENERATION_DISCLOSURE;
use crate::extract::schema::{ModelSchema, Property};
use crate::naming::{pascalize, property_ident, snakeify};

const FACTORY_DOC: &str = "Creates a new instance of the appropriate class based on discriminator value.";

/// A type the discriminator of a polymorphic type can select.
struct Derived {
    name: String,
    /// Base accessors leading from the derived type back to the polymorphic
    /// one.
    chain: Vec<String>,
}

/// A Graph API object type, ready for converting to a stream of tokens via
/// [`quote!`].
pub struct GraphType {
    name: String,
    base: Option<String>,
    description: Option<String>,
    properties: Vec<Property>,
    derived: Vec<Derived>,
    /// Whether `new()` presets `@odata.type`.
    typed: bool,
}

impl GraphType {
    /// `bases` maps every extracted type to its base type.
    pub fn new(model: ModelSchema, bases: &HashMap<String, Option<String>>, typed: bool) -> Self {
        let derived = model
            .derived
            .iter()
            .filter_map(|name| {
                let chain = base_chain(name, &model.name, bases);
                if chain.is_none() {
                    println!("{name} is mapped by {} but doesn't derive from it", model.name);
                }
                Some(Derived {
                    name: name.clone(),
                    chain: chain?,
                })
            })
            .collect();

        Self {
            name: model.name,
            base: model.base,
            description: model.description,
            properties: model.properties,
            derived,
            typed,
        }
    }
}

/// The base types between `from` and `to`, ending with `to`.
fn base_chain(
    from: &str,
    to: &str,
    bases: &HashMap<String, Option<String>>,
) -> Option<Vec<String>> {
    let mut chain = Vec::new();
    let mut current = from;
    while current != to {
        current = bases.get(current)?.as_deref()?;
        chain.push(current.to_string());
    }
    Some(chain)
}

impl ToTokens for GraphType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = format_ident!("{}", pascalize(&self.name));

        let module_doc = format!("Types related to {name}. {GENERATION_DISCLOSURE}");
        let module_doc = quote!(#![doc = #module_doc]);

        let referenced = referenced_types(&self.properties)
            .chain(self.base.as_deref())
            .chain(self.derived.iter().map(|d| d.name.as_str()));
        let imports = imports(&self.name, referenced);
        let discriminator_import = (!self.derived.is_empty()).then(|| quote!(discriminator_value,));
        let time_import = self
            .uses(|t| matches!(t, RustType::DateTime))
            .then(|| quote!(use time::OffsetDateTime;));
        let uuid_import = self
            .uses(|t| matches!(t, RustType::Uuid))
            .then(|| quote!(use uuid::Uuid;));

        let (store_import, store_constructor) = if self.typed {
            let odata_type = format!("#microsoft.graph.{}", self.name);
            (quote!(odata_typed_store), quote!(odata_typed_store(#odata_type)))
        } else {
            (quote!(new_backing_store), quote!(new_backing_store()))
        };

        let description = self.description.clone().map(|doc| {
            let doc = markup_doc_comment(doc);
            quote!(#[doc = #doc])
        });
        let new_doc = format!("Instantiates a new `{name}` and sets the default values.");

        let storage = Storage::new(self.base.as_deref());
        let Storage {
            field,
            constructor,
            accessors,
            backing_store,
            backing_store_mut,
        } = &storage;

        let property_accessors = self.properties.iter().map(property_accessors);
        let deserializers = self.properties.iter().map(deserializer);
        let writes = self.properties.iter().map(|p| {
            let getter = format_ident!("{}", property_ident(&p.name));
            p.rust_type
                .write_stmt(&p.name, quote!(self.#getter()?), p.is_collection)
        });

        let deserializers_init = match &self.base {
            Some(base) => {
                let base = format_ident!("{}", snakeify(base));
                let mutability = (!self.properties.is_empty()).then(|| quote!(mut));
                quote!(let #mutability res = self.#base.field_deserializers();)
            }
            None => quote!(let mut res = FieldDeserializers::new();),
        };
        // Base fields go first. Additional data is written once, after the
        // leaf type's own fields.
        let serialize_base = self.base.as_ref().map(|base| {
            let base = format_ident!("{}", snakeify(base));
            quote!(self.#base.serialize_properties(writer)?;)
        });

        let factory = factory_ident(&self.name);
        let from_store = if self.derived.is_empty() {
            quote!(model_from_store(value, #factory))
        } else {
            // The factory hands out the kind, not this type.
            quote!(model_from_store(value, |_| Ok(Self::new())))
        };

        let factory_def = if self.derived.is_empty() {
            quote! {
                #[doc = #FACTORY_DOC]
                pub fn #factory(_parse_node: &dyn ParseNode) -> Result<#name, Error> {
                    Ok(#name::new())
                }
            }
        } else {
            self.kind_tokens(&name, &factory)
        };

        tokens.append_all(quote!(
            #module_doc

            use crate::Error;
            use crate::serialization::{
                AdditionalDataHolder, BackedModel, FieldDeserializers, Parsable, ParseNode, SerializationWriter,
                #discriminator_import
            };
            use crate::store::{BackingStore, StoreValue, model_from_store, #store_import};
            #imports
            use serde_json::Value;
            #time_import
            #uuid_import

            #description
            #[derive(Clone, Debug)]
            pub struct #name {
                #field
            }

            impl Default for #name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl #name {
                #[doc = #new_doc]
                pub fn new() -> Self {
                    Self::with_backing_store(#store_constructor)
                }

                pub(crate) fn with_backing_store(backing_store: Box<dyn BackingStore>) -> Self {
                    #name #constructor
                }

                #accessors

                #(#property_accessors)*

                #[doc = "Writes the properties of this type and its bases, without additional data."]
                pub(crate) fn serialize_properties(
                    &self,
                    writer: &mut dyn SerializationWriter,
                ) -> Result<(), Error> {
                    #serialize_base
                    #(#writes)*
                    Ok(())
                }
            }

            impl BackedModel for #name {
                fn backing_store(&self) -> &dyn BackingStore {
                    #backing_store
                }

                fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
                    #backing_store_mut
                }
            }

            impl Parsable for #name {
                fn field_deserializers(&self) -> FieldDeserializers {
                    #deserializers_init
                    #(#deserializers)*
                    res
                }

                fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
                    self.serialize_properties(writer)?;
                    writer.write_additional_data(self.additional_data()?.as_ref())?;
                    Ok(())
                }
            }

            impl StoreValue for #name {
                fn into_store(self) -> Result<Value, Error> {
                    Ok(self.backing_store().to_value())
                }

                fn from_store(value: &Value) -> Option<Self> {
                    #from_store
                }
            }

            #factory_def
        ))
    }
}

impl GraphType {
    fn uses(&self, predicate: impl Fn(&RustType) -> bool) -> bool {
        self.properties.iter().any(|p| predicate(&p.rust_type))
    }

    /// The `<Name>Kind` enum over the type and everything its discriminator
    /// selects, along with the factory choosing between them.
    fn kind_tokens(&self, name: &Ident, factory: &Ident) -> TokenStream {
        let kind = format_ident!("{name}Kind");
        let accessor = format_ident!("{}", snakeify(&self.name));
        let accessor_mut = format_ident!("{accessor}_mut");

        let variants = std::iter::once(name.clone())
            .chain(self.derived.iter().map(|d| format_ident!("{}", pascalize(&d.name))))
            .collect::<Vec<_>>();

        let shared_arms = self.derived.iter().map(|d| {
            let variant = format_ident!("{}", pascalize(&d.name));
            let chain = d.chain.iter().map(|b| format_ident!("{}", snakeify(b)));
            quote!(Self::#variant(v) => v #(.#chain())*,)
        });
        let shared_mut_arms = self.derived.iter().map(|d| {
            let variant = format_ident!("{}", pascalize(&d.name));
            let chain = d.chain.iter().map(|b| format_ident!("{}_mut", snakeify(b)));
            quote!(Self::#variant(v) => v #(.#chain())*,)
        });
        let factory_arms = self.derived.iter().map(|d| {
            let variant = format_ident!("{}", pascalize(&d.name));
            let odata_type = format!("#microsoft.graph.{}", d.name);
            quote!(Some(#odata_type) => #kind::#variant(#variant::new()),)
        });

        let kind_doc =
            format!("`{name}` or one of the types derived from it, as selected by `@odata.type`.");
        let shared_doc = format!("Accessor to the `{name}` properties every variant shares.");
        let shared_mut_doc =
            format!("Mutable accessor to the `{name}` properties every variant shares.");

        quote! {
            #[doc = #kind_doc]
            #[derive(Clone, Debug)]
            pub enum #kind {
                #( #variants(#variants), )*
            }

            impl #kind {
                #[doc = #shared_doc]
                pub fn #accessor(&self) -> &#name {
                    match self {
                        Self::#name(v) => v,
                        #(#shared_arms)*
                    }
                }

                #[doc = #shared_mut_doc]
                pub fn #accessor_mut(&mut self) -> &mut #name {
                    match self {
                        Self::#name(v) => v,
                        #(#shared_mut_arms)*
                    }
                }
            }

            #(
                impl From<#variants> for #kind {
                    fn from(value: #variants) -> Self {
                        Self::#variants(value)
                    }
                }
            )*

            impl BackedModel for #kind {
                fn backing_store(&self) -> &dyn BackingStore {
                    self.#accessor().backing_store()
                }

                fn backing_store_mut(&mut self) -> &mut dyn BackingStore {
                    self.#accessor_mut().backing_store_mut()
                }
            }

            impl Parsable for #kind {
                fn field_deserializers(&self) -> FieldDeserializers {
                    match self {
                        #( Self::#variants(v) => v.field_deserializers(), )*
                    }
                }

                fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
                    match self {
                        #( Self::#variants(v) => v.serialize(writer), )*
                    }
                }
            }

            impl StoreValue for #kind {
                fn into_store(self) -> Result<Value, Error> {
                    Ok(self.backing_store().to_value())
                }

                fn from_store(value: &Value) -> Option<Self> {
                    model_from_store(value, #factory)
                }
            }

            #[doc = #FACTORY_DOC]
            pub fn #factory(parse_node: &dyn ParseNode) -> Result<#kind, Error> {
                Ok(match discriminator_value(parse_node)?.as_deref() {
                    #(#factory_arms)*
                    _ => #kind::#name(#name::new()),
                })
            }
        }
    }
}

/// Where a type keeps its backing store: its own field for root types, the
/// base type's for derived ones.
struct Storage {
    field: TokenStream,
    constructor: TokenStream,
    accessors: Option<TokenStream>,
    backing_store: TokenStream,
    backing_store_mut: TokenStream,
}

impl Storage {
    fn new(base: Option<&str>) -> Self {
        let Some(base) = base else {
            return Self {
                field: quote!(pub(crate) backing_store: Box<dyn BackingStore>,),
                constructor: quote!({ backing_store }),
                accessors: None,
                backing_store: quote!(&*self.backing_store),
                backing_store_mut: quote!(&mut *self.backing_store),
            };
        };

        let base_type = format_ident!("{}", pascalize(base));
        let base_field = format_ident!("{}", snakeify(base));
        let base_field_mut = format_ident!("{base_field}_mut");
        let doc = format!("Accessor to inherited properties from `{base_type}`.");
        let doc_mut = format!("Mutable accessor to inherited properties from `{base_type}`.");

        Self {
            field: quote!(pub(crate) #base_field: #base_type,),
            constructor: quote!({
                #base_field: #base_type::with_backing_store(backing_store),
            }),
            accessors: Some(quote! {
                #[doc = #doc]
                pub fn #base_field(&self) -> &#base_type {
                    &self.#base_field
                }

                #[doc = #doc_mut]
                pub fn #base_field_mut(&mut self) -> &mut #base_type {
                    &mut self.#base_field
                }
            }),
            backing_store: quote!(self.#base_field.backing_store()),
            backing_store_mut: quote!(self.#base_field.backing_store_mut()),
        }
    }
}

/// The getter and setter of a property.
fn property_accessors(prop: &Property) -> TokenStream {
    let getter = format_ident!("{}", property_ident(&prop.name));
    let setter = format_ident!("set_{getter}");
    let wire_name = &prop.name;

    let value_type = prop.rust_type.value_token();
    let (value_type, get, set) = if prop.is_collection {
        (quote!(Vec<#value_type>), quote!(get_collection), quote!(set_collection))
    } else {
        (value_type, quote!(get_value), quote!(set_value))
    };

    let doc_comment = prop.description.clone().map(|doc| {
        let doc = markup_doc_comment(doc);
        quote!(#[doc = #doc])
    });

    quote! {
        #doc_comment
        pub fn #getter(&self) -> Result<Option<#value_type>, Error> {
            self.backing_store().#get(#wire_name)
        }

        pub fn #setter(&mut self, value: Option<#value_type>) -> Result<(), Error> {
            self.backing_store_mut().#set(#wire_name, value)
        }
    }
}

/// The entry of a property in `field_deserializers`.
fn deserializer(prop: &Property) -> TokenStream {
    let wire_name = &prop.name;
    let read = prop.rust_type.read_expr(prop.is_collection);
    let set = if prop.is_collection {
        quote!(set_collection)
    } else {
        quote!(set_value)
    };

    quote! {
        res.insert(#wire_name, |store, n| {
            if let Some(val) = #read {
                store.#set(#wire_name, Some(val))?;
            }
            Ok(())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oxidize::CustomRustType;

    fn property(name: &str, rust_type: RustType, is_collection: bool) -> Property {
        Property {
            name: name.to_string(),
            is_collection,
            rust_type,
            description: None,
        }
    }

    fn bases() -> HashMap<String, Option<String>> {
        HashMap::from([
            ("recipient".to_string(), None),
            ("attendeeBase".to_string(), Some("recipient".to_string())),
            ("attendee".to_string(), Some("attendeeBase".to_string())),
        ])
    }

    #[test]
    fn base_chains_walk_up_to_the_polymorphic_type() {
        let bases = bases();
        assert_eq!(
            base_chain("attendee", "recipient", &bases),
            Some(vec!["attendeeBase".to_string(), "recipient".to_string()])
        );
        assert_eq!(base_chain("recipient", "recipient", &bases), Some(vec![]));
        assert_eq!(base_chain("recipient", "attendee", &bases), None);
    }

    #[test]
    fn polymorphic_types_get_a_kind_and_factory() {
        let model = ModelSchema {
            name: "recipient".to_string(),
            base: None,
            description: None,
            properties: vec![property(
                "emailAddress",
                RustType::Model(CustomRustType::from("emailAddress")),
                false,
            )],
            derived: vec!["attendeeBase".to_string(), "attendee".to_string()],
        };
        let generated = GraphType::new(model, &bases(), true)
            .to_token_stream()
            .to_string();

        assert!(generated.contains("pub enum RecipientKind"));
        assert!(generated.contains("AdditionalDataHolder , BackedModel"));
        assert!(generated.contains("odata_typed_store (\"#microsoft.graph.recipient\")"));
        assert!(generated.contains("use crate :: types :: email_address :: * ;"));
        assert!(generated.contains(
            "Self :: Attendee (v) => v . attendee_base () . recipient () ,"
        ));
        assert!(generated.contains(
            "Some (\"#microsoft.graph.attendee\") => RecipientKind :: Attendee (Attendee :: new ()) ,"
        ));
        assert!(generated.contains("model_from_store (value , | _ | Ok (Self :: new ()))"));
    }

    #[test]
    fn derived_types_delegate_to_their_base() {
        let model = ModelSchema {
            name: "eventMessage".to_string(),
            base: Some("message".to_string()),
            description: Some("An event message.".to_string()),
            properties: vec![
                property("type", RustType::Enum(CustomRustType::from("eventType")), false),
                property("categories", RustType::String, true),
            ],
            derived: vec![],
        };
        let generated = GraphType::new(model, &HashMap::new(), false)
            .to_token_stream()
            .to_string();

        assert!(generated.contains("pub (crate) message : Message ,"));
        assert!(generated.contains("let mut res = self . message . field_deserializers () ;"));
        assert!(generated.contains("pub fn type_escaped (& self)"));
        assert!(generated.contains("n . collection_of_string_values () ?"));
        assert!(generated.contains("self . message . serialize_properties (writer) ? ;"));
        // The leaf writes additional data after its own fields.
        assert!(generated.contains(
            "{ self . serialize_properties (writer) ? ; \
             writer . write_additional_data (self . additional_data () ? . as_ref ()) ? ; \
             Ok (()) }"
        ));
        assert_eq!(generated.matches("write_additional_data").count(), 1);
        assert!(!generated.contains("enum EventMessageKind"));
        assert!(generated.contains("new_backing_store ()"));
    }
}
