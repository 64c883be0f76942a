/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::{HashMap, HashSet};

use crate::openapi::schema::OaSchema;
use crate::oxidize::{CustomRustType, RustType};
use crate::{FLAT_FACTORIES, SUPPORTED_TYPES, simple_name};

/// Our representation of a Graph API property.
#[derive(Debug, Clone)]
pub struct Property {
    /// The name on the wire, e.g. `@odata.type`.
    pub name: String,
    pub is_collection: bool,
    pub rust_type: RustType,
    pub description: Option<String>,
}

/// Our representation of a Graph API object type.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    pub name: String,
    pub base: Option<String>,
    pub description: Option<String>,
    pub properties: Vec<Property>,
    /// Supported types the discriminator of this type can select, in mapping
    /// order. Empty unless the type is polymorphic.
    pub derived: Vec<String>,
}

/// Our representation of a Graph API enumeration.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    pub name: String,
    pub labels: Vec<String>,
    pub is_flags: bool,
}

/// What the supported schemas turn into, needed to map references before all
/// of them have been extracted.
#[derive(Debug, Default)]
pub struct Catalog {
    enums: HashSet<String>,
    polymorphic: HashSet<String>,
}

impl Catalog {
    /// Classify the supported schemas among `schemas`, keyed by full name.
    pub fn new(schemas: &HashMap<String, OaSchema>) -> Self {
        let mut catalog = Self::default();
        for (full_name, schema) in schemas {
            let simple = simple_name(full_name);
            if !SUPPORTED_TYPES.contains(&simple) {
                continue;
            }
            if extract_enum(simple, schema).is_some() {
                catalog.enums.insert(simple.to_string());
            } else if !FLAT_FACTORIES.contains(&simple)
                && !discriminated_types(simple, schema).is_empty()
            {
                catalog.polymorphic.insert(simple.to_string());
            }
        }
        catalog
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    pub fn is_polymorphic(&self, name: &str) -> bool {
        self.polymorphic.contains(name)
    }
}

/// For the given schema, extract an enumeration if it is one.
pub fn extract_enum(name: &str, schema: &OaSchema) -> Option<EnumSchema> {
    match schema {
        OaSchema::Obj {
            enum_values: Some(labels),
            is_flags,
            ..
        } => Some(EnumSchema {
            name: name.to_string(),
            labels: labels.clone(),
            is_flags: *is_flags,
        }),
        _ => None,
    }
}

/// For the given schema object, extract its Graph API description, base type
/// and properties.
pub fn extract_model(name: &str, schema: &OaSchema, catalog: &Catalog) -> ModelSchema {
    let mut model = ModelSchema {
        name: name.to_string(),
        base: None,
        description: top_level_description(schema),
        properties: Vec::new(),
        derived: Vec::new(),
    };
    collect_schema_properties(schema, catalog, &mut model);
    if catalog.is_polymorphic(name) {
        model.derived = discriminated_types(name, schema);
    }
    model
}

fn top_level_description(schema: &OaSchema) -> Option<String> {
    match schema {
        OaSchema::Obj {
            description: Some(description),
            ..
        } => Some(description.clone()),
        OaSchema::Obj {
            all_of: Some(all_of),
            ..
        } => all_of.iter().find_map(|element| match element {
            OaSchema::Obj {
                description: Some(description),
                ..
            } => Some(description.clone()),
            _ => None,
        }),
        _ => None,
    }
}

fn collect_schema_properties(schema: &OaSchema, catalog: &Catalog, out: &mut ModelSchema) {
    match schema {
        OaSchema::Obj {
            all_of: Some(list), ..
        } => {
            // `allOf` is how derived types name their base type.
            for s in list {
                match s {
                    OaSchema::Ref { reference } => {
                        let base = ref_simple_name(reference);
                        if SUPPORTED_TYPES.contains(&base) {
                            out.base = Some(base.to_string());
                        } else {
                            println!("{} derives from unsupported type {base}", out.name);
                        }
                    }
                    OaSchema::Obj { .. } => collect_schema_properties(s, catalog, out),
                }
            }
        }
        OaSchema::Obj {
            properties: Some(props),
            ..
        } => {
            for (name, prop_schema) in props {
                if let OaSchema::Obj {
                    navigation_property: true,
                    ..
                } = prop_schema
                {
                    // navigation properties aren't real properties, they basically just inform about a subpath
                    continue;
                }
                match map_openapi_schema_to_rust(prop_schema, catalog) {
                    Some((is_collection, rust_type)) => out.properties.push(Property {
                        name: name.clone(),
                        is_collection,
                        rust_type,
                        description: top_level_description(prop_schema),
                    }),
                    None => println!("Skipping unsupported type: {}.{name}", out.name),
                }
            }
        }
        OaSchema::Obj { .. } => {
            // a type without properties of its own
        }
        OaSchema::Ref { reference } => panic!("unexpected reference as a type: {reference}"),
    }
}

/// The supported types a schema's discriminator maps to, other than itself.
fn discriminated_types(name: &str, schema: &OaSchema) -> Vec<String> {
    let OaSchema::Obj {
        discriminator_mapping,
        all_of,
        ..
    } = schema
    else {
        return Vec::new();
    };

    let nested = all_of.iter().flatten().filter_map(|element| match element {
        OaSchema::Obj {
            discriminator_mapping: Some(mapping),
            ..
        } => Some(mapping),
        _ => None,
    });

    discriminator_mapping
        .iter()
        .chain(nested)
        .flatten()
        .map(|(_, reference)| ref_simple_name(reference))
        .filter(|simple| *simple != name && SUPPORTED_TYPES.contains(simple))
        .map(str::to_string)
        .collect()
}

fn custom_from_ref(reference: &str, catalog: &Catalog) -> Option<RustType> {
    let simple = ref_simple_name(reference);
    if !SUPPORTED_TYPES.contains(&simple) {
        println!("skipping unsupported schema: {simple}");
        return None;
    }
    if catalog.is_enum(simple) {
        Some(RustType::Enum(CustomRustType::from(simple)))
    } else {
        Some(RustType::Model(CustomRustType::new(
            simple,
            catalog.is_polymorphic(simple),
        )))
    }
}

/// Given a reference in the shape `#/components/schemas/microsoft.graph.message`,
/// get the name of the type being referred to.
fn ref_simple_name(reference: &str) -> &str {
    let name = std::path::Path::new(reference)
        .file_name()
        .expect("invalid ref name")
        .to_str()
        .expect("expected valid UTF-8 ref name");
    simple_name(name)
}

/// Map a property schema to whether it is a collection and its element type.
fn map_openapi_schema_to_rust(schema: &OaSchema, catalog: &Catalog) -> Option<(bool, RustType)> {
    match schema {
        OaSchema::Ref { reference } => Some((false, custom_from_ref(reference, catalog)?)),
        OaSchema::Obj {
            typ,
            format,
            items,
            one_of,
            any_of,
            ..
        } => match typ.as_deref() {
            Some("array") => {
                let item = items.as_deref()?;
                if let OaSchema::Obj { typ: Some(s), .. } = item {
                    if s == "array" {
                        todo!("nested arrays: {schema:?}");
                    }
                }
                let (_, typ) = map_openapi_schema_to_rust(item, catalog)?;
                if !typ.collectable() {
                    println!("skipping unsupported collection of {typ:?}");
                    return None;
                }
                Some((true, typ))
            }
            Some("string") => Some((false, map_string_format_to_rust(format.as_deref()))),
            Some("boolean") => Some((false, RustType::Bool)),
            Some("integer") => Some((false, map_integer_format_to_rust(format.as_deref()))),
            Some("number") => Some((false, map_number_format_to_rust(format.as_deref()))),
            Some("object") | None => {
                // Nullable references are `anyOf` the reference and a nullable
                // object, and numbers are `oneOf` a number and its string
                // spellings. The first alternative we understand wins.
                [one_of, any_of]
                    .into_iter()
                    .flatten()
                    .flatten()
                    .find_map(|alternative| map_openapi_schema_to_rust(alternative, catalog))
            }
            Some(_) => None,
        },
    }
}

fn map_string_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        None => RustType::String,
        Some("date-time") => RustType::DateTime,
        Some("uuid") => RustType::Uuid,
        Some("base64url") | Some("byte") | Some("binary") => RustType::Bytes,
        Some(t) => {
            println!("treating {t} as a string");
            RustType::String
        }
    }
}

fn map_integer_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        // Narrow integers are widened, the store only knows i32 and i64.
        Some("uint8") | Some("int8") | Some("int16") | Some("int32") => RustType::I32,
        Some("int64") => RustType::I64,
        // Default to i32 if unspecified
        None => RustType::I32,
        Some(fmt) => panic!("Unknown number format: {fmt}"),
    }
}

fn map_number_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        Some("uint8") | Some("int8") | Some("int16") | Some("int32") => RustType::I32,
        Some("int64") => RustType::I64,
        Some("float") => RustType::F32,
        Some("double") => RustType::F64,
        Some("decimal") => RustType::F64, // technically lossy, but rarely used
        None => panic!("Number with unspecified format"),
        Some(fmt) => panic!("Unknown number format: {fmt}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(typ: &str, format: Option<&str>) -> OaSchema {
        OaSchema::Obj {
            typ: Some(typ.to_string()),
            format: format.map(str::to_string),
            nullable: None,
            properties: None,
            items: None,
            all_of: None,
            one_of: None,
            any_of: None,
            description: None,
            navigation_property: false,
            enum_values: None,
            is_flags: false,
            discriminator_mapping: None,
        }
    }

    fn reference(name: &str) -> OaSchema {
        OaSchema::Ref {
            reference: format!("#/components/schemas/microsoft.graph.{name}"),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            enums: HashSet::from(["importance".to_string()]),
            polymorphic: HashSet::from(["recipient".to_string()]),
        }
    }

    #[test]
    fn string_formats_map_to_rich_types() {
        let catalog = catalog();
        let cases = [
            (None, "String"),
            (Some("date-time"), "DateTime"),
            (Some("uuid"), "Uuid"),
            (Some("base64url"), "Bytes"),
        ];
        for (format, expected) in cases {
            let (is_collection, rust_type) =
                map_openapi_schema_to_rust(&obj("string", format), &catalog).unwrap();
            assert!(!is_collection);
            assert_eq!(format!("{rust_type:?}"), expected);
        }
    }

    #[test]
    fn nullable_references_resolve_through_any_of() {
        let mut schema = obj("object", None);
        if let OaSchema::Obj { typ, any_of, .. } = &mut schema {
            *typ = None;
            *any_of = Some(vec![reference("importance"), obj("object", None)]);
        }
        let (_, rust_type) = map_openapi_schema_to_rust(&schema, &catalog()).unwrap();
        assert!(matches!(rust_type, RustType::Enum(ref c) if c.original_name() == "importance"));

        let (_, rust_type) = map_openapi_schema_to_rust(&reference("recipient"), &catalog()).unwrap();
        assert!(matches!(rust_type, RustType::Model(_)));

        assert!(map_openapi_schema_to_rust(&reference("user"), &catalog()).is_none());
    }

    #[test]
    fn numbers_prefer_the_numeric_alternative() {
        let mut schema = obj("object", None);
        if let OaSchema::Obj { typ, one_of, .. } = &mut schema {
            *typ = None;
            *one_of = Some(vec![obj("number", Some("double")), obj("string", None)]);
        }
        let (_, rust_type) = map_openapi_schema_to_rust(&schema, &catalog()).unwrap();
        assert!(matches!(rust_type, RustType::F64));
    }

    #[test]
    fn derived_types_name_their_base() {
        let mut own = obj("object", None);
        if let OaSchema::Obj { properties, .. } = &mut own {
            *properties = Some(vec![
                ("isAllDay".to_string(), obj("boolean", None)),
                ("type".to_string(), reference("importance")),
            ]);
        }
        let mut schema = obj("object", None);
        if let OaSchema::Obj { typ, all_of, .. } = &mut schema {
            *typ = None;
            *all_of = Some(vec![reference("message"), own]);
        }

        let model = extract_model("eventMessage", &schema, &catalog());
        assert_eq!(model.base.as_deref(), Some("message"));
        let names = model
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["isAllDay", "type"]);
        assert!(model.derived.is_empty());
    }
}
