/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use yaml_rust2::Yaml;
use yaml_rust2::yaml::Hash;

use super::{get_bool_in, get_map_in, get_node_in, get_seq_in, get_str_in};

/// A recursive OpenAPI schema object, or reference to another schema object.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OaSchema {
    // e.g., `$ref: "#/components/schemas/microsoft.graph.message"`
    Ref {
        reference: String,
    },
    Obj {
        typ: Option<String>,
        format: Option<String>,
        nullable: Option<bool>,
        /// Properties in document order, which is also their wire order.
        properties: Option<Vec<(String, OaSchema)>>,
        items: Option<Box<OaSchema>>,
        all_of: Option<Vec<OaSchema>>,
        one_of: Option<Vec<OaSchema>>,
        any_of: Option<Vec<OaSchema>>,
        description: Option<String>,
        navigation_property: bool,
        enum_values: Option<Vec<String>>,
        /// `x-ms-enum-flags: { isFlags: true }`
        is_flags: bool,
        /// `(discriminator value, schema reference)` pairs.
        discriminator_mapping: Option<Vec<(String, String)>>,
    },
}

/// Recursively parses the given yaml node as a schema object or reference.
pub(super) fn parse_schema(node: &Yaml) -> OaSchema {
    let map = node
        .as_hash()
        .expect("all schemas should be compound YAML objects");

    parse_schema_from_map(map)
}

/// Recursively parses the schema represented by the given [`Hash`].
fn parse_schema_from_map(map: &Hash) -> OaSchema {
    if let Some(r) = get_str_in(map, "$ref") {
        return OaSchema::Ref {
            reference: r.to_string(),
        };
    }

    let typ = get_str_in(map, "type").map(str::to_string);
    let format = get_str_in(map, "format").map(str::to_string);
    let nullable = get_bool_in(map, "nullable");
    let description = get_str_in(map, "description").map(str::to_string);

    let properties = get_map_in(map, "properties").map(|props| {
        props
            .into_iter()
            .filter_map(|(k, v)| k.as_str().map(|name| (name.to_string(), parse_schema(v))))
            .collect()
    });

    let items = get_node_in(map, "items").map(|n| Box::new(parse_schema(n)));
    let all_of = get_seq_in(map, "allOf").map(|seq| seq.iter().map(parse_schema).collect());
    let one_of = get_seq_in(map, "oneOf").map(|seq| seq.iter().map(parse_schema).collect());
    let any_of = get_seq_in(map, "anyOf").map(|seq| seq.iter().map(parse_schema).collect());

    let navigation_property = get_bool_in(map, "x-ms-navigationProperty").unwrap_or(false);

    let enum_values = get_seq_in(map, "enum").map(|seq| {
        seq.iter()
            .filter_map(|label| label.as_str().map(str::to_string))
            .collect()
    });
    let is_flags = get_map_in(map, "x-ms-enum-flags")
        .and_then(|flags| get_bool_in(flags, "isFlags"))
        .unwrap_or(false);

    let discriminator_mapping = get_map_in(map, "discriminator")
        .and_then(|discriminator| get_map_in(discriminator, "mapping"))
        .map(|mapping| {
            mapping
                .into_iter()
                .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.as_str()?.to_string())))
                .collect()
        });

    OaSchema::Obj {
        typ,
        format,
        nullable,
        properties,
        items,
        all_of,
        one_of,
        any_of,
        description,
        navigation_property,
        enum_values,
        is_flags,
        discriminator_mapping,
    }
}

#[cfg(test)]
mod tests {
    use yaml_rust2::YamlLoader;

    use super::*;

    fn parse(source: &str) -> OaSchema {
        let docs = YamlLoader::load_from_str(source).unwrap();
        parse_schema(&docs[0])
    }

    #[test]
    fn flag_enums_are_recognized() {
        let schema = parse(
            r"
title: mailTipsType
enum:
  - automaticReplies
  - mailboxFullStatus
type: string
x-ms-enum-flags:
  isFlags: true
",
        );
        let OaSchema::Obj {
            enum_values,
            is_flags,
            ..
        } = schema
        else {
            panic!("expected an object schema");
        };
        assert_eq!(
            enum_values,
            Some(vec![
                "automaticReplies".to_string(),
                "mailboxFullStatus".to_string()
            ])
        );
        assert!(is_flags);
    }

    #[test]
    fn properties_and_mapping_keep_document_order() {
        let schema = parse(
            r"
title: recipient
type: object
properties:
  emailAddress:
    $ref: '#/components/schemas/microsoft.graph.emailAddress'
  '@odata.type':
    type: string
discriminator:
  propertyName: '@odata.type'
  mapping:
    '#microsoft.graph.attendeeBase': '#/components/schemas/microsoft.graph.attendeeBase'
    '#microsoft.graph.attendee': '#/components/schemas/microsoft.graph.attendee'
",
        );
        let OaSchema::Obj {
            properties: Some(properties),
            discriminator_mapping: Some(mapping),
            ..
        } = schema
        else {
            panic!("expected properties and a discriminator");
        };
        let names = properties.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["emailAddress", "@odata.type"]);
        assert_eq!(mapping[1].0, "#microsoft.graph.attendee");
        assert_eq!(
            mapping[1].1,
            "#/components/schemas/microsoft.graph.attendee"
        );
    }
}
