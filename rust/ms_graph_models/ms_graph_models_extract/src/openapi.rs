/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Reading the schema section of an OpenAPI yaml document.

use std::collections::HashMap;
use yaml_rust2::{Yaml, YamlLoader, yaml::Hash as YamlHash};

pub mod schema;

use schema::{OaSchema, parse_schema};

/// The schemas of an OpenAPI document, keyed by their full name
/// (`microsoft.graph.message`), not yet interpreted.
pub struct LoadedYaml {
    pub schemas: HashMap<String, OaSchema>,
}

/// Parse the given yaml text and collect `components.schemas`.
pub fn load_yaml(yaml_str: &str) -> Result<LoadedYaml, Box<dyn std::error::Error>> {
    let docs = YamlLoader::load_from_str(yaml_str)?;
    println!("yaml loaded");
    let doc = docs.into_iter().next().ok_or("empty YAML document")?;

    let schemas = get_path(&doc, &["components", "schemas"])
        .ok_or("missing 'components.schemas'")?
        .as_hash()
        .ok_or("'components.schemas' is not a map")?;
    println!("loaded roots");

    let schemas = schemas
        .iter()
        .filter_map(|(name, schema)| Some((name.as_str()?.to_string(), parse_schema(schema))))
        .collect();

    Ok(LoadedYaml { schemas })
}

/// Follows `keys` through nested maps starting at `root`.
fn get_path<'a>(root: &'a Yaml, keys: &[&str]) -> Option<&'a Yaml> {
    keys.iter()
        .try_fold(root, |node, key| get_node_in(node.as_hash()?, key))
}

fn get_node_in<'a>(h: &'a YamlHash, key: &str) -> Option<&'a Yaml> {
    h.get(&Yaml::from_str(key))
}

fn get_str_in<'a>(h: &'a YamlHash, key: &str) -> Option<&'a str> {
    get_node_in(h, key)?.as_str()
}

fn get_bool_in(h: &YamlHash, key: &str) -> Option<bool> {
    get_node_in(h, key)?.as_bool()
}

fn get_map_in<'a>(h: &'a YamlHash, key: &str) -> Option<&'a YamlHash> {
    get_node_in(h, key)?.as_hash()
}

fn get_seq_in<'a>(h: &'a YamlHash, key: &str) -> Option<&'a Vec<Yaml>> {
    get_node_in(h, key)?.as_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_are_keyed_by_full_name() {
        let loaded = load_yaml(
            r"
openapi: 3.0.4
components:
  schemas:
    microsoft.graph.itemBody:
      title: itemBody
      type: object
    microsoft.graph.bodyType:
      title: bodyType
      enum:
        - text
        - html
      type: string
",
        )
        .unwrap();

        let mut names = loaded.schemas.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, ["microsoft.graph.bodyType", "microsoft.graph.itemBody"]);
    }

    #[test]
    fn missing_or_malformed_schemas_are_errors() {
        let missing = load_yaml("openapi: 3.0.4\ncomponents:\n  responses: {}\n");
        assert!(missing.is_err());

        let malformed = load_yaml("components:\n  schemas:\n    - microsoft.graph.entity\n");
        assert_eq!(
            malformed.err().map(|e| e.to_string()).as_deref(),
            Some("'components.schemas' is not a map")
        );
    }

    #[test]
    fn paths_walk_nested_maps() {
        let doc = &YamlLoader::load_from_str("a:\n  b:\n    c: leaf\n").unwrap()[0];
        assert_eq!(get_path(doc, &["a", "b", "c"]).and_then(Yaml::as_str), Some("leaf"));
        assert!(get_path(doc, &["a", "x"]).is_none());
        assert!(get_path(doc, &["a", "b", "c", "d"]).is_none());
    }
}
