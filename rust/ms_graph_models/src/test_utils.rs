/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::Value;

use crate::serialization::json::{parse_json, serialize_to_json};
use crate::serialization::{BackedModel, Parsable, ParsableFactory};

/// Assert the expected result of JSON serialization, including field order.
pub fn assert_serialized_json(data: &dyn Parsable, expected: Value) {
    let buf = serialize_to_json(data).unwrap();
    let actual = std::str::from_utf8(buf.as_slice()).unwrap();

    assert_eq!(actual, expected.to_string());
}

/// Parse a JSON fixture that must decode to a non-null object.
pub fn parse_fixture<T: Parsable + BackedModel>(content: &str, factory: ParsableFactory<T>) -> T {
    parse_json(content.as_bytes(), factory)
        .unwrap()
        .expect("fixture should be an object")
}
