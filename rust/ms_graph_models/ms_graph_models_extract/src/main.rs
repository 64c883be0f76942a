/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! A program for turning [Microsoft OpenAPI
//! metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml)
//! into Rust types.

use quote::{ToTokens, quote};
use std::collections::HashMap;
use std::{env, fs, io::Write};

mod extract;
mod naming;
mod openapi;
mod oxidize;

use crate::extract::schema::{Catalog, extract_enum, extract_model};
use crate::naming::{simple_name, snakeify};
use crate::openapi::{LoadedYaml, load_yaml};
use crate::oxidize::enums::GraphEnum;
use crate::oxidize::types::GraphType;

const SUPPORTED_TYPES: [&str; 57] = [
    // entities
    "entity",
    "outlookItem",
    "message",
    "eventMessage",
    "eventMessageRequest",
    "eventMessageResponse",
    "event",
    "calendar",
    "managedAppRegistration",
    "androidManagedAppRegistration",
    "iosManagedAppRegistration",
    "managedEBook",
    "iosVppEBook",
    // complex types
    "itemBody",
    "emailAddress",
    "recipient",
    "attendeeBase",
    "attendee",
    "responseStatus",
    "dateTimeTimeZone",
    "location",
    "followupFlag",
    "internetMessageHeader",
    "timeSlot",
    "mimeContent",
    "photo",
    "quota",
    "storagePlanInformation",
    "mobileAppIdentifier",
    "androidMobileAppIdentifier",
    "iosMobileAppIdentifier",
    "patternedRecurrence",
    "recurrencePattern",
    "recurrenceRange",
    "onlineMeetingInfo",
    "phone",
    // enumerations
    "attendeeType",
    "bodyType",
    "calendarColor",
    "dayOfWeek",
    "eventType",
    "followupFlagStatus",
    "freeBusyStatus",
    "importance",
    "inferenceClassificationType",
    "locationType",
    "mailTipsType",
    "managedAppFlaggedReason",
    "meetingMessageType",
    "meetingRequestType",
    "onlineMeetingProviderType",
    "phoneType",
    "recurrencePatternType",
    "recurrenceRangeType",
    "responseType",
    "sensitivity",
    "weekIndex",
];

/// Types whose factory always builds the type itself, even though their
/// discriminator maps derived types. Their mappings span most of the API.
const FLAT_FACTORIES: [&str; 2] = ["entity", "outlookItem"];

/// Types whose `new()` presets `@odata.type`, since the service needs it to
/// tell them apart from their siblings.
const TYPED_CONSTRUCTORS: [&str; 14] = [
    "message",
    "eventMessage",
    "eventMessageRequest",
    "eventMessageResponse",
    "event",
    "calendar",
    "androidManagedAppRegistration",
    "iosManagedAppRegistration",
    "iosVppEBook",
    "recipient",
    "attendeeBase",
    "attendee",
    "androidMobileAppIdentifier",
    "iosMobileAppIdentifier",
];

const FILE_LEDE: &str = r#"/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN
"#;

const GENERATION_DISCLOSURE: &str = "Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_models_extract openapi.yaml ms_graph_models/`.";

fn print_usage(this_program: &str) {
    println!("Usage: {this_program} <openapi.yaml> <ms_graph_models_path>");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let this_program = args
            .first()
            .map(String::as_str)
            .unwrap_or("ms_graph_models_extract");
        print_usage(this_program);
        std::process::exit(1);
    }

    let yaml_path = std::path::Path::new(&args[1]);
    let out_path = std::path::Path::new(&args[2]);
    let types_path = out_path.join("src/types/");

    let yaml = fs::read_to_string(yaml_path)?;
    println!("file read");
    let LoadedYaml { schemas } = load_yaml(&yaml)?;
    println!("loaded schemas");

    let catalog = Catalog::new(&schemas);

    let mut models = vec![];
    let mut modules = vec![];
    for (full_name, schema) in &schemas {
        let simple = simple_name(full_name);
        if !SUPPORTED_TYPES.contains(&simple) {
            continue;
        }
        if let Some(enumeration) = extract_enum(simple, schema) {
            println!("generating Rust enum for {full_name}");
            write_type_file(&types_path, simple, GraphEnum::new(enumeration))?;
        } else {
            println!("generating Rust type for {full_name}");
            models.push(extract_model(simple, schema, &catalog));
        }
        modules.push(snakeify(simple));
    }

    // Kinds need the whole hierarchy, so models are written once all of them
    // are known.
    let bases = models
        .iter()
        .map(|model| (model.name.clone(), model.base.clone()))
        .collect::<HashMap<_, _>>();
    for model in models {
        let name = model.name.clone();
        let typed = TYPED_CONSTRUCTORS.contains(&name.as_str());
        write_type_file(&types_path, &name, GraphType::new(model, &bases, typed))?;
    }

    modules.sort();
    write_module_file(&types_path, &modules)?;

    Ok(())
}

fn write_type_file(
    types_path: &std::path::Path,
    name: &str,
    graph_type: impl ToTokens,
) -> Result<(), Box<dyn std::error::Error>> {
    let generated = quote!(#graph_type);

    let filename = format!("{}.rs", snakeify(name));
    let destination = types_path.join(filename);
    let mut file = fs::File::create(&destination)?;

    write!(file, "{FILE_LEDE}\n{generated}")?;
    println!(
        "Wrote generated Rust types to {}\n",
        destination.to_string_lossy()
    );
    Ok(())
}

fn write_module_file(
    out_path: &std::path::Path,
    modules: &[impl AsRef<str>],
) -> Result<(), Box<dyn std::error::Error>> {
    let module_path = out_path.join("mod.rs");
    let mut module_file = fs::File::create(&module_path)?;
    writeln!(module_file, "{FILE_LEDE}")?;
    for module in modules {
        writeln!(module_file, "pub mod {};", module.as_ref())?;
    }
    println!("Wrote module out to {}\n", module_path.to_string_lossy());
    Ok(())
}
