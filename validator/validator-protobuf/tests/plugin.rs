
use prost_types::field_descriptor_proto::Type;
use test_helpers::*;
use validator_core::GeneratorOptions;
use validator_protobuf::{PluginError, generate_files, run_plugin};

fn order_file(syntax: &str) -> Vec<u8> {
    schema_file(
        "shop/order.proto",
        "shop",
        syntax,
        vec![
            message(
                "Order",
                vec![
                    scalar_field("id", 1, Type::Uint64).rule(rule().gt("0")),
                    repeated_field("items", 2, Type::String).rule(rule().lt("100")),
                    message_field("customer", 3, ".shop.Customer").rule(rule().neq("nil")),
                ],
            ),
            message("Customer", vec![scalar_field("name", 1, Type::String)]),
        ],
    )
}

#[test]
fn generates_one_file_per_request_file() {
    let request = build_request(&["shop/order.proto"], None, vec![order_file("proto3")]);
    let response = run_plugin(&request).unwrap();

    assert_eq!(response.error, None);
    assert_eq!(response.supported_features, Some(1));
    assert_eq!(response.file.len(), 1);

    let file = &response.file[0];
    assert_eq!(file.name.as_deref(), Some("shop/order.validate.rs"));
    let content = file.content.as_deref().unwrap();
    assert!(content.starts_with("// @generated by protoc-gen-validator. DO NOT EDIT.\n"));
    assert!(content.contains("// source: shop/order.proto\n"));
    assert!(content.contains("impl ::validator_runtime::Validate for Order {"));
    assert!(content.contains("(self.id > 0)"));
    assert!(content.contains("(self.items.len() < 100)"));
    assert!(content.contains("ValidationError::presence(\"self.customer\")"));
    assert!(!content.contains("for Customer"));
}

#[test]
fn parameter_configures_runtime_and_suffix() {
    let request = build_request(
        &["shop/order.proto"],
        Some("runtime=crate::checks,suffix=_check.rs"),
        vec![order_file("proto3")],
    );
    let response = run_plugin(&request).unwrap();
    assert_eq!(response.error, None);

    let file = &response.file[0];
    assert_eq!(file.name.as_deref(), Some("shop/order_check.rs"));
    assert!(
        file.content
            .as_deref()
            .unwrap()
            .contains("impl crate::checks::Validate for Order {")
    );
}

#[test]
fn non_proto3_file_produces_nothing() {
    let request = build_request(&["shop/order.proto"], None, vec![order_file("proto2")]);
    let response = run_plugin(&request).unwrap();
    assert_eq!(response.error, None);
    assert!(response.file.is_empty());
}

#[test]
fn only_requested_files_are_generated() {
    let other = schema_file(
        "shop/other.proto",
        "shop.other",
        "proto3",
        vec![message("Thing", vec![scalar_field("n", 1, Type::Int32).rule(rule().gt("0"))])],
    );
    let request = build_request(&["shop/other.proto"], None, vec![order_file("proto3"), other]);
    let response = run_plugin(&request).unwrap();
    let names: Vec<_> = response.file.iter().filter_map(|f| f.name.as_deref()).collect();
    assert_eq!(names, ["shop/other.validate.rs"]);
}

#[test]
fn invalid_parameter_is_reported_in_response() {
    let request = build_request(
        &["shop/order.proto"],
        Some("colour=blue"),
        vec![order_file("proto3")],
    );
    let response = run_plugin(&request).unwrap();
    assert!(response.file.is_empty());
    let error = response.error.unwrap();
    assert!(error.starts_with("invalid plugin parameter"), "{error}");
}

#[test]
fn unknown_file_is_reported_in_response() {
    let request = build_request(&["shop/missing.proto"], None, vec![order_file("proto3")]);
    let response = run_plugin(&request).unwrap();
    assert!(response.file.is_empty());
    assert!(response.error.unwrap().contains("shop/missing.proto"));
}

#[test]
fn undecodable_request_is_an_error() {
    // Length-delimited field claiming five bytes with only one present.
    let err = run_plugin(&[0x0a, 0x05, b'a']).unwrap_err();
    assert!(matches!(err, PluginError::DecodeRequest(_)));
}

#[test]
fn generate_files_reports_routine_counts() {
    let pool = build_pool(vec![order_file("proto3")]);
    let sources = generate_files(
        &pool,
        &["shop/order.proto".to_string()],
        &GeneratorOptions::default(),
    )
    .unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].source, "shop/order.proto");
    assert_eq!(sources[0].name, "shop/order.validate.rs");
    assert_eq!(sources[0].routines, 1);
}

#[test]
fn file_without_constraints_gets_header_only() {
    let plain = schema_file(
        "shop/plain.proto",
        "shop",
        "proto3",
        vec![message("Plain", vec![scalar_field("n", 1, Type::Int32)])],
    );
    let pool = build_pool(vec![plain]);
    let sources = generate_files(
        &pool,
        &["shop/plain.proto".to_string()],
        &GeneratorOptions::default(),
    )
    .unwrap();
    assert_eq!(sources[0].routines, 0);
    assert_eq!(
        sources[0].content,
        "// @generated by protoc-gen-validator. DO NOT EDIT.\n// source: shop/plain.proto\n"
    );
}
