
use prost_reflect::{DescriptorPool, DynamicMessage, Value};
use prost_types::field_descriptor_proto::Type;
use test_helpers::*;
use validator_core::GeneratorOptions;
use validator_protobuf::{DynamicValidationError, DynamicValidator};
use validator_runtime::ValidationError;

fn pool() -> DescriptorPool {
    shop_pool(vec![
        message(
            "User",
            vec![
                scalar_field("age", 1, Type::Int32).rule(rule().gt("0")),
                repeated_field("tags", 2, Type::String).rule(rule().eq("2")),
                scalar_field("code", 3, Type::Int32).rule(rule().eq("1,2,3")),
                scalar_field("level", 4, Type::Int32).rule(rule().neq("1, 2")),
                message_field("profile", 5, ".shop.Profile").rule(rule().neq("nil")),
                message_field("address", 6, ".shop.Address").rule(rule().neq("nil")),
                scalar_field("ratio", 7, Type::Float).rule(rule().lt("1")),
                scalar_field("pin", 8, Type::String).rule(rule().eq("3")),
            ],
        ),
        message("Profile", vec![scalar_field("bio", 1, Type::String).rule(rule().lt("5"))]),
        message("Address", vec![scalar_field("city", 1, Type::String)]),
        message(
            "Broken",
            vec![scalar_field("count", 1, Type::Int32).rule(rule().gt("many"))],
        ),
        message(
            "Scored",
            vec![scalar_field("score", 1, Type::Double).proto3_optional(0).rule(rule().gt("0.5"))],
        )
        .oneof("_score"),
    ])
}

fn validator(pool: &DescriptorPool) -> DynamicValidator {
    let file = pool.get_file_by_name("shop.proto").unwrap();
    DynamicValidator::for_file(&file, &GeneratorOptions::default())
}

fn new_message(pool: &DescriptorPool, name: &str) -> DynamicMessage {
    DynamicMessage::new(pool.get_message_by_name(name).unwrap())
}

fn strings(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| Value::String(s.to_string())).collect())
}

fn valid_user(pool: &DescriptorPool) -> DynamicMessage {
    let mut profile = new_message(pool, "shop.Profile");
    profile.set_field_by_name("bio", Value::String("hi".into()));
    let mut address = new_message(pool, "shop.Address");
    address.set_field_by_name("city", Value::String("Oslo".into()));

    let mut user = new_message(pool, "shop.User");
    user.set_field_by_name("age", Value::I32(30));
    user.set_field_by_name("tags", strings(&["a", "b"]));
    user.set_field_by_name("code", Value::I32(2));
    user.set_field_by_name("level", Value::I32(3));
    user.set_field_by_name("profile", Value::Message(profile));
    user.set_field_by_name("address", Value::Message(address));
    user.set_field_by_name("ratio", Value::F32(0.5));
    user.set_field_by_name("pin", Value::String("123".into()));
    user
}

fn constraint_error(accessor: &str, message: &str) -> DynamicValidationError {
    ValidationError::constraint(accessor.to_string(), message.to_string()).into()
}

#[test]
fn valid_message_passes() {
    let pool = pool();
    assert_eq!(validator(&pool).validate(&valid_user(&pool)), Ok(()));
}

#[test]
fn greater_than_bound() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);

    user.set_field_by_name("age", Value::I32(0));
    let err = validator.validate(&user).unwrap_err();
    assert_eq!(err, constraint_error("self.age", "self.age be less than 0"));
    assert_eq!(err.to_string(), "validation error: self.age be less than 0");

    user.set_field_by_name("age", Value::I32(1));
    assert_eq!(validator.validate(&user), Ok(()));
}

#[test]
fn repeated_length_equal() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);

    user.set_field_by_name("tags", strings(&["a"]));
    let err = validator.validate(&user).unwrap_err();
    assert!(err.to_string().contains("be not equal len(2)"), "{err}");

    user.set_field_by_name("tags", strings(&["a", "b", "c"]));
    assert!(validator.validate(&user).is_err());
}

#[test]
fn string_length_equal() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);

    user.set_field_by_name("pin", Value::String("12".into()));
    assert_eq!(
        validator.validate(&user).unwrap_err(),
        constraint_error("self.pin", "self.pin be not equal len(3)")
    );
}

#[test]
fn equal_alternatives_accept_any() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);

    for code in [1, 2, 3] {
        user.set_field_by_name("code", Value::I32(code));
        assert_eq!(validator.validate(&user), Ok(()), "code {code}");
    }
    user.set_field_by_name("code", Value::I32(4));
    assert_eq!(
        validator.validate(&user).unwrap_err(),
        constraint_error("self.code", "self.code be not equal 1,2,3")
    );
}

#[test]
fn not_equal_alternatives_reject_each() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);

    for level in [1, 2] {
        user.set_field_by_name("level", Value::I32(level));
        assert_eq!(
            validator.validate(&user).unwrap_err(),
            constraint_error("self.level", "self.level be equal 1, 2")
        );
    }
    user.set_field_by_name("level", Value::I32(0));
    assert_eq!(validator.validate(&user), Ok(()));
}

#[test]
fn float_bound() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);

    user.set_field_by_name("ratio", Value::F32(1.0));
    assert_eq!(
        validator.validate(&user).unwrap_err(),
        constraint_error("self.ratio", "self.ratio be greater than 1")
    );
}

#[test]
fn absent_message_fails_presence() {
    let pool = pool();
    let validator = validator(&pool);

    let mut user = valid_user(&pool);
    user.clear_field_by_name("profile");
    let err = validator.validate(&user).unwrap_err();
    assert_eq!(err, DynamicValidationError::from(ValidationError::presence("self.profile")));
    assert_eq!(err.to_string(), "validation error: self.profile must be not equal nil");

    // Presence does not depend on the nested type being constrained.
    let mut user = valid_user(&pool);
    user.clear_field_by_name("address");
    assert_eq!(
        validator.validate(&user).unwrap_err(),
        DynamicValidationError::from(ValidationError::presence("self.address"))
    );
}

#[test]
fn nested_failure_propagates_verbatim() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);

    let mut profile = new_message(&pool, "shop.Profile");
    profile.set_field_by_name("bio", Value::String("too long".into()));
    user.set_field_by_name("profile", Value::Message(profile));
    assert_eq!(
        validator.validate(&user).unwrap_err(),
        constraint_error("self.bio", "self.bio be greater than len(5)")
    );
}

#[test]
fn only_constrained_types_have_routines() {
    let pool = pool();
    let validator = validator(&pool);
    assert!(validator.has_routine("shop.User"));
    assert!(validator.has_routine("shop.Profile"));
    assert!(!validator.has_routine("shop.Address"));

    // Without a routine a message always passes.
    assert_eq!(validator.validate(&new_message(&pool, "shop.Address")), Ok(()));
}

#[test]
fn first_failure_in_declaration_order_wins() {
    let pool = pool();
    let validator = validator(&pool);
    let mut user = valid_user(&pool);
    user.set_field_by_name("age", Value::I32(-1));
    user.set_field_by_name("tags", strings(&[]));
    user.clear_field_by_name("profile");
    assert_eq!(
        validator.validate(&user).unwrap_err(),
        constraint_error("self.age", "self.age be less than 0")
    );
}

#[test]
fn optional_scalar_is_checked_only_when_set() {
    let pool = pool();
    let validator = validator(&pool);
    let mut scored = new_message(&pool, "shop.Scored");
    assert_eq!(validator.validate(&scored), Ok(()));

    scored.set_field_by_name("score", Value::F64(0.25));
    assert_eq!(
        validator.validate(&scored).unwrap_err(),
        constraint_error("self.score", "self.score be less than 0.5")
    );

    scored.set_field_by_name("score", Value::F64(0.75));
    assert_eq!(validator.validate(&scored), Ok(()));
}

#[test]
fn literal_of_wrong_type_is_reported() {
    let pool = pool();
    let validator = validator(&pool);
    let mut broken = new_message(&pool, "shop.Broken");
    broken.set_field_by_name("count", Value::I32(3));
    assert_eq!(
        validator.validate(&broken).unwrap_err(),
        DynamicValidationError::MalformedLiteral {
            accessor: "self.count".to_string(),
            literal: "many".to_string(),
        }
    );
}
