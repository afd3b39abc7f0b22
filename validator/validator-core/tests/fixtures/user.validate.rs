// @generated by protoc-gen-validator. DO NOT EDIT.
// source: shop/user.proto

// shop.User
impl ::validator_runtime::Validate for User {
    fn validate(&self) -> ::core::result::Result<(), ::validator_runtime::ValidationError> {
        if !(self.age > 0) {
            return ::core::result::Result::Err(::validator_runtime::ValidationError::constraint("self.age", "self.age be less than 0"));
        }

        if !(self.code == 1 || self.code == 2 || self.code == 3) {
            return ::core::result::Result::Err(::validator_runtime::ValidationError::constraint("self.code", "self.code be not equal 1,2,3"));
        }

        if !(self.tags.len() == 2) {
            return ::core::result::Result::Err(::validator_runtime::ValidationError::constraint("self.tags", "self.tags be not equal len(2)"));
        }

        if self.profile.is_none() {
            return ::core::result::Result::Err(::validator_runtime::ValidationError::presence("self.profile"));
        }

        if let ::core::option::Option::Some(value) = self.profile.as_ref() {
            ::validator_runtime::Validate::validate(value)?;
        }

        if !(self.ratio < 1_f32) {
            return ::core::result::Result::Err(::validator_runtime::ValidationError::constraint("self.ratio", "self.ratio be greater than 1"));
        }

        if let ::core::option::Option::Some(value) = self.nickname.as_ref() {
            if !(value.len() < 20) {
                return ::core::result::Result::Err(::validator_runtime::ValidationError::constraint("self.nickname", "self.nickname be greater than len(20)"));
            }
        }

        if !(self.r#type != 0 && self.r#type != 3) {
            return ::core::result::Result::Err(::validator_runtime::ValidationError::constraint("self.r#type", "self.r#type be equal 0, 3"));
        }

        ::core::result::Result::Ok(())
    }
}

// shop.User.Profile
impl ::validator_runtime::Validate for user::Profile {
    fn validate(&self) -> ::core::result::Result<(), ::validator_runtime::ValidationError> {
        if !(self.bio.len() < 100) {
            return ::core::result::Result::Err(::validator_runtime::ValidationError::constraint("self.bio", "self.bio be greater than len(100)"));
        }

        ::core::result::Result::Ok(())
    }
}
