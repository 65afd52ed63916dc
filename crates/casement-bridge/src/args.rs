//! Typed argument payloads.
//!
//! Integer fields accept only JSON integers; float fields accept any JSON
//! number. Unknown fields are ignored.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use casement_common::BridgeError;

use crate::method::WindowMethod;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DragStartArgs {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TitleArgs {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SizeArgs {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PositionArgs {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CursorArgs {
    pub x: f64,
    pub y: f64,
}

/// Decode `args` into `T`, blaming `method` on failure.
pub fn decode<T: DeserializeOwned>(method: WindowMethod, args: &Value) -> Result<T, BridgeError> {
    T::deserialize(args).map_err(|e| BridgeError::invalid_arguments(method.name(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drag_start_accepts_integers_and_floats() {
        let a: DragStartArgs = decode(WindowMethod::DragStart, &json!({"x": 10, "y": 4.5})).unwrap();
        assert_eq!(a, DragStartArgs { x: 10.0, y: 4.5 });
    }

    #[test]
    fn size_rejects_fractional_values() {
        let err = decode::<SizeArgs>(WindowMethod::SetSize, &json!({"width": 800.5, "height": 600}))
            .unwrap_err();
        assert_eq!(err.code(), "invalid_arguments");
        assert!(err.to_string().starts_with("invalid arguments for setSize"));
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = decode::<PositionArgs>(WindowMethod::SetPosition, &json!({"x": 1})).unwrap_err();
        assert!(err.to_string().contains("`y`"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = decode::<TitleArgs>(WindowMethod::SetTitle, &json!({"title": 42})).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidArguments { ref method, .. } if method == "setTitle"));
    }

    #[test]
    fn null_args_are_rejected_for_methods_that_need_them() {
        assert!(decode::<CursorArgs>(WindowMethod::SetCursorPosition, &Value::Null).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let a: TitleArgs =
            decode(WindowMethod::SetTitle, &json!({"title": "X", "extra": true})).unwrap();
        assert_eq!(a.title, "X");
    }

    #[test]
    fn out_of_range_integer_is_rejected() {
        let args = json!({"x": 3_000_000_000_i64, "y": 0});
        assert!(decode::<PositionArgs>(WindowMethod::SetPosition, &args).is_err());
    }
}
