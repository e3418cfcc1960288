use crate::names::*;
use serde::{Deserialize, Serialize};

/// Type of a member as seen by the target runtime
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub enum JvmType {
    Int,
    Long,
    Boolean,
    Byte,
    Short,
    Char,
    Float,
    Double,
    /// Only valid as a return type
    Unit,
    Object(BinaryName),
    Array(Box<JvmType>),
}

impl JvmType {
    /// Primitive type for a keyword like `Int` or `Boolean`
    pub fn primitive(name: &str) -> Option<JvmType> {
        let t = match name {
            "Int" => JvmType::Int,
            "Long" => JvmType::Long,
            "Boolean" => JvmType::Boolean,
            "Byte" => JvmType::Byte,
            "Short" => JvmType::Short,
            "Char" => JvmType::Char,
            "Float" => JvmType::Float,
            "Double" => JvmType::Double,
            "Unit" => JvmType::Unit,
            _ => return None,
        };
        Some(t)
    }

    pub fn object(name: &str) -> JvmType {
        JvmType::Object(binary_name(name))
    }

    pub fn array(elem: JvmType) -> JvmType {
        JvmType::Array(Box::new(elem))
    }

    /// Field descriptor (eg. `I`, `[Z`, `Ljava/lang/String;`)
    pub fn descriptor(&self) -> String {
        match self {
            JvmType::Int => "I".to_string(),
            JvmType::Long => "J".to_string(),
            JvmType::Boolean => "Z".to_string(),
            JvmType::Byte => "B".to_string(),
            JvmType::Short => "S".to_string(),
            JvmType::Char => "C".to_string(),
            JvmType::Float => "F".to_string(),
            JvmType::Double => "D".to_string(),
            JvmType::Unit => "V".to_string(),
            JvmType::Object(name) => name.descriptor(),
            JvmType::Array(elem) => format!("[{}", elem.descriptor()),
        }
    }
}

/// Method descriptor (eg. `(ILjava/lang/String;)V`)
pub fn method_descriptor<'a>(
    params: impl IntoIterator<Item = &'a JvmType>,
    ret: &JvmType,
) -> String {
    let params = params
        .into_iter()
        .map(|t| t.descriptor())
        .collect::<Vec<_>>()
        .join("");
    format!("({}){}", params, ret.descriptor())
}
