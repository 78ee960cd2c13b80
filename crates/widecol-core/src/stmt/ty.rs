use super::Value;
use crate::{Error, Result};

/// The declared type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// String to string map holding a dynamic group
    Map,
}

impl Type {
    /// Resolves a type by name.
    ///
    /// Accepts the Rust primitive names as well as the common spelled-out
    /// names (`boolean`, `short`, `int`, `integer`, `long`, `float`,
    /// `double`), case-insensitively.
    pub fn from_name(name: &str) -> Result<Type> {
        Ok(match name.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Type::Bool,
            "string" | "str" => Type::String,
            "i16" | "short" => Type::I16,
            "i32" | "int" | "integer" => Type::I32,
            "i64" | "long" => Type::I64,
            "f32" | "float" => Type::F32,
            "f64" | "double" => Type::F64,
            "map" => Type::Map,
            _ => return Err(Error::unsupported_field_type(name)),
        })
    }

    pub fn is_map(self) -> bool {
        matches!(self, Self::Map)
    }

    /// Decodes the bytes of a single cell as a value of this type.
    ///
    /// Cells hold UTF-8 text. Booleans decode `true` (any case) as `true` and
    /// anything else as `false`. A map spans a whole family and is never
    /// decoded from one cell.
    pub fn decode(self, bytes: &[u8]) -> Result<Value> {
        let text = String::from_utf8_lossy(bytes);

        macro_rules! parse {
            ($variant:ident) => {
                text.parse()
                    .map(Value::$variant)
                    .map_err(|err| Error::invalid_value(&*text, self, err))
            };
        }

        match self {
            Type::String => Ok(Value::String(text.into_owned())),
            Type::Bool => Ok(Value::Bool(text.eq_ignore_ascii_case("true"))),
            Type::I16 => parse!(I16),
            Type::I32 => parse!(I32),
            Type::I64 => parse!(I64),
            Type::F32 => parse!(F32),
            Type::F64 => parse!(F64),
            Type::Map => Err(Error::unsupported_field_type("map stored in a single cell")),
        }
    }
}
