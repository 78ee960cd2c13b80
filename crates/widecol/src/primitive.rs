use crate::{stmt, Error, Result};

use indexmap::IndexMap;
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// A Rust type that can be stored in an entity field.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: stmt::Type = stmt::Type::$variant;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> stmt::Value {
                    stmt::Value::from(self.clone())
                }
            }
        )*
    };
}

impl_primitive!(
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String
);

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }
}

fn load_map(value: stmt::Value) -> Result<IndexMap<String, String>> {
    match value {
        stmt::Value::Map(entries) => Ok(entries),
        stmt::Value::Null => Ok(IndexMap::new()),
        value => Err(Error::type_conversion(value, "map")),
    }
}

impl<S: BuildHasher + Default> Primitive for IndexMap<String, String, S> {
    const TYPE: stmt::Type = stmt::Type::Map;

    fn load(value: stmt::Value) -> Result<Self> {
        Ok(load_map(value)?.into_iter().collect())
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Map(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl<S: BuildHasher + Default> Primitive for HashMap<String, String, S> {
    const TYPE: stmt::Type = stmt::Type::Map;

    fn load(value: stmt::Value) -> Result<Self> {
        Ok(load_map(value)?.into_iter().collect())
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Map(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl Primitive for BTreeMap<String, String> {
    const TYPE: stmt::Type = stmt::Type::Map;

    fn load(value: stmt::Value) -> Result<Self> {
        Ok(load_map(value)?.into_iter().collect())
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Map(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}
