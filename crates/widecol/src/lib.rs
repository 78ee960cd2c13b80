// Lets `#[derive(Entity)]` expand inside this crate's own tests.
extern crate self as widecol;

pub mod db;
pub use db::Db;

pub mod engine;

mod entity;
pub use entity::Entity;

mod primitive;
pub use primitive::Primitive;

pub use widecol_core::{bail, err, schema, stmt, Error, Result, Schema};

pub use widecol_macros::Entity;

pub mod driver {
    pub use widecol_core::driver::*;
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Entity, Error, Primitive, Result};
    pub use std::{default::Default, option::Option, result::Result::Err, sync::OnceLock};
    pub use widecol_core::{
        schema::Schema,
        stmt::{Type, Value},
    };
}
