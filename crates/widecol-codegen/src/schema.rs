mod entity;
pub(crate) use entity::Entity;

mod entity_attr;
use entity_attr::EntityAttr;

mod error;
use error::ErrorSet;

mod field;
pub(crate) use field::Field;
