pub mod control_type;
pub mod element;
pub mod pattern;
pub mod property;
pub mod rect;

pub use control_type::ControlTypeId;
pub use element::{Element, ElementBuilder, ElementId};
pub use pattern::PatternId;
pub use property::{PropertyId, PropertyValue};
pub use rect::Rect;
