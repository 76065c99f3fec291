//! Custom property registrations
//!
//! Applications can expose platform properties the standard set does not
//! know about. The registrar remembers every registration so it can replay
//! them after the platform side was reset (the coordinator does so when an
//! element context leaves live mode).

use std::collections::BTreeMap;

use a11ycheck_core::model::PropertyId;
use a11ycheck_core::{A11yError, ExError, ExErrorKind, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value type of a custom property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomPropertyType {
    String,
    Int,
    Bool,
    Double,
    Point,
    Element,
    Enum,
}

/// A user-configured custom property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub guid: Uuid,
    pub programmatic_name: String,
    pub property_type: CustomPropertyType,
    /// Value names, for `Enum` properties only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<i32, String>>,
}

impl CustomProperty {
    /// # Errors
    ///
    /// `InvalidInput` when the name is blank or an enum has no values.
    pub fn validate(&self) -> Result<()> {
        if self.programmatic_name.trim().is_empty() {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("custom_property_validate")
                .with_message("custom property needs a programmatic name"));
        }

        let has_values = self.values.as_ref().is_some_and(|v| !v.is_empty());
        if self.property_type == CustomPropertyType::Enum && !has_values {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("custom_property_validate")
                .with_message(format!(
                    "enum custom property '{}' needs values",
                    self.programmatic_name
                )));
        }

        Ok(())
    }
}

/// Platform side of a registration
pub trait RegistrationSink {
    /// Register the property with the platform and return its dynamic id
    ///
    /// # Errors
    ///
    /// Platform refusal, reported as `ExternalService`.
    fn register_property(&mut self, prop: &CustomProperty) -> Result<PropertyId>;

    /// Install the value converter for an already registered id
    fn register_converter(&mut self, id: PropertyId, prop: &CustomProperty);
}

pub struct Registrar {
    sink: Box<dyn RegistrationSink>,
    registrations: BTreeMap<PropertyId, CustomProperty>,
}

impl Registrar {
    pub fn new(sink: Box<dyn RegistrationSink>) -> Self {
        Self {
            sink,
            registrations: BTreeMap::new(),
        }
    }

    /// # Errors
    ///
    /// Validation failures, or the sink's error if the platform refuses.
    pub fn register_custom_property(&mut self, prop: CustomProperty) -> Result<PropertyId> {
        prop.validate()?;

        let id = self.sink.register_property(&prop)?;
        self.sink.register_converter(id, &prop);
        tracing::debug!(
            property_id = id.0,
            name = %prop.programmatic_name,
            "registered custom property"
        );
        self.registrations.insert(id, prop);

        Ok(id)
    }

    /// Copy of every registration made through this registrar
    pub fn custom_property_registrations(&self) -> BTreeMap<PropertyId, CustomProperty> {
        self.registrations.clone()
    }

    /// Install converters for registrations made elsewhere
    pub fn merge_custom_property_registrations(
        &mut self,
        registrations: &BTreeMap<PropertyId, CustomProperty>,
    ) {
        for (id, prop) in registrations {
            self.sink.register_converter(*id, prop);
        }
    }

    /// Re-install converters for every stored registration
    pub fn restore_custom_property_registrations(&mut self) {
        let Self {
            sink,
            registrations,
        } = self;
        for (id, prop) in registrations.iter() {
            sink.register_converter(*id, prop);
        }
        tracing::debug!(
            count = registrations.len(),
            "restored custom property registrations"
        );
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new(Box::new(InMemoryRegistrationSink::default()))
    }
}

/// Sink that hands out ids from a private range and records converter installs
///
/// Clones share state, so a test can keep one handle and give the other to a
/// [`Registrar`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistrationSink {
    state: std::rc::Rc<std::cell::RefCell<SinkState>>,
}

#[derive(Debug, Default)]
struct SinkState {
    next_offset: i32,
    converters: Vec<PropertyId>,
}

impl InMemoryRegistrationSink {
    /// First id handed out
    pub const BASE_ID: i32 = 70_000;

    /// Every converter install, in order
    pub fn converter_log(&self) -> Vec<PropertyId> {
        self.state.borrow().converters.clone()
    }
}

impl RegistrationSink for InMemoryRegistrationSink {
    fn register_property(&mut self, prop: &CustomProperty) -> Result<PropertyId> {
        let mut state = self.state.borrow_mut();
        let id = Self::BASE_ID.checked_add(state.next_offset).ok_or_else(|| {
            ExError::from(A11yError::Internal {
                message: format!("no ids left for '{}'", prop.programmatic_name),
            })
        })?;
        state.next_offset += 1;
        Ok(PropertyId(id))
    }

    fn register_converter(&mut self, id: PropertyId, _prop: &CustomProperty) {
        self.state.borrow_mut().converters.push(id);
    }
}
