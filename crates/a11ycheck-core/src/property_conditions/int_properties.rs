//! Conditions on integer properties

use std::sync::{Arc, LazyLock};

use crate::condition::Condition;
use crate::model::Element;

type Accessor = Arc<dyn Fn(&Element) -> i64 + Send + Sync>;

/// An integer-valued property that conditions can compare against
#[derive(Clone)]
pub struct IntProperty {
    accessor: Accessor,
    name: &'static str,
}

impl IntProperty {
    pub fn new<F>(accessor: F, name: &'static str) -> Self
    where
        F: Fn(&Element) -> i64 + Send + Sync + 'static,
    {
        Self {
            accessor: Arc::new(accessor),
            name,
        }
    }

    pub fn equals(&self, value: i64) -> Condition {
        let accessor = Arc::clone(&self.accessor);
        Condition::create(
            move |e| accessor(e) == value,
            format!("{} is {}", self.name, value),
        )
    }

    pub fn not_equals(&self, value: i64) -> Condition {
        !self.equals(value)
    }
}

pub static NATIVE_WINDOW_HANDLE: LazyLock<IntProperty> =
    LazyLock::new(|| IntProperty::new(|e| e.native_window_handle(), "NativeWindowHandle"));
