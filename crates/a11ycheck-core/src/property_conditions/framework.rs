//! Conditions on the UI framework that produced an element

use std::sync::LazyLock;

use crate::condition::Condition;

use super::string_properties::FRAMEWORK;

pub static WPF: LazyLock<Condition> = LazyLock::new(|| FRAMEWORK.is("WPF"));
pub static WIN32: LazyLock<Condition> = LazyLock::new(|| FRAMEWORK.is("Win32"));
pub static XAML: LazyLock<Condition> = LazyLock::new(|| FRAMEWORK.is("XAML"));
