//! Conditions on boolean properties

use std::sync::LazyLock;

use crate::condition::Condition;

pub static IS_KEYBOARD_FOCUSABLE: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(|e| e.is_keyboard_focusable(), "element is keyboard focusable")
});

pub static IS_NOT_KEYBOARD_FOCUSABLE: LazyLock<Condition> =
    LazyLock::new(|| !&*IS_KEYBOARD_FOCUSABLE);

pub static IS_OFF_SCREEN: LazyLock<Condition> =
    LazyLock::new(|| Condition::create(|e| e.is_off_screen(), "element is off screen"));

pub static IS_NOT_OFF_SCREEN: LazyLock<Condition> = LazyLock::new(|| !&*IS_OFF_SCREEN);
