//! Opaque platform handle passed through to tree walkers

use std::any::Any;

/// Platform state a walker needs to talk to the accessibility layer
///
/// The coordinator never inspects it; walkers downcast through `as_any`.
pub trait PlatformContext {
    fn as_any(&self) -> &dyn Any;
}

/// Platform context for walkers that need none
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPlatformContext;

impl PlatformContext for NullPlatformContext {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
