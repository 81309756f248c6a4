//! Items referenced by `#[derive(Reflect)]` output.
//!
//! Not public API.

/// Re-exports from `alloc`, which the deriving crate may not name.
pub mod alloc_utils {
    pub use ::alloc::borrow::Cow;
    pub use ::alloc::boxed::Box;
}

/// Link-time collection of `#[reflect(auto_register)]` types.
#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// Registers one type into a registry.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    // Only present in a registry if collection works on this platform.
    #[derive(crate::derive::Reflect)]
    #[reflect(auto_register, type_path = "rc_reflect::__macro_exports::auto_register::__AvailFlag")]
    pub struct __AvailFlag;

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }

    #[cfg(test)]
    mod tests {
        use core::any::TypeId;

        use super::__AvailFlag;
        use crate::derive::Reflect;
        use crate::registry::TypeRegistry;

        #[derive(Reflect, Default)]
        #[reflect(default, auto_register)]
        struct Collected {
            pub value: Option<u32>,
        }

        #[test]
        fn collects_annotated_types() {
            let mut registry = TypeRegistry::empty();
            if !registry.auto_register() {
                return;
            }
            assert!(registry.contains(TypeId::of::<__AvailFlag>()));
            assert!(registry.contains(TypeId::of::<Collected>()));
            assert!(registry.contains(TypeId::of::<Option<u32>>()));
            assert!(registry.auto_register());
        }
    }
}
