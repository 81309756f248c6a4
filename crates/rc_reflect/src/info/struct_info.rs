use alloc::boxed::Box;
use alloc::vec::Vec;

use rc_utils::hash::{FixedHashState, HashMap};

use crate::info::{NamedField, Type, impl_type_fn};
use crate::ops::Struct;
use crate::registry::GetTypeMeta;

/// Type information of a struct with named fields.
///
/// Fields keep their declaration order. At most one field is the
/// [base](NamedField::is_base); its fields are reachable through
/// [`find_property`](StructInfo::find_property).
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    base: Option<usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates the info from fields in declaration order.
    ///
    /// # Panics
    ///
    /// Panics if two fields share a name or more than one field is a base.
    /// The derive macro rejects both at compile time.
    pub fn new<T: Struct + GetTypeMeta>(fields: &[NamedField]) -> Self {
        let mut field_indices = HashMap::with_capacity_and_hasher(fields.len(), FixedHashState);
        let mut base = None;
        for (index, field) in fields.iter().enumerate() {
            let prev = field_indices.insert(field.name(), index);
            assert!(prev.is_none(), "duplicate reflected field `{}`", field.name());
            if field.is_base() {
                assert!(base.is_none(), "`{}` declares more than one base", T::type_path());
                base = Some(index);
            }
        }

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            base,
        }
    }

    /// Returns the field with the given reflected name, base field included.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_indices.get(name).map(|&index| &self.fields[index])
    }

    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Fields that are properties of this struct, i.e. everything but the base.
    pub fn properties(&self) -> impl Iterator<Item = &NamedField> {
        self.fields.iter().filter(|field| !field.is_base())
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// The field holding the base part, if any.
    #[inline]
    pub fn base(&self) -> Option<&NamedField> {
        self.base.map(|index| &self.fields[index])
    }

    /// Finds a property by name, searching declared fields first and then
    /// the base chain.
    ///
    /// Returns the names of the base fields to walk through (outermost
    /// first) together with the property. The walk stops at a base whose
    /// type is not a struct.
    pub fn find_property(&self, name: &str) -> Option<(Vec<&'static str>, &NamedField)> {
        let mut path = Vec::new();
        let mut info = self;
        loop {
            if let Some(field) = info.field(name).filter(|field| !field.is_base()) {
                return Some((path, field));
            }
            let base = info.base()?;
            path.push(base.name());
            info = base.type_info().as_struct().ok()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::derive::Reflect;
    use crate::info::{Typed, Visibility};

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Entity {
        pub id: u64,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Named {
        #[reflect(base)]
        entity: Entity,
        #[reflect(rename = "Name")]
        pub name: String,
        #[reflect(read_only)]
        pub version: u32,
        #[reflect(ignore)]
        _scratch: Vec<u8>,
    }

    #[test]
    fn declared_fields_keep_order() {
        let info = Named::type_info().as_struct().unwrap();
        let names: Vec<_> = info.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["entity", "Name", "version"]);
        let props: Vec<_> = info.properties().map(|f| f.name()).collect();
        assert_eq!(props, ["Name", "version"]);
        assert_eq!(info.field("Name").unwrap().visibility(), Visibility::Public);
        assert_eq!(info.field("entity").unwrap().visibility(), Visibility::NonPublic);
        assert!(!info.field("version").unwrap().is_writable());
    }

    #[test]
    fn property_lookup_walks_base() {
        let info = Named::type_info().as_struct().unwrap();

        let (path, field) = info.find_property("Name").unwrap();
        assert!(path.is_empty());
        assert!(field.type_is::<String>());

        let (path, field) = info.find_property("id").unwrap();
        assert_eq!(path, ["entity"]);
        assert!(field.type_is::<u64>());

        assert!(info.find_property("entity").is_none());
        assert!(info.find_property("name").is_none());
    }
}
