use std::borrow::Cow;

use rc_reflect::info::{StructInfo, TypeInfo, Typed};
use rc_reflect::ops::{ReflectMut, Struct};
use rc_reflect::registry::TypeRegistry;
use rc_reflect::{FromReflect, Record, Reflect};

use crate::{ConvertError, InstanceFactory};

// -----------------------------------------------------------------------------
// Materializer

/// Builds typed instances from [`Record`]s.
///
/// Each non-null record entry is matched by exact, case-sensitive key
/// against the writable properties of the target type, converted (see
/// [`convert`](Materializer::convert)) and assigned. Unknown keys, read-only
/// properties and null values are skipped. The first failure aborts the
/// whole call.
///
/// # Examples
///
/// ```
/// use rc_convert::Materializer;
/// use rc_reflect::{Record, derive::Reflect, ops::DynamicList};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Customer {
///     #[reflect(rename = "Name")]
///     pub name: String,
///     #[reflect(rename = "Tags")]
///     pub tags: Vec<String>,
/// }
///
/// let mut record = Record::new();
/// record.insert("Name", String::from("Ann"));
/// record.insert("Tags", ["vip", "eu"].map(String::from).into_iter().collect::<DynamicList>());
/// record.insert("Ghost", 1_i32);
///
/// let customer = Materializer::global()
///     .materialize_as::<Customer>(Some(&record))
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(customer.name, "Ann");
/// assert_eq!(customer.tags, ["vip", "eu"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Materializer<'f> {
    factory: &'f InstanceFactory,
}

impl Default for Materializer<'static> {
    #[inline]
    fn default() -> Self {
        Self::global()
    }
}

impl Materializer<'static> {
    /// A materializer using the process-wide [`InstanceFactory`].
    #[inline]
    pub fn global() -> Self {
        Self::new(InstanceFactory::global())
    }
}

impl<'f> Materializer<'f> {
    #[inline]
    pub const fn new(factory: &'f InstanceFactory) -> Self {
        Self { factory }
    }

    #[inline]
    pub fn factory(&self) -> &'f InstanceFactory {
        self.factory
    }

    /// Materializes `record` as the described type.
    ///
    /// Returns `None` without constructing anything when `record` is absent.
    /// Otherwise `existing` is populated and returned, or a new default
    /// instance when `existing` is `None`.
    pub fn materialize(
        &self,
        record: Option<&Record>,
        info: &TypeInfo,
        existing: Option<Box<dyn Reflect>>,
    ) -> Result<Option<Box<dyn Reflect>>, ConvertError> {
        let Some(record) = record else {
            return Ok(None);
        };

        let Some(mut instance) = existing else {
            return self.create(record, info).map(Some);
        };
        if instance.ty_id() != info.ty_id() {
            return Err(ConvertError::InstanceMismatch {
                expected: info.type_path(),
                found: instance.reflect_type_path(),
            });
        }
        self.populate(record, &mut *instance)?;
        Ok(Some(instance))
    }

    /// Typed form of [`materialize`](Materializer::materialize) that always
    /// creates a new instance.
    pub fn materialize_as<T: FromReflect + Typed>(
        &self,
        record: Option<&Record>,
    ) -> Result<Option<T>, ConvertError> {
        let Some(instance) = self.materialize(record, T::type_info(), None)? else {
            return Ok(None);
        };
        T::take_from_reflect(instance)
            .map(Some)
            .map_err(|value| ConvertError::InstanceMismatch {
                expected: T::type_path(),
                found: value.reflect_type_path(),
            })
    }

    /// Materializes `record` as the registered type with the given type name
    /// or, if no name matches unambiguously, type path.
    ///
    /// ```
    /// use rc_convert::Materializer;
    /// use rc_reflect::{Record, derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect, Default, PartialEq, Debug)]
    /// #[reflect(default)]
    /// struct Product {
    ///     pub sku: String,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register::<Product>();
    ///
    /// let mut record = Record::new();
    /// record.insert("sku", String::from("A-1"));
    ///
    /// let value = Materializer::global()
    ///     .materialize_named(Some(&record), &registry, "Product")
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(value.downcast_ref::<Product>(), Some(&Product { sku: "A-1".into() }));
    ///
    /// assert!(Materializer::global().materialize_named(Some(&record), &registry, "Ghost").is_err());
    /// ```
    pub fn materialize_named(
        &self,
        record: Option<&Record>,
        registry: &TypeRegistry,
        name: &str,
    ) -> Result<Option<Box<dyn Reflect>>, ConvertError> {
        let meta = registry
            .get_with_type_name(name)
            .or_else(|| registry.get_with_type_path(name))
            .ok_or_else(|| ConvertError::UnknownType { name: name.into() })?;
        self.materialize(record, meta.type_info(), None)
    }

    /// Assigns the entries of `record` to the properties of `target`.
    ///
    /// Properties without a matching non-null entry keep their value. A
    /// `None` target is replaced by `Some` of a value materialized from
    /// `record`.
    pub fn populate(&self, record: &Record, target: &mut dyn Reflect) -> Result<(), ConvertError> {
        let target_path = target.reflect_type_path();
        match target.reflect_mut() {
            ReflectMut::Struct(target) => self.populate_struct(record, target),
            ReflectMut::Record(target) => {
                for (key, value) in record {
                    if let Some(value) = value {
                        target.insert_boxed(key.to_owned(), value.reflect_clone()?);
                    }
                }
                Ok(())
            }
            ReflectMut::Optional(target) => {
                if let Some(inner) = target.value_mut() {
                    return self.populate(record, inner);
                }
                let Ok(info) = target.reflect_type_info().as_optional() else {
                    return Ok(());
                };
                // An empty option receives a new inner value.
                let inner = self.create(record, info.inner_info())?;
                target
                    .set(inner)
                    .map_err(|value| ConvertError::InstanceMismatch {
                        expected: info.inner_info().type_path(),
                        found: value.reflect_type_path(),
                    })
            }
            ReflectMut::List(_) | ReflectMut::Opaque(_) => {
                log::trace!("`{target_path}` has no properties to populate");
                Ok(())
            }
        }
    }

    pub(crate) fn create(
        &self,
        record: &Record,
        info: &TypeInfo,
    ) -> Result<Box<dyn Reflect>, ConvertError> {
        if let TypeInfo::Optional(optional) = info {
            let inner = self.create(record, optional.inner_info())?;
            let mut instance = self.factory.get_or_create(info)?;
            instance
                .set(inner)
                .map_err(|value| ConvertError::InstanceMismatch {
                    expected: optional.inner_info().type_path(),
                    found: value.reflect_type_path(),
                })?;
            return Ok(instance);
        }

        let mut instance = self.factory.get_or_create(info)?;
        self.populate(record, &mut *instance)?;
        Ok(instance)
    }

    fn populate_struct(&self, record: &Record, target: &mut dyn Struct) -> Result<(), ConvertError> {
        let info: &StructInfo = match target.reflect_type_info().as_struct() {
            Ok(info) => info,
            Err(_) => return Ok(()),
        };
        let owner = info.type_path();

        for (key, value) in record {
            let Some(value) = value else {
                log::trace!("skipping null `{key}` for `{owner}`");
                continue;
            };
            let Some((bases, field)) = info.find_property(key) else {
                log::trace!("`{owner}` has no property `{key}`");
                continue;
            };
            if !field.is_writable() {
                log::trace!("skipping read-only `{owner}::{key}`");
                continue;
            }

            let converted = self.convert_property(owner, key, field.type_info(), value)?;
            let Some(slot) = property_mut(&mut *target, &bases, field.name()) else {
                continue;
            };
            slot.set(converted)
                .map_err(|value| ConvertError::PropertyAssignment {
                    owner,
                    property: Cow::Owned(key.to_owned()),
                    expected: field.type_info().type_path(),
                    found: value.reflect_type_path(),
                })?;
        }
        Ok(())
    }
}

// Walks the base fields in `bases`, then returns the named field.
fn property_mut<'a>(
    target: &'a mut dyn Struct,
    bases: &[&str],
    name: &str,
) -> Option<&'a mut dyn Reflect> {
    let mut current = target;
    for base in bases {
        let ReflectMut::Struct(next) = current.field_mut(base)?.reflect_mut() else {
            return None;
        };
        current = next;
    }
    current.field_mut(name)
}

// -----------------------------------------------------------------------------
// Free functions

/// Materializes `record` as a new `T` with the process-wide factory.
///
/// Returns `None` when `record` is absent.
///
/// ```
/// use rc_convert::to_object;
/// use rc_reflect::{Record, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let mut record = Record::new();
/// record.insert("x", 3_i32);
/// record.insert_null("y");
///
/// let point = to_object::<Point>(Some(&record)).unwrap().unwrap();
/// assert_eq!((point.x, point.y), (3, 0));
///
/// assert!(to_object::<Point>(None).unwrap().is_none());
/// ```
#[inline]
pub fn to_object<T: FromReflect + Typed>(record: Option<&Record>) -> Result<Option<T>, ConvertError> {
    Materializer::global().materialize_as(record)
}

/// Untyped form of [`to_object`], see [`Materializer::materialize`].
#[inline]
pub fn to_object_dyn(
    record: Option<&Record>,
    info: &TypeInfo,
    existing: Option<Box<dyn Reflect>>,
) -> Result<Option<Box<dyn Reflect>>, ConvertError> {
    Materializer::global().materialize(record, info, existing)
}

#[cfg(test)]
mod tests {
    use rc_reflect::derive::Reflect;
    use rc_reflect::info::Typed;
    use rc_reflect::ops::DynamicList;
    use rc_reflect::registry::TypeRegistry;
    use rc_reflect::{Record, Reflect};

    use crate::{ConvertError, InstanceFactory, Materializer, to_object, to_object_dyn};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Inner {
        #[reflect(rename = "X")]
        pub x: i32,
    }

    #[derive(Reflect, Default, Debug)]
    #[reflect(default)]
    struct Outer {
        #[reflect(rename = "Inner")]
        pub inner: Inner,
        #[reflect(rename = "Items")]
        pub items: Box<[i32]>,
        #[reflect(rename = "Children")]
        pub children: Vec<Inner>,
        #[reflect(rename = "Note")]
        pub note: Option<String>,
        #[reflect(rename = "Extra")]
        pub extra: Record,
        #[reflect(rename = "Version", read_only)]
        pub version: u32,
    }

    #[derive(Reflect, Default, Debug)]
    #[reflect(default)]
    struct Entity {
        pub id: u64,
        pub name: String,
    }

    #[derive(Reflect, Default, Debug)]
    #[reflect(default)]
    struct Person {
        #[reflect(base)]
        entity: Entity,
        pub name: String,
        email: Option<String>,
    }

    #[derive(Reflect, Debug)]
    struct NoDefault {
        pub id: u64,
    }

    #[derive(Reflect, Debug)]
    struct Holder {
        pub item: NoDefault,
    }

    fn inner(x: i32) -> Record {
        let mut record = Record::new();
        record.insert("X", x);
        record
    }

    #[test]
    fn absent_record_constructs_nothing() {
        let factory = InstanceFactory::new();
        let materializer = Materializer::new(&factory);

        assert!(materializer.materialize_as::<Outer>(None).unwrap().is_none());
        assert!(materializer.materialize(None, NoDefault::type_info(), None).unwrap().is_none());
        assert!(factory.cache().is_empty());
        assert!(to_object::<NoDefault>(None).unwrap().is_none());
    }

    #[test]
    fn nested_compound() {
        let mut record = Record::new();
        record.insert("Inner", inner(1));

        let outer = to_object::<Outer>(Some(&record)).unwrap().unwrap();
        assert_eq!(outer.inner.x, 1);
    }

    #[test]
    fn collections_keep_order_and_count() {
        let mut record = Record::new();
        record.insert("Items", [1_i32, 2, 3].into_iter().collect::<DynamicList>());
        record.insert("Children", [inner(5), inner(6)].into_iter().collect::<DynamicList>());

        let outer = to_object::<Outer>(Some(&record)).unwrap().unwrap();
        assert_eq!(&*outer.items, &[1, 2, 3]);
        assert_eq!(outer.children, [Inner { x: 5 }, Inner { x: 6 }]);
    }

    #[test]
    fn unknown_null_and_read_only_keys_are_skipped() {
        let mut record = Record::new();
        record.insert("Ghost", 1_i32);
        record.insert("x", 9_i32);
        record.insert_null("Note");
        record.insert("Version", 4_u32);
        record.insert("Inner", inner(2));

        let outer = to_object::<Outer>(Some(&record)).unwrap().unwrap();
        assert_eq!(outer.inner.x, 2);
        assert_eq!(outer.note, None);
        assert_eq!(outer.version, 0);
    }

    #[test]
    fn optional_and_record_properties() {
        let mut extra = Record::new();
        extra.insert("kept", 1_u8);
        extra.insert_null("dropped");

        let mut record = Record::new();
        record.insert("Note", String::from("hello"));
        record.insert("Extra", extra);

        let outer = to_object::<Outer>(Some(&record)).unwrap().unwrap();
        assert_eq!(outer.note.as_deref(), Some("hello"));
        assert_eq!(outer.extra.get_as::<u8>("kept"), Some(&1));
        assert!(!outer.extra.contains_key("dropped"));
    }

    #[test]
    fn existing_instance_keeps_other_fields() {
        let mut record = Record::new();
        record.insert("X", 3_i32);
        record.insert("Ghost", String::new());

        let mut value = Inner { x: 1 };
        Materializer::global().populate(&record, &mut value).unwrap();
        assert_eq!(value.x, 3);

        let mut outer = Outer {
            note: Some("kept".into()),
            ..Default::default()
        };
        let mut record = Record::new();
        record.insert("Inner", inner(8));
        Materializer::global().populate(&record, &mut outer).unwrap();
        assert_eq!(outer.inner.x, 8);
        assert_eq!(outer.note.as_deref(), Some("kept"));
    }

    #[test]
    fn existing_instance_is_returned() {
        let existing: Box<dyn Reflect> = Box::new(Inner { x: 1 });
        let value = to_object_dyn(Some(&inner(4)), Inner::type_info(), Some(existing))
            .unwrap()
            .unwrap();
        assert_eq!(value.downcast_ref::<Inner>(), Some(&Inner { x: 4 }));

        let err = to_object_dyn(Some(&inner(4)), Inner::type_info(), Some(Box::new(1_i32)))
            .unwrap_err();
        assert!(matches!(err, ConvertError::InstanceMismatch { found: "i32", .. }));
    }

    #[test]
    fn inherited_properties() {
        let mut record = Record::new();
        record.insert("id", 7_u64);
        record.insert("name", String::from("declared"));
        record.insert("email", String::from("a@b.c"));

        let person = to_object::<Person>(Some(&record)).unwrap().unwrap();
        assert_eq!(person.entity.id, 7);
        assert_eq!(person.name, "declared");
        assert_eq!(person.entity.name, "");
        assert_eq!(person.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn missing_default_constructor() {
        let record = Record::new();
        let err = to_object::<NoDefault>(Some(&record)).unwrap_err();
        assert!(matches!(err, ConvertError::MissingDefaultConstructor { .. }));

        let mut nested = Record::new();
        nested.insert("id", 1_u64);
        let mut record = Record::new();
        record.insert("item", nested);

        let mut holder = Holder { item: NoDefault { id: 0 } };
        let err = Materializer::global().populate(&record, &mut holder).unwrap_err();
        let ConvertError::MissingDefaultConstructor { type_path } = err else {
            panic!("expected a missing constructor error");
        };
        assert_eq!(type_path, NoDefault::type_info().type_path());
    }

    #[test]
    fn incompatible_assignment() {
        let mut record = Record::new();
        record.insert("X", [1_i32].into_iter().collect::<DynamicList>());
        let err = to_object::<Inner>(Some(&record)).unwrap_err();
        let ConvertError::PropertyAssignment { owner, property, expected, found } = err else {
            panic!("expected a property assignment error");
        };
        assert_eq!(owner, Inner::type_info().type_path());
        assert_eq!(property, "X");
        assert_eq!(expected, "i32");
        assert_eq!(found, "rc_reflect::ops::DynamicList");

        let mut record = Record::new();
        record.insert("X", 1_i64);
        assert!(to_object::<Inner>(Some(&record)).is_err());

        let mut record = Record::new();
        record.insert("Items", [1_i32, 2].into_iter().collect::<DynamicList>());
        record.insert("Children", [inner(1), Record::new()].into_iter().collect::<DynamicList>());
        record.insert("Note", 5_u8);
        let err = to_object::<Outer>(Some(&record)).unwrap_err();
        assert!(matches!(err, ConvertError::PropertyAssignment { property, .. } if property == "Note"));
    }

    #[test]
    fn element_failure_names_index() {
        let mut items = DynamicList::new();
        items.extend(1_i32);
        items.extend(2_u8);
        let mut record = Record::new();
        record.insert("Items", items);

        let err = to_object::<Outer>(Some(&record)).unwrap_err();
        assert!(matches!(err, ConvertError::PropertyAssignment { property, .. } if property == "Items[1]"));
    }

    #[test]
    fn special_targets() {
        let mut record = Record::new();
        record.insert("a", 1_i32);
        record.insert_null("b");

        let copy = to_object::<Record>(Some(&record)).unwrap().unwrap();
        assert_eq!(copy.len(), 1);
        assert_eq!(copy.get_as::<i32>("a"), Some(&1));

        let value = to_object::<Option<Inner>>(Some(&inner(3))).unwrap().unwrap();
        assert_eq!(value, Some(Inner { x: 3 }));
    }

    #[test]
    fn empty_option_instance_is_filled() {
        let info = <Option<Inner>>::type_info();

        let value = to_object_dyn(Some(&inner(5)), info, Some(Box::new(None::<Inner>)))
            .unwrap()
            .unwrap();
        assert_eq!(value.downcast_ref::<Option<Inner>>(), Some(&Some(Inner { x: 5 })));

        let value = to_object_dyn(Some(&inner(6)), info, Some(Box::new(Some(Inner { x: 1 }))))
            .unwrap()
            .unwrap();
        assert_eq!(value.downcast_ref::<Option<Inner>>(), Some(&Some(Inner { x: 6 })));

        let mut target = None::<Inner>;
        Materializer::global().populate(&inner(7), &mut target).unwrap();
        assert_eq!(target, Some(Inner { x: 7 }));
    }

    #[test]
    fn named_lookup() {
        let mut registry = TypeRegistry::new();
        registry.register::<Inner>();

        let value = Materializer::global()
            .materialize_named(Some(&inner(2)), &registry, Inner::type_info().type_path())
            .unwrap()
            .unwrap();
        assert_eq!(value.downcast_ref::<Inner>(), Some(&Inner { x: 2 }));

        let err = Materializer::global()
            .materialize_named(Some(&inner(2)), &registry, "Missing")
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnknownType { name } if name == "Missing"));
    }

    #[test]
    fn rematerializing_is_idempotent() {
        let mut record = Record::new();
        record.insert("Inner", inner(4));
        record.insert("Items", vec![7_i32, 8]);

        let first = to_object::<Outer>(Some(&record)).unwrap().unwrap();
        let second = to_object::<Outer>(Some(&record)).unwrap().unwrap();
        assert_eq!(first.inner, second.inner);
        assert_eq!(first.items, second.items);
    }
}
