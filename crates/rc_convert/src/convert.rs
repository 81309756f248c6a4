use std::borrow::Cow;

use rc_reflect::Reflect;
use rc_reflect::info::{Shape, TypeInfo};
use rc_reflect::ops::ReflectRef;

use crate::{ConvertError, Materializer, classify};

impl Materializer<'_> {
    /// Converts one source value into a value for a property declared as
    /// `declared`.
    ///
    /// - Scalar: a copy of the value, unconverted.
    /// - Compound: a nested [`Record`](rc_reflect::Record) is materialized
    ///   into a new instance of the declared type; any other value is copied
    ///   unchanged.
    /// - Collection: a new list of the declared type holding the converted
    ///   elements, in source order.
    ///
    /// The result is not checked against `declared`; that happens when it is
    /// assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc_convert::Materializer;
    /// use rc_reflect::{info::Typed, ops::DynamicList};
    ///
    /// let items: DynamicList = [3_u8, 1, 2].into_iter().collect();
    /// let value = Materializer::global()
    ///     .convert(<Box<[u8]>>::type_info(), &items)
    ///     .unwrap();
    ///
    /// assert_eq!(value.downcast_ref::<Box<[u8]>>().map(|v| &v[..]), Some(&[3_u8, 1, 2][..]));
    /// ```
    pub fn convert(
        &self,
        declared: &TypeInfo,
        value: &dyn Reflect,
    ) -> Result<Box<dyn Reflect>, ConvertError> {
        self.convert_property(declared.type_path(), "", declared, value)
    }

    pub(crate) fn convert_property(
        &self,
        owner: &'static str,
        key: &str,
        declared: &TypeInfo,
        value: &dyn Reflect,
    ) -> Result<Box<dyn Reflect>, ConvertError> {
        match classify(declared, value) {
            Shape::Collection => self.convert_collection(owner, key, declared, value),
            _ => self.convert_single(declared, value),
        }
    }

    // The scalar and compound branches, also used for collection elements.
    fn convert_single(
        &self,
        declared: &TypeInfo,
        value: &dyn Reflect,
    ) -> Result<Box<dyn Reflect>, ConvertError> {
        let declared = declared.unwrap_optional();
        if declared.shape() == Shape::Compound
            && let ReflectRef::Record(record) = value.reflect_ref()
        {
            return self.create(record, declared);
        }
        Ok(value.reflect_clone()?)
    }

    fn convert_collection(
        &self,
        owner: &'static str,
        key: &str,
        declared: &TypeInfo,
        value: &dyn Reflect,
    ) -> Result<Box<dyn Reflect>, ConvertError> {
        let (Ok(info), ReflectRef::List(source)) =
            (declared.unwrap_optional().as_list(), value.reflect_ref())
        else {
            return self.convert_single(declared, value);
        };

        let item_info = info.item_info();
        let mut items = Vec::with_capacity(source.len());
        for item in source.iter() {
            items.push(self.convert_single(item_info, item)?);
        }

        info.collect(items)
            .map_err(|(index, item)| ConvertError::PropertyAssignment {
                owner,
                property: Cow::Owned(format!("{key}[{index}]")),
                expected: item_info.type_path(),
                found: item.reflect_type_path(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rc_reflect::Record;
    use rc_reflect::derive::Reflect;
    use rc_reflect::info::Typed;
    use rc_reflect::ops::DynamicList;

    use crate::{ConvertError, InstanceFactory, Materializer};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Tag {
        #[reflect(rename = "Name")]
        pub name: String,
    }

    fn tag(name: &str) -> Record {
        let mut record = Record::new();
        record.insert("Name", String::from(name));
        record
    }

    #[test]
    fn scalars_are_copied() {
        let factory = InstanceFactory::new();
        let value = Materializer::new(&factory)
            .convert(i64::type_info(), &7_u8)
            .unwrap();
        assert_eq!(value.downcast_ref::<u8>(), Some(&7));
    }

    #[test]
    fn nested_records_become_instances() {
        let factory = InstanceFactory::new();
        let converter = Materializer::new(&factory);

        let value = converter.convert(Tag::type_info(), &tag("a")).unwrap();
        assert_eq!(value.downcast_ref::<Tag>(), Some(&Tag { name: "a".into() }));

        // Optional properties convert to the wrapped type.
        let value = converter.convert(<Option<Tag>>::type_info(), &tag("b")).unwrap();
        assert!(value.is::<Tag>());

        // Already typed values pass through.
        let value = converter.convert(Tag::type_info(), &Tag { name: "c".into() }).unwrap();
        assert_eq!(value.downcast_ref::<Tag>().map(|t| t.name.as_str()), Some("c"));
    }

    #[test]
    fn collection_elements_keep_order() {
        let factory = InstanceFactory::new();
        let items: DynamicList = [tag("x"), tag("y"), tag("z")].into_iter().collect();

        let value = Materializer::new(&factory)
            .convert(<Vec<Tag>>::type_info(), &items)
            .unwrap();
        let tags = value.downcast_ref::<Vec<Tag>>().unwrap();
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn rejected_element_is_named() {
        let factory = InstanceFactory::new();
        let mut items = DynamicList::new();
        items.extend(1_i32);
        items.extend(String::from("two"));

        let err = Materializer::new(&factory)
            .convert(<Vec<i32>>::type_info(), &items)
            .unwrap_err();
        let ConvertError::PropertyAssignment { owner, property, expected, found } = err else {
            panic!("expected a property assignment error");
        };
        assert_eq!(owner, "alloc::vec::Vec<i32>");
        assert_eq!(property, "[1]");
        assert_eq!(expected, "i32");
        assert_eq!(found, "alloc::string::String");
    }

    #[test]
    fn nested_lists_are_not_flattened() {
        let factory = InstanceFactory::new();
        let inner: DynamicList = [1_u8].into_iter().collect();
        let outer: DynamicList = [inner].into_iter().collect();

        let err = Materializer::new(&factory)
            .convert(<Vec<Vec<u8>>>::type_info(), &outer)
            .unwrap_err();
        assert!(matches!(err, ConvertError::PropertyAssignment { .. }));

        let outer: DynamicList = [vec![1_u8, 2]].into_iter().collect();
        let value = Materializer::new(&factory)
            .convert(<Vec<Vec<u8>>>::type_info(), &outer)
            .unwrap();
        assert_eq!(value.downcast_ref::<Vec<Vec<u8>>>(), Some(&vec![vec![1, 2]]));
    }

    #[test]
    fn typed_lists_are_rebuilt() {
        let factory = InstanceFactory::new();
        let value = Materializer::new(&factory)
            .convert(<Box<[u16]>>::type_info(), &vec![4_u16, 5])
            .unwrap();
        assert_eq!(value.downcast_ref::<Box<[u16]>>().map(|v| &v[..]), Some(&[4_u16, 5][..]));
    }
}
