use rc_reflect::Reflect;
use rc_reflect::info::{ReflectKind, Shape, TypeInfo};

/// Classifies a source value against the declared type of its property.
///
/// The declared type decides, through [`TypeInfo::shape`]; the only look at
/// the value is whether it is a sequence. A collection property given
/// anything but a sequence is treated as a scalar, so the value is assigned
/// as-is and fails there unless it already has the property's type.
///
/// # Examples
///
/// ```
/// use rc_convert::classify;
/// use rc_reflect::{Record, info::{Shape, Typed}, ops::DynamicList};
///
/// let items: DynamicList = [1_i32, 2].into_iter().collect();
///
/// assert_eq!(classify(<Vec<i32>>::type_info(), &items), Shape::Collection);
/// assert_eq!(classify(<Vec<i32>>::type_info(), &1_i32), Shape::Scalar);
/// assert_eq!(classify(i32::type_info(), &items), Shape::Scalar);
/// assert_eq!(classify(Record::type_info(), &Record::new()), Shape::Compound);
/// ```
pub fn classify(declared: &TypeInfo, value: &dyn Reflect) -> Shape {
    match declared.shape() {
        Shape::Collection if value.reflect_kind() == ReflectKind::List => Shape::Collection,
        Shape::Collection => Shape::Scalar,
        shape => shape,
    }
}

#[cfg(test)]
mod tests {
    use rc_reflect::derive::Reflect;
    use rc_reflect::info::{Shape, Typed};
    use rc_reflect::ops::DynamicList;

    use super::classify;

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Line {
        pub qty: u32,
    }

    #[test]
    fn declared_type_decides() {
        assert_eq!(classify(String::type_info(), &1_u8), Shape::Scalar);
        assert_eq!(classify(Line::type_info(), &1_u8), Shape::Compound);
        assert_eq!(classify(<Option<Line>>::type_info(), &1_u8), Shape::Compound);
    }

    #[test]
    fn collections_need_a_sequence() {
        let items = DynamicList::new();
        assert_eq!(classify(<Box<[Line]>>::type_info(), &items), Shape::Collection);
        assert_eq!(classify(<Option<Vec<u8>>>::type_info(), &vec![1_u8]), Shape::Collection);
        assert_eq!(classify(<Vec<u8>>::type_info(), &String::new()), Shape::Scalar);
        assert_eq!(classify(DynamicList::type_info(), &items), Shape::Scalar);
    }
}
