use rc_reflect::info::{TypeInfo, Typed};
use rc_reflect::{FromReflect, Record, Reflect};

use crate::{ConvertError, PropertySelection, flatten, materialize};

// -----------------------------------------------------------------------------
// RecordExt

/// Materialization methods on a record, or on a record that may be absent.
///
/// # Examples
///
/// ```
/// use rc_convert::RecordExt;
/// use rc_reflect::{Record, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Flag {
///     pub on: bool,
/// }
///
/// let mut record = Record::new();
/// record.insert("on", true);
/// assert!(record.to_object::<Flag>().unwrap().unwrap().on);
///
/// let absent: Option<Record> = None;
/// assert!(absent.to_object::<Flag>().unwrap().is_none());
/// ```
pub trait RecordExt {
    /// See [`to_object`](crate::to_object).
    fn to_object<T: FromReflect + Typed>(&self) -> Result<Option<T>, ConvertError>;

    /// See [`to_object_dyn`](crate::to_object_dyn).
    fn to_object_dyn(
        &self,
        info: &TypeInfo,
        existing: Option<Box<dyn Reflect>>,
    ) -> Result<Option<Box<dyn Reflect>>, ConvertError>;
}

impl RecordExt for Record {
    #[inline]
    fn to_object<T: FromReflect + Typed>(&self) -> Result<Option<T>, ConvertError> {
        materialize::to_object(Some(self))
    }

    #[inline]
    fn to_object_dyn(
        &self,
        info: &TypeInfo,
        existing: Option<Box<dyn Reflect>>,
    ) -> Result<Option<Box<dyn Reflect>>, ConvertError> {
        materialize::to_object_dyn(Some(self), info, existing)
    }
}

impl RecordExt for Option<Record> {
    #[inline]
    fn to_object<T: FromReflect + Typed>(&self) -> Result<Option<T>, ConvertError> {
        materialize::to_object(self.as_ref())
    }

    #[inline]
    fn to_object_dyn(
        &self,
        info: &TypeInfo,
        existing: Option<Box<dyn Reflect>>,
    ) -> Result<Option<Box<dyn Reflect>>, ConvertError> {
        materialize::to_object_dyn(self.as_ref(), info, existing)
    }
}

// -----------------------------------------------------------------------------
// ToDictionary

/// Flattening methods on reflected values.
///
/// An absent source is flattened with
/// [`to_dictionary(None)`](crate::to_dictionary), or through an `Option`
/// value, which flattens like its content.
///
/// # Examples
///
/// ```
/// use rc_convert::ToDictionary;
/// use rc_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Flag {
///     pub on: bool,
/// }
///
/// let record = Flag { on: true }.to_dictionary().unwrap();
/// assert_eq!(record.get_as::<bool>("on"), Some(&true));
///
/// let boxed: Box<dyn Reflect> = Box::new(Flag { on: false });
/// assert_eq!(boxed.to_dictionary().unwrap().get_as::<bool>("on"), Some(&false));
///
/// assert!(None::<Flag>.to_dictionary().unwrap().is_empty());
/// ```
pub trait ToDictionary {
    /// Flattens with [`PropertySelection::default`].
    #[inline]
    fn to_dictionary(&self) -> Result<Record, ConvertError> {
        self.to_dictionary_with(PropertySelection::default())
    }

    fn to_dictionary_with(&self, selection: PropertySelection) -> Result<Record, ConvertError>;
}

impl<T: Reflect> ToDictionary for T {
    #[inline]
    fn to_dictionary_with(&self, selection: PropertySelection) -> Result<Record, ConvertError> {
        flatten::to_dictionary_with(Some(self), selection)
    }
}

impl ToDictionary for dyn Reflect {
    #[inline]
    fn to_dictionary_with(&self, selection: PropertySelection) -> Result<Record, ConvertError> {
        flatten::to_dictionary_with(Some(self), selection)
    }
}

#[cfg(test)]
mod tests {
    use rc_reflect::derive::Reflect;
    use rc_reflect::info::Typed;
    use rc_reflect::{Record, Reflect};

    use super::{RecordExt, ToDictionary};
    use crate::PropertySelection;

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Line {
        #[reflect(rename = "Sku")]
        pub sku: String,
        #[reflect(rename = "Qty")]
        pub qty: u32,
        note: String,
    }

    #[test]
    fn record_methods() {
        let mut record = Record::new();
        record.insert("Sku", String::from("A"));
        record.insert("Qty", 2_u32);

        let line = record.to_object::<Line>().unwrap().unwrap();
        assert_eq!(line.qty, 2);

        let value = Some(record).to_object_dyn(Line::type_info(), None).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<Line>(), Some(&line));

        assert!(None::<Record>.to_object_dyn(Line::type_info(), None).unwrap().is_none());
    }

    #[test]
    fn flatten_methods() {
        let line = Line {
            sku: "B".into(),
            qty: 1,
            note: "n".into(),
        };
        assert_eq!(line.to_dictionary().unwrap().len(), 2);

        let value: &dyn Reflect = &line;
        let all = PropertySelection::PUBLIC | PropertySelection::NON_PUBLIC;
        let record = value.to_dictionary_with(all).unwrap();
        assert_eq!(record.get_as::<String>("note").map(String::as_str), Some("n"));

        // Flattening a record copies it.
        let copy = record.to_dictionary().unwrap();
        assert_eq!(copy.reflect_partial_eq(&record), Some(true));
    }
}
