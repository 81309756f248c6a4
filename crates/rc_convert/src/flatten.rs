use bitflags::bitflags;
use rc_reflect::info::{NamedField, StructInfo};
use rc_reflect::ops::{ReflectRef, Struct};
use rc_reflect::{Record, Reflect};

use crate::ConvertError;

bitflags! {
    /// Selects which properties of a struct are flattened.
    ///
    /// The default is `PUBLIC | DECLARED_ONLY`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct PropertySelection: u8 {
        /// Include `pub` fields.
        const PUBLIC        = 1 << 0;
        /// Include fields that are not `pub`.
        const NON_PUBLIC    = 1 << 1;
        /// Skip properties inherited through a `#[reflect(base)]` field.
        const DECLARED_ONLY = 1 << 2;
    }
}

impl Default for PropertySelection {
    #[inline]
    fn default() -> Self {
        Self::PUBLIC | Self::DECLARED_ONLY
    }
}

impl PropertySelection {
    #[inline]
    fn selects(self, field: &NamedField) -> bool {
        if field.is_public() {
            self.contains(Self::PUBLIC)
        } else {
            self.contains(Self::NON_PUBLIC)
        }
    }
}

/// Flattens the default selection of properties of `source` into a record.
///
/// See [`to_dictionary_with`].
#[inline]
pub fn to_dictionary(source: Option<&dyn Reflect>) -> Result<Record, ConvertError> {
    to_dictionary_with(source, PropertySelection::default())
}

/// Flattens the selected properties of `source` into a record.
///
/// Keys are the reflected property names and values are copies of the
/// current values, without recursing into compound values. An `Option`
/// property becomes null when `None` and its inner value otherwise.
///
/// An absent source gives an empty record. A [`Record`] source is copied,
/// an `Option` source is flattened through its value, and any other source
/// without properties gives an empty record.
///
/// # Examples
///
/// ```
/// use rc_convert::{PropertySelection, to_dictionary, to_dictionary_with};
/// use rc_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(rename = "Owner")]
///     pub owner: String,
///     #[reflect(rename = "Limit")]
///     pub limit: Option<u32>,
///     pin: u16,
/// }
///
/// let account = Account { owner: "ann".into(), limit: None, pin: 1234 };
///
/// let record = to_dictionary(Some(account.as_reflect())).unwrap();
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["Owner", "Limit"]);
/// assert!(record.is_null("Limit"));
///
/// let all = PropertySelection::PUBLIC | PropertySelection::NON_PUBLIC;
/// let record = to_dictionary_with(Some(account.as_reflect()), all).unwrap();
/// assert_eq!(record.get_as::<u16>("pin"), Some(&1234));
///
/// assert!(to_dictionary(None).unwrap().is_empty());
/// ```
pub fn to_dictionary_with(
    source: Option<&dyn Reflect>,
    selection: PropertySelection,
) -> Result<Record, ConvertError> {
    let Some(source) = source else {
        return Ok(Record::new());
    };

    match source.reflect_ref() {
        ReflectRef::Struct(source) => {
            let Ok(info) = source.reflect_type_info().as_struct() else {
                return Ok(Record::new());
            };
            let mut record = Record::with_capacity(info.field_len());
            flatten_struct(source, info, selection, &mut record)?;
            Ok(record)
        }
        ReflectRef::Record(source) => Ok(source.try_clone()?),
        ReflectRef::Optional(source) => to_dictionary_with(source.value(), selection),
        ReflectRef::List(_) | ReflectRef::Opaque(_) => Ok(Record::new()),
    }
}

fn flatten_struct(
    source: &dyn Struct,
    info: &StructInfo,
    selection: PropertySelection,
    record: &mut Record,
) -> Result<(), ConvertError> {
    for field in info.properties() {
        // Declared properties hide inherited ones of the same name.
        if !selection.selects(field) || record.contains_key(field.name()) {
            continue;
        }
        let Some(value) = source.field(field.name()) else {
            continue;
        };
        match present(value) {
            Some(value) => record.insert_boxed(field.name(), value.reflect_clone()?),
            None => record.insert_null(field.name()),
        }
    }

    if selection.contains(PropertySelection::DECLARED_ONLY) {
        return Ok(());
    }
    if let Some(base) = info.base()
        && let Ok(base_info) = base.type_info().as_struct()
        && let Some(ReflectRef::Struct(base_value)) =
            source.field(base.name()).map(|value| value.reflect_ref())
    {
        flatten_struct(base_value, base_info, selection, record)?;
    }
    Ok(())
}

// The value behind any number of `Option` layers.
fn present(value: &dyn Reflect) -> Option<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Optional(optional) => optional.value().and_then(present),
        _ => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use rc_reflect::derive::Reflect;
    use rc_reflect::ops::DynamicList;
    use rc_reflect::{Record, Reflect};

    use super::{PropertySelection, to_dictionary, to_dictionary_with};
    use crate::to_object;

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Entity {
        pub id: u64,
        #[reflect(rename = "Name")]
        pub name: String,
        stamp: u32,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Customer {
        #[reflect(base)]
        entity: Entity,
        #[reflect(rename = "Name")]
        pub name: String,
        #[reflect(rename = "Nick")]
        pub nick: Option<String>,
        #[reflect(rename = "Orders")]
        pub orders: Vec<u32>,
        secret: String,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Point {
        #[reflect(rename = "X")]
        pub x: i32,
        #[reflect(rename = "Y")]
        pub y: i32,
    }

    fn customer() -> Customer {
        Customer {
            entity: Entity {
                id: 9,
                name: "base".into(),
                stamp: 1,
            },
            name: "declared".into(),
            nick: Some("nick".into()),
            orders: vec![3, 1],
            secret: "s".into(),
        }
    }

    fn keys(record: &Record) -> Vec<&str> {
        record.keys().collect()
    }

    #[test]
    fn absent_source_is_empty() {
        assert!(to_dictionary(None).unwrap().is_empty());
        assert!(to_dictionary(Some(&None::<Point>)).unwrap().is_empty());
        assert!(to_dictionary(Some(&5_i32)).unwrap().is_empty());
    }

    #[test]
    fn default_selection() {
        let record = to_dictionary(Some(&customer())).unwrap();
        assert_eq!(keys(&record), ["Name", "Nick", "Orders"]);
        assert_eq!(record.get_as::<String>("Name").map(String::as_str), Some("declared"));
        assert_eq!(record.get_as::<String>("Nick").map(String::as_str), Some("nick"));
        assert_eq!(record.get_as::<Vec<u32>>("Orders"), Some(&vec![3, 1]));
    }

    #[test]
    fn inherited_and_non_public() {
        let all = PropertySelection::PUBLIC | PropertySelection::NON_PUBLIC;
        let record = to_dictionary_with(Some(&customer()), all).unwrap();
        assert_eq!(keys(&record), ["Name", "Nick", "Orders", "secret", "id", "stamp"]);
        assert_eq!(record.get_as::<String>("Name").map(String::as_str), Some("declared"));
        assert_eq!(record.get_as::<u64>("id"), Some(&9));

        let record = to_dictionary_with(Some(&customer()), PropertySelection::NON_PUBLIC).unwrap();
        assert_eq!(keys(&record), ["secret", "stamp"]);
    }

    #[test]
    fn none_becomes_null() {
        let mut value = customer();
        value.nick = None;
        let record = to_dictionary(Some(&value)).unwrap();
        assert!(record.contains_key("Nick"));
        assert!(record.is_null("Nick"));
    }

    #[test]
    fn records_are_copied() {
        let mut source = Record::new();
        source.insert("a", 1_u8);
        source.insert_null("b");
        let record = to_dictionary(Some(&source)).unwrap();
        assert_eq!(record.reflect_partial_eq(&source), Some(true));
    }

    #[test]
    fn lossy_round_trip() {
        let mut source = Record::new();
        source.insert("X", 1_i32);
        source.insert("Y", 2_i32);
        source.insert("Ghost", DynamicList::new());

        let point = to_object::<Point>(Some(&source)).unwrap().unwrap();
        let record = to_dictionary(Some(point.as_reflect())).unwrap();

        source.remove("Ghost");
        assert_eq!(record.reflect_partial_eq(&source), Some(true));
    }
}
