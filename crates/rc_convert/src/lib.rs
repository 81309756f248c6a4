//! Conversion between loosely typed [`Record`](rc_reflect::Record)s and
//! typed values.
//!
//! - Materialization ([`to_object`], [`Materializer`]) builds an instance of
//!   a reflected type from a record, recursing into nested records and
//!   sequences.
//! - Flattening ([`to_dictionary`], [`ToDictionary`]) copies the properties
//!   of a value into a record, one level deep.
//!
//! Instances are created through an [`InstanceFactory`], which caches the
//! default constructor of each type in a [`ConstructorCache`].
//!
//! # Example
//!
//! ```
//! use rc_convert::{RecordExt, ToDictionary};
//! use rc_reflect::{Record, derive::Reflect, ops::DynamicList};
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Address {
//!     #[reflect(rename = "City")]
//!     pub city: String,
//! }
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Person {
//!     #[reflect(rename = "Name")]
//!     pub name: String,
//!     #[reflect(rename = "Home")]
//!     pub home: Address,
//!     #[reflect(rename = "Scores")]
//!     pub scores: Box<[i32]>,
//! }
//!
//! let mut home = Record::new();
//! home.insert("City", String::from("Oslo"));
//!
//! let mut record = Record::new();
//! record.insert("Name", String::from("Kari"));
//! record.insert("Home", home);
//! record.insert("Scores", [3_i32, 5].into_iter().collect::<DynamicList>());
//!
//! let person = record.to_object::<Person>().unwrap().unwrap();
//! assert_eq!(person.home.city, "Oslo");
//! assert_eq!(&*person.scores, &[3, 5]);
//!
//! let flat = person.to_dictionary().unwrap();
//! assert_eq!(flat.keys().collect::<Vec<_>>(), ["Name", "Home", "Scores"]);
//! assert!(flat.get_as::<Address>("Home").is_some());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod error;
mod ext;
mod factory;
mod flatten;
mod materialize;
mod shape;

// -----------------------------------------------------------------------------
// Exports

pub use error::ConvertError;
pub use ext::{RecordExt, ToDictionary};
pub use factory::{ConstructorCache, InstanceFactory};
pub use flatten::{PropertySelection, to_dictionary, to_dictionary_with};
pub use materialize::{Materializer, to_object, to_object_dyn};
pub use shape::classify;
