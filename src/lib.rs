#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use rc_convert as convert;
pub use rc_reflect as reflect;
pub use rc_utils as utils;
