#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sg_reflect as reflect;
pub use sg_serial as serial;
pub use sg_utils as utils;
