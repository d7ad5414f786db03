//! Integration test suite modules.

mod form;
mod navigation;
mod particles;
mod rendering;
