//! # saga-parser
//!
//! Turns an indentation-delimited episode outline into a typed document tree, and derives the
//! flat character, location and song lists from it.
//!
//! Layout
//!
//! src/outline
//!   ├── lines        Per-line helpers and classification
//!   ├── tree         The document tree (seasons, episodes, attributes, songs)
//!   ├── parsing      The line-by-line tree builder
//!   ├── extraction   Category lists pulled out of a built tree
//!   ├── formats      JSON and line-delimited serialization
//!   └── loader       Reading outlines from files or strings
//!
//! Both parsing and extraction are pure: no I/O happens outside of the loader.

pub mod outline;
