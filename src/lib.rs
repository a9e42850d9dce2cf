//! # mted
//!
//! Analysis core for a parallel multilingual corpus of TED talks annotated
//! with discourse relations. Derives sentence-group alignments between any
//! two languages from the English-pivot alignments shipped with the corpus,
//! extracts the discourse relations anchored on each aligned group, and
//! measures how well relations survive translation.
//!
//! Presentation layers (graph rendering, plots, search) consume these
//! modules; nothing in here draws or serves anything.
pub mod align;
pub mod error;
pub mod io;
pub mod lang;
pub mod model;
pub mod relations;
pub mod stats;
