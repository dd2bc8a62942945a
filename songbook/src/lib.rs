//! A small library of beginner melodies rendered to MusicXML.
//!
//! The crate is a short pipeline: the literal note tables of [`library`]
//! are parsed into [`primitives`] events, grouped into measures by
//! [`primitives::pack()`], organized into parts and a score, and finally
//! serialized by [`musicxml_render`] into one *.musicxml file per melody.

pub mod library;
pub mod musicxml_render;
pub mod primitives;
