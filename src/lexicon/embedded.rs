//! Embedded lexicon
//!
//! Word list compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/lexicon.rs"));
