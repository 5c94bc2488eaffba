//! Generated protobuf types for the servers file.

include!(concat!(env!("OUT_DIR"), "/protos/mod.rs"));
