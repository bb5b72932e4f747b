//! Domain Layer
//!
//! Value types describing one mirror run and the port through which the
//! mirror is delegated. No process spawning happens here.
//!
//! - `value_objects/` - SourceDir, RemoteTarget, MirrorOptions, MirrorReport
//! - `ports/` - the `Transfer` trait implemented by infrastructure

pub mod ports;
pub mod value_objects;
