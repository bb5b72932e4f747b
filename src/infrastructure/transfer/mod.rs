//! Transfer adapters

mod rsync;

pub use rsync::{is_itemized_change, RsyncTransfer, MIRROR_FLAGS};
