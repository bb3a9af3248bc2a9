//! # Primitives
//!
//! Fixed constants of the engine.

use crate::EdgeWeight;

/// Weight given to a friendship when the caller does not choose one.
///
/// Used for friendships declared without a weight and for friendships the
/// messaging workflow creates on a first message.
pub const DEFAULT_EDGE_WEIGHT: EdgeWeight = EdgeWeight::new(1);
