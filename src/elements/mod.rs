//! Structural elements module

mod id;
mod member;
mod node;
mod support;

pub use id::Id;
pub use member::Member;
pub use node::Node;
pub use support::Support;
