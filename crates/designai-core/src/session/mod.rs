//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: Session, login input and resolution types
//! - `resolver`: lenient login resolution and the guest fast-track
//!
//! # Usage
//!
//! ```ignore
//! use designai_core::session::{resolve_login, LoginInput, Session};
//! ```

mod model;
mod resolver;

// Re-export public API
pub use model::{AuthResolution, LoginInput, LoginNotice, Session};
pub use resolver::{avatar_initial, create_guest_session, resolve_login};
