//! Workspace state: views, devices, the in-memory snapshot and the
//! repository contract for the persisted documents.

mod model;
pub mod repository;

pub use model::{AppState, AuthEntry, Device, DeviceSize, View};
pub use repository::WorkspaceRepository;
