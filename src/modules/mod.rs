//! Modules layer - Adapters for the collaborators the core talks to
//!
//! Contains the notification sink (toasts), the device geolocation
//! provider and the image picker. Rendering them is the embedding UI's
//! concern.

pub mod geolocation;
pub mod images;
pub mod notifications;
