//! Interactive editing state
//!
//! - `edit`: the create/edit form session
//! - `form`: raw form values and their conversion to typed input
//! - `notification`: success/error notifications raised by operations

pub mod edit;
pub mod form;
pub mod notification;

pub use edit::{EditSession, SessionMode};
pub use form::{FormField, FormValues};
pub use notification::{Notification, NotificationLog, NotificationType, Notifier};
