mod feed_snapshot;
mod notification;
mod notification_page;

pub use feed_snapshot::*;
pub use notification::*;
pub use notification_page::*;
