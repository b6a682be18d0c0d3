//! A typed, synchronous publish/subscribe primitive.
//!
//! An [`Event`] holds an ordered list of [`Handler`]s. Handlers are attached
//! with [`Event::subscribe`] or [`Event::once`], detached with
//! [`Event::unsubscribe`] or the returned [`Subscription`], and invoked in
//! subscription order by [`Event::trigger`].
//!
//! ```
//! use ripple_event::{Event, Handler};
//!
//! let resized = Event::<(u32, u32)>::new();
//! let log = Handler::new(|(width, height): &(u32, u32)| {
//!     println!("resized to {width}x{height}");
//! });
//!
//! let subscription = resized.subscribe(&log);
//! resized.trigger((800, 600));
//! subscription.unsubscribe();
//! assert!(resized.is_empty());
//! ```

mod config;
mod error;
mod event;
mod handler;
mod listener;
mod subscription;

pub use config::{EventConfig, DEFAULT_LABEL};
pub use error::ConfigError;
pub use event::Event;
pub use handler::Handler;
pub use subscription::Subscription;
