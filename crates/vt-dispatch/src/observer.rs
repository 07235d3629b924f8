//! The observer trait the dispatcher fans out to.

use vt_notify::Notification;
use vt_route::Route;

/// A failure inside an observer callback.  Logged by the dispatcher and
/// isolated from the other observers; never propagated to the tracker.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

/// Callbacks invoked by [`Dispatcher`][crate::Dispatcher] on every publish.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A received `Route` is a read-only
/// snapshot — observers must not copy it somewhere and mutate it expecting
/// the tracker to notice.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct Console;
///
/// impl TrackObserver for Console {
///     fn on_route(&mut self, route: Option<&Route>) -> Result<(), ObserverError> {
///         match route {
///             Some(r) => println!("route {} at {:?}", r.id, r.current_location),
///             None    => println!("tracking ended"),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait TrackObserver {
    /// Called on every route publish.  `None` means tracking stopped (the
    /// route ended or was replaced).
    fn on_route(&mut self, _route: Option<&Route>) -> Result<(), ObserverError> {
        Ok(())
    }

    /// Called for every newly created notification matching the
    /// subscription's guardian scope.
    fn on_notification(&mut self, _notification: &Notification) -> Result<(), ObserverError> {
        Ok(())
    }
}

/// A [`TrackObserver`] that does nothing.  Useful as a placeholder in tests.
pub struct NoopObserver;

impl TrackObserver for NoopObserver {}
