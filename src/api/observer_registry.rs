use crate::error::{ZoomError, ZoomResult};
use crate::extensions::ZoomObserver;
use crate::host::ViewHost;
use crate::interaction::PinchRecognizer;

use super::ScaleTextView;

impl<H: ViewHost, P: PinchRecognizer> ScaleTextView<H, P> {
    /// Registers an observer with a unique identifier.
    ///
    /// Observers are notified in registration order.
    pub fn register_observer(&mut self, observer: Box<dyn ZoomObserver>) -> ZoomResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ZoomError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.core.observers.contains_key(&observer_id) {
            return Err(ZoomError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.core.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.core.observers.shift_remove(observer_id).is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.core.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.core.observers.contains_key(observer_id)
    }
}
