//! Destinations for rendered documents.

use crate::text::Fragment;

/// Something that accepts rendered documents.
///
/// Delivery is fire-and-forget from the paginator's point of view: a sink
/// that can fail is expected to report the failure itself.
pub trait Sink {
    /// Hand over a finished document.
    fn deliver(&mut self, document: Fragment);

    /// Deliver `message` styled as an error.
    fn deliver_error(&mut self, message: &str) {
        self.deliver(Fragment::error(message));
    }
}

impl Sink for Vec<Fragment> {
    fn deliver(&mut self, document: Fragment) {
        self.push(document);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn deliver(&mut self, document: Fragment) {
        (**self).deliver(document);
    }

    fn deliver_error(&mut self, message: &str) {
        (**self).deliver_error(message);
    }
}
