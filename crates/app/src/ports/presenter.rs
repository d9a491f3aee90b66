//! Presenter ports — where services publish view events.

use plwrd_domain::admin_view::AdminEvent;
use plwrd_domain::paste::PasteEvent;
use plwrd_domain::route::Route;

/// Receives admin panel events and performs hash navigation.
pub trait AdminPresenter {
    /// Fold an event into the rendered view.
    fn present(&self, event: AdminEvent);

    /// Move the browser to `route`. Entering it is the caller's business:
    /// the hash-change listener calls back into the panel.
    fn redirect(&self, route: &Route);
}

/// Receives paste page events.
pub trait PastePresenter {
    /// Fold an event into the rendered view.
    fn present(&self, event: PasteEvent);
}

impl<T: AdminPresenter + ?Sized> AdminPresenter for &T {
    fn present(&self, event: AdminEvent) {
        (**self).present(event);
    }

    fn redirect(&self, route: &Route) {
        (**self).redirect(route);
    }
}

impl<T: PastePresenter + ?Sized> PastePresenter for &T {
    fn present(&self, event: PasteEvent) {
        (**self).present(event);
    }
}
