//! Overlay host that dialogs are placed into while they are open.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use floem::AnyView;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, provide_context, use_context};
use floem::views::dyn_container;

type BuildFn = Rc<dyn Fn() -> AnyView>;
type DismissFn = Rc<dyn Fn()>;

struct ActiveDialog {
    id: u64,
    build: BuildFn,
    dismiss: DismissFn,
}

#[derive(Default)]
struct LayerState {
    active: RefCell<Option<ActiveDialog>>,
    next_id: Cell<u64>,
}

/// Root container a page hands to its color pickers.
///
/// Wrap the page with [`dialog_host`] and either pass the layer to the entries
/// explicitly or [`provide`](Self::provide) it as context. Holds one dialog
/// at a time.
#[derive(Clone)]
pub struct DialogLayer {
    state: Rc<LayerState>,
    generation: RwSignal<u64>,
}

impl Default for DialogLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogLayer {
    pub fn new() -> Self {
        Self {
            state: Rc::new(LayerState::default()),
            generation: RwSignal::new(0),
        }
    }

    /// Make this layer reachable through [`DialogLayer::from_context`] for
    /// views created afterwards in the current scope.
    pub fn provide(&self) {
        provide_context(self.clone());
    }

    /// The layer provided by an enclosing view, if any.
    pub fn from_context() -> Option<Self> {
        use_context::<DialogLayer>()
    }

    /// Place a dialog into the layer and return its id.
    ///
    /// A dialog that is already open is dismissed first.
    pub(crate) fn present(&self, build: BuildFn, dismiss: DismissFn) -> u64 {
        let id = self.state.next_id.get() + 1;
        self.state.next_id.set(id);
        let previous = self
            .state
            .active
            .replace(Some(ActiveDialog { id, build, dismiss }));
        self.generation.update(|g| *g += 1);
        if let Some(prev) = previous {
            log::debug!("dialog {} replaced by dialog {id}", prev.id);
            (prev.dismiss)();
        }
        id
    }

    /// Take the dialog out of the layer. No-op if it was already replaced.
    pub(crate) fn remove(&self, id: u64) {
        let removed = {
            let mut active = self.state.active.borrow_mut();
            match active.as_ref() {
                Some(a) if a.id == id => active.take(),
                _ => None,
            }
        };
        if removed.is_some() {
            self.generation.update(|g| *g += 1);
        }
    }

    /// Whether dialog `id` is the one currently shown.
    pub fn is_current(&self, id: u64) -> bool {
        self.state.active.borrow().as_ref().is_some_and(|a| a.id == id)
    }

    /// Whether any dialog is shown. Tracks the layer when read in a reactive
    /// context.
    pub fn is_open(&self) -> bool {
        self.generation.get();
        self.state.active.borrow().is_some()
    }

    fn current_view(&self) -> AnyView {
        let build = self.state.active.borrow().as_ref().map(|a| a.build.clone());
        match build {
            Some(build) => build(),
            None => empty().into_any(),
        }
    }
}

/// Stack `page` under the layer's overlay. The overlay spans the whole page and
/// only takes input while a dialog is open.
pub fn dialog_host(layer: DialogLayer, page: impl IntoView + 'static) -> impl IntoView {
    let gen_layer = layer.clone();
    let view_layer = layer.clone();
    let style_layer = layer;
    stack((
        page,
        dyn_container(
            move || gen_layer.generation.get(),
            move |_| view_layer.current_view(),
        )
        .style(move |s| {
            let open = style_layer.is_open();
            s.absolute()
                .inset_left(0.0)
                .inset_top(0.0)
                .size_full()
                .z_index(100)
                .apply_if(!open, |s| s.hide())
        }),
    ))
    .style(|s| s.size_full())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_built() -> BuildFn {
        Rc::new(|| -> AnyView { unreachable!("view is not built in tests") })
    }

    #[test]
    fn present_and_remove() {
        let layer = DialogLayer::new();
        let id = layer.present(never_built(), Rc::new(|| {}));
        assert!(layer.is_current(id));
        assert!(layer.is_open());
        layer.remove(id);
        assert!(!layer.is_open());
    }

    #[test]
    fn presenting_dismisses_previous() {
        let layer = DialogLayer::new();
        let dismissed = Rc::new(Cell::new(false));
        let flag = dismissed.clone();
        let first = layer.present(never_built(), Rc::new(move || flag.set(true)));
        let second = layer.present(never_built(), Rc::new(|| {}));
        assert!(dismissed.get());
        assert!(!layer.is_current(first));
        assert!(layer.is_current(second));

        layer.remove(first);
        assert!(layer.is_current(second));
    }

    #[test]
    fn dismiss_may_remove_itself() {
        let layer = DialogLayer::new();
        let inner = layer.clone();
        let first = Rc::new(Cell::new(0));
        let first_id = first.clone();
        let id = layer.present(
            never_built(),
            Rc::new(move || inner.remove(first_id.get())),
        );
        first.set(id);
        let second = layer.present(never_built(), Rc::new(|| {}));
        assert!(layer.is_current(second));
    }
}
