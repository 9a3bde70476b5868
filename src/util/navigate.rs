//! Navigation seam for session flows.
//!
//! Login and logout decide *where* to go; the host decides *how*. In the app
//! that is the router (`use_navigate`); tests record the calls.

use std::cell::RefCell;
use std::rc::Rc;

use leptos_router::NavigateOptions;

pub trait Navigator {
    /// Client-side navigation to `href`.
    fn navigate(&self, href: &str);

    /// Re-run the current route so session-dependent views re-evaluate.
    fn refresh(&self);
}

type NavigateFn = Rc<dyn Fn(&str, NavigateOptions)>;

/// [`Navigator`] over the router's navigate function.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: NavigateFn,
    last: Rc<RefCell<Option<String>>>,
}

impl RouterNavigator {
    /// Wrap the function returned by `leptos_router::hooks::use_navigate`.
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self { navigate: Rc::new(navigate), last: Rc::new(RefCell::new(None)) }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, href: &str) {
        *self.last.borrow_mut() = Some(href.to_owned());
        (self.navigate)(href, NavigateOptions::default());
    }

    fn refresh(&self) {
        let Some(href) = self.last.borrow().clone() else {
            return;
        };
        (self.navigate)(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}
