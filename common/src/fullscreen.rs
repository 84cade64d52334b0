//! Vendor-prefixed Fullscreen API capability table.

/// One flavour of the Fullscreen API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    Standard,
    Ms,
    Moz,
    Webkit,
}

/// Method and property names of one API flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenNames {
    /// Method on the element.
    pub request: &'static str,
    /// Method on the document.
    pub exit: &'static str,
    /// Property on the document holding the fullscreen element.
    pub element: &'static str,
}

impl FullscreenApi {
    /// Probe order.
    pub const ALL: [FullscreenApi; 4] = [
        FullscreenApi::Standard,
        FullscreenApi::Ms,
        FullscreenApi::Moz,
        FullscreenApi::Webkit,
    ];

    pub fn names(self) -> FullscreenNames {
        match self {
            FullscreenApi::Standard => FullscreenNames {
                request: "requestFullscreen",
                exit: "exitFullscreen",
                element: "fullscreenElement",
            },
            FullscreenApi::Ms => FullscreenNames {
                request: "msRequestFullscreen",
                exit: "msExitFullscreen",
                element: "msFullscreenElement",
            },
            FullscreenApi::Moz => FullscreenNames {
                request: "mozRequestFullScreen",
                exit: "mozCancelFullScreen",
                element: "mozFullScreenElement",
            },
            FullscreenApi::Webkit => FullscreenNames {
                request: "webkitRequestFullscreen",
                exit: "webkitExitFullscreen",
                element: "webkitFullscreenElement",
            },
        }
    }
}

/// What a toggle should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Call `exit` on the document.
    Exit(FullscreenApi),
    /// Call `request` on the element.
    Request(FullscreenApi),
}

impl ToggleAction {
    pub fn method(self) -> &'static str {
        match self {
            ToggleAction::Exit(api) => api.names().exit,
            ToggleAction::Request(api) => api.names().request,
        }
    }
}

/// Capabilities seen on a document/element pair.
pub trait FullscreenProbe {
    /// `name` is a callable on the document.
    fn document_has_method(&self, name: &str) -> bool;
    /// `name` is a callable on the target element.
    fn element_has_method(&self, name: &str) -> bool;
    /// The document property `name` holds a non-null element.
    fn document_has_element(&self, name: &str) -> bool;
}

/// Whether any flavour reports a fullscreen element.
pub fn is_fullscreen<P: FullscreenProbe>(probe: &P) -> bool {
    FullscreenApi::ALL
        .iter()
        .any(|api| probe.document_has_element(api.names().element))
}

/// Pick the first available exit method when fullscreen, otherwise the first
/// available request method. `None` if the runtime offers neither.
pub fn plan_toggle<P: FullscreenProbe>(probe: &P) -> Option<ToggleAction> {
    if is_fullscreen(probe) {
        FullscreenApi::ALL
            .into_iter()
            .find(|api| probe.document_has_method(api.names().exit))
            .map(ToggleAction::Exit)
    } else {
        FullscreenApi::ALL
            .into_iter()
            .find(|api| probe.element_has_method(api.names().request))
            .map(ToggleAction::Request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeProbe {
        document_methods: HashSet<&'static str>,
        element_methods: HashSet<&'static str>,
        elements: HashSet<&'static str>,
    }

    impl FullscreenProbe for FakeProbe {
        fn document_has_method(&self, name: &str) -> bool {
            self.document_methods.contains(name)
        }
        fn element_has_method(&self, name: &str) -> bool {
            self.element_methods.contains(name)
        }
        fn document_has_element(&self, name: &str) -> bool {
            self.elements.contains(name)
        }
    }

    fn probe_for(api: FullscreenApi) -> FakeProbe {
        let names = api.names();
        FakeProbe {
            document_methods: [names.exit].into_iter().collect(),
            element_methods: [names.request].into_iter().collect(),
            elements: HashSet::new(),
        }
    }

    #[test]
    fn test_request_when_not_fullscreen() {
        let probe = probe_for(FullscreenApi::Standard);
        assert_eq!(plan_toggle(&probe), Some(ToggleAction::Request(FullscreenApi::Standard)));
    }

    #[test]
    fn test_exit_when_fullscreen() {
        let mut probe = probe_for(FullscreenApi::Webkit);
        probe.elements.insert("webkitFullscreenElement");
        assert!(is_fullscreen(&probe));
        let action = plan_toggle(&probe);
        assert_eq!(action, Some(ToggleAction::Exit(FullscreenApi::Webkit)));
        assert_eq!(action.map(ToggleAction::method), Some("webkitExitFullscreen"));
    }

    #[test]
    fn test_standard_preferred_over_prefixed() {
        let mut probe = probe_for(FullscreenApi::Moz);
        probe.element_methods.insert("requestFullscreen");
        assert_eq!(
            plan_toggle(&probe).map(ToggleAction::method),
            Some("requestFullscreen")
        );
    }

    #[test]
    fn test_fullscreen_state_from_any_flavour() {
        // Query and exit flavours may differ.
        let mut probe = probe_for(FullscreenApi::Standard);
        probe.elements.insert("msFullscreenElement");
        assert_eq!(plan_toggle(&probe), Some(ToggleAction::Exit(FullscreenApi::Standard)));
    }

    #[test]
    fn test_unsupported_runtime() {
        let probe = FakeProbe::default();
        assert_eq!(plan_toggle(&probe), None);
    }

    #[test]
    fn test_moz_uses_cancel() {
        assert_eq!(FullscreenApi::Moz.names().exit, "mozCancelFullScreen");
    }
}
