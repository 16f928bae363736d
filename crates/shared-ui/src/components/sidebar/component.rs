use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is shown as an overlay on narrow viewports.
///
/// Wide viewports always show the sidebar and ignore this flag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SidebarState {
    pub open: bool,
}

/// Owns the sidebar state and lays out the sidebar next to its inset.
#[component]
pub fn SidebarProvider(children: Element) -> Element {
    let state = use_signal(SidebarState::default);
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": crate::flag(state().open),
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// Fixed navigation column. On narrow viewports it slides over the page
/// with a backdrop that closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let mut merged = crate::with_class("sidebar", attributes);
    merged.push(Attribute::new(
        "data-state",
        if is_open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside { ..merged, {children} }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sidebar-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sidebar-content", attributes);
    rsx! {
        nav { ..merged, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sidebar-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarGroupLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sidebar-group-label", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sidebar-menu", attributes);
    rsx! {
        ul { ..merged, {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sidebar-menu-item", attributes);
    rsx! {
        li { ..merged, {children} }
    }
}

/// A navigation entry. Selecting it runs `onclick` and closes the overlay.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let mut merged = crate::with_class("sidebar-menu-button", attributes);
    merged.push(Attribute::new("data-active", crate::flag(active), None, false));

    rsx! {
        button {
            r#type: "button",
            "aria-current": if active { "page" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
                state.set(SidebarState { open: false });
            },
            ..merged,
            {children}
        }
    }
}

// ─── Chrome ────────────────────────────────────────────────────────────

/// Hamburger button that opens and closes the overlay. Hidden on wide viewports.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let merged = crate::with_class("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            ..merged,
            {children}
        }
    }
}

/// Page area beside the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = crate::with_class("sidebar-inset", attributes);
    rsx! {
        main { ..merged, {children} }
    }
}
