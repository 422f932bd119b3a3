//! Main module for the Rally page using Yew.
//! Loads the page layout, wires the navigation state and renders every
//! section; only the active one is shown by the stylesheet.

use log::{error, info, warn};
use rally_page::config::ROOT_ELEMENT_ID;
use rally_page::{PageConfig, SectionConfig, SectionKind, SectionNavigator};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;

use components::{ContactPanel, CountdownPanel, NavBar, ScorePanel};
use hooks::use_navigation;

#[derive(Properties, PartialEq)]
struct PageProps {
    config: Rc<PageConfig>,
    navigator: SectionNavigator,
}

fn render_section_body(config: &PageConfig, section: &SectionConfig) -> Html {
    match &section.kind {
        SectionKind::Intro { body } => html! { <p class="intro">{ body.clone() }</p> },
        SectionKind::Score => html! { <ScorePanel /> },
        SectionKind::Contact => html! { <ContactPanel /> },
        SectionKind::Countdown => match config.countdown_target() {
            Ok(target) => html! { <CountdownPanel {target} /> },
            Err(e) => {
                error!("{}", e);
                html! { <p class="error">{ e.to_string() }</p> }
            }
        },
    }
}

/// Page body: navigation bar plus one `<section>` per configured section.
#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let config = &props.config;
    let navigation = use_navigation(props.navigator.clone());

    html! {
        <div class="page">
            <header>
                <h1>{ config.title.clone() }</h1>
                <NavBar navigator={navigation.navigator.clone()}
                        onselect={navigation.show_section.clone()} />
            </header>
            <main>
                { config.sections.iter().map(|section| {
                    let active = navigation.navigator.is_section_active(&section.id);
                    html! {
                        <section id={section.id.clone()}
                                 class={classes!(active.then_some("active"))}>
                            <h2>{ section.title.clone() }</h2>
                            { render_section_body(config, section) }
                        </section>
                    }
                }).collect::<Html>() }
            </main>
        </div>
    }
}

/// Root component: loads the embedded layout and its navigator once.
#[function_component]
pub fn App() -> Html {
    let loaded = use_memo((), |_| {
        PageConfig::load().and_then(|page| {
            let navigator = page.navigator()?;
            Ok((Rc::new(page), navigator))
        })
    });

    match &*loaded {
        Ok((config, navigator)) => html! {
            <Page config={config.clone()} navigator={navigator.clone()} />
        },
        Err(e) => {
            error!("{}", e);
            html! {
                <div class="page">
                    <p class="error">{ e.to_string() }</p>
                </div>
            }
        }
    }
}

/// Entry point: installs logging and mounts the App into `#app`.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    info!("Rally page starting");

    match gloo_utils::document().get_element_by_id(ROOT_ELEMENT_ID) {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            warn!("Element '#{}' not found, mounting into <body>", ROOT_ELEMENT_ID);
            yew::Renderer::<App>::new().render()
        }
    };
}
