//! Yew view components for the Rally page.
//!
//! Markup keeps the element ids and classes the stylesheet expects:
//! `nav-btn`/`active`, `#score1`, `#score2`, `#winner`, `#myForm`,
//! `#result` and the `.day`/`.hour`/`.minute`/`.second` fields.

use crate::hooks::{use_countdown, use_score_tracker};
use chrono::{DateTime, Local};
use log::error;
use rally_page::{
    validate_contact, ContactError, ContactForm, PageError, Player, SectionNavigator,
    SUCCESS_MESSAGE,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub navigator: SectionNavigator,
    pub onselect: Callback<String>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="main-nav">
            { props.navigator.controls().iter().map(|c| {
                let active = props.navigator.is_control_active(&c.control);
                let target = c.target.clone();
                let onclick = props.onselect.reform(move |_: MouseEvent| target.clone());
                html! {
                    <button id={c.control.clone()}
                        class={classes!("nav-btn", active.then_some("active"))}
                        {onclick}
                    >
                        { c.label.clone() }
                    </button>
                }
            }).collect::<Html>() }
        </nav>
    }
}

/// Scoreboard with one "add point" button per player and a reset button.
#[function_component(ScorePanel)]
pub fn score_panel() -> Html {
    let tracker = use_score_tracker();
    let board = tracker.board;

    html! {
        <div class="scoreboard">
            <div class="players">
                <div class="player">
                    <h3>{ "Player 1" }</h3>
                    <span id="score1" class="score">{ board.score(Player::One) }</span>
                    <button class="btn-point" onclick={tracker.add_point.reform(|_| Player::One)}>
                        { "+1" }
                    </button>
                </div>
                <div class="player">
                    <h3>{ "Player 2" }</h3>
                    <span id="score2" class="score">{ board.score(Player::Two) }</span>
                    <button class="btn-point" onclick={tracker.add_point.reform(|_| Player::Two)}>
                        { "+1" }
                    </button>
                </div>
            </div>
            <p id="winner" class="winner">{ board.winner_label() }</p>
            <button class="btn-secondary" onclick={tracker.reset.reform(|_| ())}>
                { "Reset" }
            </button>
        </div>
    }
}

fn read_input(node: &NodeRef, id: &str) -> Result<String, PageError> {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .ok_or_else(|| PageError::ElementNotFound(id.to_string()))
}

fn read_textarea(node: &NodeRef, id: &str) -> Result<String, PageError> {
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .ok_or_else(|| PageError::ElementNotFound(id.to_string()))
}

fn render_outcome(outcome: &Result<(), ContactError>) -> Html {
    match outcome {
        Ok(()) => html! { <p class="success">{ SUCCESS_MESSAGE }</p> },
        Err(e) => html! { <p class="error">{ e.to_string() }</p> },
    }
}

/// Contact form validated locally on submit. Nothing is ever sent.
#[function_component(ContactPanel)]
pub fn contact_panel() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let outcome = use_state(|| None::<Result<(), ContactError>>);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            outcome.set(None);

            let form = (|| {
                Ok::<_, PageError>(ContactForm {
                    name: read_input(&name_ref, "name")?,
                    email: read_input(&email_ref, "email")?,
                    message: read_textarea(&message_ref, "message")?,
                })
            })();

            match form {
                Ok(form) => outcome.set(Some(validate_contact(&form))),
                Err(err) => error!("Contact form not readable: {}", err),
            }
        })
    };

    html! {
        <form id="myForm" class="contact-form" {onsubmit}>
            <div class="form-group">
                <label for="name">{ "Name:" }</label>
                <input type="text" id="name" ref={name_ref} />
            </div>
            <div class="form-group">
                <label for="email">{ "Email:" }</label>
                <input type="text" id="email" ref={email_ref} />
            </div>
            <div class="form-group">
                <label for="message">{ "Message:" }</label>
                <textarea id="message" rows="5" ref={message_ref}></textarea>
            </div>
            <button type="submit" class="btn-primary">{ "Send" }</button>
            <div id="result">
                if let Some(ref result) = *outcome {
                    { render_outcome(result) }
                }
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownPanelProps {
    pub target: DateTime<Local>,
}

#[function_component(CountdownPanel)]
pub fn countdown_panel(props: &CountdownPanelProps) -> Html {
    let display = use_countdown(props.target);

    html! {
        <div class="countdown">
            <div class="countdown-unit">
                <span class="day">{ display.days }</span>
                <span class="unit-label">{ "Days" }</span>
            </div>
            <div class="countdown-unit">
                <span class="hour">{ display.hours }</span>
                <span class="unit-label">{ "Hours" }</span>
            </div>
            <div class="countdown-unit">
                <span class="minute">{ display.minutes }</span>
                <span class="unit-label">{ "Minutes" }</span>
            </div>
            <div class="countdown-unit">
                <span class="second">{ display.seconds }</span>
                <span class="unit-label">{ "Seconds" }</span>
            </div>
        </div>
    }
}
