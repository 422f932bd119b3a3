use chrono::{DateTime, Local};
use rally_page::config::TICK_MS;
use rally_page::countdown::{countdown_from_now, start_ticker, CountdownDisplay};
use rally_page::{Player, ScoreBoard, SectionNavigator};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer state wrapping the library's [`SectionNavigator`].
#[derive(Clone, PartialEq)]
pub struct NavState(pub SectionNavigator);

impl Reducible for NavState {
    type Action = String;

    fn reduce(self: Rc<Self>, section: String) -> Rc<Self> {
        let mut next = self.0.clone();
        // Unknown sections are logged by the navigator and leave the page as is.
        match next.show_section(&section) {
            Ok(()) => Rc::new(NavState(next)),
            Err(_) => self,
        }
    }
}

/// Navigation state plus the callback that switches sections.
#[derive(Clone)]
pub struct Navigation {
    pub navigator: SectionNavigator,
    pub show_section: Callback<String>,
}

#[hook]
pub fn use_navigation(initial: SectionNavigator) -> Navigation {
    let state = use_reducer(move || NavState(initial));

    let show_section = {
        let state = state.clone();
        Callback::from(move |section: String| state.dispatch(section))
    };

    Navigation {
        navigator: state.0.clone(),
        show_section,
    }
}

pub enum ScoreAction {
    Point(Player),
    Reset,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub struct ScoreState(pub ScoreBoard);

impl Reducible for ScoreState {
    type Action = ScoreAction;

    fn reduce(self: Rc<Self>, action: ScoreAction) -> Rc<Self> {
        let mut board = self.0;
        match action {
            ScoreAction::Point(player) => board.add_point(player),
            ScoreAction::Reset => board.reset(),
        }
        Rc::new(ScoreState(board))
    }
}

/// The score board owned by the score section and its commands.
#[derive(Clone)]
pub struct ScoreTracker {
    pub board: ScoreBoard,
    pub add_point: Callback<Player>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_score_tracker() -> ScoreTracker {
    let state = use_reducer(ScoreState::default);

    let add_point = {
        let state = state.clone();
        Callback::from(move |player: Player| state.dispatch(ScoreAction::Point(player)))
    };
    let reset = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ScoreAction::Reset))
    };

    ScoreTracker {
        board: state.0,
        add_point,
        reset,
    }
}

/// Live countdown to `target`, refreshed once immediately and then every
/// [`TICK_MS`]. The ticker is cancelled when the component unmounts or the
/// target changes.
#[hook]
pub fn use_countdown(target: DateTime<Local>) -> CountdownDisplay {
    let initial = countdown_from_now(&target);
    let display = use_state(move || initial);

    {
        let display = display.clone();
        use_effect_with(target, move |target| {
            let target = *target;
            display.set(countdown_from_now(&target));
            let ticker = start_ticker(TICK_MS, move || display.set(countdown_from_now(&target)));
            move || ticker.cancel()
        });
    }

    *display
}
