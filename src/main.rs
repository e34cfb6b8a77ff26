mod game_view;
mod input;

use yew::prelude::*;

use crate::game_view::{GameSummary, GameView};

/// The three top-level screens. Navigation is a local state switch; nothing
/// about the session survives leaving the game screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Home,
    Game,
    Results,
}

#[function_component(App)]
fn app() -> Html {
    let screen = use_state(|| Screen::Home);
    let summary = use_state(|| None::<GameSummary>);

    let on_play = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.set(Screen::Game))
    };
    let on_finished = {
        let screen = screen.clone();
        let summary = summary.clone();
        Callback::from(move |result: GameSummary| {
            summary.set(Some(result));
            screen.set(Screen::Results);
        })
    };

    match *screen {
        Screen::Home => html! {
            <div class="home-container">
                <h1>{ "Welcome to the Puzzle Competition!" }</h1>
                <button class="start-btn" onclick={on_play}>{ "Start Puzzle" }</button>
            </div>
        },
        Screen::Game => html! { <GameView on_finished={on_finished} /> },
        Screen::Results => {
            let (total_seconds, word) = summary
                .as_ref()
                .map(|result| (result.total_seconds, result.word.clone()))
                .unwrap_or_default();
            html! {
                <div class="results">
                    <h2>{ "All puzzles completed!" }</h2>
                    <p>{ format!("Total time: {total_seconds}s") }</p>
                    <p>{ "Final word: " }<strong>{ word }</strong></p>
                    <p>{ "Thank you for playing!" }</p>
                </div>
            }
        }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
