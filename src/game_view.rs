use std::rc::Rc;

use gloo::timers::callback::Interval;
use js_sys::Date;
use web_sys::DragEvent;
use yew::prelude::*;

use crate::input::{detect_input_mode, InputMode};
use mojiatsume_core::catalog::{grid_side, tile_image_path};
use mojiatsume_core::{Session, PUZZLE_CATALOG};

const TILE_SIZE_PX: u32 = 100;
const TIMER_TICK_MS: u32 = 1_000;

/// What the session hands to the results screen once the last puzzle's
/// advance fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GameSummary {
    pub(crate) total_seconds: u64,
    pub(crate) word: String,
}

#[derive(Properties, PartialEq)]
pub(crate) struct GameProps {
    pub(crate) on_finished: Callback<GameSummary>,
}

/// The active puzzle screen: landing start control, tile grid, timer HUD,
/// solved banner and the advance button. Owns the one `Session` value; every
/// gesture funnels into it through the two core primitives and bumps a
/// revision counter to re-render.
#[function_component(GameView)]
pub(crate) fn game_view(props: &GameProps) -> Html {
    let session = use_mut_ref(|| Session::with_catalog(PUZZLE_CATALOG, Date::now() as u32));
    let revision = use_state(|| 0u32);
    let elapsed = use_state(|| 0u64);
    let timer = use_mut_ref(|| None::<Interval>);
    let input_mode = use_state(detect_input_mode);
    let input_mode_value = *input_mode;

    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            gloo::console::log!(
                "input mode",
                if *input_mode == InputMode::Tap { "tap" } else { "drag" }
            );
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    let on_start = {
        let session = session.clone();
        let revision = revision.clone();
        let elapsed = elapsed.clone();
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().start();
            let stamp = Date::now();
            let tick_session = session.clone();
            let tick_elapsed = elapsed.clone();
            let tick_timer = timer.clone();
            let handle = Interval::new(TIMER_TICK_MS, move || {
                let mut session = tick_session.borrow_mut();
                if session.game_over() {
                    tick_timer.borrow_mut().take();
                    return;
                }
                let seconds = ((Date::now() - stamp) / 1000.0).floor() as u64;
                session.record_elapsed(seconds);
                tick_elapsed.set(seconds);
            });
            *timer.borrow_mut() = Some(handle);
            revision.set(*revision + 1);
        })
    };

    // One mutate-and-rerender path for every grid gesture.
    let dispatch = {
        let session = session.clone();
        let revision = revision.clone();
        Rc::new(move |apply: &dyn Fn(&mut Session)| {
            apply(&mut session.borrow_mut());
            revision.set(*revision + 1);
        })
    };

    let on_next = {
        let session = session.clone();
        let revision = revision.clone();
        let timer = timer.clone();
        let on_finished = props.on_finished.clone();
        Callback::from(move |_: MouseEvent| {
            let summary = {
                let mut session = session.borrow_mut();
                if !session.advance() {
                    return;
                }
                session.game_over().then(|| GameSummary {
                    total_seconds: session.elapsed_seconds(),
                    word: session.collected_word(),
                })
            };
            match summary {
                Some(summary) => {
                    timer.borrow_mut().take();
                    on_finished.emit(summary);
                }
                None => revision.set(*revision + 1),
            }
        })
    };

    let (started, solved, letter, folder, side, arrangement, selected, is_last) = {
        let session = session.borrow();
        let def = session.current_puzzle();
        (
            session.started(),
            session.solved(),
            def.map(|def| def.letter),
            def.map(|def| def.folder).unwrap_or_default(),
            def.map(|def| grid_side(def.tile_count)).unwrap_or(0),
            session.arrangement().to_vec(),
            session.selected_tile(),
            session.is_last_puzzle(),
        )
    };

    if !started {
        return html! {
            <div class="puzzle-container">
                <h1>{ "Jigsaw Puzzle" }</h1>
                <button class="start-button" onclick={on_start}>{ "Start" }</button>
            </div>
        };
    }

    let grid_style = format!(
        "grid-template-columns: repeat({side}, {TILE_SIZE_PX}px); \
         grid-template-rows: repeat({side}, {TILE_SIZE_PX}px);"
    );

    let tiles: Html = arrangement
        .iter()
        .enumerate()
        .map(|(index, tile_id)| {
            let class = classes!(
                "tile",
                (selected == Some(index)).then_some("selected"),
            );
            let image = html! {
                <img src={tile_image_path(folder, *tile_id)} alt="" draggable="false" />
            };
            match input_mode_value {
                InputMode::Tap => {
                    let dispatch = dispatch.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        (*dispatch)(&|session| session.tap_tile(index));
                    });
                    html! {
                        <div key={index} {class} {onclick}>{ image }</div>
                    }
                }
                InputMode::Drag => {
                    let ondragstart = Callback::from(move |event: DragEvent| {
                        if let Some(transfer) = event.data_transfer() {
                            let _ = transfer.set_data("text/plain", &index.to_string());
                        }
                    });
                    let ondragover = Callback::from(|event: DragEvent| event.prevent_default());
                    let dispatch = dispatch.clone();
                    let ondrop = Callback::from(move |event: DragEvent| {
                        event.prevent_default();
                        let from = event
                            .data_transfer()
                            .and_then(|transfer| transfer.get_data("text/plain").ok())
                            .and_then(|raw| raw.parse::<usize>().ok());
                        match from {
                            Some(from) => (*dispatch)(&|session| {
                                session.request_swap(from, index);
                            }),
                            None => gloo::console::warn!("drop without a tile index"),
                        }
                    });
                    html! {
                        <div
                            key={index}
                            {class}
                            draggable="true"
                            {ondragstart}
                            {ondragover}
                            {ondrop}
                        >
                            { image }
                        </div>
                    }
                }
            }
        })
        .collect();

    let banner = match (solved, letter) {
        (true, Some(letter)) => html! {
            <div class="letter-message">
                { "Puzzle complete! Letter: " }<strong>{ letter }</strong>
            </div>
        },
        _ => html! {},
    };

    let next_button = if solved {
        let label = if is_last { "Finish" } else { "Next Puzzle" };
        html! { <button class="next-button" onclick={on_next}>{ label }</button> }
    } else {
        html! {}
    };

    html! {
        <div class="puzzle-container">
            <h1>{ "Jigsaw Puzzle" }</h1>
            <p class="timer">{ format!("Timer: {}s", *elapsed) }</p>
            <div class="grid" style={grid_style}>{ tiles }</div>
            { banner }
            { next_button }
        </div>
    }
}
