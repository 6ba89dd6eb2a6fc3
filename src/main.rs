//! Main module for the Deadweight calculator using Yew.
//! Wires UI components, state, and the penalty projection.

use deadweight::{estimate_penalty_seconds, format_race_seconds, BoatClass, CrewConfig};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod components;
mod config;
mod utils;

use components::{AboutModal, BoatClassPicker, DurationSlider, PenaltyReadout, WeightSlider};
use config::*;
use utils::{parse_duration_to_secs, validate_cox_weight, validate_crew_weight, validate_duration_secs};

/// Primary application component. Holds one immutable [`CrewConfig`] value;
/// every input handler replaces it wholesale and the penalty is recomputed
/// synchronously on render as a pure projection.
#[function_component(Main)]
fn main_component() -> Html {
    let crew = use_state(CrewConfig::default);
    let about_visible = use_state(|| false);

    // Text states for the number/text inputs next to each slider
    let cox_weight_text = use_state(|| CrewConfig::default().cox_weight_kg.to_string());
    let crew_weight_text = use_state(|| CrewConfig::default().crew_average_weight_kg.to_string());
    let duration_text =
        use_state(|| format_race_seconds(CrewConfig::default().race_duration_secs as u32));

    // Validation error states
    let cox_weight_error = use_state(|| None::<String>);
    let crew_weight_error = use_state(|| None::<String>);
    let duration_error = use_state(|| None::<String>);

    // --- Slider handlers (functional update of the whole config) ---
    let cox_weight_oninput = {
        let crew = crew.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(kg) = input.value().parse::<f64>() {
                crew.set(crew.with_cox_weight(kg));
            }
        })
    };
    let crew_weight_oninput = {
        let crew = crew.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(kg) = input.value().parse::<f64>() {
                crew.set(crew.with_crew_average_weight(kg));
            }
        })
    };
    let duration_oninput = {
        let crew = crew.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(secs) = input.value().parse::<f64>() {
                crew.set(crew.with_race_duration(secs));
            }
        })
    };
    let boat_class_onchange = {
        let crew = crew.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(class) = select.value().parse::<BoatClass>() {
                crew.set(crew.with_boat_class(class));
            }
        })
    };

    // --- OnInput handlers for the text states ---
    let cox_weight_text_oninput = {
        let setter = cox_weight_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.set(input.value());
        })
    };
    let crew_weight_text_oninput = {
        let setter = crew_weight_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.set(input.value());
        })
    };
    let duration_text_oninput = {
        let setter = duration_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.set(input.value());
        })
    };

    // --- Commit handlers: parse, validate, and replace the config ---
    let handle_cox_weight_commit = {
        let text_handle = cox_weight_text.clone();
        let error_handle = cox_weight_error.clone();
        let crew = crew.clone();
        Callback::from(move |_: ()| {
            match validate_cox_weight(&text_handle) {
                Ok(kg) => {
                    error_handle.set(None);
                    crew.set(crew.with_cox_weight(kg));
                    text_handle.set(kg.to_string());
                }
                Err(e) => {
                    error_handle.set(Some(e));
                }
            }
        })
    };
    let handle_crew_weight_commit = {
        let text_handle = crew_weight_text.clone();
        let error_handle = crew_weight_error.clone();
        let crew = crew.clone();
        Callback::from(move |_: ()| {
            match validate_crew_weight(&text_handle) {
                Ok(kg) => {
                    error_handle.set(None);
                    crew.set(crew.with_crew_average_weight(kg));
                    text_handle.set(kg.to_string());
                }
                Err(e) => {
                    error_handle.set(Some(e));
                }
            }
        })
    };
    let handle_duration_commit = {
        let text_handle = duration_text.clone();
        let error_handle = duration_error.clone();
        let crew = crew.clone();
        Callback::from(move |_: ()| {
            match parse_duration_to_secs(&text_handle).and_then(validate_duration_secs) {
                Ok(secs) => {
                    error_handle.set(None);
                    crew.set(crew.with_race_duration(secs as f64));
                    text_handle.set(format_race_seconds(secs));
                }
                Err(e) => {
                    error_handle.set(Some(e));
                }
            }
        })
    };

    // --- KeyDown handlers for the Enter key ---
    let cox_weight_onkeydown = {
        let commit = handle_cox_weight_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };
    let crew_weight_onkeydown = {
        let commit = handle_crew_weight_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };
    let duration_onkeydown = {
        let commit = handle_duration_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };

    // --- Synchronization effects (config -> text states) ---
    {
        let num_val = crew.cox_weight_kg;
        let text_setter = cox_weight_text.clone();
        let error_setter = cox_weight_error.clone();
        use_effect_with(num_val, move |&kg| {
            let as_string = kg.to_string();
            if *text_setter != as_string {
                text_setter.set(as_string);
                error_setter.set(None);
            }
            || ()
        });
    }
    {
        let num_val = crew.crew_average_weight_kg;
        let text_setter = crew_weight_text.clone();
        let error_setter = crew_weight_error.clone();
        use_effect_with(num_val, move |&kg| {
            let as_string = kg.to_string();
            if *text_setter != as_string {
                text_setter.set(as_string);
                error_setter.set(None);
            }
            || ()
        });
    }
    {
        let num_val = crew.race_duration_secs;
        let text_setter = duration_text.clone();
        let error_setter = duration_error.clone();
        use_effect_with(num_val, move |&secs| {
            let as_string = format_race_seconds(secs as u32);
            if *text_setter != as_string {
                text_setter.set(as_string);
                error_setter.set(None);
            }
            || ()
        });
    }

    // Derived display value, recomputed on every render
    let penalty = estimate_penalty_seconds(&crew);

    let show_about = {
        let about_visible = about_visible.clone();
        Callback::from(move |_: MouseEvent| about_visible.set(true))
    };
    let hide_about = {
        let about_visible = about_visible.clone();
        Callback::from(move |_: MouseEvent| about_visible.set(false))
    };

    html! {
        <div class="container">
            <div class="toolbar">
                <h1>{ "Deadweight" }</h1>
                <button class="btn-secondary" onclick={show_about}>{ "About" }</button>
            </div>

            <AboutModal visible={*about_visible} onclose={hide_about} />

            <PenaltyReadout penalty={penalty} />

            <WeightSlider
                label="Cox weight"
                input_id="cox_weight_input"
                min_kg={MIN_COX_WEIGHT_KG}
                max_kg={MAX_COX_WEIGHT_KG}
                value_kg={crew.cox_weight_kg}
                oninput={cox_weight_oninput}
            />
            <div class="form-group">
                <input
                    type="number"
                    id="cox_weight_text_input"
                    min={MIN_COX_WEIGHT_KG.to_string()}
                    max={MAX_COX_WEIGHT_KG.to_string()}
                    value={(*cox_weight_text).clone()}
                    class={if (*cox_weight_error).is_some() { "invalid" } else { "" }}
                    oninput={cox_weight_text_oninput}
                    onchange={handle_cox_weight_commit.reform(|_| ())}
                    onkeydown={cox_weight_onkeydown}
                />
                if let Some(ref err) = *cox_weight_error {
                    <div class="input-error">{ err }</div>
                }
            </div>

            <WeightSlider
                label="Crew Average Weight"
                input_id="crew_weight_input"
                min_kg={MIN_CREW_WEIGHT_KG}
                max_kg={MAX_CREW_WEIGHT_KG}
                value_kg={crew.crew_average_weight_kg}
                oninput={crew_weight_oninput}
            />
            <div class="form-group">
                <input
                    type="number"
                    id="crew_weight_text_input"
                    min={MIN_CREW_WEIGHT_KG.to_string()}
                    max={MAX_CREW_WEIGHT_KG.to_string()}
                    value={(*crew_weight_text).clone()}
                    class={if (*crew_weight_error).is_some() { "invalid" } else { "" }}
                    oninput={crew_weight_text_oninput}
                    onchange={handle_crew_weight_commit.reform(|_| ())}
                    onkeydown={crew_weight_onkeydown}
                />
                if let Some(ref err) = *crew_weight_error {
                    <div class="input-error">{ err }</div>
                }
            </div>

            <BoatClassPicker
                selected={crew.boat_class}
                onchange={boat_class_onchange}
            />

            <DurationSlider
                min_secs={MIN_RACE_DURATION_SECS as f64}
                max_secs={MAX_RACE_DURATION_SECS as f64}
                value_secs={crew.race_duration_secs}
                oninput={duration_oninput}
            />
            <div class="form-group">
                <input
                    type="text"
                    id="duration_text_input"
                    value={(*duration_text).clone()}
                    class={if (*duration_error).is_some() { "invalid" } else { "" }}
                    placeholder="M:SS"
                    oninput={duration_text_oninput}
                    onchange={handle_duration_commit.reform(|_| ())}
                    onkeydown={duration_onkeydown}
                />
                if let Some(ref err) = *duration_error {
                    <div class="input-error">{ err }</div>
                }
            </div>
        </div>
    }
}

/// App wrapper, kept separate so the shell can grow providers later.
#[function_component]
pub fn App() -> Html {
    html! {
        <Main />
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
