//! Pure Yew view components for the Deadweight UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use crate::config::PENALTY_DECIMALS;
use deadweight::{format_race_seconds, BoatClass, DeadweightError};
use yew::prelude::*;

/// Slider component for a weight in kilograms with current-value text.
#[derive(Properties, PartialEq)]
pub struct WeightSliderProps {
    pub label: &'static str,
    pub input_id: &'static str,
    pub min_kg: f64,
    pub max_kg: f64,
    pub value_kg: f64,
    pub oninput: Callback<InputEvent>,
}

#[function_component(WeightSlider)]
pub fn weight_slider(props: &WeightSliderProps) -> Html {
    html! {
        <div class="block-container">
            <div class="title-container">
                <label for={props.input_id}>{ props.label }</label>
            </div>
            <div class="slider-with-value">
                <span class="slider-value">{ format!("{} kg", props.value_kg) }</span>
                <input type="range"
                    id={props.input_id}
                    min={props.min_kg.to_string()}
                    max={props.max_kg.to_string()}
                    step="1"
                    value={props.value_kg.to_string()}
                    oninput={props.oninput.clone()}
                />
            </div>
        </div>
    }
}

/// Slider component for the race duration, displayed as "M:SS".
#[derive(Properties, PartialEq)]
pub struct DurationSliderProps {
    pub min_secs: f64,
    pub max_secs: f64,
    pub value_secs: f64,
    pub oninput: Callback<InputEvent>,
}

#[function_component(DurationSlider)]
pub fn duration_slider(props: &DurationSliderProps) -> Html {
    html! {
        <div class="block-container">
            <div class="title-container">
                <label for="race_duration_input">{ "Race Duration" }</label>
                <span class="description-text">
                    { "It doesn't matter what distance, just the time" }
                </span>
            </div>
            <div class="slider-with-value">
                <span class="slider-value">
                    { format_race_seconds(props.value_secs as u32) }
                </span>
                <input type="range"
                    id="race_duration_input"
                    min={props.min_secs.to_string()}
                    max={props.max_secs.to_string()}
                    step="1"
                    value={props.value_secs.to_string()}
                    oninput={props.oninput.clone()}
                />
            </div>
        </div>
    }
}

/// Drop-down over the four coxed boat classes.
#[derive(Properties, PartialEq)]
pub struct BoatClassPickerProps {
    pub selected: BoatClass,
    pub onchange: Callback<Event>,
}

#[function_component(BoatClassPicker)]
pub fn boat_class_picker(props: &BoatClassPickerProps) -> Html {
    html! {
        <div class="block-container">
            <div class="title-container">
                <label for="boat_class_picker">{ "Boat Type" }</label>
            </div>
            <select id="boat_class_picker" onchange={props.onchange.clone()}>
                { BoatClass::ALL.iter().map(|class| {
                    html! {
                        <option value={class.label()}
                            selected={*class == props.selected}>
                            { class.label() }
                        </option>
                    }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// The derived "You'll go this much slower" figure, or the validation error
/// if the current inputs are outside physical range.
#[derive(Properties, PartialEq)]
pub struct PenaltyReadoutProps {
    pub penalty: Result<f64, DeadweightError>,
}

#[function_component(PenaltyReadout)]
pub fn penalty_readout(props: &PenaltyReadoutProps) -> Html {
    html! {
        <div class="block-container">
            <div class="title-container">
                <span class="title-text">{ "You'll go this much slower" }</span>
            </div>
            { match &props.penalty {
                Ok(secs) => html! {
                    <p class="result">{ format!("{:.*} s", PENALTY_DECIMALS, secs) }</p>
                },
                Err(e) => html! {
                    <p class="result-error">{ e.to_string() }</p>
                },
            } }
        </div>
    }
}

/// The Why/How panel shown from the toolbar's About action.
#[derive(Properties, PartialEq)]
pub struct AboutModalProps {
    pub visible: bool,
    pub onclose: Callback<MouseEvent>,
}

#[function_component(AboutModal)]
pub fn about_modal(props: &AboutModalProps) -> Html {
    if !props.visible {
        return html! {};
    }
    html! {
        <div class="modal-overlay" onclick={props.onclose.clone()}>
            <div class="modal-content">
                <h3>{ "Why?" }</h3>
                <p>{ "As a not particularly light cox I was curious as to how much \
                      time I might be costing the crew. Now we can answer that question!" }</p>
                <p>{ "Results should not be taken too seriously and just because a cox \
                      is light does not necessarily mean they can steer!" }</p>
                <h3>{ "How?" }</h3>
                <p>
                    { "Calculation based on Anu Dudhia's excellent " }
                    <a href="http://www.atm.ox.ac.uk/rowing/physics/">
                        { "Physics of Rowing" }
                    </a>
                    { ", in particular the section on the " }
                    <a href="http://www.atm.ox.ac.uk/rowing/physics/weight.html#section7">
                        { "Effect of Deadweight on Boat Speed" }
                    </a>
                    { "." }
                </p>
                <p>
                    { "Minimum cox weight is as in British Rowing's " }
                    <a href="http://www.britishrowing.org/upload/files/Competition/RulesofRacing-1.2.11Finalv2.pdf">
                        { "Rules of Racing" }
                    </a>
                </p>
            </div>
        </div>
    }
}
