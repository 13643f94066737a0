//! Clock Display Component

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::clock::ClockReading;

/// Greeting and `HH:MM:SS` clock, refreshed every second
#[component]
pub fn ClockDisplay() -> impl IntoView {
    let (reading, set_reading) = signal(ClockReading::now());

    // Lives as long as the page
    Interval::new(1_000, move || set_reading.set(ClockReading::now())).forget();

    view! {
        <div class="clock">
            <h1 id="welcome-message" class="welcome-message">{move || reading.get().greeting}</h1>
            <div id="current-time" class="current-time">{move || reading.get().time}</div>
        </div>
    }
}
