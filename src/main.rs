//! Main module for the Tasbih Counter application using Yew.
//! Wires the counter and target-sheet hooks to the view components.

use tasbih_counter::components::{ActionBar, Footnote, TapRing, TargetBadge, TargetSheet, TopBar};
use tasbih_counter::haptics::HapticsContext;
use tasbih_counter::hooks::{use_counter, use_target_sheet};
use yew::prelude::*;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let haptics = use_context::<HapticsContext>().unwrap_or_default();
    let counter = use_counter(haptics.clone());
    let sheet = use_target_sheet(counter.state.target(), counter.on_set_target.clone());
    let state = counter.state;

    html! {
        <div class="app">
            <TopBar />

            <ActionBar
                vibration_armed={state.vibration_armed()}
                on_open_sheet={sheet.on_open.clone()}
                on_reset={counter.on_reset.clone()}
                on_toggle_vibration={counter.on_toggle_vibration.clone()}
            />

            <TargetBadge target={state.target()} />

            <TapRing
                count={state.count()}
                target={state.target()}
                completed={state.is_completed()}
                on_tap={counter.on_tap.clone()}
            />

            if sheet.open {
                <TargetSheet
                    draft={sheet.draft.clone()}
                    on_close={sheet.on_close.clone()}
                    on_choose_preset={sheet.on_choose_preset.clone()}
                    on_choose_custom={sheet.on_choose_custom.clone()}
                    on_custom_input={sheet.on_custom_input.clone()}
                    on_apply={sheet.on_apply.clone()}
                />
            }

            // Informational only; counting never depends on it.
            <Footnote vibration_supported={haptics.is_supported()} />
        </div>
    }
}

/// App wrapper providing the browser haptic port to everything below it.
#[function_component]
pub fn App() -> Html {
    let haptics = use_memo((), |_| HapticsContext::default());

    html! {
        <ContextProvider<HapticsContext> context={(*haptics).clone()}>
            <Main />
        </ContextProvider<HapticsContext>>
    }
}

/// Entry point: installs the panic hook and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
