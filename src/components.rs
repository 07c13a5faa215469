//! Pure Yew view components for the tasbih counter UI.
//!
//! Every component here renders from props alone; state and actions come in
//! from the hooks in [`crate::hooks`].

use crate::config::{
    APP_TITLE, CUSTOM_INPUT_PLACEHOLDER, TARGET_PRESETS, VIBRATION_SUPPORTED_NOTE,
    VIBRATION_UNSUPPORTED_NOTE,
};
use crate::draft::TargetDraft;
use yew::prelude::*;

const ICON_SIZE: &str = "22";

/// Label inside the tap ring.
pub fn tap_label(completed: bool) -> &'static str {
    if completed {
        "Completed"
    } else {
        "Tap Here"
    }
}

/// "count / target" progress line.
pub fn progress_text(count: u64, target: u64) -> String {
    format!("{} / {}", count, target)
}

pub fn footnote_text(vibration_supported: bool) -> &'static str {
    if vibration_supported {
        VIBRATION_SUPPORTED_NOTE
    } else {
        VIBRATION_UNSUPPORTED_NOTE
    }
}

// Feather / Material outlines, inlined so the app ships without an icon font.
fn chevron_left_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" width={ICON_SIZE} height={ICON_SIZE}>
            <polyline points="15 18 9 12 15 6" />
        </svg>
    }
}

fn sliders_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" width={ICON_SIZE} height={ICON_SIZE}>
            <line x1="4" y1="21" x2="4" y2="14" />
            <line x1="4" y1="10" x2="4" y2="3" />
            <line x1="12" y1="21" x2="12" y2="12" />
            <line x1="12" y1="8" x2="12" y2="3" />
            <line x1="20" y1="21" x2="20" y2="16" />
            <line x1="20" y1="12" x2="20" y2="3" />
            <line x1="1" y1="14" x2="7" y2="14" />
            <line x1="9" y1="8" x2="15" y2="8" />
            <line x1="17" y1="16" x2="23" y2="16" />
        </svg>
    }
}

fn rotate_ccw_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" width={ICON_SIZE} height={ICON_SIZE}>
            <polyline points="1 4 1 10 7 10" />
            <path d="M3.51 15a9 9 0 1 0 2.13-9.36L1 10" />
        </svg>
    }
}

fn vibration_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"
            width={ICON_SIZE} height={ICON_SIZE}>
            <path d="M0 15h2V9H0v6zm3 2h2V7H3v10zm19-8v6h2V9h-2zm-3 8h2V7h-2v10zM16.5 3h-9C6.67 3 6 3.67 6 4.5v15c0 .83.67 1.5 1.5 1.5h9c.83 0 1.5-.67 1.5-1.5v-15c0-.83-.67-1.5-1.5-1.5zM16 19H8V5h8v14z" />
        </svg>
    }
}

/// Header with an inert back button and the app title.
#[function_component(TopBar)]
pub fn top_bar() -> Html {
    html! {
        <header class="topbar">
            <button class="back-btn" aria-label="Back" title="Back">
                { chevron_left_icon() }
            </button>
            <h1 class="title">{ APP_TITLE }</h1>
            <div style="width: 22px" />
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionBarProps {
    pub vibration_armed: bool,
    pub on_open_sheet: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_toggle_vibration: Callback<()>,
}

/// Row of icon buttons: set target, reset, vibrate-on-target toggle.
#[function_component(ActionBar)]
pub fn action_bar(props: &ActionBarProps) -> Html {
    html! {
        <div class="actions">
            <button class="icon-btn"
                onclick={props.on_open_sheet.reform(|_| ())}
                aria-label="Set target"
                title="Set target"
            >
                { sliders_icon() }
            </button>

            <button class="icon-btn"
                onclick={props.on_reset.reform(|_| ())}
                aria-label="Reset"
                title="Reset"
            >
                { rotate_ccw_icon() }
            </button>

            <button class={classes!("icon-btn", props.vibration_armed.then_some("active"))}
                onclick={props.on_toggle_vibration.reform(|_| ())}
                aria-pressed={props.vibration_armed.to_string()}
                aria-label="Vibrate on target"
                title="Vibrate on target"
            >
                { vibration_icon() }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TargetBadgeProps {
    pub target: u64,
}

#[function_component(TargetBadge)]
pub fn target_badge(props: &TargetBadgeProps) -> Html {
    html! {
        <div class="target-wrap">
            <div class="target-icon" aria-hidden="true">{ "🏁" }</div>
            <div class="target-title">{ "TARGET" }</div>
            <div class="target-value">{ props.target }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TapRingProps {
    pub count: u64,
    pub target: u64,
    pub completed: bool,
    pub on_tap: Callback<()>,
}

/// The large circular button that counts taps.
#[function_component(TapRing)]
pub fn tap_ring(props: &TapRingProps) -> Html {
    html! {
        <div class="tap-wrap">
            <button class={classes!("tap-ring", props.completed.then_some("done"))}
                onclick={props.on_tap.reform(|_| ())}
                aria-label="Tap to count"
            >
                <div class="tap-inner">
                    <span class="tap-text">{ tap_label(props.completed) }</span>
                    <div class="count">{ progress_text(props.count, props.target) }</div>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TargetSheetProps {
    pub draft: TargetDraft,
    pub on_close: Callback<()>,
    pub on_choose_preset: Callback<u64>,
    pub on_choose_custom: Callback<()>,
    pub on_custom_input: Callback<InputEvent>,
    pub on_apply: Callback<()>,
}

/// Modal sheet offering the preset targets plus a custom entry.
///
/// Clicking the backdrop dismisses the sheet without applying the draft.
#[function_component(TargetSheet)]
pub fn target_sheet(props: &TargetSheetProps) -> Html {
    let draft = &props.draft;

    html! {
        <>
            <div class="backdrop" onclick={props.on_close.reform(|_| ())} />
            <div class="sheet" role="dialog" aria-modal="true">
                <div class="sheet-title">{ "Select Amount" }</div>
                <div class="sheet-subtitle">
                    { "Select how many times you’d like to count" }
                </div>

                <div class="grid">
                    { TARGET_PRESETS.iter().map(|&value| {
                        html! {
                            <button key={value.to_string()}
                                class={classes!("pill", draft.is_preset_selected(value).then_some("selected"))}
                                onclick={props.on_choose_preset.reform(move |_| value)}
                            >
                                { value }
                            </button>
                        }
                    }).collect::<Html>() }

                    <button class={classes!("pill", draft.custom_mode().then_some("selected"))}
                        onclick={props.on_choose_custom.reform(|_| ())}
                    >
                        { "Custom" }
                    </button>
                </div>

                if draft.custom_mode() {
                    <div class="custom-row">
                        <input
                            class="custom-input"
                            type="number"
                            min="1"
                            placeholder={CUSTOM_INPUT_PLACEHOLDER}
                            value={draft.custom_text().to_string()}
                            oninput={props.on_custom_input.clone()}
                        />
                    </div>
                }

                <button class="primary" onclick={props.on_apply.reform(|_| ())}>
                    { "DONE" }
                </button>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct FootnoteProps {
    pub vibration_supported: bool,
}

#[function_component(Footnote)]
pub fn footnote(props: &FootnoteProps) -> Html {
    html! {
        <footer class="footnote">{ footnote_text(props.vibration_supported) }</footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_label() {
        assert_eq!(tap_label(false), "Tap Here");
        assert_eq!(tap_label(true), "Completed");
    }

    #[test]
    fn test_progress_text() {
        assert_eq!(progress_text(0, 1000), "0 / 1000");
        assert_eq!(progress_text(33, 33), "33 / 33");
    }

    #[test]
    fn test_footnote_text() {
        assert_eq!(footnote_text(true), "Vibration supported on this device.");
        assert_eq!(
            footnote_text(false),
            "Note: Vibration works on most Android browsers over HTTPS."
        );
    }
}
